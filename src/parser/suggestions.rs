use anyhow;
use async_trait::async_trait;
use log::trace;
use reqwest;
use serde::{Deserialize, Serialize};
use serde_json;
use urlencoding;

use crate::models::SearchHit;
use crate::parser::Parser;

/// ```json
/// // Response of http://lubimyczytac.pl/searcher/getsuggestions?phrase=sezon%20burz
/// [
///   {
///     "url": "http://lubimyczytac.pl/ksiazka/4897/sezon-burz",
///     "title": "Sezon burz",
///     "authors": ["Andrzej Sapkowski"],
///     "category": "Fantasy, science fiction",
///     "coverUrl": "http://s.lubimyczytac.pl/upload/books/4897000/4897815/141x200.jpg",
///     "rating": 8
///   }
/// ]
/// ```
pub struct Suggestions {
    phrase: String,
}

impl Suggestions {
    pub fn new<S: Into<String>>(phrase: S) -> Suggestions {
        Suggestions {
            phrase: phrase.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
struct SuggestionRow {
    url: String,
    title: String,
    authors: Vec<String>,
    category: String,
    #[serde(rename = "coverUrl")]
    cover_url: String,
    rating: i32,
}

impl From<SuggestionRow> for SearchHit {
    fn from(row: SuggestionRow) -> SearchHit {
        SearchHit {
            url: row.url,
            title: row.title,
            author: row.authors.join(", "),
            category: row.category,
            cover_url: row.cover_url,
            rating: row.rating,
        }
    }
}

#[async_trait]
impl Parser for Suggestions {
    type RequestData = String;
    type ParseData = Vec<SearchHit>;

    fn url(&self) -> String {
        format!(
            "http://lubimyczytac.pl/searcher/getsuggestions?phrase={}",
            urlencoding::encode(self.phrase.as_str())
        )
    }

    async fn request(&self) -> anyhow::Result<Self::RequestData> {
        trace!("Suggestions::request()");
        let client = reqwest::Client::builder().build()?;

        let suggestions_json = client.get(self.url().as_str()).send().await?.text().await?;

        Ok(suggestions_json)
    }

    async fn parse(&self, request_data: Self::RequestData) -> anyhow::Result<Self::ParseData> {
        trace!("Suggestions::parse()");
        let rows = serde_json::from_str::<Vec<SuggestionRow>>(request_data.as_str())?;

        Ok(rows.into_iter().map(SearchHit::from).collect())
    }
}

use anyhow;
use bytes::Bytes;

use crate::models::{BookDetails, ImportSelection, SearchHit};
use crate::parser::{BookPage, Cover, Parser, Suggestions};
use crate::stage::{self, Stage};
use crate::utils::{await_futures, flat, seperate, PinFuture};

const THUMBNAIL_BATCH: usize = 8;

/// Drives one fetch-metadata interaction: search the catalog, pick a result
/// row, read the importable fields back out. This is the dialog controller
/// minus the widgets.
pub struct FetchSession {
    phrase: String,
    hits: Vec<SearchHit>,
    selected: Option<usize>,
    details: Option<BookDetails>,
    cover: Option<Bytes>,
}

impl FetchSession {
    /// Prefills the search box: title of the book being edited if present,
    /// otherwise its author.
    pub fn new(title: &str, author: &str) -> FetchSession {
        let phrase = if !title.is_empty() { title } else { author };

        FetchSession {
            phrase: phrase.to_string(),
            hits: vec![],
            selected: None,
            details: None,
            cover: None,
        }
    }

    pub fn phrase(&self) -> &str {
        self.phrase.as_str()
    }

    pub fn set_phrase<S: Into<String>>(&mut self, phrase: S) {
        self.phrase = phrase.into();
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn details(&self) -> Option<&BookDetails> {
        self.details.as_ref()
    }

    pub fn cover(&self) -> Option<&Bytes> {
        self.cover.as_ref()
    }

    pub async fn search(&mut self) -> anyhow::Result<&[SearchHit]> {
        let suggestions = Suggestions::new(self.phrase.as_str());

        let rd = suggestions.request().await?;
        let hits = match suggestions.parse(rd).await {
            Ok(hits) => hits,
            Err(err) => {
                stage::update(self.phrase.as_str(), Stage::Fail(&err));
                return Err(err);
            }
        };

        stage::update(self.phrase.as_str(), Stage::ParsedSuggestions(hits.len()));

        self.hits = hits;
        self.selected = None;
        self.details = None;
        self.cover = None;

        Ok(&self.hits)
    }

    /// Cover bytes for the result list, keyed by row index. Fetched in
    /// waves of [`THUMBNAIL_BATCH`] so the site sees a bounded burst.
    pub async fn thumbnails(&self) -> anyhow::Result<Vec<(usize, Bytes)>> {
        let futures = self
            .hits
            .iter()
            .enumerate()
            .filter(|(_, hit)| !hit.cover_url.is_empty())
            .map(|(index, hit)| {
                let url = hit.cover_url.clone();
                let future: PinFuture<(usize, Bytes)> = Box::pin(async move {
                    let cover = Cover::new(url);

                    let rd = cover.request().await?;
                    let bytes = cover.parse(rd).await?;

                    Ok((index, bytes))
                });

                future
            })
            .collect::<Vec<_>>();

        let mut batches = vec![];

        for batch in seperate(futures, THUMBNAIL_BATCH) {
            batches.push(await_futures(batch).await?);
        }

        Ok(flat(batches))
    }

    /// Steps three and four: the book page and its cover are fetched on
    /// independent connections; a missing cover downgrades to "no preview"
    /// instead of failing the selection.
    pub async fn select(&mut self, index: usize) -> anyhow::Result<&BookDetails> {
        let hit = match self.hits.get(index) {
            Some(hit) => hit,
            None => return Err(anyhow::Error::msg("No such result row")),
        };

        let book_page = BookPage::new(hit.url.as_str());
        let cover = Cover::new(hit.cover_url.as_str());

        let (page_rd, cover_rd) = tokio::join!(book_page.request(), cover.request());

        let details = match book_page.parse(page_rd?).await {
            Ok(details) => details,
            Err(err) => {
                stage::update(hit.url.as_str(), Stage::Fail(&err));
                return Err(err);
            }
        };

        stage::update(hit.url.as_str(), Stage::ParsedBookPage);

        let cover_bytes = match cover_rd {
            Ok(rd) => cover.parse(rd).await.ok(),
            Err(_) => None,
        };

        match cover_bytes {
            Some(_) => stage::update(hit.cover_url.as_str(), Stage::FetchedCover),
            None => stage::update(hit.cover_url.as_str(), Stage::SkippedCover),
        }

        self.selected = Some(index);
        self.details = Some(details);
        self.cover = cover_bytes;

        match self.details {
            Some(ref details) => Ok(details),
            None => Err(anyhow::Error::msg("Can't get details")),
        }
    }

    /// The output record for the host editor. Errors until a row has been
    /// selected.
    pub fn result(&self) -> anyhow::Result<ImportSelection> {
        let index = match self.selected {
            Some(index) => index,
            None => return Err(anyhow::Error::msg("No result row selected")),
        };

        let details = match self.details {
            Some(ref details) => details,
            None => return Err(anyhow::Error::msg("No result row selected")),
        };

        Ok(ImportSelection::from_fetched(&self.hits[index], details))
    }
}

#[cfg(test)]
mod tests {
    use super::FetchSession;

    #[test]
    fn new_prefers_title() {
        let session = FetchSession::new("Sezon burz", "Andrzej Sapkowski");

        assert_eq!("Sezon burz", session.phrase());
    }

    #[test]
    fn new_falls_back_to_author() {
        let session = FetchSession::new("", "Andrzej Sapkowski");

        assert_eq!("Andrzej Sapkowski", session.phrase());
    }

    #[test]
    fn result_without_selection_is_error() {
        let session = FetchSession::new("Sezon burz", "");

        assert!(session.result().is_err());
    }

    #[tokio::test]
    async fn select_out_of_range_is_error() -> anyhow::Result<()> {
        let mut session = FetchSession::new("Sezon burz", "");

        let r = session.select(0).await;

        assert!(r.is_err());

        Ok(())
    }
}

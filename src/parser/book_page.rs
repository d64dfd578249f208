use anyhow;
use async_trait::async_trait;
use log::trace;
use regex::Regex;
use reqwest;
use scraper::{Html, Selector};

use crate::models::BookDetails;
use crate::parser::Parser;

/// ```html
/// <!-- Response of http://lubimyczytac.pl/ksiazka/4897/sezon-burz (trimmed) -->
/// <div class="book-info">
///   <img id="bookCover" class="img-responsive"
///        src="http://s.lubimyczytac.pl/upload/books/4897000/4897815/352x500.jpg" />
///   <span class="rating-value">7,52</span>
///   <a class="book-category" href="/ksiazki/k/fantasy">Fantasy, science fiction</a>
///   <span class="cycle"><a href="/cykl/44/wiedzmin">Wiedźmin (tom 6)</a></span>
/// </div>
/// <div id="sBookDescription">
///   <p>Wiedźmin powraca.</p>
/// </div>
/// ```
///
/// Every extractor degrades to the field's empty/zero default when the
/// element is missing, so `parse` succeeds on arbitrary markup.
pub struct BookPage {
    url: String,
}

impl BookPage {
    pub fn new<S: Into<String>>(url: S) -> BookPage {
        BookPage { url: url.into() }
    }

    pub fn parse_cover_url(&self, document: &Html) -> String {
        let cover_selector = Selector::parse("img#bookCover").unwrap();

        document
            .select(&cover_selector)
            .next()
            .and_then(|element| element.value().attr("src"))
            .map(upsize_cover)
            .unwrap_or_default()
    }

    pub fn parse_description(&self, document: &Html) -> String {
        let description_selector = Selector::parse("#sBookDescription").unwrap();

        document
            .select(&description_selector)
            .next()
            .map(|element| collapse_whitespace(element.text().collect::<String>().as_str()))
            .unwrap_or_default()
    }

    pub fn parse_category(&self, document: &Html) -> String {
        let category_selector = Selector::parse("a.book-category").unwrap();

        document
            .select(&category_selector)
            .next()
            .and_then(|element| element.text().next())
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }

    /// "Wiedźmin (tom 6)" splits into the cycle name and the volume number.
    /// A cycle without the "(tom N)" suffix keeps index 0.
    pub fn parse_series(&self, document: &Html) -> (String, i32) {
        let cycle_selector = Selector::parse("span.cycle a").unwrap();

        let raw = match document
            .select(&cycle_selector)
            .next()
            .and_then(|element| element.text().next())
        {
            Some(text) => text.trim().to_string(),
            None => return (String::new(), 0),
        };

        let tome = Regex::new(r"\((?i:tom)\s+(\d+)\)$").unwrap();

        match tome.captures(raw.as_str()) {
            Some(caps) => {
                let name = raw[..caps.get(0).unwrap().start()].trim().to_string();
                let index = caps[1].parse::<i32>().unwrap_or(0);

                (name, index)
            }
            None => (raw, 0),
        }
    }

    pub fn parse_rating_value(&self, document: &Html) -> f64 {
        let rating_selector = Selector::parse("span.rating-value").unwrap();

        let raw = match document
            .select(&rating_selector)
            .next()
            .and_then(|element| element.text().next())
        {
            Some(text) => text,
            None => return 0.0,
        };

        // The site renders a decimal comma.
        let number = Regex::new(r"\d+(?:[.,]\d+)?").unwrap();

        number
            .find(raw)
            .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

/// The page embeds the listing-size asset; the full-size one lives next to
/// it under "original".
fn upsize_cover(src: &str) -> String {
    let size = Regex::new(r"\d+x\d+(\.[A-Za-z]+)$").unwrap();

    size.replace(src, "original${1}").into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl Parser for BookPage {
    type RequestData = String;
    type ParseData = BookDetails;

    fn url(&self) -> String {
        self.url.clone()
    }

    async fn request(&self) -> anyhow::Result<Self::RequestData> {
        trace!("BookPage::request()");
        let client = reqwest::Client::builder().build()?;

        let book_html = client.get(self.url().as_str()).send().await?.text().await?;

        Ok(book_html)
    }

    async fn parse(&self, request_data: Self::RequestData) -> anyhow::Result<Self::ParseData> {
        trace!("BookPage::parse()");
        let document = Html::parse_document(request_data.as_str());

        let (series, series_index) = self.parse_series(&document);

        let details = BookDetails {
            cover_url: self.parse_cover_url(&document),
            description: self.parse_description(&document),
            category: self.parse_category(&document),
            series,
            series_index,
            rating_value: self.parse_rating_value(&document),
        };

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::BookPage;
    use super::Parser;
    use crate::models::BookDetails;

    const BOOK_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="book-info">
  <img id="bookCover" class="img-responsive"
       src="http://s.lubimyczytac.pl/upload/books/4897000/4897815/352x500.jpg" />
  <span class="rating-value">7,52</span>
  <a class="book-category" href="/ksiazki/k/fantasy">Fantasy, science fiction</a>
  <span class="cycle"><a href="/cykl/44/wiedzmin">Wiedźmin (tom 6)</a></span>
</div>
<div id="sBookDescription">
  <p>Wiedźmin   powraca.</p>
  <p>Geralt z Rivii znowu w akcji.</p>
</div>
</body>
</html>"#;

    #[tokio::test]
    async fn parse() -> anyhow::Result<()> {
        let book_page = BookPage::new("http://lubimyczytac.pl/ksiazka/4897/sezon-burz");

        let pd = book_page.parse(String::from(BOOK_PAGE)).await?;

        let expected = BookDetails {
            cover_url: String::from(
                "http://s.lubimyczytac.pl/upload/books/4897000/4897815/original.jpg",
            ),
            description: String::from("Wiedźmin powraca. Geralt z Rivii znowu w akcji."),
            category: String::from("Fantasy, science fiction"),
            series: String::from("Wiedźmin"),
            series_index: 6,
            rating_value: 7.52,
        };

        assert_eq!(expected, pd);

        Ok(())
    }

    #[tokio::test]
    async fn parse_empty_page_defaults() -> anyhow::Result<()> {
        let book_page = BookPage::new("http://lubimyczytac.pl/ksiazka/4897/sezon-burz");

        let pd = book_page
            .parse(String::from("<html><body></body></html>"))
            .await?;

        let expected = BookDetails::default();

        assert_eq!(expected, pd);

        Ok(())
    }

    #[test]
    fn parse_series_without_tome() {
        let book_page = BookPage::new("http://lubimyczytac.pl/ksiazka/4897/sezon-burz");

        let document = Html::parse_document(
            r#"<span class="cycle"><a href="/cykl/44/wiedzmin">Wiedźmin</a></span>"#,
        );

        let expected = (String::from("Wiedźmin"), 0);

        assert_eq!(expected, book_page.parse_series(&document));
    }

    #[test]
    fn parse_series_is_nothing() {
        let book_page = BookPage::new("http://lubimyczytac.pl/ksiazka/4897/sezon-burz");

        let document = Html::parse_document("<html><body></body></html>");

        let expected = (String::new(), 0);

        assert_eq!(expected, book_page.parse_series(&document));
    }

    #[test]
    fn parse_rating_with_decimal_point() {
        let book_page = BookPage::new("http://lubimyczytac.pl/ksiazka/4897/sezon-burz");

        let document =
            Html::parse_document(r#"<span class="rating-value"> 8.1 / 10 </span>"#);

        let expected = 8.1;

        assert_eq!(expected, book_page.parse_rating_value(&document));
    }

    #[test]
    fn parse_rating_is_nothing() {
        let book_page = BookPage::new("http://lubimyczytac.pl/ksiazka/4897/sezon-burz");

        let document = Html::parse_document(r#"<span class="rating-value">brak</span>"#);

        let expected = 0.0;

        assert_eq!(expected, book_page.parse_rating_value(&document));
    }

    #[test]
    fn upsize_cover() {
        let expected = "http://s.lubimyczytac.pl/upload/books/4897000/4897815/original.jpg";

        assert_eq!(
            expected,
            super::upsize_cover("http://s.lubimyczytac.pl/upload/books/4897000/4897815/352x500.jpg")
        );
    }

    #[test]
    fn upsize_cover_without_size_segment() {
        let expected = "http://s.lubimyczytac.pl/upload/books/cover.jpg";

        assert_eq!(
            expected,
            super::upsize_cover("http://s.lubimyczytac.pl/upload/books/cover.jpg")
        );
    }
}

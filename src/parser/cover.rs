use anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use log::trace;
use reqwest;

use crate::parser::Parser;

/// Fetches the raw bytes of a cover image for preview. No decoding happens
/// here; the host editor owns the pixels.
pub struct Cover {
    url: String,
}

impl Cover {
    pub fn new<S: Into<String>>(url: S) -> Cover {
        Cover { url: url.into() }
    }
}

#[async_trait]
impl Parser for Cover {
    type RequestData = Bytes;
    type ParseData = Bytes;

    fn url(&self) -> String {
        self.url.clone()
    }

    async fn request(&self) -> anyhow::Result<Self::RequestData> {
        trace!("Cover::request()");
        let client = reqwest::Client::builder().build()?;

        let bytes = client
            .get(self.url().as_str())
            .send()
            .await?
            .bytes()
            .await?;

        Ok(bytes)
    }

    async fn parse(&self, request_data: Self::RequestData) -> anyhow::Result<Self::ParseData> {
        trace!("Cover::parse()");
        if request_data.is_empty() {
            return Err(anyhow::Error::msg("Empty cover response"));
        }

        Ok(request_data)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::Cover;
    use super::Parser;

    #[tokio::test]
    async fn parse() -> anyhow::Result<()> {
        let cover = Cover::new("http://s.lubimyczytac.pl/upload/books/4897000/4897815/141x200.jpg");

        let pd = cover.parse(Bytes::from_static(&[0xff, 0xd8, 0xff])).await?;

        assert_eq!(3, pd.len());

        Ok(())
    }

    #[tokio::test]
    async fn parse_empty_is_error() -> anyhow::Result<()> {
        let cover = Cover::new("http://s.lubimyczytac.pl/upload/books/4897000/4897815/141x200.jpg");

        let pd = cover.parse(Bytes::new()).await;

        assert!(pd.is_err());

        Ok(())
    }
}

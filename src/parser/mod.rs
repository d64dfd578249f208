use anyhow;
use async_trait::async_trait;

mod book_page;
mod cover;
mod suggestions;

pub use book_page::BookPage;
pub use cover::Cover;
pub use suggestions::Suggestions;

#[async_trait]
pub trait Parser {
    type RequestData;
    type ParseData;

    fn url(&self) -> String;

    async fn request(&self) -> anyhow::Result<Self::RequestData>;

    async fn parse(&self, request_data: Self::RequestData) -> anyhow::Result<Self::ParseData>;
}

use std::env;

use anyhow;
use log::warn;

use lubimy_metadata::session::FetchSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let phrase = env::args().skip(1).collect::<Vec<_>>().join(" ");

    if phrase.is_empty() {
        return Err(anyhow::Error::msg("Usage: lubimy_metadata <title or author>"));
    }

    let mut session = FetchSession::new(phrase.as_str(), "");

    let hits = session.search().await?;

    if hits.is_empty() {
        println!("No results for \"{}\"", phrase);
        return Ok(());
    }

    for (index, hit) in hits.iter().enumerate() {
        println!("{:2}. {}", index + 1, hit.display_name());
    }

    match session.thumbnails().await {
        Ok(thumbnails) => println!("Fetched {} cover thumbnails", thumbnails.len()),
        Err(err) => warn!("thumbnails: {}", err),
    }

    let details = session.select(0).await?;

    println!("\n{:#?}", details);

    let result = session.result()?;

    println!("\n{:#?}", result);

    Ok(())
}

use log::{error, info};

pub fn update(context: &str, stage: Stage) {
    match stage {
        Stage::Fail(err) => error!("{}: {}: {:#?}", context, stage.to_string(), err),
        other => info!("{}: {}", context, other.to_string()),
    }
}

pub enum Stage<'a> {
    ParsedSuggestions(usize),
    ParsedBookPage,
    FetchedCover,
    SkippedCover,
    Fail(&'a anyhow::Error),
}

impl<'a> ToString for Stage<'a> {
    fn to_string(&self) -> String {
        let r = match self {
            Self::ParsedSuggestions(count) => return format!("Parsed Suggestions ({})", count),
            Self::ParsedBookPage => "Parsed Book Page",
            Self::FetchedCover => "Fetched Cover",
            Self::SkippedCover => "Skipped Cover",
            Self::Fail(_) => "Fail",
        };

        r.to_string()
    }
}

use crate::models::{BookDetails, SearchHit};

/// One importable attribute: the checkbox state plus the editable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub import: bool,
    pub value: String,
}

impl Field {
    pub fn new(value: String) -> Field {
        Field {
            import: !value.is_empty(),
            value,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        if self.import && !self.value.is_empty() {
            Some(self.value.as_str())
        } else {
            None
        }
    }
}

/// What the host editor reads back after the user confirms the dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSelection {
    pub cover: Field,
    pub author: Field,
    pub title: Field,
    pub category: Field,
    pub series: Field,
    pub series_index: Field,
    pub rating: Field,
    pub description: Field,
}

impl ImportSelection {
    /// The suggestion row carries title/author; the book page carries the
    /// rest. Category and cover fall back to the row when the page had none.
    pub fn from_fetched(hit: &SearchHit, details: &BookDetails) -> ImportSelection {
        let cover_url = if !details.cover_url.is_empty() {
            details.cover_url.clone()
        } else {
            hit.cover_url.clone()
        };

        let category = if !details.category.is_empty() {
            details.category.clone()
        } else {
            hit.category.clone()
        };

        let series_index = if details.series_index > 0 {
            details.series_index.to_string()
        } else {
            String::new()
        };

        let rating = if details.rating_value > 0.0 {
            format!("{:.2}", details.rating_value)
        } else {
            String::new()
        };

        ImportSelection {
            cover: Field::new(cover_url),
            author: Field::new(hit.author.clone()),
            title: Field::new(hit.title.clone()),
            category: Field::new(category),
            series: Field::new(details.series.clone()),
            series_index: Field::new(series_index),
            rating: Field::new(rating),
            description: Field::new(details.description.clone()),
        }
    }
}

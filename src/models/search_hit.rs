/// One row of the suggestion list. `author` holds the suggestion's author
/// names already joined with `", "`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub cover_url: String,
    pub rating: i32,
}

impl SearchHit {
    pub fn display_name(&self) -> String {
        let mut name = String::new();

        if !self.title.is_empty() {
            name.push_str(self.title.as_str());
        }

        if !self.author.is_empty() {
            if !name.is_empty() {
                name.push_str(" - ");
            }
            name.push_str(self.author.as_str());
        }

        if !self.category.is_empty() {
            name.push_str(" (");
            name.push_str(self.category.as_str());
            name.push(')');
        }

        if name.is_empty() {
            return self.url.clone();
        }

        name
    }
}

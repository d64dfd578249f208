/// Fields extracted from a single book page. Everything defaults to
/// empty/zero; the page parser fills in whatever the markup yields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDetails {
    pub cover_url: String,
    pub description: String,
    pub category: String,
    pub series: String,
    pub series_index: i32,
    pub rating_value: f64,
}

use serde::Deserialize;

use super::deserializers::deserialize_page;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query. Missing or non-numeric values fall back to page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_page")]
    page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Returns the `page`-th window of `QUESTIONS_PER_PAGE` items. Pages below 1
/// or past the end give an empty window.
pub fn paginate<T>(items: impl IntoIterator<Item = T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

//! Suggestion Filter
//!
//! Prefix matching of the item pool against the current query.

/// Queries shorter than this (in characters) produce no suggestions
pub const MIN_QUERY_LEN: usize = 2;

/// Pool entries starting with `query`, case-sensitive, in pool order
pub fn filter_items(pool: &[String], query: &str) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    pool.iter()
        .filter(|item| item.starts_with(query))
        .cloned()
        .collect()
}

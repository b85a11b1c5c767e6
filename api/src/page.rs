//! Normalization of listing responses into one page shape.
//!
//! Listing endpoints usually answer `{ "data": [...], "pagination": {...} }`,
//! but a few reference endpoints answer a bare array. Both collapse into
//! [`PageResult`] at the fetch boundary so no screen ever branches on the
//! wire shape.

use serde::Deserialize;

/// Pagination metadata as the backend sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

/// Either wire shape a listing endpoint may produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListingBody<T> {
    Paged { data: Vec<T>, pagination: PageMeta },
    Bare(Vec<T>),
}

/// One page of results, fully normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Always at least 1, even for an empty result set.
    pub total_pages: u32,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
        }
    }
}

impl<T> From<ListingBody<T>> for PageResult<T> {
    fn from(body: ListingBody<T>) -> Self {
        match body {
            ListingBody::Paged { data, pagination } => Self {
                items: data,
                total_pages: pagination.total_pages.max(1),
            },
            ListingBody::Bare(items) => Self {
                items,
                total_pages: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_the_paged_shape() {
        let body: ListingBody<String> = serde_json::from_str(
            r#"{
                "data": ["a", "b"],
                "pagination": {
                    "total": 12, "page": 1, "limit": 2,
                    "totalPages": 6, "hasNext": true, "hasPrevious": false
                }
            }"#,
        )
        .unwrap();
        let page = PageResult::from(body);
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.total_pages, 6);
    }

    #[test]
    fn normalizes_the_bare_array_shape() {
        let body: ListingBody<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        let page = PageResult::from(body);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn total_pages_never_drops_below_one() {
        let body: ListingBody<u32> = serde_json::from_str(
            r#"{
                "data": [],
                "pagination": { "total": 0, "page": 1, "limit": 10, "totalPages": 0 }
            }"#,
        )
        .unwrap();
        assert_eq!(PageResult::from(body).total_pages, 1);
    }
}

//! Offset pagination for the PokeAPI list endpoint
//!
//! The list endpoint pages with `limit`/`offset` and reports a `count` total
//! hint alongside each page.

use super::models::{NamedResource, ResourceList};

/// Hard upper bound the controller will request in one page
pub const MAX_PAGE_SIZE: usize = 100;

/// Limit/offset parameters for one list request.
///
/// # Example
/// ```ignore
/// let page = PageRequest::new(20).offset(40);
/// client.fetch_list(&page).await?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of entries to request
    pub limit: usize,
    /// Number of entries to skip
    pub offset: usize,
}

impl PageRequest {
    /// First page of `limit` entries. The limit is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset: 0,
        }
    }

    /// Set the offset.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Query pairs for `GET /pokemon`
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

/// One page of list results with its total-count hint
#[derive(Debug, Clone)]
pub struct ListPage {
    pub items: Vec<NamedResource>,
    pub total_count: Option<usize>,
    pub request: PageRequest,
}

impl ListPage {
    pub fn new(list: ResourceList, request: PageRequest) -> Self {
        Self {
            items: list.results,
            total_count: list.count,
            request,
        }
    }

    /// Whether more entries may exist after this page.
    ///
    /// Only a full page keeps the listing open; the total-count hint is
    /// informational.
    pub fn has_more(&self) -> bool {
        self.items.len() == self.request.limit
    }
}

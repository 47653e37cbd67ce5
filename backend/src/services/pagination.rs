//! Fixed-size paging over an ordered result list.
//!
//! Paging never fails: malformed or out-of-range page numbers are clamped
//! to something displayable.

use serde::{Deserialize, Serialize};

/// Number of results shown per list page.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRequest(usize);

impl PageRequest {
    pub fn first() -> Self {
        PageRequest(1)
    }

    /// Page `n`; zero is treated as page 1.
    pub fn new(page: usize) -> Self {
        PageRequest(page.max(1))
    }

    /// Parse raw query text. Missing, non-numeric, zero and negative values
    /// all mean page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|text| text.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .map(|page| Self::new(usize::try_from(page).unwrap_or(usize::MAX)))
            .unwrap_or_else(Self::first)
    }

    pub fn number(&self) -> usize {
        self.0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Derived paging figures for "showing X–Y of Z" and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_results: usize,
    pub last_page: usize,
    /// 1-based index of the first result on this page, 0 when the page is empty.
    pub showing_from: usize,
    /// 1-based index of the last result on this page, 0 when the page is empty.
    pub showing_to: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageInfo {
    /// "showing 11-12 of 12"
    pub fn showing_label(&self) -> String {
        format!(
            "showing {}-{} of {}",
            self.showing_from, self.showing_to, self.total_results
        )
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Last navigable page for `total` results; at least 1.
pub fn last_page(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Slice `items` to `[(page-1)*size, page*size)`, clamped to the list bounds.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page = request.number();

    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    let slice = items[start..end].to_vec();

    let (showing_from, showing_to) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };
    let last_page = last_page(total, page_size);

    Page {
        items: slice,
        info: PageInfo {
            page,
            page_size,
            total_results: total,
            last_page,
            showing_from,
            showing_to,
            has_previous: page > 1,
            has_next: page < last_page,
        },
    }
}

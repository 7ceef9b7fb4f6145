//! Paged listing aggregation
//!
//! Walks a remote listing page by page (starting at 1) until the remote says
//! the last page was reached. A listing that never says so is cut off after
//! [`MAX_PAGE_REQUESTS`] requests and reported as truncated.

use std::future::Future;

use serde::Serialize;
use tracing::{debug, warn};

/// Hard ceiling on page requests for one aggregation
pub const MAX_PAGE_REQUESTS: u32 = 999;

/// One decoded page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub is_final_page: bool,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(is_final_page: bool, items: Vec<T>) -> Self {
        Self {
            is_final_page,
            items,
        }
    }
}

/// Everything collected from a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collected<T> {
    /// Items of every fetched page, in page order then item order
    pub items: Vec<T>,
    /// Number of page requests issued
    pub pages_fetched: u32,
    /// The ceiling was hit before a final page was seen
    pub truncated: bool,
}

impl<T> Collected<T> {
    /// Drop the bookkeeping and keep the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Fetch pages sequentially until a final page or the request ceiling
///
/// `fetch_page` is called with 1, 2, 3, ... and each call completes before
/// the next starts. The first error aborts the walk and is returned as is;
/// items gathered so far are dropped.
pub async fn collect_pages<T, E, F, Fut>(mut fetch_page: F) -> Result<Collected<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut items = Vec::new();

    for page_number in 1..=MAX_PAGE_REQUESTS {
        let page = fetch_page(page_number).await?;
        debug!(
            page = page_number,
            count = page.items.len(),
            final_page = page.is_final_page,
            "Fetched listing page"
        );

        items.extend(page.items);

        if page.is_final_page {
            return Ok(Collected {
                items,
                pages_fetched: page_number,
                truncated: false,
            });
        }
    }

    warn!(
        pages = MAX_PAGE_REQUESTS,
        count = items.len(),
        "Listing never reached a final page, result truncated"
    );

    Ok(Collected {
        items,
        pages_fetched: MAX_PAGE_REQUESTS,
        truncated: true,
    })
}

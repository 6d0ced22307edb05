//! Catalog port for bounded price-range queries.

use async_trait::async_trait;

use crate::domain::{Page, PriceFilter};
use crate::error::Result;

/// Executes one bounded-range query against a page-capped catalog.
///
/// Implementations must return pages with `count == items.len()` and
/// `count <= total`, and report transport or payload problems as
/// [`Error::Fetch`](crate::error::Error::Fetch). Callers do not retry.
#[async_trait]
pub trait RangeFetcher: Send + Sync {
    /// Fetch the page of items whose price passes `filter`.
    async fn fetch_page(&self, filter: PriceFilter) -> Result<Page>;

    /// Source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}

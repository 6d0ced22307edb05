//! In-memory catalogs for exercising the scan without a network.
//!
//! - [`SimulatedCatalog`] - A page-capped catalog over a fixed price list
//!   that records every filter it was asked for.
//!   Best for: partitioning, strategy, and completeness tests.
//!
//! - [`ScriptedFetcher`] - Pre-loaded pages and failures, served in order.
//!   Best for: error propagation and malformed-source behavior.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::domain::item;
use crate::domain::{Item, Page, PriceFilter};
use crate::error::{FetchError, Result};
use crate::port::RangeFetcher;

// ---------------------------------------------------------------------------
// SimulatedCatalog
// ---------------------------------------------------------------------------

/// A catalog that returns at most `page_cap` matching items per query.
///
/// Item `i` gets `id = i` and the `i`-th price. Pages return matches in
/// insertion order, truncated to the cap, with `total` set to the number
/// of matches.
pub struct SimulatedCatalog {
    entries: Vec<(Decimal, Item)>,
    page_cap: usize,
    queries: Mutex<Vec<PriceFilter>>,
}

impl SimulatedCatalog {
    pub fn new(prices: Vec<Decimal>, page_cap: usize) -> Self {
        let entries = prices
            .into_iter()
            .enumerate()
            .map(|(id, price)| (price, item(id as u64, price)))
            .collect();
        Self {
            entries,
            page_cap,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn page_cap(&self) -> usize {
        self.page_cap
    }

    /// Every filter queried so far, in call order.
    pub fn queries(&self) -> Vec<PriceFilter> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    /// Number of items whose price passes `filter`.
    pub fn count_matching(&self, filter: PriceFilter) -> usize {
        self.entries
            .iter()
            .filter(|(price, _)| filter.matches(*price))
            .count()
    }
}

#[async_trait]
impl RangeFetcher for SimulatedCatalog {
    async fn fetch_page(&self, filter: PriceFilter) -> Result<Page> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(filter);
        }

        let matching: Vec<&Item> = self
            .entries
            .iter()
            .filter(|(price, _)| filter.matches(*price))
            .map(|(_, item)| item)
            .collect();
        let total = matching.len() as u64;
        let items = matching.into_iter().take(self.page_cap).cloned().collect();

        Ok(Page::new(total, items))
    }

    fn source_name(&self) -> &'static str {
        "simulated"
    }
}

// ---------------------------------------------------------------------------
// ScriptedFetcher
// ---------------------------------------------------------------------------

enum Scripted {
    Page(Page),
    Failure,
}

/// A fetcher that replays a fixed script of pages and failures.
///
/// Each call pops the next entry. Failures and an exhausted script both
/// surface as [`FetchError::EmptyPayload`].
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_page(self, page: Page) -> Self {
        self.push(Scripted::Page(page))
    }

    pub fn with_failure(self) -> Self {
        self.push(Scripted::Failure)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, entry: Scripted) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(entry);
        }
        self
    }
}

impl Default for ScriptedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RangeFetcher for ScriptedFetcher {
    async fn fetch_page(&self, _filter: PriceFilter) -> Result<Page> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        match next {
            Some(Scripted::Page(page)) => Ok(page),
            Some(Scripted::Failure) | None => Err(FetchError::EmptyPayload {
                url: "scripted://catalog".into(),
            }
            .into()),
        }
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}

//! Top-level scan strategies.
//!
//! The orchestrator owns one [`ScanState`] and drives a [`RangeFetcher`]
//! through either strategy:
//!
//! - **Ascending** probes the unfiltered catalog for its total, then walks
//!   fixed-width windows up from `domain_min` until that many items are in
//!   hand. It needs no upper bound and may walk past `domain_max`.
//! - **Descending** probes `[domain_min, domain_max]` once and bisects it
//!   if the page overflowed. Items priced above `domain_max` are not
//!   covered; this is expected, not an error.
//!
//! A scan either completes with every item or fails with none.

use std::mem;

use tracing::{debug, info, warn};

use super::config::ScanConfig;
use super::partitioner::RangePartitioner;
use super::state::{InitOptions, ScanPhase, ScanState, ScanStrategy};
use crate::domain::{Item, Price, PriceFilter, PriceRange};
use crate::error::{Result, ScanError};
use crate::port::RangeFetcher;

/// What a successful strategy run hands back to the state machine.
struct ScanOutcome {
    items: Vec<Item>,
    cursor: Price,
    total: u64,
    windows: usize,
}

/// Ascending progress. Each step yields a new value.
struct AscendingCursor {
    start: Price,
    step: Price,
    collected: Vec<Item>,
    windows: usize,
}

impl AscendingCursor {
    const fn new(start: Price, step: Price) -> Self {
        Self {
            start,
            step,
            collected: Vec::new(),
            windows: 0,
        }
    }

    fn window(&self) -> Result<PriceRange> {
        Ok(PriceRange::window(self.start, self.step)?)
    }

    fn advance(self, items: Vec<Item>) -> Self {
        let mut collected = self.collected;
        collected.extend(items);
        Self {
            start: self.start + self.step,
            step: self.step,
            collected,
            windows: self.windows + 1,
        }
    }
}

/// Drives exhaustive scans over a page-capped catalog.
///
/// Each orchestrator runs one logical scan at a time; every mutating call
/// takes `&mut self`. Use separate instances for independent scans.
pub struct ScanOrchestrator<F> {
    fetcher: F,
    config: ScanConfig,
    state: ScanState,
}

impl<F: RangeFetcher> ScanOrchestrator<F> {
    /// Create an orchestrator in the `Uninitialized` phase.
    #[allow(clippy::result_large_err)]
    pub fn new(fetcher: F, config: ScanConfig) -> Result<Self> {
        config.validate()?;
        let state = ScanState::uninitialized(config.domain_min, config.step_size);
        Ok(Self {
            fetcher,
            config,
            state,
        })
    }

    /// Reset progress: no items, cursor at `domain_min`, step from
    /// `options` or the configured default.
    pub fn initialize(&mut self, options: InitOptions) -> Result<&mut Self> {
        let step_size = options.step_size.unwrap_or(self.config.step_size);
        self.state = ScanState::initialized(self.config.domain_min, step_size)?;
        debug!(
            step_size = %self.state.step_size(),
            domain_min = %self.config.domain_min,
            "Scan initialized"
        );
        Ok(self)
    }

    /// Collect the whole catalog in fixed-width windows from `domain_min`.
    ///
    /// Stops once the collected count reaches the total reported by an
    /// unfiltered probe. A window that matches nothing before then fails
    /// the scan with [`ScanError::Incomplete`].
    pub async fn scan_ascending(&mut self) -> Result<&mut Self> {
        self.begin(ScanStrategy::Ascending)?;
        let outcome = self.run_ascending().await;
        self.finish(outcome)
    }

    /// Collect every item priced within `[domain_min, domain_max]`.
    ///
    /// Items above `domain_max` are silently left out, so the result may
    /// be smaller than the catalog's overall total.
    pub async fn scan_descending(&mut self) -> Result<&mut Self> {
        self.begin(ScanStrategy::Descending)?;
        let outcome = self.run_descending().await;
        self.finish(outcome)
    }

    /// Items from the last completed scan, in discovery order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.state.accumulated()
    }

    /// Consume the orchestrator, returning the collected items.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.state.take_accumulated()
    }

    #[must_use]
    pub const fn state(&self) -> &ScanState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> ScanPhase {
        self.state.phase()
    }

    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn begin(&mut self, strategy: ScanStrategy) -> Result<()> {
        match self.state.phase() {
            ScanPhase::Initialized => {}
            ScanPhase::Uninitialized => {
                self.initialize(InitOptions::default())?;
            }
            phase => return Err(ScanError::NotInitialized { phase }.into()),
        }

        let placeholder = self.placeholder();
        let state = mem::replace(&mut self.state, placeholder);
        self.state = state.begin(strategy);
        info!(
            strategy = %strategy,
            source = self.fetcher.source_name(),
            "Scan started"
        );
        Ok(())
    }

    fn finish(&mut self, outcome: Result<ScanOutcome>) -> Result<&mut Self> {
        let placeholder = self.placeholder();
        let state = mem::replace(&mut self.state, placeholder);
        match outcome {
            Ok(outcome) => {
                self.state = state.complete(
                    outcome.items,
                    outcome.cursor,
                    outcome.total,
                    outcome.windows,
                );
                info!(
                    items = self.state.accumulated().len(),
                    reported_total = outcome.total,
                    windows = outcome.windows,
                    "Scan complete"
                );
                Ok(self)
            }
            Err(err) => {
                self.state = state.fail();
                warn!(error = %err, "Scan failed");
                Err(err)
            }
        }
    }

    fn placeholder(&self) -> ScanState {
        ScanState::uninitialized(self.config.domain_min, self.config.step_size)
    }

    async fn run_ascending(&self) -> Result<ScanOutcome> {
        let probe = self.fetcher.fetch_page(PriceFilter::unbounded()).await?;
        let target = probe.total;
        info!(total = target, "Probed catalog");

        let mut cursor = AscendingCursor::new(self.state.cursor(), self.state.step_size());

        while (cursor.collected.len() as u64) < target {
            let window = cursor.window()?;
            let page = self.fetcher.fetch_page(window.into()).await?;

            if page.is_empty() {
                warn!(
                    window = %window,
                    collected = cursor.collected.len(),
                    target,
                    "Empty window before reaching catalog total"
                );
                return Err(ScanError::Incomplete {
                    window,
                    collected: cursor.collected.len(),
                    target,
                }
                .into());
            }

            let items = if page.overflows() {
                debug!(window = %window, total = page.total, count = page.count, "Window overflowed");
                RangePartitioner::new(&self.fetcher).solve(window).await?
            } else {
                page.items
            };

            debug!(
                window = %window,
                items = items.len(),
                collected = cursor.collected.len() + items.len(),
                target,
                "Window scanned"
            );
            cursor = cursor.advance(items);
        }

        Ok(ScanOutcome {
            items: cursor.collected,
            cursor: cursor.start,
            total: target,
            windows: cursor.windows,
        })
    }

    async fn run_descending(&self) -> Result<ScanOutcome> {
        let domain = self.config.domain()?;
        let probe = self.fetcher.fetch_page(domain.into()).await?;
        info!(domain = %domain, total = probe.total, count = probe.count, "Probed domain");

        let items = if probe.overflows() {
            RangePartitioner::new(&self.fetcher).solve(domain).await?
        } else {
            probe.items
        };

        Ok(ScanOutcome {
            items,
            cursor: domain.max(),
            total: probe.total,
            windows: 1,
        })
    }
}

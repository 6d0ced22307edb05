//! Bisection of overflowing price ranges.
//!
//! A range overflows when the catalog reports more matching items than it
//! returned. The partitioner splits such a range at its rounded midpoint
//! into `[min, mid - ε]` and `[mid, max]`, fetches each half, and keeps
//! splitting halves that still overflow. Halves are visited lower-first,
//! depth-first, off an explicit stack so depth never touches the call stack.

use tracing::{debug, trace};

use crate::domain::{Item, PriceRange};
use crate::error::{Result, ScanError};
use crate::port::RangeFetcher;

/// Counters describing one `solve` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Fetches issued, one per sub-range.
    pub fetches: usize,
    /// Deepest bisection level reached (the input range is level 0).
    pub max_depth: usize,
}

/// Resolves overflowing ranges into complete item sets.
pub struct RangePartitioner<'a, F: ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: RangeFetcher + ?Sized> RangePartitioner<'a, F> {
    #[must_use]
    pub const fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Collect every item in `range`, which a previous fetch found to overflow.
    ///
    /// Fails with [`ScanError::Exhausted`] as soon as an overflowing range
    /// can no longer be bisected, and with the fetcher's error on any fetch
    /// failure. No partial result is returned in either case.
    pub async fn solve(&self, range: PriceRange) -> Result<Vec<Item>> {
        self.solve_with_stats(range).await.map(|(items, _)| items)
    }

    /// Like [`solve`](Self::solve), also reporting fetch and depth counters.
    pub async fn solve_with_stats(&self, range: PriceRange) -> Result<(Vec<Item>, PartitionStats)> {
        let mut stats = PartitionStats::default();
        let mut items = Vec::new();
        let mut pending: Vec<(PriceRange, usize)> = Vec::new();

        push_halves(&mut pending, range, 0)?;

        while let Some((window, depth)) = pending.pop() {
            stats.fetches += 1;
            stats.max_depth = stats.max_depth.max(depth);

            let page = self.fetcher.fetch_page(window.into()).await?;
            trace!(
                range = %window,
                depth,
                total = page.total,
                count = page.count,
                "Fetched sub-range"
            );

            if page.overflows() {
                push_halves(&mut pending, window, depth)?;
            } else {
                items.extend(page.items);
            }
        }

        debug!(
            range = %range,
            items = items.len(),
            fetches = stats.fetches,
            max_depth = stats.max_depth,
            "Partitioned overflowing range"
        );

        Ok((items, stats))
    }
}

/// Queue both halves of `range`, lower half on top.
fn push_halves(
    pending: &mut Vec<(PriceRange, usize)>,
    range: PriceRange,
    depth: usize,
) -> std::result::Result<(), ScanError> {
    let (lower, upper) = range.bisect().ok_or(ScanError::Exhausted { range })?;
    pending.push((upper, depth + 1));
    pending.push((lower, depth + 1));
    Ok(())
}

//! Tests for range partitioning against a simulated page-capped catalog.

mod support;

use pricesweep::application::scan::RangePartitioner;
use pricesweep::domain::{PriceFilter, PriceRange};
use pricesweep::error::{Error, ScanError};
use pricesweep::port::RangeFetcher;
use pricesweep::testkit::catalog::SimulatedCatalog;
use pricesweep::testkit::domain::{integer_prices, item_ids, repeated_price};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use support::assertions::assert_complete;
use support::catalog::spaced_prices;

fn range(min: Decimal, max: Decimal) -> PriceRange {
    PriceRange::try_new(min, max).expect("valid range")
}

#[tokio::test]
async fn overflowing_range_yields_every_item_once() {
    let catalog = SimulatedCatalog::new(spaced_prices(5000, dec!(0.125)), 1000);
    let domain = range(dec!(0), dec!(624.875));

    let probe = catalog.fetch_page(domain.into()).await.expect("probe");
    assert!(probe.overflows());
    assert_eq!(probe.total, 5000);

    let items = RangePartitioner::new(&catalog)
        .solve(domain)
        .await
        .expect("divisible");

    assert_eq!(items.len() as u64, probe.total);
    assert_complete(&items, 5000);
}

#[tokio::test]
async fn skewed_distribution_is_resolved() {
    let mut prices = repeated_price(dec!(9.99), 900);
    prices.extend(spaced_prices(3000, dec!(1.5)));
    prices.extend(repeated_price(dec!(4499.999), 700));
    let catalog = SimulatedCatalog::new(prices, 1000);

    let items = RangePartitioner::new(&catalog)
        .solve(range(dec!(0), dec!(5000)))
        .await
        .expect("divisible");

    assert_complete(&items, 4600);
}

#[tokio::test]
async fn midpoint_item_lands_in_upper_half_only() {
    let mut prices = integer_prices(0..100);
    prices.push(dec!(50.000));
    let planted = (prices.len() - 1) as u64;
    let catalog = SimulatedCatalog::new(prices, 60);

    let items = RangePartitioner::new(&catalog)
        .solve(range(dec!(0), dec!(100)))
        .await
        .expect("divisible");

    let queries = catalog.queries();
    assert_eq!(queries[0], PriceFilter::from(range(dec!(0), dec!(49.999))));
    assert_eq!(queries[1], PriceFilter::from(range(dec!(50), dec!(100))));

    let lower = catalog.fetch_page(queries[0]).await.expect("lower half");
    let upper = catalog.fetch_page(queries[1]).await.expect("upper half");
    assert!(!item_ids(&lower.items).contains(&planted));
    assert!(item_ids(&upper.items).contains(&planted));

    let hits = item_ids(&items).iter().filter(|id| **id == planted).count();
    assert_eq!(hits, 1);
    assert_complete(&items, 101);
}

#[tokio::test]
async fn identical_prices_beyond_cap_are_irreducible() {
    let catalog = SimulatedCatalog::new(repeated_price(dec!(42.000), 1500), 1000);

    let result = RangePartitioner::new(&catalog)
        .solve(range(dec!(0), dec!(100)))
        .await;

    match result {
        Err(Error::Scan(ScanError::Exhausted { range })) => {
            assert_eq!(range.min(), dec!(42));
            assert_eq!(range.max(), dec!(42));
        }
        Err(err) => panic!("expected exhaustion, got {err}"),
        Ok(items) => panic!("expected exhaustion, got {} items", items.len()),
    }
    assert!(catalog.queries().len() < 100, "bisection must stop at 3 decimal places");
}

#[tokio::test]
async fn identical_prices_within_cap_are_fine() {
    let mut prices = repeated_price(dec!(42), 1000);
    prices.extend(repeated_price(dec!(43), 1000));
    let catalog = SimulatedCatalog::new(prices, 1000);

    let items = RangePartitioner::new(&catalog)
        .solve(range(dec!(0), dec!(100)))
        .await
        .expect("each price fits one page");

    assert_complete(&items, 2000);
}

//! Tests for the ascending and descending scan strategies.

mod support;

use std::collections::HashSet;

use pricesweep::application::scan::{
    InitOptions, ScanConfig, ScanOrchestrator, ScanPhase, ScanStrategy,
};
use pricesweep::domain::{Page, PriceFilter, PriceRange};
use pricesweep::error::{Error, ScanError};
use pricesweep::testkit::catalog::{ScriptedFetcher, SimulatedCatalog};
use pricesweep::testkit::domain::{integer_prices, item, item_ids, repeated_price};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use support::assertions::{assert_complete, assert_unique_ids};
use support::catalog::spaced_prices;

fn orchestrator(catalog: SimulatedCatalog) -> ScanOrchestrator<SimulatedCatalog> {
    ScanOrchestrator::new(catalog, ScanConfig::default()).expect("default config is valid")
}

fn window(min: Decimal, max: Decimal) -> PriceFilter {
    PriceFilter::from(PriceRange::try_new(min, max).expect("valid range"))
}

#[tokio::test]
async fn satisfied_probe_skips_partitioning() {
    let mut orch = orchestrator(SimulatedCatalog::new(integer_prices(0..500), 1000));

    orch.initialize(InitOptions::default())
        .expect("valid options")
        .scan_descending()
        .await
        .expect("scan succeeds");

    assert_eq!(orch.fetcher().queries(), vec![window(dec!(0), dec!(100000))]);
    assert_eq!(orch.phase(), ScanPhase::Done);
    assert_complete(orch.items(), 500);
}

#[tokio::test]
async fn ascending_walks_three_windows_for_2500_items() {
    let mut orch = orchestrator(SimulatedCatalog::new(integer_prices(0..2500), 1000));

    orch.initialize(InitOptions::with_step_size(dec!(1000)))
        .expect("valid options")
        .scan_ascending()
        .await
        .expect("scan succeeds");

    assert_eq!(orch.state().windows(), 3);
    assert_eq!(
        orch.fetcher().queries(),
        vec![
            PriceFilter::unbounded(),
            window(dec!(0), dec!(999.999)),
            window(dec!(1000), dec!(1999.999)),
            window(dec!(2000), dec!(2999.999)),
        ]
    );
    assert_eq!(orch.items().len(), 2500);
    assert_complete(orch.items(), 2500);
    assert_eq!(orch.state().strategy(), Some(ScanStrategy::Ascending));
    assert_eq!(orch.state().reported_total(), Some(2500));
}

#[tokio::test]
async fn ascending_partitions_overflowing_windows() {
    let mut orch = orchestrator(SimulatedCatalog::new(spaced_prices(2500, dec!(0.4)), 300));

    orch.initialize(InitOptions::with_step_size(dec!(250)))
        .expect("valid options")
        .scan_ascending()
        .await
        .expect("scan succeeds");

    assert_eq!(orch.state().windows(), 4);
    assert!(orch.fetcher().queries().len() > 5);
    assert_complete(orch.items(), 2500);
}

#[tokio::test]
async fn ascending_boundary_item_is_collected_once() {
    let mut prices = integer_prices(0..400);
    prices.push(dec!(200));
    let mut orch = orchestrator(SimulatedCatalog::new(prices, 1000));

    orch.scan_ascending().await.expect("scan succeeds");

    assert_complete(orch.items(), 401);
}

#[tokio::test]
async fn ascending_walks_past_domain_max() {
    let mut orch = orchestrator(SimulatedCatalog::new(spaced_prices(1200, dec!(100)), 1000));

    orch.initialize(InitOptions::with_step_size(dec!(20000)))
        .expect("valid options")
        .scan_ascending()
        .await
        .expect("scan succeeds");

    assert_complete(orch.items(), 1200);
    assert!(orch.state().cursor() > orch.config().domain_max);
}

#[tokio::test]
async fn ascending_fails_on_empty_window_before_total() {
    let mut prices = integer_prices(0..100);
    prices.extend(integer_prices(5000..5100));
    let mut orch = orchestrator(SimulatedCatalog::new(prices, 1000));

    let result = orch.scan_ascending().await;

    match result {
        Err(Error::Scan(ScanError::Incomplete {
            window,
            collected,
            target,
        })) => {
            assert_eq!(window.min(), dec!(200));
            assert_eq!(collected, 100);
            assert_eq!(target, 200);
        }
        Err(err) => panic!("expected incomplete scan, got {err}"),
        Ok(_) => panic!("expected incomplete scan"),
    }
    assert_eq!(orch.phase(), ScanPhase::Failed);
    assert!(orch.items().is_empty());
}

#[tokio::test]
async fn descending_excludes_items_above_domain_max() {
    let mut prices = spaced_prices(3000, dec!(25));
    prices.push(dec!(150000));
    let catalog_len = prices.len();
    let mut orch = orchestrator(SimulatedCatalog::new(prices, 1000));

    orch.scan_descending().await.expect("scan succeeds");

    assert_eq!(orch.phase(), ScanPhase::Done);
    assert!(orch.items().len() < catalog_len);
    assert_eq!(orch.items().len(), 3000);
    assert_eq!(orch.state().reported_total(), Some(3000));
    assert_unique_ids(orch.items());
    assert!(!item_ids(orch.items()).contains(&3000));
}

#[tokio::test]
async fn descending_fails_when_one_price_exceeds_cap() {
    let mut prices = integer_prices(0..200);
    prices.extend(repeated_price(dec!(42.000), 1500));
    let mut orch = orchestrator(SimulatedCatalog::new(prices, 1000));

    let result = orch.scan_descending().await;

    assert!(matches!(
        result,
        Err(Error::Scan(ScanError::Exhausted { .. }))
    ));
    assert_eq!(orch.phase(), ScanPhase::Failed);
    assert!(orch.items().is_empty());
}

#[tokio::test]
async fn fetch_errors_propagate_unchanged() {
    let fetcher = ScriptedFetcher::new()
        .with_page(Page::new(3, vec![item(0, dec!(1))]))
        .with_failure();
    let mut orch = ScanOrchestrator::new(fetcher, ScanConfig::default()).expect("valid config");

    let result = orch.scan_descending().await;

    assert!(matches!(result, Err(Error::Fetch(_))));
    assert_eq!(orch.fetcher().call_count(), 2);
    assert_eq!(orch.phase(), ScanPhase::Failed);
    assert!(orch.items().is_empty());
}

#[tokio::test]
async fn reinitialize_clears_previous_results() {
    let mut orch = orchestrator(SimulatedCatalog::new(integer_prices(0..300), 1000));
    orch.scan_ascending().await.expect("first scan");
    assert_eq!(orch.items().len(), 300);

    orch.initialize(InitOptions::default()).expect("valid options");
    assert_eq!(orch.phase(), ScanPhase::Initialized);
    assert!(orch.items().is_empty());
    assert_eq!(orch.state().cursor(), dec!(0));

    orch.scan_descending().await.expect("second scan");
    assert_complete(orch.items(), 300);
}

#[tokio::test]
async fn reinitialize_recovers_from_failure() {
    let mut orch = orchestrator(SimulatedCatalog::new(
        repeated_price(dec!(7), 1500),
        1000,
    ));
    assert!(orch.scan_descending().await.is_err());
    assert_eq!(orch.phase(), ScanPhase::Failed);

    assert!(matches!(
        orch.scan_descending().await,
        Err(Error::Scan(ScanError::NotInitialized {
            phase: ScanPhase::Failed
        }))
    ));

    orch.initialize(InitOptions::default()).expect("valid options");
    assert_eq!(orch.phase(), ScanPhase::Initialized);
}

#[tokio::test]
async fn independent_orchestrators_agree() {
    let prices = spaced_prices(4000, dec!(0.75));
    let mut first = orchestrator(SimulatedCatalog::new(prices.clone(), 1000));
    let mut second = orchestrator(SimulatedCatalog::new(prices, 1000));

    first.scan_ascending().await.expect("ascending scan");
    second.scan_descending().await.expect("descending scan");

    let first_ids: HashSet<u64> = assert_unique_ids(first.items());
    let second_ids: HashSet<u64> = assert_unique_ids(second.items());
    assert_eq!(first_ids, second_ids);
    assert_eq!(first_ids.len(), 4000);
}

#[tokio::test]
async fn into_items_returns_collected_items() {
    let mut orch = orchestrator(SimulatedCatalog::new(integer_prices(0..50), 1000));
    orch.scan_descending().await.expect("scan succeeds");

    let items = orch.into_items();

    assert_complete(&items, 50);
}

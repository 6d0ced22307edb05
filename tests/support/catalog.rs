use rust_decimal::Decimal;

/// `count` prices spaced `spacing` apart starting at zero.
pub fn spaced_prices(count: usize, spacing: Decimal) -> Vec<Decimal> {
    (0..count).map(|i| Decimal::from(i) * spacing).collect()
}

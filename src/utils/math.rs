//! Numeric helpers shared by the calculators

/// Round to `decimals` places, halves toward positive infinity
///
/// This matches the rounding used by the dashboards that consume the engine
/// output (`Math.round(x * 10^d) / 10^d`), so `2.5` becomes `3` and `-2.5`
/// becomes `-2`.
#[must_use]
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Arithmetic mean, or `None` for an empty input
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

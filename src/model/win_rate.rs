/// Lower bound of the Wilson score interval at confidence parameter `z`.
///
/// More conservative than the raw proportion: the bound sits below
/// `wins / total` and tightens toward it as `total` grows. `total` may be a
/// real-weighted quantity rather than an integer count. A zero total yields
/// the neutral prior 0.5.
///
/// Negative inputs violate the input contract; they fail fast in debug
/// builds and are clamped in release.
pub fn wilson_lower_bound(wins: f64, total: f64, z: f64) -> f64 {
    debug_assert!(wins >= 0.0, "wins must be non-negative");
    debug_assert!(total >= wins, "total must be at least wins");

    if total <= 0.0 {
        return 0.5;
    }

    let wins = wins.clamp(0.0, total);

    let phat = wins / total;
    let z2 = z * z;
    let center = phat + z2 / (2.0 * total);
    let spread = z * ((phat * (1.0 - phat) + z2 / (4.0 * total)) / total).sqrt();

    ((center - spread) / (1.0 + z2 / total)).clamp(0.0, 1.0)
}

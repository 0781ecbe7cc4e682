/// Seed drawn from JavaScript's `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    seed_from_unit_pair(random(), random())
}

/// Packs two draws from `[0, 1)` into the high and low halves of a seed.
fn seed_from_unit_pair(high: f64, low: f64) -> u64 {
    const HALF: f64 = 4_294_967_296.0;
    let half = |x: f64| (x.clamp(0., 1.) * HALF).min(HALF - 1.) as u64;
    (half(high) << 32) | half(low)
}

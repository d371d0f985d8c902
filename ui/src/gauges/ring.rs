//! Circular progress math.

/// Stroke length of the ring circle (`r = 50`), measured once from the SVG asset.
pub const CIRCUMFERENCE: f64 = 314.0;

/// Clamp into `[0, 100]`. Non-finite input has no meaningful fill and yields `None`.
pub fn clamp_percentage(percentage: f64) -> Option<f64> {
    percentage
        .is_finite()
        .then(|| percentage.clamp(0.0, 100.0))
}

/// `value / max` as a percentage of the ring.
pub fn percentage_of(value: f64, max: f64) -> f64 {
    (value / max) * 100.0
}

/// Dash offset that leaves `percentage` of the ring stroked. Always within `[0, CIRCUMFERENCE]`.
pub fn ring_offset(percentage: f64) -> Option<f64> {
    clamp_percentage(percentage).map(|p| CIRCUMFERENCE - (p / 100.0) * CIRCUMFERENCE)
}

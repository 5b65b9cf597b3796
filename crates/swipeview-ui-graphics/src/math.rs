//! Scalar helpers used by gesture and ripple math.

/// Limits `value` to `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when `min > max` the upper bound
/// wins, which is what a drag limit collapsed by a disabled side needs.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Length of the vector `(x, y)`, i.e. the radius of a circle through that
/// point centered at the origin.
#[inline]
pub fn radius(x: f32, y: f32) -> f32 {
    x.hypot(y)
}

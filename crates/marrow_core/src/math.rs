//! Angle arithmetic.
//!
//! Rotations in Marrow are stored in degrees. Every angular difference that
//! feeds into an interpolation or a blend goes through [`wrap_degrees`] so the
//! runtime always travels the short way around the circle.

/// Normalizes an angle in degrees into `(-180, 180]`.
///
/// Values already in range come back bit-identical. Anything else is reduced
/// with a single Euclidean remainder, so the cost does not depend on the
/// magnitude of `angle`.
///
/// ```
/// use marrow_core::wrap_degrees;
///
/// assert_eq!(wrap_degrees(350.0), -10.0);
/// assert_eq!(wrap_degrees(-180.0), 180.0);
/// assert_eq!(wrap_degrees(90.0), 90.0);
/// ```
#[inline]
#[must_use]
pub fn wrap_degrees(angle: f32) -> f32 {
    if angle > -180.0 && angle <= 180.0 {
        return angle;
    }
    // rem_euclid can round up to 360 itself, which maps to 0 below
    let turn = angle.rem_euclid(360.0);
    if turn > 180.0 { turn - 360.0 } else { turn }
}

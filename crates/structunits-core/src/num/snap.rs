// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Snapping of floating-point values onto nearby integers.
//!
//! Dimension exponents are integers, but roots and fractional powers compute
//! them through floating-point division. These helpers decide whether such a
//! value is "really" an integer.

use num_traits::Float;

/// Maximum distance from an integer for a float to be treated as integral.
pub const SNAP_TOLERANCE: f64 = 1e-10;

/// Returns `true` if `x` lies within [`SNAP_TOLERANCE`] of an integer.
///
/// # Examples
///
/// ```rust
/// # use structunits_core::num::snap::is_integral;
///
/// assert!(is_integral(2.0_f64));
/// assert!(is_integral(3.0_f64 - 1e-12));
/// assert!(!is_integral(0.5_f64));
/// assert!(!is_integral(f64::NAN));
/// ```
#[inline]
pub fn is_integral<F>(x: F) -> bool
where
    F: Float,
{
    match F::from(SNAP_TOLERANCE) {
        Some(tolerance) => (x - x.round()).abs() < tolerance,
        None => false,
    }
}

/// Snaps `x` to the nearest `i32` if it is integral within [`SNAP_TOLERANCE`].
///
/// Returns `None` for fractional values, non-finite values, and values that
/// do not fit into an `i32`.
///
/// # Examples
///
/// ```rust
/// # use structunits_core::num::snap::snap_to_integer;
///
/// assert_eq!(snap_to_integer(4.0_f64 / 2.0), Some(2));
/// assert_eq!(snap_to_integer(-0.9999999999999_f64), Some(-1));
/// assert_eq!(snap_to_integer(1.5_f64), None);
/// assert_eq!(snap_to_integer(f64::INFINITY), None);
/// ```
#[inline]
pub fn snap_to_integer<F>(x: F) -> Option<i32>
where
    F: Float,
{
    if !x.is_finite() || !is_integral(x) {
        return None;
    }
    x.round().to_i32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integral() {
        assert!(is_integral(0.0_f64));
        assert!(is_integral(-7.0_f64));
        assert!(is_integral(1.0_f64 + 5e-11));
        assert!(!is_integral(1.0_f64 + 1e-9));
        assert!(!is_integral(2.0_f64 / 3.0));
    }

    #[test]
    fn test_snap_to_integer() {
        assert_eq!(snap_to_integer(6.0_f64 / 3.0), Some(2));
        assert_eq!(snap_to_integer(-4.0_f64 / 2.0), Some(-2));
        assert_eq!(snap_to_integer(1.0_f64 / 3.0), None);
        assert_eq!(snap_to_integer(f64::NAN), None);
        assert_eq!(snap_to_integer(1e12_f64), None);
    }

    #[test]
    fn test_snap_f32() {
        assert_eq!(snap_to_integer(3.0_f32), Some(3));
        assert_eq!(snap_to_integer(0.25_f32), None);
    }
}

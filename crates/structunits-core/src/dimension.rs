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

//! # Force-Length-Time Dimensions
//!
//! A `Dimension` is the triple of integer exponents `(F, L, T)` that
//! classifies a physical quantity: a force is `(1, 0, 0)`, a moment
//! `(1, 1, 0)`, a stress `(1, -2, 0)`. Multiplying two quantities adds their
//! exponents, dividing subtracts them, and raising to an integer power scales
//! them.
//!
//! Roots and non-integer powers can produce fractional exponents. This crate
//! does not model fractional dimensions: when every scaled component lies
//! within [`SNAP_TOLERANCE`](crate::num::snap::SNAP_TOLERANCE) of an
//! integer the result is snapped to that integer triple, otherwise the result
//! collapses to [`Dimension::UNITLESS`]. Exponent arithmetic that would
//! overflow `i32` collapses to [`Dimension::UNITLESS`] in the same way.
//!
//! ```rust
//! # use structunits_core::dimension::Dimension;
//!
//! let moment = Dimension::FORCE + Dimension::LENGTH;
//! assert_eq!(moment, Dimension::MOMENT);
//! assert_eq!(Dimension::MOMENT - Dimension::LENGTH, Dimension::FORCE);
//! assert_eq!(Dimension::AREA.divide_by_scalar(2), Dimension::LENGTH);
//! assert_eq!(Dimension::LENGTH.divide_by_scalar(2), Dimension::UNITLESS);
//! ```

use crate::{family::Family, num::snap::snap_to_integer};
use smallvec::SmallVec;

/// The exponents of force, length and time describing a physical dimension.
///
/// `Dimension` is an immutable value type; equality and hashing are
/// structural.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dimension {
    force: i32,
    length: i32,
    time: i32,
}

impl Dimension {
    /// The dimensionless triple `(0, 0, 0)`.
    pub const UNITLESS: Self = Self::new(0, 0, 0);
    /// `(1, 0, 0)`
    pub const FORCE: Self = Self::new(1, 0, 0);
    /// `(0, 1, 0)`
    pub const LENGTH: Self = Self::new(0, 1, 0);
    /// `(0, 2, 0)`
    pub const AREA: Self = Self::new(0, 2, 0);
    /// `(0, 3, 0)`
    pub const LENGTH_CUBED: Self = Self::new(0, 3, 0);
    /// `(0, 4, 0)`
    pub const LENGTH_TO_THE_4TH: Self = Self::new(0, 4, 0);
    /// `(0, 6, 0)`
    pub const LENGTH_TO_THE_6TH: Self = Self::new(0, 6, 0);
    /// `(1, 1, 0)`
    pub const MOMENT: Self = Self::new(1, 1, 0);
    /// `(1, -1, 0)`
    pub const FORCE_PER_LENGTH: Self = Self::new(1, -1, 0);
    /// `(1, -2, 0)`
    pub const STRESS: Self = Self::new(1, -2, 0);
    /// `(1, -3, 0)`
    pub const DENSITY: Self = Self::new(1, -3, 0);
    /// `(1, 2, 0)`
    pub const FLEXURAL_STIFFNESS: Self = Self::new(1, 2, 0);
    /// `(0, 0, 1)`
    pub const TIME: Self = Self::new(0, 0, 1);
    /// `(0, 1, -2)`
    pub const ACCELERATION: Self = Self::new(0, 1, -2);

    /// Creates a new `Dimension` from its force, length and time exponents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits_core::dimension::Dimension;
    ///
    /// let d = Dimension::new(1, -2, 0);
    /// assert_eq!(d, Dimension::STRESS);
    /// ```
    #[inline]
    pub const fn new(force: i32, length: i32, time: i32) -> Self {
        Self {
            force,
            length,
            time,
        }
    }

    /// Returns the force exponent.
    #[inline]
    pub const fn force(&self) -> i32 {
        self.force
    }

    /// Returns the length exponent.
    #[inline]
    pub const fn length(&self) -> i32 {
        self.length
    }

    /// Returns the time exponent.
    #[inline]
    pub const fn time(&self) -> i32 {
        self.time
    }

    /// Returns `true` if all three exponents are zero.
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.force == 0 && self.length == 0 && self.time == 0
    }

    /// Multiplies every exponent by the integer `n`.
    ///
    /// This is the dimension of a quantity raised to the `n`-th power. If any
    /// product overflows `i32` the result is [`Dimension::UNITLESS`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits_core::dimension::Dimension;
    ///
    /// assert_eq!(Dimension::LENGTH.scale(4), Dimension::LENGTH_TO_THE_4TH);
    /// assert_eq!(Dimension::LENGTH.scale(-1), Dimension::new(0, -1, 0));
    /// assert_eq!(Dimension::AREA.scale(i32::MAX), Dimension::UNITLESS);
    /// ```
    #[inline]
    pub const fn scale(self, n: i32) -> Self {
        Self::checked(
            self.force.checked_mul(n),
            self.length.checked_mul(n),
            self.time.checked_mul(n),
        )
    }

    /// Multiplies every exponent by the float `x`.
    ///
    /// If all three products lie within
    /// [`SNAP_TOLERANCE`](crate::num::snap::SNAP_TOLERANCE) of an integer
    /// representable as `i32`, the snapped integer triple is returned.
    /// Otherwise the result is [`Dimension::UNITLESS`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits_core::dimension::Dimension;
    ///
    /// assert_eq!(Dimension::AREA.scale_float(0.5), Dimension::LENGTH);
    /// assert_eq!(Dimension::LENGTH.scale_float(2.0), Dimension::AREA);
    /// assert_eq!(Dimension::LENGTH.scale_float(0.5), Dimension::UNITLESS);
    /// ```
    pub fn scale_float(self, x: f64) -> Self {
        Self::snapped(
            self.force as f64 * x,
            self.length as f64 * x,
            self.time as f64 * x,
        )
    }

    /// Divides every exponent by `n`, as taking the `n`-th root does.
    ///
    /// The result is snapped to integers when all components are integral
    /// within [`SNAP_TOLERANCE`](crate::num::snap::SNAP_TOLERANCE), and is
    /// [`Dimension::UNITLESS`] otherwise.
    /// Dividing by zero never yields integral components and therefore
    /// returns [`Dimension::UNITLESS`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits_core::dimension::Dimension;
    ///
    /// assert_eq!(Dimension::LENGTH_TO_THE_4TH.divide_by_scalar(4), Dimension::LENGTH);
    /// assert_eq!(Dimension::LENGTH_CUBED.divide_by_scalar(2), Dimension::UNITLESS);
    /// ```
    pub fn divide_by_scalar(self, n: i32) -> Self {
        let n = n as f64;
        Self::snapped(
            self.force as f64 / n,
            self.length as f64 / n,
            self.time as f64 / n,
        )
    }

    /// Classifies this dimension against the fixed table of named families.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits_core::{dimension::Dimension, family::Family};
    ///
    /// assert_eq!(Dimension::MOMENT.family(), Family::Moment);
    /// assert_eq!(Dimension::new(2, 0, 0).family(), Family::Undefined);
    /// ```
    #[inline]
    pub fn family(self) -> Family {
        Family::classify(self)
    }

    const fn checked(force: Option<i32>, length: Option<i32>, time: Option<i32>) -> Self {
        match (force, length, time) {
            (Some(f), Some(l), Some(t)) => Self::new(f, l, t),
            _ => Self::UNITLESS,
        }
    }

    fn snapped(force: f64, length: f64, time: f64) -> Self {
        Self::checked(
            snap_to_integer(force),
            snap_to_integer(length),
            snap_to_integer(time),
        )
    }
}

/// Adds exponents component-wise; overflow yields [`Dimension::UNITLESS`].
impl std::ops::Add for Dimension {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::checked(
            self.force.checked_add(rhs.force),
            self.length.checked_add(rhs.length),
            self.time.checked_add(rhs.time),
        )
    }
}

/// Subtracts exponents component-wise; overflow yields [`Dimension::UNITLESS`].
impl std::ops::Sub for Dimension {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::checked(
            self.force.checked_sub(rhs.force),
            self.length.checked_sub(rhs.length),
            self.time.checked_sub(rhs.time),
        )
    }
}

/// Negates every exponent; an `i32::MIN` component yields [`Dimension::UNITLESS`].
impl std::ops::Neg for Dimension {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::checked(
            self.force.checked_neg(),
            self.length.checked_neg(),
            self.time.checked_neg(),
        )
    }
}

impl std::ops::Mul<i32> for Dimension {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Mul<f64> for Dimension {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale_float(rhs)
    }
}

impl std::ops::Div<i32> for Dimension {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self::Output {
        self.divide_by_scalar(rhs)
    }
}

impl std::fmt::Debug for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dimension({}, {}, {})",
            self.force, self.length, self.time
        )
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: SmallVec<[(&str, i32); 3]> =
            [("F", self.force), ("L", self.length), ("T", self.time)]
                .into_iter()
                .filter(|&(_, exponent)| exponent != 0)
                .collect();
        if parts.is_empty() {
            return write!(f, "1");
        }
        for (i, (symbol, exponent)) in parts.into_iter().enumerate() {
            if i > 0 {
                write!(f, "·")?;
            }
            match exponent {
                1 => write!(f, "{symbol}")?,
                e => write!(f, "{symbol}^{e}")?,
            }
        }
        Ok(())
    }
}

impl From<(i32, i32, i32)> for Dimension {
    #[inline]
    fn from((force, length, time): (i32, i32, i32)) -> Self {
        Self::new(force, length, time)
    }
}

impl From<Dimension> for (i32, i32, i32) {
    #[inline]
    fn from(d: Dimension) -> Self {
        (d.force, d.length, d.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn random_dimension(rng: &mut StdRng) -> Dimension {
        Dimension::new(
            rng.random_range(-6..=6),
            rng.random_range(-6..=6),
            rng.random_range(-6..=6),
        )
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Dimension::UNITLESS, Dimension::default());
        assert!(Dimension::UNITLESS.is_dimensionless());
        assert!(!Dimension::FORCE.is_dimensionless());
        assert_eq!(Dimension::STRESS.force(), 1);
        assert_eq!(Dimension::STRESS.length(), -2);
        assert_eq!(Dimension::ACCELERATION.time(), -2);
    }

    #[test]
    fn test_add_sub_neg() {
        assert_eq!(Dimension::FORCE + Dimension::LENGTH, Dimension::MOMENT);
        assert_eq!(Dimension::FORCE - Dimension::AREA, Dimension::STRESS);
        assert_eq!(Dimension::MOMENT - Dimension::FORCE, Dimension::LENGTH);
        assert_eq!(-Dimension::FORCE_PER_LENGTH, Dimension::new(-1, 1, 0));
    }

    #[test]
    fn test_algebra_closure_randomized() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let a = random_dimension(&mut rng);
            let b = random_dimension(&mut rng);
            let sum = a + b;
            assert_eq!(sum.force(), a.force() + b.force());
            assert_eq!(sum.length(), a.length() + b.length());
            assert_eq!(sum.time(), a.time() + b.time());
            assert_eq!(sum - b, a);
            assert_eq!(-(-a), a);
            assert_eq!(a + (-a), Dimension::UNITLESS);
        }
    }

    #[test]
    fn test_scale_integer() {
        assert_eq!(Dimension::LENGTH * 2, Dimension::AREA);
        assert_eq!(Dimension::LENGTH.scale(3), Dimension::LENGTH_CUBED);
        assert_eq!(Dimension::AREA * 3, Dimension::LENGTH_TO_THE_6TH);
        assert_eq!(Dimension::MOMENT * 0, Dimension::UNITLESS);
    }

    #[test]
    fn test_scale_overflow_collapses_to_unitless() {
        assert_eq!(Dimension::AREA.scale(i32::MAX), Dimension::UNITLESS);
        assert_eq!(Dimension::FORCE * i32::MIN, Dimension::new(i32::MIN, 0, 0));
        assert_eq!(Dimension::STRESS * i32::MIN, Dimension::UNITLESS);
        assert_eq!(Dimension::LENGTH.scale_float(3.0e9), Dimension::UNITLESS);
    }

    #[test]
    fn test_add_sub_neg_overflow_collapses_to_unitless() {
        let max_force = Dimension::new(i32::MAX, 0, 0);
        let min_length = Dimension::new(0, i32::MIN, 0);
        assert_eq!(max_force + Dimension::FORCE, Dimension::UNITLESS);
        assert_eq!(max_force + Dimension::LENGTH, Dimension::new(i32::MAX, 1, 0));
        assert_eq!(min_length - Dimension::LENGTH, Dimension::UNITLESS);
        assert_eq!(-min_length, Dimension::UNITLESS);
        assert_eq!(-max_force, Dimension::new(-i32::MAX, 0, 0));
    }

    #[test]
    fn test_scale_float_snaps_near_integers() {
        assert_eq!(Dimension::AREA * 0.5, Dimension::LENGTH);
        assert_eq!(
            Dimension::LENGTH_CUBED.scale_float(1.0 / 3.0),
            Dimension::LENGTH
        );
        assert_eq!(Dimension::FORCE.scale_float(2.0), Dimension::new(2, 0, 0));
    }

    #[test]
    fn test_scale_float_fractional_collapses_to_unitless() {
        assert_eq!(Dimension::LENGTH.scale_float(0.5), Dimension::UNITLESS);
        assert_eq!(Dimension::MOMENT.scale_float(1.5), Dimension::UNITLESS);
        assert_eq!(Dimension::FORCE.scale_float(f64::NAN), Dimension::UNITLESS);
    }

    #[test]
    fn test_divide_by_scalar() {
        assert_eq!(Dimension::AREA / 2, Dimension::LENGTH);
        assert_eq!(Dimension::LENGTH_CUBED / 3, Dimension::LENGTH);
        assert_eq!(Dimension::LENGTH_TO_THE_4TH / 4, Dimension::LENGTH);
        assert_eq!(Dimension::LENGTH_TO_THE_4TH / 2, Dimension::AREA);
        assert_eq!(Dimension::LENGTH / 2, Dimension::UNITLESS);
        assert_eq!(Dimension::MOMENT / 0, Dimension::UNITLESS);
        assert_eq!(Dimension::UNITLESS / 3, Dimension::UNITLESS);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::UNITLESS), "1");
        assert_eq!(format!("{}", Dimension::FORCE), "F");
        assert_eq!(format!("{}", Dimension::AREA), "L^2");
        assert_eq!(format!("{}", Dimension::STRESS), "F·L^-2");
        assert_eq!(format!("{}", Dimension::new(2, 1, -1)), "F^2·L·T^-1");
        assert_eq!(format!("{}", Dimension::ACCELERATION), "L·T^-2");
        assert_eq!(format!("{}", Dimension::TIME), "T");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Dimension::MOMENT), "Dimension(1, 1, 0)");
    }

    #[test]
    fn test_tuple_conversions() {
        let d: Dimension = (1, -1, 0).into();
        assert_eq!(d, Dimension::FORCE_PER_LENGTH);
        let t: (i32, i32, i32) = Dimension::STRESS.into();
        assert_eq!(t, (1, -2, 0));
    }

    #[test]
    fn test_hash_is_structural() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Dimension::new(0, 2, 0));
        assert!(set.contains(&Dimension::AREA));
        assert!(set.contains(&(Dimension::LENGTH + Dimension::LENGTH)));
        assert!(!set.contains(&Dimension::LENGTH));
    }
}

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

//! The common view of every dimensioned value.
//!
//! [`Measure<U>`](crate::measure::Measure),
//! [`Undefined`](crate::undefined::Undefined) and
//! [`Quantity`](crate::quantity::Quantity) all carry a dimension and a
//! magnitude in standard units. [`Dimensioned`] abstracts over that pair so the
//! helpers in [`math`](crate::math) and the power operations are written once.

use crate::{
    error::{QuantityResult, ensure_same_dimension},
    quantity::Quantity,
    registry,
};
use structunits_core::{dimension::Dimension, family::Family};

/// A value with a physical dimension and a magnitude in standard units.
pub trait Dimensioned: Clone {
    /// The dimension of the value.
    fn dimension(&self) -> Dimension;

    /// The magnitude expressed in the family's standard unit.
    fn standard_value(&self) -> f64;

    /// A value of the same dimension and family with a new standard magnitude.
    fn with_standard_value(&self, value: f64) -> Self;

    /// Converts into the dynamic representation.
    fn to_quantity(&self) -> Quantity;

    /// The family derived from the dimension.
    #[inline]
    fn family(&self) -> Family {
        Family::classify(self.dimension())
    }

    /// The absolute tolerance used when comparing two values for equality.
    #[inline]
    fn equality_tolerance(&self) -> f64 {
        self.family().equality_tolerance()
    }

    /// Raises the value to an integer power. The dimension is scaled by `n`
    /// and the result is resolved through the registry.
    ///
    /// If scaling an exponent overflows `i32` the dimension falls back to
    /// [`Dimension::UNITLESS`] and the result is a dimensionless quantity
    /// holding the raised standard value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits::prelude::*;
    /// let area = Length::from_inches(10.0).powi(2);
    /// assert_eq!(area.family(), Family::Area);
    /// assert!((area.standard_value() - 100.0).abs() < 1e-12);
    /// ```
    #[inline]
    fn powi(&self, n: i32) -> Quantity {
        registry::build(self.dimension().scale(n), self.standard_value().powi(n))
    }

    /// Raises the value to a real power.
    ///
    /// An integral exponent behaves like [`powi`](Self::powi) for the
    /// dimension; any other exponent yields a dimensionless result. So does
    /// an integral exponent whose scaled dimension exponents do not fit in
    /// `i32`, such as `3.0e9` applied to a length.
    fn powf(&self, exponent: f64) -> Quantity {
        let dimension = if exponent.is_finite() && exponent.fract() == 0.0 {
            self.dimension().scale_float(exponent)
        } else {
            Dimension::UNITLESS
        };
        registry::build(dimension, self.standard_value().powf(exponent))
    }

    /// Raises the value to the power given by a dimensionless quantity.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`](crate::error::QuantityError::DimensionMismatch)
    /// if `exponent` is not dimensionless.
    fn try_pow<E: Dimensioned>(&self, exponent: &E) -> QuantityResult<Quantity> {
        ensure_same_dimension(Dimension::UNITLESS, exponent.dimension())?;
        Ok(self.powf(exponent.standard_value()))
    }
}

/// `a * b` with the dimension resolved through the registry.
#[inline]
pub(crate) fn product<A: Dimensioned, B: Dimensioned>(a: &A, b: &B) -> Quantity {
    registry::build(
        a.dimension() + b.dimension(),
        a.standard_value() * b.standard_value(),
    )
}

/// `a / b` with the dimension resolved through the registry.
#[inline]
pub(crate) fn quotient<A: Dimensioned, B: Dimensioned>(a: &A, b: &B) -> Quantity {
    registry::build(
        a.dimension() - b.dimension(),
        a.standard_value() / b.standard_value(),
    )
}

/// `x / a` for a bare scalar `x`; the dimension is negated.
#[inline]
pub(crate) fn reciprocal_scaled<A: Dimensioned>(x: f64, a: &A) -> Quantity {
    registry::build(-a.dimension(), x / a.standard_value())
}

/// Tolerance equality: identical dimensions and magnitudes within the
/// tolerance of the left operand's family.
#[inline]
pub(crate) fn approx_eq<A: Dimensioned, B: Dimensioned>(a: &A, b: &B) -> bool {
    a.dimension() == b.dimension()
        && (a.standard_value() - b.standard_value()).abs() <= a.equality_tolerance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::QuantityError,
        measure::{Area, Force, Length, Unitless},
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_powi_dispatches_by_scaled_dimension() {
        let cube = Length::from_inches(2.0).powi(3);
        assert_eq!(cube.family(), Family::LengthCubed);
        assert_relative_eq!(cube.standard_value(), 8.0);

        let inverse = Length::from_inches(4.0).powi(-1);
        assert_eq!(inverse.dimension(), Dimension::new(0, -1, 0));
        assert_eq!(inverse.family(), Family::Undefined);
        assert_relative_eq!(inverse.standard_value(), 0.25);
    }

    #[test]
    fn test_powf_fractional_exponent_is_dimensionless() {
        let root = Length::from_inches(16.0).powf(0.5);
        assert_eq!(root.dimension(), Dimension::UNITLESS);
        assert_relative_eq!(root.standard_value(), 4.0);
    }

    #[test]
    fn test_powf_integral_exponent_keeps_dimension() {
        let area = Length::from_inches(3.0).powf(2.0);
        assert_eq!(area.family(), Family::Area);
        assert_relative_eq!(area.standard_value(), 9.0);
    }

    #[test]
    fn test_powi_exponent_overflow_is_dimensionless() {
        let q = Area::from_square_inches(1.0).powi(i32::MAX);
        assert_eq!(q.dimension(), Dimension::UNITLESS);
        assert_eq!(q.family(), Family::Unitless);
        assert!(!q.is_undefined());
        assert_eq!(q.standard_value(), 1.0);

        let q = Length::from_inches(1.0).powi(i32::MIN);
        assert_eq!(q.dimension(), Dimension::new(0, i32::MIN, 0));
        assert!(q.is_undefined());
    }

    #[test]
    fn test_powf_exponent_overflow_is_dimensionless() {
        let q = Length::from_inches(1.0).powf(3.0e9);
        assert_eq!(q.dimension(), Dimension::UNITLESS);
        assert_eq!(q.family(), Family::Unitless);
        assert_eq!(q.standard_value(), 1.0);
    }

    #[test]
    fn test_try_pow_requires_dimensionless_exponent() {
        let length = Length::from_inches(3.0);
        let squared = length.try_pow(&Unitless::from_value(2.0)).unwrap();
        assert_eq!(squared.family(), Family::Area);

        assert_eq!(
            length.try_pow(&Force::from_kips(2.0)),
            Err(QuantityError::DimensionMismatch {
                expected: Dimension::UNITLESS,
                actual: Dimension::FORCE,
            })
        );
    }

    #[test]
    fn test_approx_eq_uses_left_family_tolerance() {
        let a = Length::from_inches(10.0);
        assert!(approx_eq(&a, &Length::from_inches(10.0005)));
        assert!(!approx_eq(&a, &Length::from_inches(10.002)));
        assert!(!approx_eq(&a, &Force::from_kips(10.0)));
    }
}

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

//! # Dynamic Quantities
//!
//! [`Quantity`] is the runtime counterpart of the typed
//! [`Measure<U>`](crate::measure::Measure): one enum variant per concrete
//! family plus [`Undefined`] for every other dimension. It is what products,
//! quotients, powers and roots return, because their family depends on the
//! computed dimension.
//!
//! Operations that can fail on mismatched dimensions (sums, differences,
//! ordering, conversion to a unit) are `try_*` methods returning
//! [`QuantityResult`]. Products and quotients never fail and use the operator
//! traits. Equality never fails either: quantities of different dimensions are
//! simply unequal.

use crate::{
    dimensioned::{self, Dimensioned},
    error::{QuantityError, QuantityResult, ensure_same_dimension},
    format::FormatOptions,
    measure::{
        Area, Force, ForcePerLength, Length, LengthCubed, LengthToThe4th, Measure, Moment, Stress,
        Unitless,
    },
    undefined::Undefined,
    units::{AnyUnit, Unit},
};
use std::{
    cmp::Ordering,
    ops::{Div, Mul, Neg},
};
use structunits_core::{dimension::Dimension, family::Family};

/// A value of any dimension, tagged with its concrete family.
///
/// # Examples
///
/// ```rust
/// # use structunits::prelude::*;
/// let area = Length::from_feet(2.0) * Length::from_feet(3.0);
/// assert_eq!(area.family(), Family::Area);
/// assert!((area.convert_to(AreaUnit::SquareFoot).unwrap() - 6.0).abs() < 1e-12);
///
/// let err = area.try_add(&Length::from_feet(1.0).into_quantity());
/// assert!(err.is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Quantity {
    Unitless(Unitless),
    Length(Length),
    Area(Area),
    LengthCubed(LengthCubed),
    LengthToThe4th(LengthToThe4th),
    Force(Force),
    Moment(Moment),
    ForcePerLength(ForcePerLength),
    Stress(Stress),
    Undefined(Undefined),
}

/// Applies `$body` to the inner value of every variant, binding it as `$inner`.
macro_rules! for_each_variant {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Quantity::Unitless($inner) => $body,
            Quantity::Length($inner) => $body,
            Quantity::Area($inner) => $body,
            Quantity::LengthCubed($inner) => $body,
            Quantity::LengthToThe4th($inner) => $body,
            Quantity::Force($inner) => $body,
            Quantity::Moment($inner) => $body,
            Quantity::ForcePerLength($inner) => $body,
            Quantity::Stress($inner) => $body,
            Quantity::Undefined($inner) => $body,
        }
    };
}

/// Like `for_each_variant!`, but `Undefined` is handled by a separate arm.
macro_rules! for_each_measure {
    ($self:expr, $m:ident => $body:expr, $u:ident => $undefined:expr) => {
        match $self {
            Quantity::Unitless($m) => $body,
            Quantity::Length($m) => $body,
            Quantity::Area($m) => $body,
            Quantity::LengthCubed($m) => $body,
            Quantity::LengthToThe4th($m) => $body,
            Quantity::Force($m) => $body,
            Quantity::Moment($m) => $body,
            Quantity::ForcePerLength($m) => $body,
            Quantity::Stress($m) => $body,
            Quantity::Undefined($u) => $undefined,
        }
    };
}

fn value_in_any<U: Unit>(measure: &Measure<U>, unit: AnyUnit) -> QuantityResult<f64> {
    U::from_any(unit)
        .map(|unit| measure.value_in(unit))
        .ok_or(QuantityError::UnitFamilyMismatch {
            expected: U::FAMILY,
            actual: unit.family(),
        })
}

fn latex_in_any<U: Unit>(measure: &Measure<U>, unit: AnyUnit) -> QuantityResult<String> {
    U::from_any(unit)
        .map(|unit| measure.to_latex_string(Some(unit)))
        .ok_or(QuantityError::UnitFamilyMismatch {
            expected: U::FAMILY,
            actual: unit.family(),
        })
}

impl Quantity {
    /// Creates a quantity of `value` in `unit`; the family follows the unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits::prelude::*;
    /// let q = Quantity::new(3.0, StressUnit::Megapascal);
    /// assert_eq!(q.family(), Family::Stress);
    /// ```
    pub fn new(value: f64, unit: impl Into<AnyUnit>) -> Self {
        match unit.into() {
            AnyUnit::Unitless(u) => Quantity::Unitless(Measure::new(value, u)),
            AnyUnit::Length(u) => Quantity::Length(Measure::new(value, u)),
            AnyUnit::Area(u) => Quantity::Area(Measure::new(value, u)),
            AnyUnit::LengthCubed(u) => Quantity::LengthCubed(Measure::new(value, u)),
            AnyUnit::LengthToThe4th(u) => Quantity::LengthToThe4th(Measure::new(value, u)),
            AnyUnit::Force(u) => Quantity::Force(Measure::new(value, u)),
            AnyUnit::Moment(u) => Quantity::Moment(Measure::new(value, u)),
            AnyUnit::ForcePerLength(u) => Quantity::ForcePerLength(Measure::new(value, u)),
            AnyUnit::Stress(u) => Quantity::Stress(Measure::new(value, u)),
        }
    }

    /// A plain number as a dimensionless quantity.
    #[inline]
    pub fn unitless(value: f64) -> Self {
        Quantity::Unitless(Unitless::from_standard(value))
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        for_each_variant!(self, inner => Dimensioned::dimension(inner))
    }

    /// The concrete family; [`Family::Undefined`] for the `Undefined` variant.
    #[inline]
    pub fn family(&self) -> Family {
        for_each_variant!(self, inner => Dimensioned::family(inner))
    }

    #[inline]
    pub fn standard_value(&self) -> f64 {
        for_each_variant!(self, inner => Dimensioned::standard_value(inner))
    }

    /// Whether the quantity fell outside every named family.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Quantity::Undefined(_))
    }

    /// The display unit, or `None` for undefined quantities.
    pub fn display_unit(&self) -> Option<AnyUnit> {
        for_each_measure!(self, m => Some(m.display_unit().into_any()), _u => None)
    }

    /// Extracts the typed measure of family `U`, if this quantity has it.
    #[inline]
    pub fn as_measure<U: Unit>(&self) -> Option<Measure<U>> {
        U::from_quantity(self)
    }

    /// The magnitude expressed in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::UnitFamilyMismatch`] if `unit` belongs to a
    /// different family (always, for undefined quantities).
    pub fn convert_to(&self, unit: impl Into<AnyUnit>) -> QuantityResult<f64> {
        let unit = unit.into();
        for_each_measure!(
            self,
            m => value_in_any(m, unit),
            _u => Err(QuantityError::UnitFamilyMismatch {
                expected: Family::Undefined,
                actual: unit.family(),
            })
        )
    }

    /// The dimensionless ratio of this quantity to one `unit`.
    ///
    /// # Errors
    ///
    /// Same as [`convert_to`](Self::convert_to).
    #[inline]
    pub fn ratio_to(&self, unit: impl Into<AnyUnit>) -> QuantityResult<Quantity> {
        self.convert_to(unit).map(Quantity::unitless)
    }

    /// Sum of two quantities of the same dimension, in the standard unit.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
    pub fn try_add(&self, other: &Quantity) -> QuantityResult<Quantity> {
        ensure_same_dimension(self.dimension(), other.dimension())?;
        Ok(self.with_standard_value(self.standard_value() + other.standard_value()))
    }

    /// Difference of two quantities of the same dimension, in the standard unit.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
    pub fn try_sub(&self, other: &Quantity) -> QuantityResult<Quantity> {
        ensure_same_dimension(self.dimension(), other.dimension())?;
        Ok(self.with_standard_value(self.standard_value() - other.standard_value()))
    }

    /// `self + x` for a bare number; only dimensionless quantities accept it.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] unless `self` is dimensionless.
    pub fn try_add_scalar(&self, x: f64) -> QuantityResult<Quantity> {
        ensure_same_dimension(Dimension::UNITLESS, self.dimension())?;
        Ok(self.with_standard_value(self.standard_value() + x))
    }

    /// `self - x` for a bare number.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] unless `self` is dimensionless.
    pub fn try_sub_scalar(&self, x: f64) -> QuantityResult<Quantity> {
        ensure_same_dimension(Dimension::UNITLESS, self.dimension())?;
        Ok(self.with_standard_value(self.standard_value() - x))
    }

    /// `x - self` for a bare number.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] unless `self` is dimensionless.
    pub fn try_rsub_scalar(&self, x: f64) -> QuantityResult<Quantity> {
        ensure_same_dimension(Dimension::UNITLESS, self.dimension())?;
        Ok(self.with_standard_value(x - self.standard_value()))
    }

    /// Orders two quantities of the same dimension by magnitude.
    ///
    /// The inner `None` means one magnitude is NaN.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
    pub fn try_cmp(&self, other: &Quantity) -> QuantityResult<Option<Ordering>> {
        ensure_same_dimension(self.dimension(), other.dimension())?;
        Ok(self.standard_value().partial_cmp(&other.standard_value()))
    }

    /// `self < other`, for quantities of the same dimension.
    pub fn try_lt(&self, other: &Quantity) -> QuantityResult<bool> {
        ensure_same_dimension(self.dimension(), other.dimension())?;
        Ok(self.standard_value() < other.standard_value())
    }

    /// `self <= other`, for quantities of the same dimension.
    pub fn try_le(&self, other: &Quantity) -> QuantityResult<bool> {
        ensure_same_dimension(self.dimension(), other.dimension())?;
        Ok(self.standard_value() <= other.standard_value())
    }

    /// `self > other`, for quantities of the same dimension.
    pub fn try_gt(&self, other: &Quantity) -> QuantityResult<bool> {
        ensure_same_dimension(self.dimension(), other.dimension())?;
        Ok(self.standard_value() > other.standard_value())
    }

    /// `self >= other`, for quantities of the same dimension.
    pub fn try_ge(&self, other: &Quantity) -> QuantityResult<bool> {
        ensure_same_dimension(self.dimension(), other.dimension())?;
        Ok(self.standard_value() >= other.standard_value())
    }

    /// LaTeX rendering in the display unit with default options.
    pub fn to_latex_string(&self) -> String {
        self.to_string_with(&FormatOptions::default())
    }

    /// LaTeX rendering in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::UnitFamilyMismatch`] if `unit` belongs to a
    /// different family.
    pub fn to_latex_string_in(&self, unit: impl Into<AnyUnit>) -> QuantityResult<String> {
        let unit = unit.into();
        for_each_measure!(
            self,
            m => latex_in_any(m, unit),
            _u => Err(QuantityError::UnitFamilyMismatch {
                expected: Family::Undefined,
                actual: unit.family(),
            })
        )
    }

    /// Renders in the display unit with the given options.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        for_each_measure!(
            self,
            m => m.to_string_with(options),
            u => options.render(u.standard_value(), None)
        )
    }
}

impl Dimensioned for Quantity {
    #[inline]
    fn dimension(&self) -> Dimension {
        Quantity::dimension(self)
    }

    #[inline]
    fn standard_value(&self) -> f64 {
        Quantity::standard_value(self)
    }

    fn with_standard_value(&self, value: f64) -> Self {
        for_each_measure!(
            self,
            m => Quantity::from(m.with_standard_value(value)),
            u => Quantity::Undefined(u.with_standard_value(value))
        )
    }

    #[inline]
    fn to_quantity(&self) -> Quantity {
        *self
    }

    #[inline]
    fn family(&self) -> Family {
        Quantity::family(self)
    }

    #[inline]
    fn equality_tolerance(&self) -> f64 {
        for_each_variant!(self, inner => Dimensioned::equality_tolerance(inner))
    }
}

impl From<Undefined> for Quantity {
    #[inline]
    fn from(undefined: Undefined) -> Self {
        Quantity::Undefined(undefined)
    }
}

impl PartialEq for Quantity {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        dimensioned::approx_eq(self, other)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for_each_variant!(self, inner => write!(f, "{inner}"))
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Quantity) -> Self::Output {
        dimensioned::product(&self, &rhs)
    }
}

impl Div for Quantity {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Quantity) -> Self::Output {
        dimensioned::quotient(&self, &rhs)
    }
}

impl<U: Unit> Mul<Measure<U>> for Quantity {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Measure<U>) -> Self::Output {
        dimensioned::product(&self, &rhs)
    }
}

impl<U: Unit> Div<Measure<U>> for Quantity {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Measure<U>) -> Self::Output {
        dimensioned::quotient(&self, &rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.with_standard_value(self.standard_value() * rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.with_standard_value(self.standard_value() / rhs)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Quantity) -> Self::Output {
        dimensioned::reciprocal_scaled(self, &rhs)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    #[inline]
    fn neg(self) -> Self::Output {
        self.with_standard_value(-self.standard_value())
    }
}

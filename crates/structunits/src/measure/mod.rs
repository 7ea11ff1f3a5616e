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

//! # Typed Measures
//!
//! [`Measure<U>`] is a magnitude stored in the standard unit of `U`'s family,
//! plus the unit it was entered in and the unit it prefers to be displayed in.
//! Because the family is part of the type, adding a length to a force or
//! converting a force to feet does not compile.
//!
//! Products and quotients of two measures change the dimension, so they
//! produce a dynamic [`Quantity`] resolved through the
//! [`registry`](crate::registry). Everything that keeps the dimension (sums,
//! differences, scalar scaling, negation) stays typed and reports the result
//! in the family's standard unit.
//!
//! ## Submodules
//!
//! - `compound`: measure-by-unit products and quotients that use the compound
//!   unit tables (`Force::per_unit`, `Moment::per_force_unit`, ...).

pub mod compound;

use crate::{
    dimensioned::{self, Dimensioned},
    error::{QuantityError, QuantityResult},
    format::FormatOptions,
    quantity::Quantity,
    units::{
        AreaUnit, ForcePerLengthUnit, ForceUnit, LengthCubedUnit, LengthToThe4thUnit, LengthUnit,
        MomentUnit, StressUnit, Unit, UnitlessUnit,
    },
};
use num_traits::Zero;
use std::ops::{Add, Div, Mul, Neg, Sub};
use structunits_core::{dimension::Dimension, family::Family};

/// A dimensionless ratio.
pub type Unitless = Measure<UnitlessUnit>;
/// A length, stored in inches.
pub type Length = Measure<LengthUnit>;
/// An area, stored in square inches.
pub type Area = Measure<AreaUnit>;
/// A length cubed, stored in cubic inches.
pub type LengthCubed = Measure<LengthCubedUnit>;
/// A length to the fourth, stored in inches to the fourth.
pub type LengthToThe4th = Measure<LengthToThe4thUnit>;
/// A force, stored in kips.
pub type Force = Measure<ForceUnit>;
/// A moment, stored in kip-inches.
pub type Moment = Measure<MomentUnit>;
/// A distributed load, stored in kips per inch.
pub type ForcePerLength = Measure<ForcePerLengthUnit>;
/// A stress, stored in ksi.
pub type Stress = Measure<StressUnit>;

/// A magnitude of a concrete unit family.
///
/// Values are immutable; every operation returns a new measure.
///
/// # Examples
///
/// ```rust
/// # use structunits::prelude::*;
/// let span = Length::from_feet(2.0);
/// let depth = Length::from_inches(6.0);
/// let total = span + depth;
/// assert!((total.inches() - 30.0).abs() < 1e-12);
/// assert_eq!(total.display_unit(), LengthUnit::Inch);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Measure<U: Unit> {
    value: f64,
    display_unit: U,
    input_unit: U,
}

impl<U: Unit> Measure<U> {
    /// Creates a measure of `value` in `unit`, which also becomes the display
    /// and input unit.
    #[inline]
    pub fn new(value: f64, unit: U) -> Self {
        Self {
            value: value * unit.factor(),
            display_unit: unit,
            input_unit: unit,
        }
    }

    /// Creates a measure from a magnitude already in the standard unit.
    #[inline]
    pub fn from_standard(value: f64) -> Self {
        Self::new(value, U::STANDARD)
    }

    /// A zero measure in the standard unit.
    #[inline]
    pub fn zero() -> Self {
        Self::from_standard(0.0)
    }

    /// The magnitude in the family's standard unit.
    #[inline]
    pub fn standard_value(&self) -> f64 {
        self.value
    }

    /// The magnitude expressed in `unit`.
    #[inline]
    pub fn value_in(&self, unit: U) -> f64 {
        self.value / unit.factor()
    }

    /// The unit used for display.
    #[inline]
    pub fn display_unit(&self) -> U {
        self.display_unit
    }

    /// The magnitude expressed in the display unit.
    #[inline]
    pub fn display_value(&self) -> f64 {
        self.value_in(self.display_unit)
    }

    /// The unit the measure was constructed with.
    #[inline]
    pub fn input_unit(&self) -> U {
        self.input_unit
    }

    /// The magnitude expressed in the input unit.
    #[inline]
    pub fn input_unit_value(&self) -> f64 {
        self.value_in(self.input_unit)
    }

    /// The same magnitude, displayed in `unit`.
    #[inline]
    pub fn with_display_unit(self, unit: U) -> Self {
        Self {
            display_unit: unit,
            ..self
        }
    }

    /// The dimension of the family.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    /// The family of `U`.
    #[inline]
    pub fn family(&self) -> Family {
        U::FAMILY
    }

    /// The absolute magnitude, in the standard unit.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_standard(self.value.abs())
    }

    /// Converts into the dynamic representation.
    #[inline]
    pub fn into_quantity(self) -> Quantity {
        U::into_quantity(self)
    }

    /// Formats the magnitude in `unit` (or the display unit) as LaTeX with
    /// default options, e.g. `12 \, \mathrm{in}`.
    pub fn to_latex_string(&self, unit: Option<U>) -> String {
        self.format_in(unit.unwrap_or(self.display_unit), &FormatOptions::default())
    }

    /// Formats the magnitude in the display unit with the given options.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        self.format_in(self.display_unit, options)
    }

    fn format_in(&self, unit: U, options: &FormatOptions) -> String {
        let symbol = (U::FAMILY != Family::Unitless).then(|| unit.symbol());
        options.render(self.value_in(unit), symbol)
    }
}

impl<U: Unit> Default for Measure<U> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: Unit> Zero for Measure<U> {
    #[inline]
    fn zero() -> Self {
        Self::from_standard(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl<U: Unit> Dimensioned for Measure<U> {
    #[inline]
    fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    #[inline]
    fn standard_value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn with_standard_value(&self, value: f64) -> Self {
        Self::from_standard(value)
    }

    #[inline]
    fn to_quantity(&self) -> Quantity {
        U::into_quantity(*self)
    }

    #[inline]
    fn family(&self) -> Family {
        U::FAMILY
    }
}

impl<U: Unit> From<Measure<U>> for Quantity {
    #[inline]
    fn from(measure: Measure<U>) -> Self {
        U::into_quantity(measure)
    }
}

impl<U: Unit> TryFrom<Quantity> for Measure<U> {
    type Error = QuantityError;

    fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
        U::from_quantity(&quantity).ok_or(QuantityError::UnitFamilyMismatch {
            expected: U::FAMILY,
            actual: quantity.family(),
        })
    }
}

impl<U: Unit> PartialEq for Measure<U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.value - other.value).abs() <= U::FAMILY.equality_tolerance()
    }
}

impl<U: Unit> PartialOrd for Measure<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U: Unit> std::fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with(&FormatOptions::plain()))
    }
}

impl<U: Unit> Add for Measure<U> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<U: Unit> Sub for Measure<U> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<U: Unit> Neg for Measure<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_standard(-self.value)
    }
}

impl<U: Unit> std::iter::Sum for Measure<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

impl<U: Unit> Mul<f64> for Measure<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_standard(self.value * rhs)
    }
}

impl<U: Unit> Mul<Measure<U>> for f64 {
    type Output = Measure<U>;

    #[inline]
    fn mul(self, rhs: Measure<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Measure<U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::from_standard(self.value / rhs)
    }
}

impl<U: Unit> Div<Measure<U>> for f64 {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Measure<U>) -> Self::Output {
        dimensioned::reciprocal_scaled(self, &rhs)
    }
}

impl<U: Unit, V: Unit> Mul<Measure<V>> for Measure<U> {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Measure<V>) -> Self::Output {
        dimensioned::product(&self, &rhs)
    }
}

impl<U: Unit, V: Unit> Div<Measure<V>> for Measure<U> {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Measure<V>) -> Self::Output {
        dimensioned::quotient(&self, &rhs)
    }
}

impl<U: Unit> Mul<Quantity> for Measure<U> {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Quantity) -> Self::Output {
        dimensioned::product(&self, &rhs)
    }
}

impl<U: Unit> Div<Quantity> for Measure<U> {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Quantity) -> Self::Output {
        dimensioned::quotient(&self, &rhs)
    }
}

impl Add<f64> for Unitless {
    type Output = Unitless;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Self::from_standard(self.value + rhs)
    }
}

impl Add<Unitless> for f64 {
    type Output = Unitless;

    #[inline]
    fn add(self, rhs: Unitless) -> Self::Output {
        rhs + self
    }
}

impl Sub<f64> for Unitless {
    type Output = Unitless;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Self::from_standard(self.value - rhs)
    }
}

impl Sub<Unitless> for f64 {
    type Output = Unitless;

    #[inline]
    fn sub(self, rhs: Unitless) -> Self::Output {
        Unitless::from_standard(self - rhs.value)
    }
}

impl<U: Unit> Measure<U> {
    /// Compares against a measure of another family through the dynamic API.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] unless `other` has the same
    /// dimension.
    pub fn try_cmp<O: Dimensioned>(
        &self,
        other: &O,
    ) -> QuantityResult<Option<std::cmp::Ordering>> {
        self.into_quantity().try_cmp(&other.to_quantity())
    }
}

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

//! Values whose dimension has no concrete family.

use crate::{dimensioned::Dimensioned, format::FormatOptions, quantity::Quantity};
use std::ops::{Div, Mul, Neg};
use structunits_core::{
    dimension::Dimension,
    family::{DEFAULT_EQUALITY_TOLERANCE, Family},
};

/// A magnitude with an arbitrary dimension and no unit catalog.
///
/// Products and quotients that leave the named families (for example
/// `1 / length`, or force times area) land here. The dimension is kept, so a
/// later operation can bring the value back into a concrete family.
#[derive(Clone, Copy, Debug)]
pub struct Undefined {
    dimension: Dimension,
    value: f64,
}

impl Undefined {
    /// Creates a value of `dimension` with the given standard magnitude.
    #[inline]
    pub const fn new(dimension: Dimension, value: f64) -> Self {
        Self { dimension, value }
    }

    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    pub const fn standard_value(&self) -> f64 {
        self.value
    }

    /// Always [`Family::Undefined`], even when the dimension is classified.
    #[inline]
    pub const fn family(&self) -> Family {
        Family::Undefined
    }

    /// The bare number; there is no unit to render.
    pub fn to_latex_string(&self) -> String {
        FormatOptions::default().render(self.value, None)
    }
}

impl Dimensioned for Undefined {
    #[inline]
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    fn standard_value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn with_standard_value(&self, value: f64) -> Self {
        Self::new(self.dimension, value)
    }

    #[inline]
    fn to_quantity(&self) -> Quantity {
        Quantity::Undefined(*self)
    }

    #[inline]
    fn family(&self) -> Family {
        Family::Undefined
    }

    #[inline]
    fn equality_tolerance(&self) -> f64 {
        DEFAULT_EQUALITY_TOLERANCE
    }
}

impl PartialEq for Undefined {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && (self.value - other.value).abs() <= DEFAULT_EQUALITY_TOLERANCE
    }
}

impl std::fmt::Display for Undefined {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let number = FormatOptions::plain().render(self.value, None);
        write!(f, "{number} [{}]", self.dimension)
    }
}

impl Mul<f64> for Undefined {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.dimension, self.value * rhs)
    }
}

impl Div<f64> for Undefined {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.dimension, self.value / rhs)
    }
}

impl Neg for Undefined {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.dimension, -self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_ops_keep_dimension() {
        let d = Dimension::new(2, 1, 0);
        let u = Undefined::new(d, 3.0);
        assert_eq!((u * 2.0).dimension(), d);
        assert_relative_eq!((u * 2.0).standard_value(), 6.0);
        assert_relative_eq!((u / 3.0).standard_value(), 1.0);
        assert_relative_eq!((-u).standard_value(), -3.0);
    }

    #[test]
    fn test_equality_requires_same_dimension() {
        let a = Undefined::new(Dimension::TIME, 1.0);
        assert_eq!(a, Undefined::new(Dimension::TIME, 1.0 + 1e-12));
        assert_ne!(a, Undefined::new(Dimension::ACCELERATION, 1.0));
        assert_ne!(a, Undefined::new(Dimension::TIME, 1.001));
    }

    #[test]
    fn test_formatting() {
        let u = Undefined::new(Dimension::new(1, 2, 0), 2.0);
        assert_eq!(u.to_string(), "2 [F·L^2]");
        assert_eq!(u.to_latex_string(), "2");
        assert_eq!(u.family(), Family::Undefined);
    }
}

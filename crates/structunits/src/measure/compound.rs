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

//! Measure-by-unit operations backed by the compound unit tables.
//!
//! These take the measure's display unit as the numerator unit, derive the
//! result unit from [`units::compound`](crate::units::compound) and carry the
//! display-unit value across unchanged: `10 kip` per `ft` is `10 k/ft`. They
//! bypass the dimension registry entirely.

use super::{Area, Force, ForcePerLength, Length, Moment};
use crate::{
    error::QuantityResult,
    units::{ForceUnit, LengthUnit},
};

impl Force {
    /// Reinterprets the force as a distributed load over `length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits::prelude::*;
    /// let w = Force::from_kips(2.0).per_unit(LengthUnit::Foot).unwrap();
    /// assert_eq!(w.display_unit(), ForcePerLengthUnit::KipPerFoot);
    /// assert!((w.kips_per_foot() - 2.0).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCompoundUnit`](crate::error::QuantityError::UnsupportedCompoundUnit)
    /// if the display unit and `length` do not form a listed pair.
    pub fn per_unit(&self, length: LengthUnit) -> QuantityResult<ForcePerLength> {
        let force_unit = self.display_unit();
        let unit = force_unit.per(length)?;
        Ok(ForcePerLength::new(self.value_in(force_unit), unit))
    }

    /// Reinterprets the force as a moment about an arm of one `length`.
    pub fn times_unit(&self, length: LengthUnit) -> QuantityResult<Moment> {
        let force_unit = self.display_unit();
        let unit = force_unit.times(length)?;
        Ok(Moment::new(self.value_in(force_unit), unit))
    }
}

impl Moment {
    /// Divides by one `force` unit, leaving a length.
    pub fn per_force_unit(&self, force: ForceUnit) -> QuantityResult<Length> {
        let moment_unit = self.display_unit();
        let unit = moment_unit.per_force(force)?;
        Ok(Length::new(self.value_in(moment_unit), unit))
    }

    /// Divides by one `length` unit, leaving a force.
    pub fn per_length_unit(&self, length: LengthUnit) -> QuantityResult<Force> {
        let moment_unit = self.display_unit();
        let unit = moment_unit.per_length(length)?;
        Ok(Force::new(self.value_in(moment_unit), unit))
    }
}

impl Length {
    /// Multiplies by one `length` unit, producing an area.
    pub fn times_unit(&self, length: LengthUnit) -> QuantityResult<Area> {
        let length_unit = self.display_unit();
        let unit = length_unit.times(length)?;
        Ok(Area::new(self.value_in(length_unit), unit))
    }
}

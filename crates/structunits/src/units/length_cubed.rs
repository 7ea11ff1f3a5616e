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

//! Volume-like section properties (`L³`, e.g. section modulus). The standard
//! unit is the cubic inch.

use super::constants::{
    INCHES_PER_CENTIMETER, INCHES_PER_FOOT, INCHES_PER_METER, INCHES_PER_MILLIMETER,
};
use structunits_core::{dimension::Dimension, family::Family};

unit_family! {
    /// A unit of length cubed.
    pub enum LengthCubedUnit as LengthCubed {
        family: Family::LengthCubed,
        dimension: Dimension::LENGTH_CUBED,
        standard: CubicInch,
    }
    {
        CubicInch => ("in³", "cubic inches", 1.0), from_cubic_inches, cubic_inches;
        CubicFoot => ("ft³", "cubic feet", INCHES_PER_FOOT.powi(3)), from_cubic_feet, cubic_feet;
        CubicMillimeter => ("mm³", "cubic millimeters", INCHES_PER_MILLIMETER.powi(3)), from_cubic_millimeters, cubic_millimeters;
        CubicCentimeter => ("cm³", "cubic centimeters", INCHES_PER_CENTIMETER.powi(3)), from_cubic_centimeters, cubic_centimeters;
        CubicMeter => ("m³", "cubic meters", INCHES_PER_METER.powi(3)), from_cubic_meters, cubic_meters;
    }
}

#[cfg(test)]
mod tests {
    use crate::measure::LengthCubed;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_foot_is_1728_cubic_inches() {
        assert_relative_eq!(LengthCubed::from_cubic_feet(1.0).cubic_inches(), 1728.0);
        assert_relative_eq!(
            LengthCubed::from_cubic_centimeters(1000.0).cubic_meters(),
            1.0e-3,
            max_relative = 1e-12
        );
    }
}

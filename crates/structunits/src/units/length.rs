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

//! Length units. The standard unit is the inch.

use super::constants::{
    INCHES_PER_CENTIMETER, INCHES_PER_FOOT, INCHES_PER_METER, INCHES_PER_MILLIMETER,
};
use structunits_core::{dimension::Dimension, family::Family};

unit_family! {
    /// A unit of length.
    pub enum LengthUnit as Length {
        family: Family::Length,
        dimension: Dimension::LENGTH,
        standard: Inch,
    }
    {
        Inch => ("in", "inches", 1.0), from_inches, inches;
        Foot => ("ft", "feet", INCHES_PER_FOOT), from_feet, feet;
        Millimeter => ("mm", "millimeters", INCHES_PER_MILLIMETER), from_millimeters, millimeters;
        Centimeter => ("cm", "centimeters", INCHES_PER_CENTIMETER), from_centimeters, centimeters;
        Meter => ("m", "meters", INCHES_PER_METER), from_meters, meters;
    }
}

#[cfg(test)]
mod tests {
    use crate::measure::Length;
    use approx::assert_relative_eq;

    #[test]
    fn test_foot_and_meter_in_inches() {
        assert_relative_eq!(Length::from_feet(1.0).inches(), 12.0);
        assert_relative_eq!(
            Length::from_meters(1.0).inches(),
            39.370_078_740_157_48,
            max_relative = 1e-12
        );
        assert_relative_eq!(Length::from_inches(1.0).millimeters(), 25.4, max_relative = 1e-12);
        assert_relative_eq!(Length::from_centimeters(100.0).meters(), 1.0, max_relative = 1e-12);
    }
}

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

//! Second moment of area units (`L⁴`). The standard unit is the inch to the
//! fourth.

use super::constants::{
    INCHES_PER_CENTIMETER, INCHES_PER_FOOT, INCHES_PER_METER, INCHES_PER_MILLIMETER,
};
use structunits_core::{dimension::Dimension, family::Family};

unit_family! {
    /// A unit of length to the fourth power.
    pub enum LengthToThe4thUnit as LengthToThe4th {
        family: Family::LengthToThe4th,
        dimension: Dimension::LENGTH_TO_THE_4TH,
        standard: InchToThe4th,
    }
    {
        InchToThe4th => ("in⁴", "inches to the fourth", 1.0), from_inches_to_the_4th, inches_to_the_4th;
        FootToThe4th => ("ft⁴", "feet to the fourth", INCHES_PER_FOOT.powi(4)), from_feet_to_the_4th, feet_to_the_4th;
        MillimeterToThe4th => ("mm⁴", "millimeters to the fourth", INCHES_PER_MILLIMETER.powi(4)), from_millimeters_to_the_4th, millimeters_to_the_4th;
        CentimeterToThe4th => ("cm⁴", "centimeters to the fourth", INCHES_PER_CENTIMETER.powi(4)), from_centimeters_to_the_4th, centimeters_to_the_4th;
        MeterToThe4th => ("m⁴", "meters to the fourth", INCHES_PER_METER.powi(4)), from_meters_to_the_4th, meters_to_the_4th;
    }
}

#[cfg(test)]
mod tests {
    use crate::measure::LengthToThe4th;
    use approx::assert_relative_eq;

    #[test]
    fn test_foot_to_the_fourth() {
        assert_relative_eq!(LengthToThe4th::from_feet_to_the_4th(1.0).inches_to_the_4th(), 20736.0);
        assert_relative_eq!(
            LengthToThe4th::from_inches_to_the_4th(1.0).millimeters_to_the_4th(),
            25.4_f64.powi(4),
            max_relative = 1e-12
        );
    }
}

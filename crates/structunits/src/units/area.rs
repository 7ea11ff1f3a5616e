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

//! Area units. The standard unit is the square inch.

use super::constants::{
    INCHES_PER_CENTIMETER, INCHES_PER_FOOT, INCHES_PER_METER, INCHES_PER_MILLIMETER,
};
use structunits_core::{dimension::Dimension, family::Family};

unit_family! {
    /// A unit of area.
    pub enum AreaUnit as Area {
        family: Family::Area,
        dimension: Dimension::AREA,
        standard: SquareInch,
    }
    {
        SquareInch => ("in²", "square inches", 1.0), from_square_inches, square_inches;
        SquareFoot => ("ft²", "square feet", INCHES_PER_FOOT * INCHES_PER_FOOT), from_square_feet, square_feet;
        SquareMillimeter => ("mm²", "square millimeters", INCHES_PER_MILLIMETER * INCHES_PER_MILLIMETER), from_square_millimeters, square_millimeters;
        SquareCentimeter => ("cm²", "square centimeters", INCHES_PER_CENTIMETER * INCHES_PER_CENTIMETER), from_square_centimeters, square_centimeters;
        SquareMeter => ("m²", "square meters", INCHES_PER_METER * INCHES_PER_METER), from_square_meters, square_meters;
    }
}

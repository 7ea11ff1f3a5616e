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

//! Moment units (force times length). The standard unit is the kip-inch.

use super::constants::{
    INCHES_PER_CENTIMETER, INCHES_PER_FOOT, INCHES_PER_METER, INCHES_PER_MILLIMETER,
    KIPS_PER_KILONEWTON, KIPS_PER_NEWTON, KIPS_PER_POUND,
};
use structunits_core::{dimension::Dimension, family::Family};

unit_family! {
    /// A unit of moment.
    pub enum MomentUnit as Moment {
        family: Family::Moment,
        dimension: Dimension::MOMENT,
        standard: KipInch,
    }
    {
        PoundInch => ("lb-in", "pound-inches", KIPS_PER_POUND), from_pound_inches, pound_inches;
        PoundFoot => ("lb-ft", "pound-feet", KIPS_PER_POUND * INCHES_PER_FOOT), from_pound_feet, pound_feet;
        KipInch => ("k-in", "kip-inches", 1.0), from_kip_inches, kip_inches;
        KipFoot => ("k-ft", "kip-feet", INCHES_PER_FOOT), from_kip_feet, kip_feet;
        NewtonMeter => ("N-m", "newton-meters", KIPS_PER_NEWTON * INCHES_PER_METER), from_newton_meters, newton_meters;
        KilonewtonMeter => ("kN-m", "kilonewton-meters", KIPS_PER_KILONEWTON * INCHES_PER_METER), from_kilonewton_meters, kilonewton_meters;
        NewtonMillimeter => ("N-mm", "newton-millimeters", KIPS_PER_NEWTON * INCHES_PER_MILLIMETER), from_newton_millimeters, newton_millimeters;
        KilonewtonMillimeter => ("kN-mm", "kilonewton-millimeters", KIPS_PER_KILONEWTON * INCHES_PER_MILLIMETER), from_kilonewton_millimeters, kilonewton_millimeters;
        NewtonCentimeter => ("N-cm", "newton-centimeters", KIPS_PER_NEWTON * INCHES_PER_CENTIMETER), from_newton_centimeters, newton_centimeters;
        KilonewtonCentimeter => ("kN-cm", "kilonewton-centimeters", KIPS_PER_KILONEWTON * INCHES_PER_CENTIMETER), from_kilonewton_centimeters, kilonewton_centimeters;
    }
}

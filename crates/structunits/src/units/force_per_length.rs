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

//! Distributed load units (force per length). The standard unit is the kip
//! per inch.

use super::constants::{
    INCHES_PER_CENTIMETER, INCHES_PER_FOOT, INCHES_PER_METER, INCHES_PER_MILLIMETER,
    KIPS_PER_KILONEWTON, KIPS_PER_NEWTON, KIPS_PER_POUND,
};
use structunits_core::{dimension::Dimension, family::Family};

unit_family! {
    /// A unit of force per length.
    pub enum ForcePerLengthUnit as ForcePerLength {
        family: Family::ForcePerLength,
        dimension: Dimension::FORCE_PER_LENGTH,
        standard: KipPerInch,
    }
    {
        PoundPerInch => ("lb/in", "pounds per inch", KIPS_PER_POUND), from_pounds_per_inch, pounds_per_inch;
        PoundPerFoot => ("lb/ft", "pounds per foot", KIPS_PER_POUND / INCHES_PER_FOOT), from_pounds_per_foot, pounds_per_foot;
        KipPerInch => ("k/in", "kips per inch", 1.0), from_kips_per_inch, kips_per_inch;
        KipPerFoot => ("k/ft", "kips per foot", 1.0 / INCHES_PER_FOOT), from_kips_per_foot, kips_per_foot;
        NewtonPerMeter => ("N/m", "newtons per meter", KIPS_PER_NEWTON / INCHES_PER_METER), from_newtons_per_meter, newtons_per_meter;
        KilonewtonPerMeter => ("kN/m", "kilonewtons per meter", KIPS_PER_KILONEWTON / INCHES_PER_METER), from_kilonewtons_per_meter, kilonewtons_per_meter;
        NewtonPerMillimeter => ("N/mm", "newtons per millimeter", KIPS_PER_NEWTON / INCHES_PER_MILLIMETER), from_newtons_per_millimeter, newtons_per_millimeter;
        KilonewtonPerMillimeter => ("kN/mm", "kilonewtons per millimeter", KIPS_PER_KILONEWTON / INCHES_PER_MILLIMETER), from_kilonewtons_per_millimeter, kilonewtons_per_millimeter;
        NewtonPerCentimeter => ("N/cm", "newtons per centimeter", KIPS_PER_NEWTON / INCHES_PER_CENTIMETER), from_newtons_per_centimeter, newtons_per_centimeter;
        KilonewtonPerCentimeter => ("kN/cm", "kilonewtons per centimeter", KIPS_PER_KILONEWTON / INCHES_PER_CENTIMETER), from_kilonewtons_per_centimeter, kilonewtons_per_centimeter;
    }
}

#[cfg(test)]
mod tests {
    use crate::measure::ForcePerLength;
    use approx::assert_relative_eq;

    #[test]
    fn test_kip_per_foot() {
        assert_relative_eq!(ForcePerLength::from_kips_per_foot(12.0).kips_per_inch(), 1.0);
        assert_relative_eq!(ForcePerLength::from_kips_per_foot(1.0).pounds_per_foot(), 1000.0);
    }

    #[test]
    fn test_kilonewton_per_meter_equals_newton_per_millimeter() {
        assert_relative_eq!(
            ForcePerLength::from_kilonewtons_per_meter(3.0).newtons_per_millimeter(),
            3.0,
            max_relative = 1e-12
        );
    }
}

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

//! Stress and pressure units. The standard unit is the ksi.

use super::constants::{
    INCHES_PER_FOOT, INCHES_PER_METER, KILONEWTONS_PER_MEGANEWTON, KIPS_PER_KILONEWTON,
    KIPS_PER_NEWTON, KIPS_PER_POUND,
};
use structunits_core::{dimension::Dimension, family::Family};

const SQUARE_INCHES_PER_SQUARE_FOOT: f64 = INCHES_PER_FOOT * INCHES_PER_FOOT;
const SQUARE_INCHES_PER_SQUARE_METER: f64 = INCHES_PER_METER * INCHES_PER_METER;

unit_family! {
    /// A unit of stress or pressure.
    pub enum StressUnit as Stress {
        family: Family::Stress,
        dimension: Dimension::STRESS,
        standard: Ksi,
    }
    {
        Psi => ("psi", "pounds per square inch", KIPS_PER_POUND), from_psi, psi;
        Ksi => ("ksi", "kips per square inch", 1.0), from_ksi, ksi;
        Psf => ("psf", "pounds per square foot", KIPS_PER_POUND / SQUARE_INCHES_PER_SQUARE_FOOT), from_psf, psf;
        Ksf => ("ksf", "kips per square foot", 1.0 / SQUARE_INCHES_PER_SQUARE_FOOT), from_ksf, ksf;
        Pascal => ("Pa", "pascals", KIPS_PER_NEWTON / SQUARE_INCHES_PER_SQUARE_METER), from_pascals, pascals;
        Kilopascal => ("kPa", "kilopascals", KIPS_PER_KILONEWTON / SQUARE_INCHES_PER_SQUARE_METER), from_kilopascals, kilopascals;
        Megapascal => ("MPa", "megapascals", KIPS_PER_KILONEWTON * KILONEWTONS_PER_MEGANEWTON / SQUARE_INCHES_PER_SQUARE_METER), from_megapascals, megapascals;
    }
}

#[cfg(test)]
mod tests {
    use crate::measure::Stress;
    use approx::assert_relative_eq;

    #[test]
    fn test_customary_stresses() {
        assert_relative_eq!(Stress::from_psi(60_000.0).ksi(), 60.0);
        assert_relative_eq!(Stress::from_ksf(1.0).psf(), 1000.0);
        assert_relative_eq!(Stress::from_ksi(1.0).ksf(), 144.0);
    }

    #[test]
    fn test_pascal_is_a_thousandth_of_a_kilopascal() {
        assert_relative_eq!(Stress::from_kilopascals(1.0).pascals(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(
            Stress::from_megapascals(1.0).kilopascals(),
            1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_megapascal_in_ksi() {
        assert_relative_eq!(
            Stress::from_megapascals(1.0).ksi(),
            0.145_037_738,
            max_relative = 1e-8
        );
    }
}

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

//! Conversion constants between the US customary and SI unit systems.
//!
//! All factor tables are derived from these values; nothing else in the crate
//! hard-codes a conversion ratio.

/// Inches in one foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Inches in one meter (exactly `1 / 0.0254`).
pub const INCHES_PER_METER: f64 = 1.0 / 0.0254;

/// Millimeters in one meter.
pub const MILLIMETERS_PER_METER: f64 = 1000.0;

/// Centimeters in one meter.
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Pounds-force in one kip.
pub const POUNDS_PER_KIP: f64 = 1000.0;

/// Newtons in one kilonewton.
pub const NEWTONS_PER_KILONEWTON: f64 = 1000.0;

/// Kips in one kilonewton (one pound-force is 4.4482216152605 N).
pub const KIPS_PER_KILONEWTON: f64 = 1.0 / 4.4482216152605;

/// Kilonewtons in one meganewton.
pub const KILONEWTONS_PER_MEGANEWTON: f64 = 1000.0;

/// Inches in one millimeter.
pub const INCHES_PER_MILLIMETER: f64 = INCHES_PER_METER / MILLIMETERS_PER_METER;

/// Inches in one centimeter.
pub const INCHES_PER_CENTIMETER: f64 = INCHES_PER_METER / CENTIMETERS_PER_METER;

/// Kips in one newton.
pub const KIPS_PER_NEWTON: f64 = KIPS_PER_KILONEWTON / NEWTONS_PER_KILONEWTON;

/// Kips in one pound-force.
pub const KIPS_PER_POUND: f64 = 1.0 / POUNDS_PER_KIP;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_metric_length_chain() {
        assert_relative_eq!(INCHES_PER_MILLIMETER * 25.4, 1.0, max_relative = 1e-12);
        assert_relative_eq!(INCHES_PER_CENTIMETER * 2.54, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_kilonewton_is_about_225_pounds() {
        assert_relative_eq!(
            KIPS_PER_KILONEWTON * POUNDS_PER_KIP,
            224.808_943_1,
            max_relative = 1e-9
        );
        assert_relative_eq!(KIPS_PER_NEWTON * 1000.0, KIPS_PER_KILONEWTON);
    }
}

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

//! General-format rendering of floats with a fixed number of significant
//! digits.
//!
//! This reproduces the familiar `%g` conversion: the value is rounded to
//! `digits` significant digits, printed in positional notation when the
//! decimal exponent `e` satisfies `-4 <= e < digits` and in scientific
//! notation otherwise, and insignificant trailing zeros are removed.

/// Number of significant digits used when none is requested.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 4;

/// Formats `value` with `digits` significant digits in general notation.
///
/// A precision of `0` is treated as `1`. Non-finite values render as `nan`,
/// `inf` and `-inf`.
///
/// # Examples
///
/// ```rust
/// # use structunits_core::format::general::format_significant;
///
/// assert_eq!(format_significant(22.0, 4), "22");
/// assert_eq!(format_significant(1.0 / 1.2, 4), "0.8333");
/// assert_eq!(format_significant(123456.0, 4), "1.235e+05");
/// assert_eq!(format_significant(0.00001234, 4), "1.234e-05");
/// assert_eq!(format_significant(0.0001234, 4), "0.0001234");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = digits.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent must be taken after rounding, so 9999.5 becomes 1e+04.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        let positional = format!("{:.*}", decimals, value);
        strip_trailing_zeros(&positional).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing remains behind it.
fn strip_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_significant(1.0, 4), "1");
        assert_eq!(format_significant(100.0, 4), "100");
        assert_eq!(format_significant(-12.0, 4), "-12");
        assert_eq!(format_significant(1000.0, 4), "1000");
        assert_eq!(format_significant(10000.0, 4), "1e+04");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_significant(1.83333333, 4), "1.833");
        assert_eq!(format_significant(2.5e-3, 4), "0.0025");
        assert_eq!(format_significant(9999.5, 4), "1e+04");
        assert_eq!(format_significant(0.99996, 4), "1");
        assert_eq!(format_significant(3.14159, 2), "3.1");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_significant(1.5e10, 4), "1.5e+10");
        assert_eq!(format_significant(-2.0e-7, 4), "-2e-07");
        assert_eq!(format_significant(6.02214076e23, 6), "6.02214e+23");
        assert_eq!(format_significant(1.0e100, 4), "1e+100");
    }

    #[test]
    fn test_zero_precision_is_one_digit() {
        assert_eq!(format_significant(123.0, 0), "1e+02");
        assert_eq!(format_significant(4.0, 0), "4");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_significant(0.0, 4), "0");
        assert_eq!(format_significant(-0.0, 4), "-0");
        assert_eq!(format_significant(f64::NAN, 4), "nan");
        assert_eq!(format_significant(f64::INFINITY, 4), "inf");
        assert_eq!(format_significant(f64::NEG_INFINITY, 4), "-inf");
    }
}

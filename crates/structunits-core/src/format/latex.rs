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

//! Rendering of a value and an optional unit symbol.

use super::general::format_significant;

/// Renders `value` with an optional unit symbol as a LaTeX fragment.
///
/// Without a symbol only the number is produced. With a symbol the number is
/// followed by a thin space and the symbol set upright.
///
/// # Examples
///
/// ```rust
/// # use structunits_core::format::latex::to_latex_string;
///
/// assert_eq!(to_latex_string(12.0, Some("kip"), 4), r"12 \, \mathrm{kip}");
/// assert_eq!(to_latex_string(0.833333, None, 4), "0.8333");
/// ```
pub fn to_latex_string(value: f64, symbol: Option<&str>, digits: usize) -> String {
    let number = format_significant(value, digits);
    match symbol {
        Some(symbol) => format!("{number} \\, \\mathrm{{{symbol}}}"),
        None => number,
    }
}

/// Renders `value` with an optional unit symbol as plain text.
///
/// # Examples
///
/// ```rust
/// # use structunits_core::format::latex::to_plain_string;
///
/// assert_eq!(to_plain_string(1.8333333, Some("ft"), 4), "1.833 ft");
/// assert_eq!(to_plain_string(2.0, None, 4), "2");
/// ```
pub fn to_plain_string(value: f64, symbol: Option<&str>, digits: usize) -> String {
    let number = format_significant(value, digits);
    match symbol {
        Some(symbol) => format!("{number} {symbol}"),
        None => number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_with_unit() {
        assert_eq!(to_latex_string(22.0, Some("in"), 4), r"22 \, \mathrm{in}");
        assert_eq!(
            to_latex_string(1.8333333, Some("ft"), 4),
            r"1.833 \, \mathrm{ft}"
        );
        assert_eq!(
            to_latex_string(1234567.0, Some("lb"), 4),
            r"1.235e+06 \, \mathrm{lb}"
        );
    }

    #[test]
    fn test_latex_without_unit() {
        assert_eq!(to_latex_string(10.0 / 12.0, None, 4), "0.8333");
        assert_eq!(to_latex_string(10.0 / 12.0, None, 2), "0.83");
    }

    #[test]
    fn test_plain() {
        assert_eq!(to_plain_string(100.0, Some("in²"), 4), "100 in²");
        assert_eq!(to_plain_string(-3.5, None, 4), "-3.5");
    }
}

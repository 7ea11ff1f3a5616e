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

//! Rendering options for quantities.

use structunits_core::format::{
    general::DEFAULT_SIGNIFICANT_DIGITS,
    latex::{to_latex_string, to_plain_string},
};

/// How a number and its unit symbol are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `12 \, \mathrm{in}`, ready for a math environment.
    #[default]
    Latex,
    /// `12 in`.
    Plain,
}

/// Formatting configuration shared by every quantity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of significant digits in the rendered number.
    pub significant_digits: usize,
    /// Layout of number and symbol.
    pub notation: Notation,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptionsBuilder::new().build()
    }
}

impl FormatOptions {
    /// Plain-text notation with the default precision.
    #[inline]
    pub fn plain() -> Self {
        FormatOptionsBuilder::new().notation(Notation::Plain).build()
    }

    /// Renders `value` followed by `symbol`, if any.
    pub fn render(&self, value: f64, symbol: Option<&str>) -> String {
        match self.notation {
            Notation::Latex => to_latex_string(value, symbol, self.significant_digits),
            Notation::Plain => to_plain_string(value, symbol, self.significant_digits),
        }
    }
}

/// Builder for `FormatOptions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptionsBuilder {
    significant_digits: usize,
    notation: Notation,
}

impl Default for FormatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatOptionsBuilder {
    /// Creates a new `FormatOptionsBuilder` with four significant digits and
    /// LaTeX notation.
    #[inline]
    pub fn new() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            notation: Notation::Latex,
        }
    }

    /// Sets the number of significant digits. Zero is treated as one.
    #[inline]
    pub fn significant_digits(mut self, significant_digits: usize) -> Self {
        self.significant_digits = significant_digits.max(1);
        self
    }

    /// Sets the notation.
    #[inline]
    pub fn notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Builds the `FormatOptions` instance.
    #[inline]
    pub fn build(self) -> FormatOptions {
        FormatOptions {
            significant_digits: self.significant_digits,
            notation: self.notation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.significant_digits, 4);
        assert_eq!(options.notation, Notation::Latex);
        assert_eq!(FormatOptions::plain().notation, Notation::Plain);
    }

    #[test]
    fn test_builder_sets_fields() {
        let options = FormatOptionsBuilder::new()
            .significant_digits(6)
            .notation(Notation::Plain)
            .build();
        assert_eq!(options.render(1.0 / 3.0, Some("ft")), "0.333333 ft");
        let clamped = FormatOptionsBuilder::new().significant_digits(0).build();
        assert_eq!(clamped.significant_digits, 1);
    }

    #[test]
    fn test_render_latex() {
        let options = FormatOptions::default();
        assert_eq!(options.render(22.0, Some("in")), r"22 \, \mathrm{in}");
        assert_eq!(options.render(0.83333, None), "0.8333");
    }
}

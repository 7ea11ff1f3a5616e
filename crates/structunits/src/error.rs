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

//! Error type shared by every fallible quantity operation.
//!
//! Typed measures reject most mistakes at compile time. The dynamic
//! [`Quantity`](crate::quantity::Quantity) API, unit lookup by symbol and the
//! compound unit tables cannot, so they report failures through
//! [`QuantityError`]. Nothing here is retried or coerced: an operation either
//! produces a value or returns the first error it encounters.

use structunits_core::{dimension::Dimension, family::Family};

/// The error type for quantity arithmetic, conversion and unit lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// Two operands (or an operand and an exponent) had incompatible dimensions.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension the operation required.
        expected: Dimension,
        /// The dimension that was supplied.
        actual: Dimension,
    },
    /// A unit of one family was used with a quantity of another.
    #[error("unit family mismatch: expected a {expected} unit, got a {actual} unit")]
    UnitFamilyMismatch {
        /// The family of the quantity.
        expected: Family,
        /// The family of the unit that was supplied.
        actual: Family,
    },
    /// The compound unit table has no entry for this pair of units.
    #[error("unsupported compound unit: {lhs} {op} {rhs}")]
    UnsupportedCompoundUnit {
        /// Symbol of the left-hand unit.
        lhs: &'static str,
        /// The operator, `×` or `/`.
        op: char,
        /// Symbol of the right-hand unit.
        rhs: &'static str,
    },
    /// A reduction over a collection was given no elements.
    #[error("expected at least one value, got none")]
    EmptyInput,
    /// No unit of the searched kind carries this symbol.
    #[error("unknown {kind} unit symbol '{symbol}'")]
    UnknownUnitSymbol {
        /// The family name that was searched, or `"any"`.
        kind: &'static str,
        /// The symbol as given by the caller.
        symbol: String,
    },
}

/// Convenience alias for results produced by this crate.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Fails with [`QuantityError::DimensionMismatch`] unless both dimensions are identical.
#[inline]
pub(crate) fn ensure_same_dimension(expected: Dimension, actual: Dimension) -> QuantityResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(QuantityError::DimensionMismatch { expected, actual })
    }
}

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

//! # Structunits Core
//!
//! Foundational dimension algebra and numeric formatting for the structunits
//! quantity library. This crate knows nothing about concrete units; it
//! provides the pieces every quantity type is built from.
//!
//! ## Modules
//!
//! - `dimension`: The `Dimension` triple of force, length and time exponents
//!   with its algebra (`+`, `-`, negation, integer scaling, float scaling and
//!   roots with snap-to-integer semantics).
//! - `family`: The closed `Family` table classifying dimensions into named
//!   quantity categories, with per-family equality tolerances.
//! - `num`: Float snapping helpers (`is_integral`, `snap_to_integer`).
//! - `format`: `%g`-style significant-digit formatting and LaTeX/plain
//!   value-with-unit rendering.
//!
//! ## Purpose
//!
//! Keeping the algebra free of unit data lets the dispatch of arithmetic
//! results be expressed as a pure function of a `Dimension`, and makes the
//! algebra exhaustively testable on its own.

pub mod dimension;
pub mod family;
pub mod format;
pub mod num;

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

//! # Structunits
//!
//! **Dimension-aware quantities for structural engineering calculations.**
//!
//! Values are stored in a fixed standard unit per family (inch, kip and their
//! products) and carry a dimension made of force, length and time exponents.
//! Arithmetic keeps dimensions consistent: sums require identical dimensions,
//! products and quotients combine them and resolve the result to a concrete
//! family through a closed registry.
//!
//! ## Architecture
//!
//! * **`units`**: The unit catalog. One `Copy` enum per family with symbols and
//!   conversion factors, plus the compound tables (`kip` × `ft` → `k-ft`).
//! * **`measure`**: `Measure<U>`, a typed value of one family (`Length`,
//!   `Force`, `Stress`, ...). Family mistakes are compile errors.
//! * **`quantity`**: `Quantity`, the dynamic value returned by products,
//!   quotients, powers and roots. Mismatches are reported as errors.
//! * **`registry`**: The dimension-to-family dispatch table.
//! * **`math`**: Roots, absolute values, min/max and load envelopes.
//! * **`format`**: LaTeX and plain-text rendering options.
//!
//! ## Example
//!
//! ```rust
//! use structunits::prelude::*;
//!
//! let w = Force::from_kips(2.0).per_unit(LengthUnit::Foot).unwrap();
//! let span = Length::from_feet(20.0);
//!
//! // M = w L^2 / 8
//! let moment = Moment::try_from(w * span.powi(2) / 8.0).unwrap();
//! assert!((moment.kip_feet() - 100.0).abs() < 1e-9);
//! ```

pub mod dimensioned;
pub mod error;
pub mod format;
pub mod math;
pub mod measure;
pub mod quantity;
pub mod registry;
pub mod undefined;
pub mod units;

/// The types needed for everyday calculations.
pub mod prelude {
    pub use crate::{
        dimensioned::Dimensioned,
        error::{QuantityError, QuantityResult},
        format::{FormatOptions, FormatOptionsBuilder, Notation},
        measure::{
            Area, Force, ForcePerLength, Length, LengthCubed, LengthToThe4th, Measure, Moment,
            Stress, Unitless,
        },
        quantity::Quantity,
        undefined::Undefined,
        units::{
            AnyUnit, AreaUnit, ForcePerLengthUnit, ForceUnit, LengthCubedUnit, LengthToThe4thUnit,
            LengthUnit, MomentUnit, StressUnit, Unit, UnitlessUnit,
        },
    };
    pub use structunits_core::{dimension::Dimension, family::Family};
}

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

//! # Dimension Dispatch Registry
//!
//! Maps a computed [`Dimension`] to the constructor of the concrete family with
//! that dimension. Multiplying a force by a length yields `F·L`, which the
//! registry resolves to a [`Moment`](crate::measure::Moment) in kip-inches.
//!
//! The table is closed: it is built once, on first use, from the nine
//! catalogued families and is never mutated afterwards. Any dimension without
//! an entry, including those of the classification-only families such as
//! density or acceleration, resolves to [`Undefined`], which keeps the
//! dimension so later products can return to a named family.
//!
//! Only operations that change the dimension consult the registry: products,
//! quotients, powers and roots. Sums and scalar scaling keep their family
//! directly.

use crate::{
    measure::Measure,
    quantity::Quantity,
    undefined::Undefined,
    units::{
        AreaUnit, ForcePerLengthUnit, ForceUnit, LengthCubedUnit, LengthToThe4thUnit, LengthUnit,
        MomentUnit, StressUnit, Unit, UnitlessUnit,
    },
};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use structunits_core::dimension::Dimension;

/// Builds a quantity of the given dimension from a magnitude in standard units.
pub type Factory = fn(Dimension, f64) -> Quantity;

fn standard<U: Unit>(_dimension: Dimension, value: f64) -> Quantity {
    U::into_quantity(Measure::<U>::from_standard(value))
}

fn undefined(dimension: Dimension, value: f64) -> Quantity {
    Quantity::Undefined(Undefined::new(dimension, value))
}

fn entry<U: Unit>() -> (Dimension, Factory) {
    (U::DIMENSION, standard::<U> as Factory)
}

static REGISTRY: LazyLock<FxHashMap<Dimension, Factory>> = LazyLock::new(|| {
    let registry: FxHashMap<Dimension, Factory> = [
        entry::<UnitlessUnit>(),
        entry::<LengthUnit>(),
        entry::<AreaUnit>(),
        entry::<LengthCubedUnit>(),
        entry::<LengthToThe4thUnit>(),
        entry::<ForceUnit>(),
        entry::<MomentUnit>(),
        entry::<ForcePerLengthUnit>(),
        entry::<StressUnit>(),
    ]
    .into_iter()
    .collect();

    tracing::debug!(entries = registry.len(), "initialized dimension registry");
    registry
});

/// Returns the factory for `dimension`, falling back to the undefined factory.
pub fn resolve(dimension: Dimension) -> Factory {
    match REGISTRY.get(&dimension) {
        Some(&factory) => factory,
        None => {
            tracing::trace!(%dimension, "no concrete family, resolving to undefined");
            undefined
        }
    }
}

/// Resolves `dimension` and builds the quantity in one step.
///
/// # Examples
///
/// ```rust
/// # use structunits::{registry, prelude::*};
/// let q = registry::build(Dimension::MOMENT, 24.0);
/// assert_eq!(q.family(), Family::Moment);
/// assert!((q.convert_to(MomentUnit::KipFoot).unwrap() - 2.0).abs() < 1e-12);
///
/// let density = registry::build(Dimension::DENSITY, 1.0);
/// assert!(density.is_undefined());
/// ```
#[inline]
pub fn build(dimension: Dimension, value: f64) -> Quantity {
    resolve(dimension)(dimension, value)
}

/// Every dimension with a concrete family, in no particular order.
pub fn registered_dimensions() -> impl Iterator<Item = Dimension> {
    REGISTRY.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use structunits_core::family::Family;

    #[test]
    fn test_every_registered_dimension_builds_its_family() {
        let mut count = 0;
        for dimension in registered_dimensions() {
            let q = build(dimension, 1.5);
            assert_eq!(q.dimension(), dimension);
            assert_eq!(q.family(), Family::classify(dimension));
            assert!(!q.is_undefined());
            assert_eq!(q.standard_value(), 1.5);
            count += 1;
        }
        assert_eq!(count, 9);
    }

    #[test]
    fn test_classification_only_families_are_undefined() {
        for dimension in [
            Dimension::LENGTH_TO_THE_6TH,
            Dimension::DENSITY,
            Dimension::FLEXURAL_STIFFNESS,
            Dimension::TIME,
            Dimension::ACCELERATION,
        ] {
            let q = build(dimension, 2.0);
            assert!(q.is_undefined());
            assert_eq!(q.dimension(), dimension);
            assert_eq!(q.family(), Family::Undefined);
        }
    }

    #[test]
    fn test_arbitrary_dimension_is_preserved() {
        let d = Dimension::new(3, -7, 2);
        let q = build(d, -4.0);
        assert_eq!(q.dimension(), d);
        assert_eq!(q.standard_value(), -4.0);
    }

    #[test]
    fn test_fallback_with_subscriber_installed() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("structunits=trace"))
            .with_test_writer()
            .try_init();
        assert!(build(Dimension::TIME, 1.0).is_undefined());
        assert!(!build(Dimension::STRESS, 1.0).is_undefined());
    }

    #[test]
    fn test_results_are_in_standard_unit() {
        let q = build(Dimension::FORCE_PER_LENGTH, 1.0);
        assert_eq!(q.display_unit(), Some(ForcePerLengthUnit::KipPerInch.into()));
    }
}

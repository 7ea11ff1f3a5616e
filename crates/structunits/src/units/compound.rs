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

//! # Compound Units
//!
//! Tables that derive the unit of one family from a pair of units of two
//! others, e.g. `kip` × `ft` → `k-ft` or `kN` / `m` → `kN/m`. The tables are
//! explicit: a pair that is not listed has no derived unit, even if the factor
//! arithmetic would work out. Each table is built once on first use and never
//! mutated.

use super::{AreaUnit, ForcePerLengthUnit, ForceUnit, LengthUnit, MomentUnit, Unit};
use crate::error::{QuantityError, QuantityResult};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

const SQUARES: [(LengthUnit, AreaUnit); 5] = [
    (LengthUnit::Inch, AreaUnit::SquareInch),
    (LengthUnit::Foot, AreaUnit::SquareFoot),
    (LengthUnit::Millimeter, AreaUnit::SquareMillimeter),
    (LengthUnit::Centimeter, AreaUnit::SquareCentimeter),
    (LengthUnit::Meter, AreaUnit::SquareMeter),
];

const FORCE_LENGTH_PAIRS: [(ForceUnit, LengthUnit, ForcePerLengthUnit, MomentUnit); 10] = [
    (ForceUnit::Pound, LengthUnit::Inch, ForcePerLengthUnit::PoundPerInch, MomentUnit::PoundInch),
    (ForceUnit::Pound, LengthUnit::Foot, ForcePerLengthUnit::PoundPerFoot, MomentUnit::PoundFoot),
    (ForceUnit::Kip, LengthUnit::Inch, ForcePerLengthUnit::KipPerInch, MomentUnit::KipInch),
    (ForceUnit::Kip, LengthUnit::Foot, ForcePerLengthUnit::KipPerFoot, MomentUnit::KipFoot),
    (
        ForceUnit::Newton,
        LengthUnit::Meter,
        ForcePerLengthUnit::NewtonPerMeter,
        MomentUnit::NewtonMeter,
    ),
    (
        ForceUnit::Kilonewton,
        LengthUnit::Meter,
        ForcePerLengthUnit::KilonewtonPerMeter,
        MomentUnit::KilonewtonMeter,
    ),
    (
        ForceUnit::Newton,
        LengthUnit::Millimeter,
        ForcePerLengthUnit::NewtonPerMillimeter,
        MomentUnit::NewtonMillimeter,
    ),
    (
        ForceUnit::Kilonewton,
        LengthUnit::Millimeter,
        ForcePerLengthUnit::KilonewtonPerMillimeter,
        MomentUnit::KilonewtonMillimeter,
    ),
    (
        ForceUnit::Newton,
        LengthUnit::Centimeter,
        ForcePerLengthUnit::NewtonPerCentimeter,
        MomentUnit::NewtonCentimeter,
    ),
    (
        ForceUnit::Kilonewton,
        LengthUnit::Centimeter,
        ForcePerLengthUnit::KilonewtonPerCentimeter,
        MomentUnit::KilonewtonCentimeter,
    ),
];

static AREA_BY_LENGTHS: LazyLock<FxHashMap<(LengthUnit, LengthUnit), AreaUnit>> =
    LazyLock::new(|| SQUARES.iter().map(|&(l, a)| ((l, l), a)).collect());

static FORCE_PER_LENGTH_BY_PAIR: LazyLock<FxHashMap<(ForceUnit, LengthUnit), ForcePerLengthUnit>> =
    LazyLock::new(|| {
        FORCE_LENGTH_PAIRS
            .iter()
            .map(|&(f, l, w, _)| ((f, l), w))
            .collect()
    });

static MOMENT_BY_PAIR: LazyLock<FxHashMap<(ForceUnit, LengthUnit), MomentUnit>> =
    LazyLock::new(|| {
        FORCE_LENGTH_PAIRS
            .iter()
            .map(|&(f, l, _, m)| ((f, l), m))
            .collect()
    });

static PAIR_BY_MOMENT: LazyLock<FxHashMap<MomentUnit, (ForceUnit, LengthUnit)>> =
    LazyLock::new(|| {
        FORCE_LENGTH_PAIRS
            .iter()
            .map(|&(f, l, _, m)| (m, (f, l)))
            .collect()
    });

fn unsupported<A: Unit, B: Unit>(lhs: A, op: char, rhs: B) -> QuantityError {
    tracing::debug!(lhs = lhs.symbol(), op = %op, rhs = rhs.symbol(), "no compound unit for pair");
    QuantityError::UnsupportedCompoundUnit {
        lhs: lhs.symbol(),
        op,
        rhs: rhs.symbol(),
    }
}

impl LengthUnit {
    /// The area unit of `self × other`. Only identical units combine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits::units::{AreaUnit, LengthUnit};
    /// assert_eq!(LengthUnit::Foot.times(LengthUnit::Foot), Ok(AreaUnit::SquareFoot));
    /// assert!(LengthUnit::Foot.times(LengthUnit::Inch).is_err());
    /// ```
    pub fn times(self, other: LengthUnit) -> QuantityResult<AreaUnit> {
        AREA_BY_LENGTHS
            .get(&(self, other))
            .copied()
            .ok_or_else(|| unsupported(self, '×', other))
    }
}

impl ForceUnit {
    /// The distributed load unit of `self / length`.
    pub fn per(self, length: LengthUnit) -> QuantityResult<ForcePerLengthUnit> {
        FORCE_PER_LENGTH_BY_PAIR
            .get(&(self, length))
            .copied()
            .ok_or_else(|| unsupported(self, '/', length))
    }

    /// The moment unit of `self × length`.
    pub fn times(self, length: LengthUnit) -> QuantityResult<MomentUnit> {
        MOMENT_BY_PAIR
            .get(&(self, length))
            .copied()
            .ok_or_else(|| unsupported(self, '×', length))
    }
}

impl MomentUnit {
    /// The length unit left after dividing this moment unit by `force`.
    pub fn per_force(self, force: ForceUnit) -> QuantityResult<LengthUnit> {
        match PAIR_BY_MOMENT.get(&self) {
            Some(&(f, l)) if f == force => Ok(l),
            _ => Err(unsupported(self, '/', force)),
        }
    }

    /// The force unit left after dividing this moment unit by `length`.
    pub fn per_length(self, length: LengthUnit) -> QuantityResult<ForceUnit> {
        match PAIR_BY_MOMENT.get(&self) {
            Some(&(f, l)) if l == length => Ok(f),
            _ => Err(unsupported(self, '/', length)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_squares_agree_with_factors() {
        for &length in LengthUnit::ALL {
            let area = length.times(length).unwrap();
            assert_relative_eq!(
                area.factor(),
                length.factor() * length.factor(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_mixed_lengths_do_not_combine() {
        assert_eq!(
            LengthUnit::Inch.times(LengthUnit::Meter),
            Err(QuantityError::UnsupportedCompoundUnit {
                lhs: "in",
                op: '×',
                rhs: "m",
            })
        );
    }

    #[test]
    fn test_force_length_tables_agree_with_factors() {
        for &(force, length, per, moment) in &FORCE_LENGTH_PAIRS {
            assert_eq!(force.per(length), Ok(per));
            assert_eq!(force.times(length), Ok(moment));
            assert_relative_eq!(
                per.factor(),
                force.factor() / length.factor(),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                moment.factor(),
                force.factor() * length.factor(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_moment_decomposition_inverts_product() {
        for &moment in MomentUnit::ALL {
            let (force, length) = PAIR_BY_MOMENT[&moment];
            assert_eq!(moment.per_force(force), Ok(length));
            assert_eq!(moment.per_length(length), Ok(force));
        }
    }

    #[test]
    fn test_cross_system_pairs_are_unsupported() {
        assert!(ForceUnit::Kip.per(LengthUnit::Meter).is_err());
        assert!(ForceUnit::Newton.times(LengthUnit::Foot).is_err());
        assert_eq!(
            MomentUnit::KipFoot.per_force(ForceUnit::Pound),
            Err(QuantityError::UnsupportedCompoundUnit {
                lhs: "k-ft",
                op: '/',
                rhs: "lb",
            })
        );
        assert!(MomentUnit::KilonewtonMeter.per_length(LengthUnit::Millimeter).is_err());
    }
}

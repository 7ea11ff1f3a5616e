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

//! A type-erased unit, used where the family is only known at runtime.

use super::{
    AreaUnit, ForcePerLengthUnit, ForceUnit, LengthCubedUnit, LengthToThe4thUnit, LengthUnit,
    MomentUnit, StressUnit, Unit, UnitlessUnit,
};
use crate::error::{QuantityError, QuantityResult};
use structunits_core::{dimension::Dimension, family::Family};

/// A unit of any concrete family.
///
/// The variant carries the family tag, so the dynamic
/// [`Quantity`](crate::quantity::Quantity) API can reject a unit of the wrong
/// family with [`QuantityError::UnitFamilyMismatch`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AnyUnit {
    Unitless(UnitlessUnit),
    Length(LengthUnit),
    Area(AreaUnit),
    LengthCubed(LengthCubedUnit),
    LengthToThe4th(LengthToThe4thUnit),
    Force(ForceUnit),
    Moment(MomentUnit),
    ForcePerLength(ForcePerLengthUnit),
    Stress(StressUnit),
}

macro_rules! any_unit_dispatch {
    ($self:expr, $unit:ident => $body:expr) => {
        match $self {
            AnyUnit::Unitless($unit) => $body,
            AnyUnit::Length($unit) => $body,
            AnyUnit::Area($unit) => $body,
            AnyUnit::LengthCubed($unit) => $body,
            AnyUnit::LengthToThe4th($unit) => $body,
            AnyUnit::Force($unit) => $body,
            AnyUnit::Moment($unit) => $body,
            AnyUnit::ForcePerLength($unit) => $body,
            AnyUnit::Stress($unit) => $body,
        }
    };
}

fn units_of<U: Unit>() -> impl Iterator<Item = AnyUnit> {
    U::ALL.iter().map(|unit| unit.into_any())
}

impl AnyUnit {
    /// The family this unit belongs to.
    #[inline]
    pub fn family(self) -> Family {
        fn family_of<U: Unit>(_: U) -> Family {
            U::FAMILY
        }
        any_unit_dispatch!(self, unit => family_of(unit))
    }

    /// The dimension shared by every unit of this family.
    #[inline]
    pub fn dimension(self) -> Dimension {
        fn dimension_of<U: Unit>(_: U) -> Dimension {
            U::DIMENSION
        }
        any_unit_dispatch!(self, unit => dimension_of(unit))
    }

    /// The display symbol.
    #[inline]
    pub fn symbol(self) -> &'static str {
        any_unit_dispatch!(self, unit => unit.symbol())
    }

    /// The human-readable name.
    #[inline]
    pub fn label(self) -> &'static str {
        any_unit_dispatch!(self, unit => unit.label())
    }

    /// The multiplier to the family's standard unit.
    #[inline]
    pub fn factor(self) -> f64 {
        any_unit_dispatch!(self, unit => unit.factor())
    }

    /// Iterates over every unit in the catalog, family by family.
    pub fn all() -> impl Iterator<Item = AnyUnit> {
        units_of::<UnitlessUnit>()
            .chain(units_of::<LengthUnit>())
            .chain(units_of::<AreaUnit>())
            .chain(units_of::<LengthCubedUnit>())
            .chain(units_of::<LengthToThe4thUnit>())
            .chain(units_of::<ForceUnit>())
            .chain(units_of::<MomentUnit>())
            .chain(units_of::<ForcePerLengthUnit>())
            .chain(units_of::<StressUnit>())
    }

    /// Looks a symbol up across all families.
    ///
    /// An exact match wins; otherwise the first case-insensitive match after
    /// trimming is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits::units::{AnyUnit, StressUnit};
    /// assert_eq!(AnyUnit::from_symbol("MPa"), Ok(AnyUnit::Stress(StressUnit::Megapascal)));
    /// assert!(AnyUnit::from_symbol("furlong").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> QuantityResult<AnyUnit> {
        let trimmed = symbol.trim();
        if let Some(unit) = Self::all().find(|unit| unit.symbol() == trimmed) {
            return Ok(unit);
        }

        let wanted = trimmed.to_lowercase();
        Self::all()
            .find(|unit| unit.symbol().to_lowercase() == wanted)
            .ok_or_else(|| QuantityError::UnknownUnitSymbol {
                kind: "any",
                symbol: symbol.to_string(),
            })
    }
}

impl std::fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for AnyUnit {
    type Err = QuantityError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_family() {
        let total = AnyUnit::all().count();
        assert_eq!(total, 1 + 5 + 5 + 5 + 5 + 4 + 10 + 10 + 7);

        let mut symbols: Vec<_> = AnyUnit::all().map(AnyUnit::symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), total, "symbols must be unique across families");
    }

    #[test]
    fn test_family_and_dimension_follow_variant() {
        let unit = AnyUnit::from(MomentUnit::KipFoot);
        assert_eq!(unit.family(), Family::Moment);
        assert_eq!(unit.dimension(), Dimension::MOMENT);
        assert_eq!(unit.factor(), 12.0);
        assert_eq!(unit.label(), "kip-feet");
    }

    #[test]
    fn test_from_symbol_prefers_exact_match() {
        assert_eq!(AnyUnit::from_symbol("kN"), Ok(AnyUnit::Force(ForceUnit::Kilonewton)));
        assert_eq!(
            AnyUnit::from_symbol(" k/ft "),
            Ok(AnyUnit::ForcePerLength(ForcePerLengthUnit::KipPerFoot))
        );
        assert_eq!(AnyUnit::from_symbol("KN-M"), Ok(AnyUnit::Moment(MomentUnit::KilonewtonMeter)));
    }

    #[test]
    fn test_from_symbol_unknown() {
        assert_eq!(
            "parsec".parse::<AnyUnit>(),
            Err(QuantityError::UnknownUnitSymbol {
                kind: "any",
                symbol: "parsec".to_string(),
            })
        );
    }
}

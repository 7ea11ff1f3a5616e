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

//! # Unit Catalog
//!
//! Every unit family is a plain `Copy` enum generated from a single data table:
//! symbol, human-readable label and the multiplier to the family's standard
//! unit (inch, kip and their products). The [`Unit`] trait exposes that data
//! generically so [`Measure<U>`](crate::measure::Measure) can be written once
//! for all families.
//!
//! ## Submodules
//!
//! - `constants`: the conversion constants the factor tables are built from.
//! - `length`, `area`, `length_cubed`, `length_to_the_4th`: geometric families.
//! - `force`, `moment`, `force_per_length`, `stress`: load-derived families.
//! - `unitless`: the single dimensionless unit.
//! - `any`: [`AnyUnit`], the type-erased unit used by the dynamic API.
//! - `compound`: tables deriving one family's unit from two others
//!   (`kip` / `ft` → `k/ft`).

use crate::{
    error::{QuantityError, QuantityResult},
    measure::Measure,
    quantity::Quantity,
};
use structunits_core::{dimension::Dimension, family::Family};

/// Generates a unit enum together with its [`Unit`] implementation, the
/// conversions into [`AnyUnit`] and [`Quantity`], and per-unit constructors and
/// accessors on the matching [`Measure`].
macro_rules! unit_family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:ident {
            family: $family:expr,
            dimension: $dimension:expr,
            standard: $standard:ident,
        }
        {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($symbol:literal, $label:literal, $factor:expr),
                $ctor:ident, $accessor:ident;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::units::Unit for $name {
            const FAMILY: structunits_core::family::Family = $family;
            const DIMENSION: structunits_core::dimension::Dimension = $dimension;
            const STANDARD: Self = $name::$standard;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            #[inline]
            fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }

            #[inline]
            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            #[inline]
            fn factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor,)+
                }
            }

            #[inline]
            fn into_any(self) -> $crate::units::AnyUnit {
                $crate::units::AnyUnit::$kind(self)
            }

            #[inline]
            fn from_any(unit: $crate::units::AnyUnit) -> Option<Self> {
                match unit {
                    $crate::units::AnyUnit::$kind(unit) => Some(unit),
                    _ => None,
                }
            }

            #[inline]
            fn into_quantity(
                measure: $crate::measure::Measure<Self>,
            ) -> $crate::quantity::Quantity {
                $crate::quantity::Quantity::$kind(measure)
            }

            #[inline]
            fn from_quantity(
                quantity: &$crate::quantity::Quantity,
            ) -> Option<$crate::measure::Measure<Self>> {
                match quantity {
                    $crate::quantity::Quantity::$kind(measure) => Some(*measure),
                    _ => None,
                }
            }
        }

        impl $name {
            /// Creates a measure of `value` expressed in this unit.
            #[inline]
            pub fn of(self, value: f64) -> $crate::measure::Measure<Self> {
                $crate::measure::Measure::new(value, self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::units::Unit::symbol(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::QuantityError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::units::Unit>::from_symbol(s)
            }
        }

        impl From<$name> for $crate::units::AnyUnit {
            #[inline]
            fn from(unit: $name) -> Self {
                $crate::units::AnyUnit::$kind(unit)
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $crate::measure::Measure<$name>;

            #[inline]
            fn mul(self, unit: $name) -> Self::Output {
                $crate::measure::Measure::new(self, unit)
            }
        }

        impl std::ops::Div<$name> for $crate::measure::Measure<$name> {
            type Output = $crate::measure::Unitless;

            #[inline]
            fn div(self, unit: $name) -> Self::Output {
                $crate::measure::Unitless::from_standard(self.value_in(unit))
            }
        }

        impl $crate::measure::Measure<$name> {
            $(
                #[doc = concat!("Creates a value expressed in ", $label, " (`", $symbol, "`).")]
                #[inline]
                pub fn $ctor(value: f64) -> Self {
                    Self::new(value, $name::$variant)
                }

                #[doc = concat!("Returns the value expressed in ", $label, " (`", $symbol, "`).")]
                #[inline]
                pub fn $accessor(&self) -> f64 {
                    self.value_in($name::$variant)
                }
            )+
        }
    };
}

pub mod any;
pub mod area;
pub mod compound;
pub mod constants;
pub mod force;
pub mod force_per_length;
pub mod length;
pub mod length_cubed;
pub mod length_to_the_4th;
pub mod moment;
pub mod stress;
pub mod unitless;

pub use any::AnyUnit;
pub use area::AreaUnit;
pub use force::ForceUnit;
pub use force_per_length::ForcePerLengthUnit;
pub use length::LengthUnit;
pub use length_cubed::LengthCubedUnit;
pub use length_to_the_4th::LengthToThe4thUnit;
pub use moment::MomentUnit;
pub use stress::StressUnit;
pub use unitless::UnitlessUnit;

/// A unit belonging to exactly one quantity family.
///
/// Implementors are data-only enums: each variant knows its symbol, label and
/// the factor that converts a value in that unit to the family's standard unit.
/// A magnitude is always stored in the standard unit, so conversion is
/// `standard = value * factor` and `value = standard / factor`.
pub trait Unit:
    Copy + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// The family every unit of this type belongs to.
    const FAMILY: Family;
    /// The dimension of every unit of this type.
    const DIMENSION: Dimension;
    /// The unit with a factor of exactly `1.0`.
    const STANDARD: Self;
    /// All units of this type, in catalog order.
    const ALL: &'static [Self];

    /// The display symbol, e.g. `"ft"` or `"k/in"`.
    fn symbol(self) -> &'static str;

    /// A human-readable name, e.g. `"foot"`.
    fn label(self) -> &'static str;

    /// The multiplier from this unit to the standard unit.
    fn factor(self) -> f64;

    /// Erases the family at the type level.
    fn into_any(self) -> AnyUnit;

    /// Recovers a unit of this type from an [`AnyUnit`] of the same family.
    fn from_any(unit: AnyUnit) -> Option<Self>;

    /// Wraps a typed measure into the dynamic [`Quantity`].
    fn into_quantity(measure: Measure<Self>) -> Quantity;

    /// Extracts a typed measure if `quantity` belongs to this family.
    fn from_quantity(quantity: &Quantity) -> Option<Measure<Self>>;

    /// Looks up a unit by symbol, ignoring surrounding whitespace and case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits::units::{LengthUnit, Unit};
    /// assert_eq!(LengthUnit::from_symbol(" FT "), Ok(LengthUnit::Foot));
    /// assert!(LengthUnit::from_symbol("kip").is_err());
    /// ```
    fn from_symbol(symbol: &str) -> QuantityResult<Self> {
        let wanted = symbol.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol().to_lowercase() == wanted)
            .ok_or_else(|| QuantityError::UnknownUnitSymbol {
                kind: Self::FAMILY.name(),
                symbol: symbol.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn check_family<U: Unit>() {
        assert_eq!(U::FAMILY.dimension(), Some(U::DIMENSION));
        assert_eq!(U::STANDARD.factor(), 1.0);
        assert!(U::ALL.contains(&U::STANDARD));

        for &unit in U::ALL {
            assert!(unit.factor().is_finite() && unit.factor() > 0.0);
            assert_eq!(U::from_symbol(unit.symbol()), Ok(unit));
            assert_eq!(U::from_any(unit.into_any()), Some(unit));
        }

        let mut symbols: Vec<_> = U::ALL.iter().map(|u| u.symbol().to_lowercase()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), U::ALL.len(), "symbols must be unique per family");
    }

    fn check_round_trip<U: Unit>(rng: &mut StdRng) {
        for &unit in U::ALL {
            for _ in 0..32 {
                let value: f64 = rng.random_range(-1.0e6..1.0e6);
                let measure = Measure::new(value, unit);
                assert_relative_eq!(measure.value_in(unit), value, max_relative = 1e-9);
                for &other in U::ALL {
                    assert_relative_eq!(
                        measure.value_in(other),
                        value * unit.factor() / other.factor(),
                        max_relative = 1e-9
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_family_is_consistent() {
        check_family::<UnitlessUnit>();
        check_family::<LengthUnit>();
        check_family::<AreaUnit>();
        check_family::<LengthCubedUnit>();
        check_family::<LengthToThe4thUnit>();
        check_family::<ForceUnit>();
        check_family::<MomentUnit>();
        check_family::<ForcePerLengthUnit>();
        check_family::<StressUnit>();
    }

    #[test]
    fn test_round_trip_through_every_unit() {
        let mut rng = StdRng::seed_from_u64(0x5eed_0001);
        check_round_trip::<UnitlessUnit>(&mut rng);
        check_round_trip::<LengthUnit>(&mut rng);
        check_round_trip::<AreaUnit>(&mut rng);
        check_round_trip::<LengthCubedUnit>(&mut rng);
        check_round_trip::<LengthToThe4thUnit>(&mut rng);
        check_round_trip::<ForceUnit>(&mut rng);
        check_round_trip::<MomentUnit>(&mut rng);
        check_round_trip::<ForcePerLengthUnit>(&mut rng);
        check_round_trip::<StressUnit>(&mut rng);
    }

    #[test]
    fn test_from_symbol_trims_and_ignores_case() {
        assert_eq!(StressUnit::from_symbol("  mpa"), Ok(StressUnit::Megapascal));
        assert_eq!(MomentUnit::from_symbol("K-FT"), Ok(MomentUnit::KipFoot));
        assert_eq!(AreaUnit::from_symbol("M²"), Ok(AreaUnit::SquareMeter));
    }

    #[test]
    fn test_from_symbol_reports_family_and_input() {
        assert_eq!(
            ForceUnit::from_symbol("ft"),
            Err(QuantityError::UnknownUnitSymbol {
                kind: "force",
                symbol: "ft".to_string(),
            })
        );
    }

    #[test]
    fn test_from_str_delegates_to_symbol_lookup() {
        let unit: LengthUnit = "mm".parse().unwrap();
        assert_eq!(unit, LengthUnit::Millimeter);
        assert!("lb".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_display_prints_symbol() {
        assert_eq!(ForcePerLengthUnit::KipPerFoot.to_string(), "k/ft");
        assert_eq!(LengthToThe4thUnit::InchToThe4th.to_string(), "in⁴");
    }

    #[test]
    fn test_scalar_times_unit_builds_measure() {
        let length = 2.0 * LengthUnit::Foot;
        assert_eq!(length.display_unit(), LengthUnit::Foot);
        assert_relative_eq!(length.inches(), 24.0);
        assert_relative_eq!(LengthUnit::Foot.of(2.0).inches(), 24.0);
    }
}

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

//! # Quantity Families
//!
//! A `Family` names a category of physical quantity (length, force, stress,
//! ...). Every family except [`Family::Undefined`] is tied to exactly one
//! [`Dimension`]; classification is an exact lookup in a fixed table, and
//! any dimension missing from that table is `Undefined`.
//!
//! Each family also fixes the absolute tolerance, expressed in its standard
//! unit, under which two magnitudes compare equal.

use crate::dimension::Dimension;

/// The named categories a [`Dimension`] can be classified into.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Family {
    Unitless,
    Force,
    Length,
    Area,
    LengthCubed,
    LengthToThe4th,
    LengthToThe6th,
    Moment,
    ForcePerLength,
    Stress,
    Density,
    FlexuralStiffness,
    Time,
    Acceleration,
    /// Catch-all for dimensions without a named family.
    Undefined,
}

/// The classification table. Order is irrelevant; every dimension occurs once.
const CLASSIFICATION: [(Dimension, Family); 14] = [
    (Dimension::UNITLESS, Family::Unitless),
    (Dimension::FORCE, Family::Force),
    (Dimension::LENGTH, Family::Length),
    (Dimension::AREA, Family::Area),
    (Dimension::LENGTH_CUBED, Family::LengthCubed),
    (Dimension::LENGTH_TO_THE_4TH, Family::LengthToThe4th),
    (Dimension::LENGTH_TO_THE_6TH, Family::LengthToThe6th),
    (Dimension::MOMENT, Family::Moment),
    (Dimension::FORCE_PER_LENGTH, Family::ForcePerLength),
    (Dimension::STRESS, Family::Stress),
    (Dimension::DENSITY, Family::Density),
    (Dimension::FLEXURAL_STIFFNESS, Family::FlexuralStiffness),
    (Dimension::TIME, Family::Time),
    (Dimension::ACCELERATION, Family::Acceleration),
];

/// Tolerance used by families that do not define a coarser one.
pub const DEFAULT_EQUALITY_TOLERANCE: f64 = 1e-10;

impl Family {
    /// Every family, `Undefined` last.
    pub const ALL: [Family; 15] = [
        Family::Unitless,
        Family::Force,
        Family::Length,
        Family::Area,
        Family::LengthCubed,
        Family::LengthToThe4th,
        Family::LengthToThe6th,
        Family::Moment,
        Family::ForcePerLength,
        Family::Stress,
        Family::Density,
        Family::FlexuralStiffness,
        Family::Time,
        Family::Acceleration,
        Family::Undefined,
    ];

    /// Classifies `dimension` by exact match against the family table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use structunits_core::{dimension::Dimension, family::Family};
    ///
    /// assert_eq!(Family::classify(Dimension::new(0, 2, 0)), Family::Area);
    /// assert_eq!(Family::classify(Dimension::new(0, 5, 0)), Family::Undefined);
    /// ```
    pub fn classify(dimension: Dimension) -> Family {
        CLASSIFICATION
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|&(_, family)| family)
            .unwrap_or(Family::Undefined)
    }

    /// Returns the fixed dimension of this family, or `None` for `Undefined`.
    pub const fn dimension(self) -> Option<Dimension> {
        match self {
            Family::Unitless => Some(Dimension::UNITLESS),
            Family::Force => Some(Dimension::FORCE),
            Family::Length => Some(Dimension::LENGTH),
            Family::Area => Some(Dimension::AREA),
            Family::LengthCubed => Some(Dimension::LENGTH_CUBED),
            Family::LengthToThe4th => Some(Dimension::LENGTH_TO_THE_4TH),
            Family::LengthToThe6th => Some(Dimension::LENGTH_TO_THE_6TH),
            Family::Moment => Some(Dimension::MOMENT),
            Family::ForcePerLength => Some(Dimension::FORCE_PER_LENGTH),
            Family::Stress => Some(Dimension::STRESS),
            Family::Density => Some(Dimension::DENSITY),
            Family::FlexuralStiffness => Some(Dimension::FLEXURAL_STIFFNESS),
            Family::Time => Some(Dimension::TIME),
            Family::Acceleration => Some(Dimension::ACCELERATION),
            Family::Undefined => None,
        }
    }

    /// Returns the absolute equality tolerance in this family's standard unit.
    ///
    /// | Family | Tolerance | Standard unit |
    /// | :--- | :--- | :--- |
    /// | `Length` | `1e-3` | in |
    /// | `Area` | `1e-3` | in² |
    /// | `LengthCubed` | `1e-3` | in³ |
    /// | `LengthToThe4th` | `1e-3` | in⁴ |
    /// | `Force` | `1e-4` | kip |
    /// | `ForcePerLength` | `1e-4` | kip/in |
    /// | `Moment` | `1e-2` | kip-in |
    /// | `Stress` | `1e-4` | ksi |
    /// | everything else | `1e-10` | |
    pub const fn equality_tolerance(self) -> f64 {
        match self {
            Family::Length | Family::Area | Family::LengthCubed | Family::LengthToThe4th => 1e-3,
            Family::Force | Family::ForcePerLength | Family::Stress => 1e-4,
            Family::Moment => 1e-2,
            _ => DEFAULT_EQUALITY_TOLERANCE,
        }
    }

    /// Human-readable snake-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Family::Unitless => "unitless",
            Family::Force => "force",
            Family::Length => "length",
            Family::Area => "area",
            Family::LengthCubed => "length_cubed",
            Family::LengthToThe4th => "length_to_the_4th",
            Family::LengthToThe6th => "length_to_the_6th",
            Family::Moment => "moment",
            Family::ForcePerLength => "force_per_length",
            Family::Stress => "stress",
            Family::Density => "density",
            Family::FlexuralStiffness => "flexural_stiffness",
            Family::Time => "time",
            Family::Acceleration => "acceleration",
            Family::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Dimension> for Family {
    #[inline]
    fn from(dimension: Dimension) -> Self {
        Family::classify(dimension)
    }
}

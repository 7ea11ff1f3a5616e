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

//! Force units. The standard unit is the kip.

use super::constants::{KIPS_PER_KILONEWTON, KIPS_PER_NEWTON, KIPS_PER_POUND};
use structunits_core::{dimension::Dimension, family::Family};

unit_family! {
    /// A unit of force.
    pub enum ForceUnit as Force {
        family: Family::Force,
        dimension: Dimension::FORCE,
        standard: Kip,
    }
    {
        Pound => ("lb", "pounds", KIPS_PER_POUND), from_pounds, pounds;
        Kip => ("kip", "kips", 1.0), from_kips, kips;
        Newton => ("N", "newtons", KIPS_PER_NEWTON), from_newtons, newtons;
        Kilonewton => ("kN", "kilonewtons", KIPS_PER_KILONEWTON), from_kilonewtons, kilonewtons;
    }
}

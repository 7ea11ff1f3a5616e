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

//! # Math Helpers
//!
//! Roots, absolute values and the min/max/envelope reductions used when
//! combining load cases. Every helper is generic over [`Dimensioned`], so it
//! works the same on typed measures, undefined values and dynamic quantities.
//!
//! Selection helpers return one of their operands (unchanged, with
//! its display unit) rather than a rebuilt value, and resolve ties in favor of
//! the second operand. Comparing values of different dimensions is an error.

use crate::{
    dimensioned::Dimensioned,
    error::{QuantityError, QuantityResult, ensure_same_dimension},
    quantity::Quantity,
    registry,
};

fn root<Q: Dimensioned>(q: &Q, n: i32) -> Quantity {
    registry::build(
        q.dimension().divide_by_scalar(n),
        q.standard_value().powf(1.0 / f64::from(n)),
    )
}

/// Square root; the dimension is halved.
///
/// # Examples
///
/// ```rust
/// # use structunits::{math, prelude::*};
/// let side = math::sqrt(&Area::from_square_feet(4.0));
/// assert_eq!(side.family(), Family::Length);
/// assert!((side.convert_to(LengthUnit::Foot).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn sqrt<Q: Dimensioned>(q: &Q) -> Quantity {
    registry::build(q.dimension().divide_by_scalar(2), q.standard_value().sqrt())
}

/// Cube root; the dimension is divided by three.
#[inline]
pub fn third_root<Q: Dimensioned>(q: &Q) -> Quantity {
    root(q, 3)
}

/// Fourth root; the dimension is divided by four.
#[inline]
pub fn fourth_root<Q: Dimensioned>(q: &Q) -> Quantity {
    root(q, 4)
}

/// The absolute value, in the same family.
#[inline]
pub fn abs<Q: Dimensioned>(q: &Q) -> Q {
    q.with_standard_value(q.standard_value().abs())
}

/// The smaller of two values of the same dimension; `b` on ties.
///
/// # Errors
///
/// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
pub fn min<Q: Dimensioned>(a: &Q, b: &Q) -> QuantityResult<Q> {
    ensure_same_dimension(a.dimension(), b.dimension())?;
    Ok(if a.standard_value() < b.standard_value() {
        a.clone()
    } else {
        b.clone()
    })
}

/// The larger of two values of the same dimension; `b` on ties.
///
/// # Errors
///
/// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
pub fn max<Q: Dimensioned>(a: &Q, b: &Q) -> QuantityResult<Q> {
    ensure_same_dimension(a.dimension(), b.dimension())?;
    Ok(if a.standard_value() > b.standard_value() {
        a.clone()
    } else {
        b.clone()
    })
}

/// Checks that every item shares the first item's dimension, then keeps the
/// item for which `better(candidate, best)` holds. The first item wins ties.
fn select<'a, Q, I, F>(items: I, better: F) -> QuantityResult<Q>
where
    Q: Dimensioned + 'a,
    I: IntoIterator<Item = &'a Q>,
    F: Fn(f64, f64) -> bool,
{
    let mut iter = items.into_iter();
    let first = iter.next().ok_or(QuantityError::EmptyInput)?;
    let dimension = first.dimension();

    let mut best = first;
    for item in iter {
        ensure_same_dimension(dimension, item.dimension())?;
        if better(item.standard_value(), best.standard_value()) {
            best = item;
        }
    }
    Ok(best.clone())
}

/// The smallest of a non-empty collection of values of one dimension.
///
/// # Errors
///
/// Returns [`QuantityError::EmptyInput`] for an empty collection and
/// [`QuantityError::DimensionMismatch`] if any dimension differs from the first.
pub fn min_of<'a, Q, I>(items: I) -> QuantityResult<Q>
where
    Q: Dimensioned + 'a,
    I: IntoIterator<Item = &'a Q>,
{
    select(items, |candidate, best| candidate < best)
}

/// The largest of a non-empty collection of values of one dimension.
///
/// # Errors
///
/// Same as [`min_of`].
pub fn max_of<'a, Q, I>(items: I) -> QuantityResult<Q>
where
    Q: Dimensioned + 'a,
    I: IntoIterator<Item = &'a Q>,
{
    select(items, |candidate, best| candidate > best)
}

/// The larger absolute value of `a` and `b`, as a non-negative value.
///
/// # Errors
///
/// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
#[inline]
pub fn abs_envelope<Q: Dimensioned>(a: &Q, b: &Q) -> QuantityResult<Q> {
    max(&abs(a), &abs(b))
}

/// The largest absolute value in a non-empty collection.
///
/// # Errors
///
/// Same as [`min_of`].
pub fn abs_envelope_of<'a, Q, I>(items: I) -> QuantityResult<Q>
where
    Q: Dimensioned + 'a,
    I: IntoIterator<Item = &'a Q>,
{
    let absolutes: Vec<Q> = items.into_iter().map(abs).collect();
    max_of(&absolutes)
}

/// Whichever of `a` and `b` has the larger magnitude, sign preserved; `b` on
/// ties.
///
/// # Examples
///
/// ```rust
/// # use structunits::{math, prelude::*};
/// let governing = math::abs_signed_envelope(
///     &Moment::from_kip_feet(-40.0),
///     &Moment::from_kip_feet(25.0),
/// )
/// .unwrap();
/// assert!((governing.kip_feet() + 40.0).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
pub fn abs_signed_envelope<Q: Dimensioned>(a: &Q, b: &Q) -> QuantityResult<Q> {
    ensure_same_dimension(a.dimension(), b.dimension())?;
    Ok(if a.standard_value().abs() > b.standard_value().abs() {
        a.clone()
    } else {
        b.clone()
    })
}

/// Same as [`min`].
#[inline]
pub fn min_value_envelope<Q: Dimensioned>(a: &Q, b: &Q) -> QuantityResult<Q> {
    min(a, b)
}

/// Same as [`max`].
#[inline]
pub fn max_value_envelope<Q: Dimensioned>(a: &Q, b: &Q) -> QuantityResult<Q> {
    max(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        measure::{Area, Force, Length, LengthToThe4th, Moment},
        units::LengthUnit,
    };
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use structunits_core::{dimension::Dimension, family::Family};

    #[test]
    fn test_sqrt_of_square_recovers_length() {
        let area = Length::from_inches(10.0).powi(2);
        assert_eq!(area.family(), Family::Area);
        assert_relative_eq!(area.standard_value(), 100.0);

        let side = sqrt(&area);
        assert_eq!(side.family(), Family::Length);
        assert_relative_eq!(side.convert_to(LengthUnit::Inch).unwrap(), 10.0);
    }

    #[test]
    fn test_third_and_fourth_roots() {
        let cube = third_root(&Length::from_inches(3.0).powi(3));
        assert_eq!(cube.family(), Family::Length);
        assert_relative_eq!(cube.standard_value(), 3.0, max_relative = 1e-12);

        let fourth = fourth_root(&LengthToThe4th::from_inches_to_the_4th(16.0));
        assert_eq!(fourth.family(), Family::Length);
        assert_relative_eq!(fourth.standard_value(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_sqrt_of_length_is_dimensionless() {
        let r = sqrt(&Length::from_inches(9.0));
        assert_eq!(r.dimension(), Dimension::UNITLESS);
        assert_relative_eq!(r.standard_value(), 3.0);
    }

    #[test]
    fn test_sqrt_of_negative_is_nan() {
        assert!(sqrt(&Area::from_square_inches(-1.0)).standard_value().is_nan());
    }

    #[test]
    fn test_min_returns_operand() {
        let a = Length::from_inches(10.0);
        let b = Length::from_feet(1.0);
        let smaller = min(&a, &b).unwrap();
        assert_eq!(smaller.display_unit(), LengthUnit::Inch);
        assert_relative_eq!(smaller.inches(), 10.0);

        let larger = max(&a, &b).unwrap();
        assert_eq!(larger.display_unit(), LengthUnit::Foot);
    }

    #[test]
    fn test_ties_go_to_second_operand() {
        let a = Length::from_feet(1.0);
        let b = Length::from_inches(12.0);
        assert_eq!(min(&a, &b).unwrap().display_unit(), LengthUnit::Inch);
        assert_eq!(max(&a, &b).unwrap().display_unit(), LengthUnit::Inch);
        assert_eq!(abs_signed_envelope(&a, &(-b)).unwrap().standard_value(), -12.0);
    }

    #[test]
    fn test_min_of_mixed_dimensions_fails() {
        let values = [
            Length::from_inches(1.0).into_quantity(),
            Force::from_kips(1.0).into_quantity(),
        ];
        assert_eq!(
            min_of(&values),
            Err(QuantityError::DimensionMismatch {
                expected: Dimension::LENGTH,
                actual: Dimension::FORCE,
            })
        );
        assert!(min(&values[0], &values[1]).is_err());
    }

    #[test]
    fn test_empty_input() {
        let empty: [Length; 0] = [];
        assert_eq!(min_of(&empty), Err(QuantityError::EmptyInput));
        assert_eq!(max_of(&empty), Err(QuantityError::EmptyInput));
        assert_eq!(abs_envelope_of(&empty), Err(QuantityError::EmptyInput));
    }

    #[test]
    fn test_min_and_max_of_random_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<Force> = (0..64)
            .map(|_| Force::from_kips(rng.random_range(-500.0..500.0)))
            .collect();

        let expected_min = values.iter().map(|f| f.kips()).fold(f64::INFINITY, f64::min);
        let expected_max = values.iter().map(|f| f.kips()).fold(f64::NEG_INFINITY, f64::max);
        let expected_abs = values.iter().map(|f| f.kips().abs()).fold(0.0, f64::max);

        assert_eq!(min_of(&values).unwrap().kips(), expected_min);
        assert_eq!(max_of(&values).unwrap().kips(), expected_max);
        assert_eq!(abs_envelope_of(&values).unwrap().kips(), expected_abs);
    }

    #[test]
    fn test_envelopes() {
        let pos = Moment::from_kip_feet(25.0);
        let neg = Moment::from_kip_feet(-40.0);
        assert_relative_eq!(abs_envelope(&pos, &neg).unwrap().kip_feet(), 40.0);
        assert_relative_eq!(abs_signed_envelope(&pos, &neg).unwrap().kip_feet(), -40.0);
        assert_relative_eq!(min_value_envelope(&pos, &neg).unwrap().kip_feet(), -40.0);
        assert_relative_eq!(max_value_envelope(&pos, &neg).unwrap().kip_feet(), 25.0);
    }

    #[test]
    fn test_abs_keeps_family_for_dynamic_quantities() {
        let q = (-Force::from_kips(2.0)).into_quantity();
        let a = abs(&q);
        assert_eq!(a.family(), Family::Force);
        assert_relative_eq!(a.standard_value(), 2.0);
    }
}

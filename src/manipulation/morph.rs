//! Aligns two splines and interpolates between them.
//!
//! Morphing linearly interpolates the control points and knots of two
//! splines. That requires both to have the same degree and the same number
//! of control points and knots; [`align`] establishes this without
//! changing either curve's shape, by elevating the lower degree and
//! inserting the union of the interior knots into both sides. For smooth
//! transitions, align the splines once and morph the aligned pair
//! repeatedly instead of paying the alignment on every frame.

use crate::error::{Result, SplineError};
use crate::manipulation::{elevate, insert};
use crate::spline::Spline;
use crate::types::knots_equal;

/// Returns versions of `s1` and `s2` with identical degree and identical
/// numbers of control points and knots, without changing either shape.
///
/// `epsilon` is forwarded to
/// [`elevate_degree`](crate::manipulation::elevate::elevate_degree) for
/// deciding whether two control points coincide.
pub fn align(s1: &Spline, s2: &Spline, epsilon: f64) -> Result<(Spline, Spline)> {
    if s1.dimension() != s2.dimension() {
        return Err(SplineError::DimensionsDiffer {
            first: s1.dimension(),
            second: s2.dimension(),
        });
    }
    let mut first = if s1.degree() < s2.degree() {
        elevate::elevate_degree(s1, s2.degree() - s1.degree(), epsilon)?
    } else {
        s1.clone()
    };
    let mut second = if s2.degree() < s1.degree() {
        elevate::elevate_degree(s2, s1.degree() - s2.degree(), epsilon)?
    } else {
        s2.clone()
    };
    insert_missing(&mut first, &second)?;
    insert_missing(&mut second, &first)?;
    Ok((first, second))
}

/// Raises the multiplicity of every interior knot of `src` in `dst` to at
/// least its multiplicity in `src`.
fn insert_missing(dst: &mut Spline, src: &Spline) -> Result<()> {
    let (min, max) = src.domain();
    let mut values: Vec<(f64, usize)> = Vec::new();
    for i in src.degree() + 1..src.num_control_points() {
        let u = src.knots()[i];
        if knots_equal(u, min) || knots_equal(u, max) {
            continue;
        }
        if values.last().is_none_or(|&(last, _)| !knots_equal(last, u)) {
            values.push((u, src.multiplicity(u)));
        }
    }
    for (u, multiplicity) in values {
        let present = dst.multiplicity(u);
        if present < multiplicity {
            insert::insert(dst, u, multiplicity - present)?;
        }
    }
    Ok(())
}

/// Interpolates between `start` and `end` at time `t`.
///
/// `t` is clamped to `[0, 1]`: 0 yields `start` and 1 yields `end` (after
/// alignment). If the splines are not aligned, they are aligned
/// internally with `epsilon`; pre-align with [`align`] when morphing
/// repeatedly.
pub fn morph(start: &Spline, end: &Spline, t: f64, epsilon: f64) -> Result<Spline> {
    let t = t.clamp(0.0, 1.0);
    let aligned;
    let (first, second) = if start.degree() == end.degree()
        && start.dimension() == end.dimension()
        && start.num_control_points() == end.num_control_points()
        && start.num_knots() == end.num_knots()
    {
        (start, end)
    } else {
        aligned = align(start, end, epsilon)?;
        (&aligned.0, &aligned.1)
    };

    let points = (1.0 - t) * first.control_points() + t * second.control_points();
    let knots = (1.0 - t) * first.knots() + t * second.knots();
    Ok(Spline::from_raw(first.degree(), points, knots))
}

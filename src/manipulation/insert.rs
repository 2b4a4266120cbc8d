//! Inserts additional knots into a spline without changing its shape.
//!
//! Knot insertion by Boehm's algorithm subdivides the control polygon with
//! affine combinations: inserting `u` once replaces the `p` control points
//! of the span containing `u` by `p + 1` new ones. Repeated insertion
//! raises the multiplicity of `u`, up to the order of the spline, at which
//! point the curve decomposes at `u` (see
//! [`split`] and [`beziers`](crate::manipulation::beziers)).

use crate::error::{Result, SplineError};
use crate::spline::Spline;
use crate::types::{knots_equal, MatD};
use crate::MAX_NUM_KNOTS;

/// Inserts `u` into the knot vector of `spline` `num` times and returns
/// the index of the last instance of `u` in the result.
///
/// # Errors
///
/// [`UndefinedParameter`](SplineError::UndefinedParameter) if `u` lies
/// outside the domain, and [`Multiplicity`](SplineError::Multiplicity) if
/// the multiplicity of `u` would exceed the order of the spline.
pub fn insert(spline: &mut Spline, u: f64, num: usize) -> Result<usize> {
    let u = spline.checked_knot(u)?;
    let order = spline.order();
    let (k, s) = spline.locate(u);
    let u = if knots_equal(u, spline.knots()[k]) { spline.knots()[k] } else { u };
    if s + num > order {
        return Err(SplineError::Multiplicity { knot: u, multiplicity: s + num, order });
    }
    if spline.num_knots() + num > MAX_NUM_KNOTS {
        return Err(SplineError::TooManyKnots {
            requested: spline.num_knots() + num,
            max: MAX_NUM_KNOTS,
        });
    }
    for _ in 0..num {
        insert_once(spline, u);
    }
    Ok(spline.locate(u).0)
}

/// Inserts `u` until its multiplicity equals the order of the spline,
/// making `u` a point of discontinuity that separates two independent
/// halves. Returns the index of the last instance of `u`.
///
/// At the domain boundaries nothing is inserted and the index of the
/// respective boundary knot is returned.
///
/// # Errors
///
/// [`UndefinedParameter`](SplineError::UndefinedParameter) if `u` lies
/// outside the domain.
pub fn split(spline: &mut Spline, u: f64) -> Result<usize> {
    let u = spline.checked_knot(u)?;
    let (min, max) = spline.domain();
    if knots_equal(u, min) || knots_equal(u, max) {
        return Ok(spline.locate(u).0);
    }
    let (_, s) = spline.locate(u);
    let order = spline.order();
    insert(spline, u, order - s)
}

/// A single round of Boehm's algorithm. Expects `u` to lie within the
/// domain with multiplicity below the order.
fn insert_once(spline: &mut Spline, u: f64) {
    let p = spline.degree();
    let (l, _) = spline.locate(u);
    let knots = spline.knots();
    let points = spline.control_points();
    let n = points.ncols();
    let dim = points.nrows();

    let new_knots = knots.clone().insert_row(l + 1, u);

    // Only the control points `l - p + 1` to `l` change.
    let mut new_points = MatD::zeros(dim, n + 1);
    let head = l + 1 - p;
    new_points.columns_mut(0, head).copy_from(&points.columns(0, head));
    let tail = n - l;
    new_points
        .columns_mut(n + 1 - tail, tail)
        .copy_from(&points.columns(n - tail, tail));
    for i in head..=l {
        let a = (u - knots[i]) / (knots[i + p] - knots[i]);
        let q = (1.0 - a) * points.column(i - 1) + a * points.column(i);
        new_points.set_column(i, &q);
    }

    spline.set_raw(new_points, new_knots);
}

//! Derives a spline.
//!
//! The derivative of a spline of degree `p > 0` with `n` control points
//! `P_i` and knots `u_i` is a spline of degree `p - 1` with `n - 1` control
//! points
//!
//! `P'_i = p * (P_i+1 - P_i) / (u_i+p+1 - u_i+1)`
//!
//! and a knot vector equal to the original's without its first and last
//! knot. For clamped knot vectors the boundary knots of the derivative
//! thereby keep multiplicity `p`. Where the denominator vanishes, the
//! spline carries a knot of full multiplicity and is discontinuous; the
//! derivative then drops the collapsed control point and one instance of
//! the knot, so that splines composed of stacked Bézier segments stay in
//! that form. The derivative of a point (degree 0) is a point at the
//! origin.

use crate::error::{Result, SplineError};
use crate::spline::Spline;
use crate::types::{knots_equal, MatD, VecD};

/// Returns the `n`-th derivative of `spline`.
///
/// `epsilon` is the maximum distance allowed between the two sides of a
/// discontinuity. If it is negative, discontinuities are not checked and
/// the derivative is assembled from both sides as-is.
///
/// # Errors
///
/// [`Underivable`](SplineError::Underivable) if the spline is
/// discontinuous at an interior knot whose gap exceeds `epsilon`.
pub fn derive(spline: &Spline, n: usize, epsilon: f64) -> Result<Spline> {
    let mut derivative = spline.clone();
    for _ in 0..n {
        derivative = derive_once(&derivative, epsilon)?;
    }
    Ok(derivative)
}

fn derive_once(spline: &Spline, epsilon: f64) -> Result<Spline> {
    let p = spline.degree();
    let dim = spline.dimension();
    if p == 0 {
        let (min, max) = spline.domain();
        let mut knots = VecD::zeros(2);
        knots[0] = min;
        knots[1] = max;
        return Ok(Spline::from_raw(0, MatD::zeros(dim, 1), knots));
    }

    let n = spline.num_control_points();
    let knots = spline.knots();
    let points = spline.control_points();

    let mut columns: Vec<VecD> = Vec::with_capacity(n - 1);
    let mut collapsed: Vec<usize> = Vec::new();
    for i in 0..n - 1 {
        let denominator = knots[i + p + 1] - knots[i + 1];
        if knots_equal(denominator, 0.0) {
            let gap = (points.column(i + 1) - points.column(i)).norm();
            if epsilon >= 0.0 && gap > epsilon {
                return Err(SplineError::Underivable { u: knots[i + 1], gap, epsilon });
            }
            collapsed.push(i + 1);
        } else {
            columns.push(p as f64 / denominator * (points.column(i + 1) - points.column(i)));
        }
    }

    // Drop the first and the last knot, plus one instance of every
    // collapsed knot, keeping stacked segments at full multiplicity of the
    // lowered order.
    let mut new_knots = VecD::zeros(knots.len() - 2 - collapsed.len());
    let mut j = 0;
    for i in 1..knots.len() - 1 {
        if collapsed.contains(&i) {
            continue;
        }
        new_knots[j] = knots[i];
        j += 1;
    }

    Ok(Spline::from_raw(p - 1, MatD::from_columns(&columns), new_knots))
}

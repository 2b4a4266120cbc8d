//! Straightens a spline towards the line connecting its outer control
//! points.
//!
//! Every interior control point is linearly interpolated between its
//! position on the straight-line interpolant (tension 0) and its original
//! position (tension 1), a technique Holten2006 calls "straightening" (see
//! the [crate literature](crate)). The outer control points stay fixed.

use crate::spline::Spline;

/// Returns `spline` with its control points straightened according to
/// `tension`: 0 yields a line connecting the first and the last control
/// point, 1 keeps the original shape.
///
/// Values outside `[0, 1]` are permitted; the resulting shape is undefined
/// but no error occurs.
pub fn tension(spline: &Spline, tension: f64) -> Spline {
    let n = spline.num_control_points();
    let mut out = spline.clone();
    if n < 2 {
        return out;
    }
    let points = spline.control_points();
    let first = points.column(0).clone_owned();
    let last = points.column(n - 1).clone_owned();
    for i in 1..n - 1 {
        let fraction = i as f64 / (n - 1) as f64;
        let chord = &first + fraction * (&last - &first);
        let point = (1.0 - tension) * chord + tension * points.column(i);
        out.points_mut().set_column(i, &point);
    }
    out
}

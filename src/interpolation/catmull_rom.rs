//! Catmull–Rom interpolation.
//!
//! A Catmull–Rom spline passes through its control points with tangents
//! derived from the neighbouring points. The knot parameterization is
//! governed by the exponent `alpha` on the chord lengths: 0 is uniform,
//! 0.5 centripetal (avoiding cusps and self-intersections), and 1 chordal
//! (see eqs. (9.4) and (9.5) in Piegl1997 for the underlying
//! parameterization family). Each segment is converted to a cubic Bézier
//! and the segments are concatenated into a clamped spline.

use crate::error::{Result, SplineError};
use crate::spline::{KnotLayout, Spline};
use crate::types::{MatD, VecD};

/// Interpolates a piecewise cubic spline through the columns of `points`.
///
/// Successive points within `|epsilon|` of each other are filtered out to
/// avoid vanishing chords; if a single point remains, a spline of degree 0
/// is returned. `alpha` is clamped to `[0, 1]` (0 uniform, 0.5
/// centripetal, 1 chordal). The optional `first` and `last` points extend
/// the sequence for the tangents of the outer segments; when absent (or
/// within `|epsilon|` of the respective endpoint) they are generated by
/// reflecting the neighbouring point.
///
/// # Errors
///
/// [`NoPoints`](SplineError::NoPoints) if `points` is empty and
/// [`DimensionZero`](SplineError::DimensionZero) if its rows are.
pub fn interpolate_catmull_rom(
    points: &MatD,
    alpha: f64,
    first: Option<&VecD>,
    last: Option<&VecD>,
    epsilon: f64,
) -> Result<Spline> {
    let dim = points.nrows();
    let num = points.ncols();
    if dim == 0 {
        return Err(SplineError::DimensionZero);
    }
    if num == 0 {
        return Err(SplineError::NoPoints);
    }
    let epsilon = epsilon.abs();
    let alpha = alpha.clamp(0.0, 1.0);

    // Filter out successive points with vanishing distance.
    let mut kept: Vec<VecD> = vec![points.column(0).clone_owned()];
    for i in 1..num {
        let candidate = points.column(i);
        if (candidate - kept.last().expect("kept is non-empty")).norm() > epsilon {
            kept.push(candidate.clone_owned());
        }
    }
    if kept.len() == 1 {
        return Spline::with_control_points(
            MatD::from_columns(&kept),
            0,
            KnotLayout::Clamped,
        );
    }

    let m = kept.len() - 1;
    let first = match first {
        Some(point) if point.len() == dim && (point - &kept[0]).norm() > epsilon => point.clone(),
        _ => 2.0 * &kept[0] - &kept[1],
    };
    let last = match last {
        Some(point) if point.len() == dim && (point - &kept[m]).norm() > epsilon => point.clone(),
        _ => 2.0 * &kept[m] - &kept[m - 1],
    };

    let mut bezier = MatD::zeros(dim, 4 * m);
    for i in 0..m {
        let p0 = if i == 0 { &first } else { &kept[i - 1] };
        let p1 = &kept[i];
        let p2 = &kept[i + 1];
        let p3 = if i + 2 <= m { &kept[i + 2] } else { &last };
        let (inner_first, inner_second) = inner_points(p0, p1, p2, p3, alpha);
        bezier.set_column(4 * i, p1);
        bezier.set_column(4 * i + 1, &inner_first);
        bezier.set_column(4 * i + 2, &inner_second);
        bezier.set_column(4 * i + 3, p2);
    }
    Spline::with_control_points(bezier, 3, KnotLayout::Beziers)
}

/// The inner Bézier points of the segment from `p1` to `p2`, derived from
/// the parameterized Catmull–Rom tangents.
fn inner_points(p0: &VecD, p1: &VecD, p2: &VecD, p3: &VecD, alpha: f64) -> (VecD, VecD) {
    let t01 = (p1 - p0).norm().powf(alpha);
    let t12 = (p2 - p1).norm().powf(alpha);
    let t23 = (p3 - p2).norm().powf(alpha);

    let tangent_start = t12
        * ((t12 / (t01 + t12)) * ((p1 - p0) / t01) + (t01 / (t01 + t12)) * ((p2 - p1) / t12));
    let tangent_end = t12
        * ((t23 / (t12 + t23)) * ((p2 - p1) / t12) + (t12 / (t12 + t23)) * ((p3 - p2) / t23));

    (p1 + tangent_start / 3.0, p2 - tangent_end / 3.0)
}

//! Cubic spline interpolation with natural end conditions.
//!
//! The interpolant is the C² cubic through all data points whose second
//! derivative vanishes at both ends. It is computed via the B-spline
//! points `s_i` of the natural cubic, which satisfy the tridiagonal system
//!
//! `s_i-1 + 4 s_i + s_i+1 = 6 K_i`
//!
//! for the interior data points `K_i`, with `s_0 = K_0` and `s_m = K_m`.
//! The system is solved with the Thomas algorithm, and segment `i` is
//! emitted as the cubic Bézier
//!
//! `K_i, (2 s_i + s_i+1) / 3, (s_i + 2 s_i+1) / 3, K_i+1`.

use crate::error::{Result, SplineError};
use crate::spline::{KnotLayout, Spline};
use crate::types::MatD;

/// Interpolates a C² cubic spline through the columns of `points` with
/// natural end conditions, emitted as stacked Bézier segments. A single
/// input point yields a spline of degree 0.
///
/// # Errors
///
/// [`NoPoints`](SplineError::NoPoints) if `points` is empty and
/// [`DimensionZero`](SplineError::DimensionZero) if its rows are.
pub fn interpolate_cubic_natural(points: &MatD) -> Result<Spline> {
    let dim = points.nrows();
    let num = points.ncols();
    if dim == 0 {
        return Err(SplineError::DimensionZero);
    }
    if num == 0 {
        return Err(SplineError::NoPoints);
    }
    if num == 1 {
        return Spline::with_control_points(points.clone(), 0, KnotLayout::Clamped);
    }

    let segments = num - 1;
    let mut s = MatD::zeros(dim, num);
    s.set_column(0, &points.column(0));
    s.set_column(segments, &points.column(segments));

    if segments >= 2 {
        let unknowns = segments - 1;
        let mut rhs = MatD::zeros(dim, unknowns);
        for i in 0..unknowns {
            rhs.set_column(i, &(6.0 * points.column(i + 1)));
        }
        let head = rhs.column(0) - s.column(0);
        rhs.set_column(0, &head);
        let tail = rhs.column(unknowns - 1) - s.column(segments);
        rhs.set_column(unknowns - 1, &tail);

        // Thomas algorithm for the [1 4 1] system.
        let mut factors = vec![0.0; unknowns];
        factors[0] = 0.25;
        let first = rhs.column(0) * 0.25;
        rhs.set_column(0, &first);
        for i in 1..unknowns {
            let w = 1.0 / (4.0 - factors[i - 1]);
            factors[i] = w;
            let column = (rhs.column(i) - rhs.column(i - 1)) * w;
            rhs.set_column(i, &column);
        }
        for i in (0..unknowns - 1).rev() {
            let column = rhs.column(i) - factors[i] * rhs.column(i + 1);
            rhs.set_column(i, &column);
        }
        for i in 0..unknowns {
            s.set_column(i + 1, &rhs.column(i));
        }
    }

    let mut bezier = MatD::zeros(dim, 4 * segments);
    for i in 0..segments {
        let inner_first = (2.0 * s.column(i) + s.column(i + 1)) / 3.0;
        let inner_second = (s.column(i) + 2.0 * s.column(i + 1)) / 3.0;
        bezier.set_column(4 * i, &points.column(i));
        bezier.set_column(4 * i + 1, &inner_first);
        bezier.set_column(4 * i + 2, &inner_second);
        bezier.set_column(4 * i + 3, &points.column(i + 1));
    }
    Spline::with_control_points(bezier, 3, KnotLayout::Beziers)
}

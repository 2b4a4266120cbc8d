//! Scalar and buffer primitives shared across the crate.
//!
//! Point data is stored in [nalgebra] types: a spline of dimension `d` with
//! `n` control points keeps them in a `d × n` matrix with one point per
//! column, and knot vectors are plain column vectors. The aliases below fix
//! the scalar type to `f64` for the whole crate.

use nalgebra::{DMatrix, DVector, Dyn, MatrixView, U1};

use crate::KNOT_EPSILON;

/// Dynamically sized column vector, used for knot vectors and single points.
pub type VecD = DVector<f64>;

/// Dynamically sized matrix storing one point per column.
pub type MatD = DMatrix<f64>;

/// Immutable view of a single point (one matrix column).
pub type PointView<'a> = MatrixView<'a, f64, Dyn, U1, U1, Dyn>;

/// Immutable view of a range of consecutive points.
pub type PointsView<'a> = MatrixView<'a, f64, Dyn, Dyn, U1, Dyn>;

/// Checks whether the knots `x` and `y` are equal with respect to
/// [`KNOT_EPSILON`](crate::KNOT_EPSILON).
///
/// This relation drives multiplicity counting, knot location, and the
/// monotonicity validation of knot vectors.
pub fn knots_equal(x: f64, y: f64) -> bool {
    (x - y).abs() <= KNOT_EPSILON
}

/// Returns the Euclidean distance of the points `x` and `y`.
pub fn distance(x: &VecD, y: &VecD) -> f64 {
    (x - y).norm()
}

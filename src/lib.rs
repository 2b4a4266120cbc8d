//! `splinekit` is a Rust library for B-spline, NURBS, and Bézier curves of
//! arbitrary degree and dimensionality based on [nalgebra].
//!
//! ## Features
//! - Create `N`-dimensional (`x = 1, 2, 3,...`) splines of arbitrary
//!   polynomial degree `p` with [opened, clamped, or Bézier-type knot
//!   vectors][spline::KnotLayout]
//! - [Evaluation][spline::Spline::eval] with De Boor's algorithm, returning
//!   the full [computation net][spline::DeBoorNet]
//! - [Knot insertion and splitting][manipulation::insert]
//! - [Derivatives][manipulation::derive] of any order
//! - [Bézier decomposition][manipulation::beziers] and
//!   [degree elevation][manipulation::elevate]
//! - [Alignment and morphing][manipulation::morph] between two splines
//! - [Tension][manipulation::tension] (straightening towards the chord)
//! - [Cubic natural and Catmull–Rom interpolation][interpolation]
//! - [Canonical JSON serialization and persistence][serialization]
//!
//! ## Quick start
//!
//! ```
//! use nalgebra::dmatrix;
//! use splinekit::{KnotLayout, Spline};
//!
//! // A clamped cubic Bézier curve with four 2D control points.
//! let spline = Spline::with_control_points(
//!     dmatrix![
//!         0.0, 1.0, 2.0, 3.0; // x
//!         0.0, 2.0, 2.0, 0.0; // y
//!     ],
//!     3,
//!     KnotLayout::Clamped,
//! )
//! .unwrap();
//!
//! let net = spline.eval(0.5).unwrap();
//! assert_eq!(net.result(), nalgebra::dvector![1.5, 1.5]);
//! ```
//!
//! ## NURBS
//!
//! Rational splines are stored in homogeneous coordinates: the last
//! component of each control point holds the weight `w` and the preceding
//! components are pre-multiplied by `w`. A rational curve in 3D therefore
//! has dimension 4. The evaluation engine is unaware of rationality;
//! dehomogenize results as needed. Weights must not be negative, and a
//! weight of zero leaves the curve undefined.
//!
//! ## Precision
//!
//! All computations use `f64`. [`CONTROL_POINT_EPSILON`] is the
//! double-precision default for deciding whether two points coincide.
//!
//! ## Literature
//! |            |                                                                                                                        |
//! |-----------:|:-----------------------------------------------------------------------------------------------------------------------|
//! | Piegl1997  | Piegl, L., Tiller, W. The NURBS Book. Monographs in Visual Communication. Springer, Berlin, Heidelberg, 2nd ed., 1997. |
//! | deBoor1978 | de Boor, C. A Practical Guide to Splines. Applied Mathematical Sciences 27, Springer, New York, 1978.                  |
//! | Holten2006 | Holten, D. Hierarchical edge bundles: Visualization of adjacency relations in hierarchical data. IEEE TVCG 12.5, 2006. |

pub mod error;
pub mod interpolation;
pub mod manipulation;
pub mod serialization;
pub mod spline;
pub mod types;

pub use error::SplineError;
pub use spline::{DeBoorNet, KnotLayout, Spline};

/// The maximum number of knots a spline can have.
///
/// Strongly related to [`KNOT_EPSILON`]: the more knots a spline may carry,
/// the more precise the epsilon has to be for knots to stay distinguishable.
/// By default `MAX_NUM_KNOTS = 1 / KNOT_EPSILON`; preserve this relation
/// when changing either value.
pub const MAX_NUM_KNOTS: usize = 10_000;

/// If the distance between two knots falls below this threshold, they are
/// considered equal.
///
/// Must be positive. See [`MAX_NUM_KNOTS`] for the coupling between the two
/// constants.
pub const KNOT_EPSILON: f64 = 1e-4;

/// If the distance between two (control) points is less than or equal to
/// this threshold, they are considered equal.
///
/// Not used directly by the core algorithms; it serves as a viable default
/// for the epsilon parameters of [`manipulation::elevate::elevate_degree`],
/// [`manipulation::morph::align`], and friends.
pub const CONTROL_POINT_EPSILON: f64 = 1e-5;

/// The minimum of the domain of newly created splines.
///
/// Only used at construction time; afterwards the domain of a spline
/// follows its knot vector.
pub const DOMAIN_DEFAULT_MIN: f64 = 0.0;

/// The maximum of the domain of newly created splines.
///
/// Only used at construction time; afterwards the domain of a spline
/// follows its knot vector.
pub const DOMAIN_DEFAULT_MAX: f64 = 1.0;

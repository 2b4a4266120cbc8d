//! Implements the spline record, its constructors, and its field access.
//!
//! A B-spline curve is defined by a degree `p`, a sequence of `n`
//! control points `P_i` of dimension `d`, and a non-decreasing knot vector
//! `U` of `m = n + p + 1` scalar values. The curve is parametrized over the
//! domain `[u_p, u_n]`. Bézier curves, NURBS, lines, and points are all
//! representable: a Bézier curve is a spline with `n = p + 1` and a clamped
//! knot vector, a line is a Bézier curve of degree 1, and a point one of
//! degree 0. NURBS store their weights as an additional point component
//! (see the [crate docs](crate)).
//!
//! The representation upholds a set of invariants after every public
//! operation that returns `Ok`: `n > p`, the knot vector is non-decreasing
//! under [`knots_equal`], no knot exceeds multiplicity `p + 1`, `d ≥ 1`,
//! and `m = n + p + 1`.

use crate::error::{Result, SplineError};
use crate::types::{knots_equal, MatD, VecD};
use crate::{manipulation, DOMAIN_DEFAULT_MAX, DOMAIN_DEFAULT_MIN, MAX_NUM_KNOTS};

mod bisect;
mod eval;

pub use eval::DeBoorNet;

/// Describes the structure of the knot vector at construction time.
///
/// All layouts span the default domain
/// [[`DOMAIN_DEFAULT_MIN`](crate::DOMAIN_DEFAULT_MIN),
/// [`DOMAIN_DEFAULT_MAX`](crate::DOMAIN_DEFAULT_MAX)].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnotLayout {
    /// Uniformly spaced knots with opened end knots. The curve does not
    /// pass through its outer control points.
    Opened,
    /// End knots clamped to the domain boundaries with multiplicity
    /// `order`, interior knots uniformly spaced. The curve passes through
    /// its outer control points.
    Clamped,
    /// Every distinct knot has multiplicity `order`, stacking whole Bézier
    /// segments. Requires the number of control points to be a multiple of
    /// the order.
    Beziers,
}

/// A B-spline of arbitrary degree and dimension.
///
/// The spline exclusively owns its two buffers. [`Clone`] performs a deep
/// copy; dropping the value releases both buffers. Transformations take the
/// spline by reference and return a fresh, independent result, so a failed
/// transformation never corrupts its input.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    degree: usize,
    /// One control point per column.
    points: MatD,
    knots: VecD,
}

impl Spline {
    /// Creates a spline with `num_control_points` zero-initialized control
    /// points of dimension `dimension` and a knot vector of the requested
    /// `layout`.
    ///
    /// # Errors
    ///
    /// [`DimensionZero`](SplineError::DimensionZero) if `dimension` is 0,
    /// [`DegreeTooLarge`](SplineError::DegreeTooLarge) if
    /// `degree >= num_control_points`,
    /// [`BezierSegments`](SplineError::BezierSegments) if `layout` is
    /// [`KnotLayout::Beziers`] and the control points do not form whole
    /// segments, and [`TooManyKnots`](SplineError::TooManyKnots) if the
    /// knot vector would exceed [`MAX_NUM_KNOTS`](crate::MAX_NUM_KNOTS).
    pub fn new(
        num_control_points: usize,
        dimension: usize,
        degree: usize,
        layout: KnotLayout,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(SplineError::DimensionZero);
        }
        if degree >= num_control_points {
            return Err(SplineError::DegreeTooLarge { degree, num_control_points });
        }
        let knots = Self::knot_vector(layout, degree, num_control_points)?;
        Ok(Spline { degree, points: MatD::zeros(dimension, num_control_points), knots })
    }

    /// Creates a spline like [`Spline::new`] and copies `points` into the
    /// control point buffer. Dimension and count are implied by the matrix
    /// shape (one point per column).
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use splinekit::{KnotLayout, Spline};
    ///
    /// // A quadratic with five 3D control points.
    /// let spline = Spline::with_control_points(
    ///     dmatrix![
    ///     // 1    2    3    4    5
    ///      -2.0,-2.0,-1.0, 0.5, 1.5; // x
    ///      -1.0, 0.0, 1.0, 1.0, 2.0; // y
    ///       0.0, 0.5, 1.5,-0.5,-1.0; // z
    ///     ],
    ///     2,
    ///     KnotLayout::Clamped,
    /// )
    /// .unwrap();
    /// assert_eq!(spline.domain(), (0.0, 1.0));
    /// ```
    pub fn with_control_points(points: MatD, degree: usize, layout: KnotLayout) -> Result<Self> {
        let mut spline = Self::new(points.ncols(), points.nrows(), degree, layout)?;
        spline.points = points;
        Ok(spline)
    }

    /// Assembles a spline from buffers that are known to be consistent.
    pub(crate) fn from_raw(degree: usize, points: MatD, knots: VecD) -> Self {
        debug_assert!(points.nrows() >= 1);
        debug_assert!(points.ncols() > degree);
        debug_assert_eq!(knots.len(), points.ncols() + degree + 1);
        Spline { degree, points, knots }
    }

    /// Replaces both buffers at once.
    pub(crate) fn set_raw(&mut self, points: MatD, knots: VecD) {
        debug_assert_eq!(knots.len(), points.ncols() + self.degree + 1);
        self.points = points;
        self.knots = knots;
    }

    fn knot_vector(layout: KnotLayout, degree: usize, n: usize) -> Result<VecD> {
        let order = degree + 1;
        let m = n + order;
        if m > MAX_NUM_KNOTS {
            return Err(SplineError::TooManyKnots { requested: m, max: MAX_NUM_KNOTS });
        }
        let min = DOMAIN_DEFAULT_MIN;
        let span = DOMAIN_DEFAULT_MAX - DOMAIN_DEFAULT_MIN;
        let mut knots = VecD::zeros(m);
        match layout {
            KnotLayout::Opened => {
                for i in 0..m {
                    knots[i] = min + span * i as f64 / (m - 1) as f64;
                }
            }
            KnotLayout::Clamped => {
                let segments = (n - degree) as f64;
                for i in 0..order {
                    knots[i] = DOMAIN_DEFAULT_MIN;
                    knots[m - 1 - i] = DOMAIN_DEFAULT_MAX;
                }
                for i in 1..n - degree {
                    knots[degree + i] = min + span * i as f64 / segments;
                }
            }
            KnotLayout::Beziers => {
                if n % order != 0 {
                    return Err(SplineError::BezierSegments { num_control_points: n, order });
                }
                let segments = n / order;
                for segment in 0..=segments {
                    let value = min + span * segment as f64 / segments as f64;
                    for i in 0..order {
                        knots[segment * order + i] = value;
                    }
                }
            }
        }
        Ok(knots)
    }

    /// The degree of the spline.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The order (degree + 1) of the spline.
    pub fn order(&self) -> usize {
        self.degree + 1
    }

    /// The number of components of each control point.
    pub fn dimension(&self) -> usize {
        self.points.nrows()
    }

    /// The number of control points.
    pub fn num_control_points(&self) -> usize {
        self.points.ncols()
    }

    /// The length of the flattened control point buffer
    /// (`num_control_points * dimension`).
    pub fn len_control_points(&self) -> usize {
        self.points.len()
    }

    /// The number of knots (`num_control_points + order`).
    pub fn num_knots(&self) -> usize {
        self.knots.len()
    }

    /// The control points, one per column.
    pub fn control_points(&self) -> &MatD {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut MatD {
        &mut self.points
    }

    /// The knot vector.
    pub fn knots(&self) -> &VecD {
        &self.knots
    }

    /// Returns a deep copy of the control point at `index`.
    pub fn control_point_at(&self, index: usize) -> Result<VecD> {
        if index >= self.num_control_points() {
            return Err(SplineError::IndexOutOfRange { index, len: self.num_control_points() });
        }
        Ok(self.points.column(index).clone_owned())
    }

    /// Sets the control point at `index`.
    pub fn set_control_point_at(&mut self, index: usize, point: &VecD) -> Result<()> {
        if index >= self.num_control_points() {
            return Err(SplineError::IndexOutOfRange { index, len: self.num_control_points() });
        }
        if point.len() != self.dimension() {
            return Err(SplineError::ShapeMismatch {
                rows: point.len(),
                cols: 1,
                dimension: self.dimension(),
                num_control_points: 1,
            });
        }
        self.points.set_column(index, point);
        Ok(())
    }

    /// Replaces all control points. The matrix shape must match the
    /// current dimension and count.
    pub fn set_control_points(&mut self, points: MatD) -> Result<()> {
        if points.nrows() != self.dimension() || points.ncols() != self.num_control_points() {
            return Err(SplineError::ShapeMismatch {
                rows: points.nrows(),
                cols: points.ncols(),
                dimension: self.dimension(),
                num_control_points: self.num_control_points(),
            });
        }
        self.points = points;
        Ok(())
    }

    /// Returns the knot at `index`.
    pub fn knot_at(&self, index: usize) -> Result<f64> {
        if index >= self.num_knots() {
            return Err(SplineError::IndexOutOfRange { index, len: self.num_knots() });
        }
        Ok(self.knots[index])
    }

    /// Sets the knot at `index`, revalidating monotonicity and multiplicity.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](SplineError::IndexOutOfRange) if `index` is out
    /// of range, [`DecreasingKnots`](SplineError::DecreasingKnots) if the
    /// new value breaks the non-decreasing order relative to its
    /// neighbours, and [`Multiplicity`](SplineError::Multiplicity) if it
    /// would raise a knot's multiplicity above the order.
    pub fn set_knot_at(&mut self, index: usize, knot: f64) -> Result<()> {
        if index >= self.num_knots() {
            return Err(SplineError::IndexOutOfRange { index, len: self.num_knots() });
        }
        let mut knots = self.knots.clone();
        knots[index] = knot;
        Self::validate_knots(&knots, self.order())?;
        self.knots = knots;
        Ok(())
    }

    /// Replaces the knot vector, revalidating count, monotonicity, and
    /// multiplicity.
    pub fn set_knots(&mut self, knots: VecD) -> Result<()> {
        if knots.len() != self.num_knots() {
            return Err(SplineError::KnotCount {
                expected: self.num_knots(),
                found: knots.len(),
            });
        }
        Self::validate_knots(&knots, self.order())?;
        self.knots = knots;
        Ok(())
    }

    /// Checks that `knots` is non-decreasing under the knot epsilon and
    /// that no knot exceeds multiplicity `order`.
    pub(crate) fn validate_knots(knots: &VecD, order: usize) -> Result<()> {
        let mut run_start = 0;
        for i in 1..knots.len() {
            if knots[i] < knots[i - 1] && !knots_equal(knots[i], knots[i - 1]) {
                return Err(SplineError::DecreasingKnots { index: i });
            }
            if knots_equal(knots[i], knots[run_start]) {
                if i - run_start + 1 > order {
                    return Err(SplineError::Multiplicity {
                        knot: knots[run_start],
                        multiplicity: i - run_start + 1,
                        order,
                    });
                }
            } else {
                run_start = i;
            }
        }
        Ok(())
    }

    /// The domain `[u_p, u_n]` over which the spline is defined.
    pub fn domain(&self) -> (f64, f64) {
        (self.knots[self.degree], self.knots[self.num_control_points()])
    }

    /// The multiplicity of `u` in the knot vector, counted under the knot
    /// epsilon.
    pub fn multiplicity(&self, u: f64) -> usize {
        self.knots.iter().filter(|&&knot| knots_equal(knot, u)).count()
    }

    /// Validates that `u` lies within the domain and snaps it onto the
    /// nearest domain boundary if it is within the knot epsilon.
    pub(crate) fn checked_knot(&self, u: f64) -> Result<f64> {
        let (min, max) = self.domain();
        if (u < min && !knots_equal(u, min)) || (u > max && !knots_equal(u, max)) {
            return Err(SplineError::UndefinedParameter { u, min, max });
        }
        if knots_equal(u, min) {
            Ok(min)
        } else if knots_equal(u, max) {
            Ok(max)
        } else {
            Ok(u)
        }
    }

    /// Returns the index `k` of the last knot with `u_k <= u` together with
    /// the multiplicity `s` of `u`, both under the knot epsilon. For `u`
    /// within the domain this is the span `[u_k, u_k+1)`, with the domain
    /// maximum belonging to the last non-empty span.
    pub(crate) fn locate(&self, u: f64) -> (usize, usize) {
        let mut k = 0;
        let mut s = 0;
        for (i, &knot) in self.knots.iter().enumerate() {
            if knots_equal(knot, u) {
                s += 1;
                k = i;
            } else if knot < u {
                k = i;
            } else {
                break;
            }
        }
        (k, s)
    }

    /// Drops the first `count` knots and control points.
    pub(crate) fn trim_front(&mut self, count: usize) {
        self.knots = self.knots.rows_range(count..).clone_owned();
        self.points = self.points.columns_range(count..).clone_owned();
    }

    /// Keeps the first `num_knots` knots and the matching number of
    /// control points.
    pub(crate) fn trim_back(&mut self, num_knots: usize) {
        self.knots = self.knots.rows(0, num_knots).clone_owned();
        self.points = self.points.columns(0, num_knots - self.order()).clone_owned();
    }

    /// Checks whether the distance of the spline's endpoints is less than
    /// or equal to `epsilon` for the derivative orders `0..degree`
    /// (starting with the zeroth derivative, the curve itself).
    ///
    /// A spline of degree 0 is trivially closed.
    pub fn is_closed(&self, epsilon: f64) -> Result<bool> {
        let (min, max) = self.domain();
        let mut derivative = self.clone();
        for order in 0..self.degree {
            if order > 0 {
                derivative = manipulation::derive::derive(&derivative, 1, -1.0)?;
            }
            let start = derivative.eval(min)?.result().clone_owned();
            let end = derivative.eval(max)?.result().clone_owned();
            if (start - end).norm() > epsilon {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Inserts `u` into the knot vector `num` times. See
    /// [`manipulation::insert::insert`].
    pub fn insert_knot(&mut self, u: f64, num: usize) -> Result<usize> {
        manipulation::insert::insert(self, u, num)
    }

    /// Splits the spline at `u` by raising the multiplicity of `u` to the
    /// order. See [`manipulation::insert::split`].
    pub fn split_at(&mut self, u: f64) -> Result<usize> {
        manipulation::insert::split(self, u)
    }

    /// Returns the `n`-th derivative. See [`manipulation::derive::derive`].
    pub fn derive(&self, n: usize, epsilon: f64) -> Result<Spline> {
        manipulation::derive::derive(self, n, epsilon)
    }

    /// Decomposes the spline into a sequence of Bézier segments. See
    /// [`manipulation::beziers::to_beziers`].
    pub fn to_beziers(&self) -> Result<Spline> {
        manipulation::beziers::to_beziers(self)
    }

    /// Elevates the degree by `amount`. See
    /// [`manipulation::elevate::elevate_degree`].
    pub fn elevate_degree(&self, amount: usize, epsilon: f64) -> Result<Spline> {
        manipulation::elevate::elevate_degree(self, amount, epsilon)
    }

    /// Straightens the spline towards the line connecting its outer
    /// control points. See [`manipulation::tension::tension`].
    pub fn tension(&self, tension: f64) -> Spline {
        manipulation::tension::tension(self, tension)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector};
    use rstest::rstest;

    use super::*;

    #[test]
    fn new_clamped() {
        let spline = Spline::new(7, 2, 3, KnotLayout::Clamped).unwrap();
        assert_eq!(spline.degree(), 3);
        assert_eq!(spline.order(), 4);
        assert_eq!(spline.dimension(), 2);
        assert_eq!(spline.num_control_points(), 7);
        assert_eq!(spline.num_knots(), 11);
        assert_eq!(
            spline.knots(),
            &dvector![0.0, 0.0, 0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0, 1.0]
        );
        assert_eq!(spline.control_points(), &MatD::zeros(2, 7));
    }

    #[test]
    fn new_clamped_single_segment() {
        let spline = Spline::new(4, 2, 3, KnotLayout::Clamped).unwrap();
        assert_eq!(
            spline.knots(),
            &dvector![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn new_opened() {
        let spline = Spline::new(4, 1, 2, KnotLayout::Opened).unwrap();
        assert_eq!(
            spline.knots(),
            &dvector![0.0, 1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0, 4.0 / 6.0, 5.0 / 6.0, 1.0]
        );
        assert_eq!(spline.domain(), (2.0 / 6.0, 4.0 / 6.0));
    }

    #[test]
    fn new_beziers() {
        let spline = Spline::new(6, 1, 2, KnotLayout::Beziers).unwrap();
        assert_eq!(
            spline.knots(),
            &dvector![0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn new_beziers_partial_segment() {
        let result = Spline::new(5, 1, 2, KnotLayout::Beziers);
        assert!(matches!(
            result,
            Err(SplineError::BezierSegments { num_control_points: 5, order: 3 })
        ));
    }

    #[test]
    fn new_dimension_zero() {
        assert!(matches!(
            Spline::new(4, 0, 2, KnotLayout::Clamped),
            Err(SplineError::DimensionZero)
        ));
    }

    #[rstest(n, degree, case(3, 3), case(3, 4), case(0, 0))]
    fn new_degree_too_large(n: usize, degree: usize) {
        assert!(matches!(
            Spline::new(n, 2, degree, KnotLayout::Clamped),
            Err(SplineError::DegreeTooLarge { .. })
        ));
    }

    #[test]
    fn new_too_many_knots() {
        assert!(matches!(
            Spline::new(MAX_NUM_KNOTS, 1, 1, KnotLayout::Clamped),
            Err(SplineError::TooManyKnots { .. })
        ));
    }

    #[test]
    fn domain_defaults_to_unit_interval() {
        for layout in [KnotLayout::Opened, KnotLayout::Clamped] {
            let spline = Spline::new(6, 1, 2, layout).unwrap();
            let (min, max) = spline.domain();
            assert!(min < max);
            if layout == KnotLayout::Clamped {
                assert_eq!((min, max), (0.0, 1.0));
            }
        }
    }

    #[test]
    fn control_point_access() {
        let spline = Spline::with_control_points(
            dmatrix![
                1.0, 3.0, 5.0;
                2.0, 4.0, 6.0;
            ],
            2,
            KnotLayout::Clamped,
        )
        .unwrap();
        assert_eq!(spline.control_point_at(1).unwrap(), dvector![3.0, 4.0]);
        assert!(matches!(
            spline.control_point_at(3),
            Err(SplineError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn set_control_point() {
        let mut spline = Spline::new(3, 2, 2, KnotLayout::Clamped).unwrap();
        spline.set_control_point_at(2, &dvector![7.0, 8.0]).unwrap();
        assert_eq!(spline.control_point_at(2).unwrap(), dvector![7.0, 8.0]);

        assert!(matches!(
            spline.set_control_point_at(0, &dvector![1.0]),
            Err(SplineError::ShapeMismatch { rows: 1, dimension: 2, .. })
        ));
    }

    #[test]
    fn set_control_points_replaces_the_buffer() {
        let mut spline = Spline::new(3, 2, 2, KnotLayout::Clamped).unwrap();
        let replacement = dmatrix![
            1.0, 3.0, 5.0;
            2.0, 4.0, 6.0;
        ];
        spline.set_control_points(replacement.clone()).unwrap();
        assert_eq!(spline.control_points(), &replacement);
        assert_eq!(spline.eval(0.0).unwrap().result(), dvector![1.0, 2.0]);
    }

    #[test]
    fn set_control_points_rejects_a_mismatched_shape() {
        let mut spline = Spline::new(3, 2, 2, KnotLayout::Clamped).unwrap();
        let before = spline.clone();
        assert!(matches!(
            spline.set_control_points(MatD::zeros(3, 4)),
            Err(SplineError::ShapeMismatch {
                rows: 3,
                cols: 4,
                dimension: 2,
                num_control_points: 3,
            })
        ));
        assert_eq!(spline, before);
    }

    #[test]
    fn knot_access() {
        let spline = Spline::new(3, 1, 2, KnotLayout::Clamped).unwrap();
        assert_eq!(spline.knot_at(0).unwrap(), 0.0);
        assert_eq!(spline.knot_at(5).unwrap(), 1.0);
        assert!(matches!(
            spline.knot_at(6),
            Err(SplineError::IndexOutOfRange { index: 6, len: 6 })
        ));
    }

    #[test]
    fn set_knot_at_keeps_monotonicity() {
        let mut spline = Spline::new(4, 1, 2, KnotLayout::Clamped).unwrap();
        // [0, 0, 0, 0.5, 1, 1, 1]
        spline.set_knot_at(3, 0.25).unwrap();
        assert_eq!(spline.knot_at(3).unwrap(), 0.25);

        assert!(matches!(
            spline.set_knot_at(3, 1.5),
            Err(SplineError::DecreasingKnots { index: 4 })
        ));
    }

    #[test]
    fn set_knot_at_rejects_excess_multiplicity() {
        let mut spline = Spline::new(4, 1, 2, KnotLayout::Clamped).unwrap();
        // Raising 0.5 to 0 would give 0 multiplicity 4 > order 3.
        assert!(matches!(
            spline.set_knot_at(3, 0.0),
            Err(SplineError::Multiplicity { .. })
        ));
    }

    #[test]
    fn set_knots_validates_count() {
        let mut spline = Spline::new(3, 1, 2, KnotLayout::Clamped).unwrap();
        assert!(matches!(
            spline.set_knots(dvector![0.0, 0.0, 1.0, 1.0]),
            Err(SplineError::KnotCount { expected: 6, found: 4 })
        ));
        spline.set_knots(dvector![0.0, 0.0, 0.0, 2.0, 2.0, 2.0]).unwrap();
        assert_eq!(spline.domain(), (0.0, 2.0));
    }

    #[test]
    fn multiplicity_counts_under_epsilon() {
        let mut spline = Spline::new(4, 1, 2, KnotLayout::Clamped).unwrap();
        assert_eq!(spline.multiplicity(0.0), 3);
        assert_eq!(spline.multiplicity(0.5), 1);
        assert_eq!(spline.multiplicity(0.2), 0);
        spline.set_knot_at(3, 0.5 + crate::KNOT_EPSILON / 2.0).unwrap();
        assert_eq!(spline.multiplicity(0.5), 1);
    }

    #[test]
    fn locate_finds_span_and_multiplicity() {
        let spline = Spline::with_control_points(
            dmatrix![1.0, 2.0, 3.0, 4.0, 5.0, 6.0;],
            2,
            KnotLayout::Clamped,
        )
        .unwrap();
        // [0, 0, 0, 0.25, 0.5, 0.75, 1, 1, 1]
        assert_eq!(spline.locate(0.3), (3, 0));
        assert_eq!(spline.locate(0.5), (4, 1));
        assert_eq!(spline.locate(0.0), (2, 3));
        assert_eq!(spline.locate(1.0), (8, 3));
    }

    #[test]
    fn copy_is_deep() {
        let original = Spline::with_control_points(
            dmatrix![1.0, 2.0, 3.0;],
            2,
            KnotLayout::Clamped,
        )
        .unwrap();
        let mut copy = original.clone();
        copy.set_control_point_at(0, &dvector![9.0]).unwrap();
        assert_eq!(original.control_point_at(0).unwrap(), dvector![1.0]);
        assert_ne!(original, copy);
    }

    mod is_closed {
        use super::*;

        #[test]
        fn closed_line() {
            let spline = Spline::with_control_points(
                dmatrix![
                    0.0, 1.0, 0.0;
                    0.0, 1.0, 0.0;
                ],
                1,
                KnotLayout::Clamped,
            )
            .unwrap();
            assert!(spline.is_closed(1e-9).unwrap());
        }

        #[test]
        fn open_line() {
            let spline = Spline::with_control_points(
                dmatrix![
                    0.0, 1.0;
                    0.0, 1.0;
                ],
                1,
                KnotLayout::Clamped,
            )
            .unwrap();
            assert!(!spline.is_closed(1e-9).unwrap());
        }

        #[test]
        fn matching_endpoints_but_open_tangents() {
            // The curve returns to its start, but the first derivative
            // differs at the endpoints.
            let spline = Spline::with_control_points(
                dmatrix![
                    0.0, 1.0, 0.0;
                    0.0, 1.0, 0.0;
                ],
                2,
                KnotLayout::Clamped,
            )
            .unwrap();
            assert!(!spline.is_closed(1e-9).unwrap());
        }

        #[test]
        fn point_is_trivially_closed() {
            let spline = Spline::with_control_points(
                dmatrix![4.0;],
                0,
                KnotLayout::Clamped,
            )
            .unwrap();
            assert!(spline.is_closed(1e-9).unwrap());
        }
    }
}

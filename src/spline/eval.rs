//! Evaluates a spline with De Boor's algorithm.
//!
//! Evaluation produces a [`DeBoorNet`] describing the whole triangular
//! computation rather than just the final point. The net records the
//! (epsilon-snapped) parameter `u`, the index `k` of its knot span, its
//! multiplicity `s`, the number of affine combination rounds `h`, and every
//! intermediate point, with the result stored last.
//!
//! Three kinds of evaluation exist. In the regular case (`s < order`) the
//! net holds the full triangle. When the multiplicity of `u` equals the
//! order, the spline is discontinuous at `u` and the net holds exactly two
//! points, the end point of the left segment and the start point of the
//! right one; both are usually equal, and `result` refers to the first.
//! As an exception, at the domain boundaries a single point is returned
//! regardless of multiplicity: the first respectively last control point.

use crate::error::{Result, SplineError};
use crate::spline::Spline;
use crate::types::{knots_equal, MatD, PointView, PointsView};

/// The output of De Boor's algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct DeBoorNet {
    u: f64,
    k: usize,
    s: usize,
    h: usize,
    /// Intermediate points in triangle order, one per column; the result
    /// occupies the final column(s).
    points: MatD,
    num_result: usize,
}

impl DeBoorNet {
    /// The evaluated parameter, as actually used after epsilon snapping.
    pub fn knot(&self) -> f64 {
        self.u
    }

    /// The index `k` with `u ∈ [u_k, u_k+1)` (the domain maximum belongs
    /// to the last non-empty span).
    pub fn index(&self) -> usize {
        self.k
    }

    /// The multiplicity of the evaluated parameter.
    pub fn multiplicity(&self) -> usize {
        self.s
    }

    /// The number of affine combination rounds that were necessary to
    /// evaluate the parameter.
    pub fn num_insertions(&self) -> usize {
        self.h
    }

    /// The number of components of each point.
    pub fn dimension(&self) -> usize {
        self.points.nrows()
    }

    /// The number of points in the net.
    pub fn num_points(&self) -> usize {
        self.points.ncols()
    }

    /// All points of the net, one per column.
    pub fn points(&self) -> &MatD {
        &self.points
    }

    /// The number of result points (1, or 2 at a discontinuity).
    pub fn num_result(&self) -> usize {
        self.num_result
    }

    /// The first result point. In the regular case this is the last point
    /// of the net; at a discontinuity it is the end point of the left-hand
    /// segment.
    pub fn result(&self) -> PointView {
        if self.num_result == 2 {
            self.points.column(0)
        } else {
            self.points.column(self.points.ncols() - 1)
        }
    }

    /// All result points (one, or two at a discontinuity).
    pub fn result_points(&self) -> PointsView {
        if self.num_result == 2 {
            self.points.columns(0, 2)
        } else {
            self.points.columns(self.points.ncols() - 1, 1)
        }
    }
}

impl Spline {
    /// Evaluates the spline at parameter `u` and returns the full De Boor
    /// net.
    ///
    /// # Errors
    ///
    /// [`UndefinedParameter`](SplineError::UndefinedParameter) if `u` lies
    /// outside the domain under the knot epsilon.
    pub fn eval(&self, u: f64) -> Result<DeBoorNet> {
        let u = self.checked_knot(u)?;
        let degree = self.degree();
        let order = self.order();
        let dim = self.dimension();
        let (min, max) = self.domain();
        let (k, s) = self.locate(u);
        // Snapping onto the located knot keeps the net consistent with the
        // knot vector at any precision.
        let u = if knots_equal(u, self.knots()[k]) { self.knots()[k] } else { u };

        if s >= order {
            let net = if knots_equal(u, min) {
                DeBoorNet {
                    u,
                    k,
                    s,
                    h: 0,
                    points: self.control_points().columns(0, 1).clone_owned(),
                    num_result: 1,
                }
            } else if knots_equal(u, max) {
                DeBoorNet {
                    u,
                    k,
                    s,
                    h: 0,
                    points: self
                        .control_points()
                        .columns(self.num_control_points() - 1, 1)
                        .clone_owned(),
                    num_result: 1,
                }
            } else {
                // The spline is discontinuous at `u`; keep the end point of
                // the left segment and the start point of the right one.
                DeBoorNet {
                    u,
                    k,
                    s,
                    h: 0,
                    points: self.control_points().columns(k - order, 2).clone_owned(),
                    num_result: 2,
                }
            };
            return Ok(net);
        }

        let h = degree - s;
        let base = h + 1;
        let knots = self.knots();
        let mut points = MatD::zeros(dim, base * (base + 1) / 2);
        points
            .columns_mut(0, base)
            .copy_from(&self.control_points().columns(k - degree, base));

        let mut from = 0;
        let mut to = base;
        for r in 1..=h {
            for i in 0..=h - r {
                let lo = k - degree + i + r;
                let hi = k + 1 + i;
                let a = (u - knots[lo]) / (knots[hi] - knots[lo]);
                let q = (1.0 - a) * points.column(from + i) + a * points.column(from + i + 1);
                points.set_column(to + i, &q);
            }
            from = to;
            to += h - r + 1;
        }

        Ok(DeBoorNet { u, k, s, h, points, num_result: 1 })
    }

    /// Evaluates the spline at every parameter in `us` and returns the
    /// resulting points, one per column. At parameters where the spline is
    /// discontinuous, only the first result point is taken.
    pub fn eval_all(&self, us: &[f64]) -> Result<MatD> {
        let mut points = MatD::zeros(self.dimension(), us.len());
        for (i, &u) in us.iter().enumerate() {
            let net = self.eval(u)?;
            points.set_column(i, &net.result());
        }
        Ok(points)
    }

    /// Evaluates the spline at `num` parameters distributed uniformly
    /// across the domain (inclusive of both boundaries for `num >= 2`) and
    /// returns the points together with the actual number of parameters.
    ///
    /// If `num` is 0, `30 * (num_control_points - degree)` parameters are
    /// generated, 30 per Bézier segment. If `num` is 1, the point at the
    /// domain minimum is evaluated.
    pub fn sample(&self, num: usize) -> Result<(MatD, usize)> {
        let num = if num == 0 {
            30 * (self.num_control_points() - self.degree())
        } else {
            num
        };
        let (min, max) = self.domain();
        let us: Vec<f64> = if num == 1 {
            vec![min]
        } else {
            (0..num)
                .map(|i| min + (max - min) * i as f64 / (num - 1) as f64)
                .collect()
        };
        Ok((self.eval_all(&us)?, num))
    }
}

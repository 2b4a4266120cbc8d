//! Elevates the degree of a spline without changing its shape.
//!
//! Degree elevation decomposes the spline into Bézier segments, applies
//! the closed-form Bézier elevation rule to each segment, and recomposes
//! the segments. Adjacent segment endpoints that coincide within the given
//! epsilon are merged back into a single control point; endpoints further
//! apart are intentional discontinuities and keep full multiplicity.

use crate::error::Result;
use crate::manipulation::beziers;
use crate::spline::Spline;
use crate::types::{MatD, VecD};

/// Returns `spline` with its degree elevated by `amount`.
///
/// `epsilon` distinguishes the split points introduced by the
/// decomposition from wanted discontinuity points when the segments are
/// merged again; [`CONTROL_POINT_EPSILON`](crate::CONTROL_POINT_EPSILON)
/// is a viable default.
pub fn elevate_degree(spline: &Spline, amount: usize, epsilon: f64) -> Result<Spline> {
    if amount == 0 {
        return Ok(spline.clone());
    }

    let decomposed = beziers::to_beziers(spline)?;
    let order = decomposed.order();
    let num_segments = decomposed.num_control_points() / order;
    let new_order = order + amount;

    let mut segments: Vec<MatD> = Vec::with_capacity(num_segments);
    for segment in 0..num_segments {
        let mut points = decomposed
            .control_points()
            .columns(segment * order, order)
            .clone_owned();
        for _ in 0..amount {
            points = elevate_segment(&points);
        }
        segments.push(points);
    }

    // The breakpoint values of the decomposition, one run of `order` knots
    // each.
    let breakpoints: Vec<f64> = (0..=num_segments)
        .map(|segment| decomposed.knots()[segment * order])
        .collect();

    // Merge coinciding segment endpoints; a merged breakpoint loses one
    // knot instance, restoring continuity at the junction.
    let mut columns: Vec<VecD> = Vec::new();
    let mut multiplicities: Vec<usize> = Vec::with_capacity(breakpoints.len());
    multiplicities.push(new_order);
    for (segment, points) in segments.iter().enumerate() {
        let mut first = 0;
        if segment > 0 {
            let junction = columns.last().expect("previous segment pushed points");
            let merged = (points.column(0) - junction).norm() <= epsilon;
            multiplicities.push(if merged { new_order - 1 } else { new_order });
            if merged {
                first = 1;
            }
        }
        for i in first..new_order {
            columns.push(points.column(i).clone_owned());
        }
    }
    multiplicities.push(new_order);

    let mut knots = VecD::zeros(columns.len() + new_order);
    let mut j = 0;
    for (value, multiplicity) in breakpoints.iter().zip(&multiplicities) {
        for _ in 0..*multiplicity {
            knots[j] = *value;
            j += 1;
        }
    }

    Ok(Spline::from_raw(
        new_order - 1,
        MatD::from_columns(&columns),
        knots,
    ))
}

/// Elevates a single Bézier segment by one degree:
/// `Q_i = i/(p+1) * P_i-1 + (1 - i/(p+1)) * P_i`.
fn elevate_segment(points: &MatD) -> MatD {
    let p = points.ncols() - 1;
    let mut elevated = MatD::zeros(points.nrows(), p + 2);
    elevated.set_column(0, &points.column(0));
    for i in 1..=p {
        let a = i as f64 / (p + 1) as f64;
        let q = a * points.column(i - 1) + (1.0 - a) * points.column(i);
        elevated.set_column(i, &q);
    }
    elevated.set_column(p + 1, &points.column(p));
    elevated
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};
    use rstest::rstest;

    use crate::spline::KnotLayout;
    use crate::CONTROL_POINT_EPSILON;

    use super::*;

    #[test]
    fn line_to_quadratic() {
        let line = Spline::with_control_points(
            dmatrix![
                0.0, 3.0;
                0.0, 3.0;
            ],
            1,
            KnotLayout::Clamped,
        )
        .unwrap();
        let elevated = elevate_degree(&line, 1, CONTROL_POINT_EPSILON).unwrap();

        assert_eq!(elevated.degree(), 2);
        assert_eq!(
            elevated.control_points(),
            &dmatrix![
                0.0, 1.5, 3.0;
                0.0, 1.5, 3.0;
            ]
        );
        assert_eq!(elevated.knots(), &dvector![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[rstest(amount, case(1), case(2), case(3))]
    fn preserves_the_curve(amount: usize) {
        let spline = Spline::with_control_points(
            dmatrix![
                0.0, 1.0, 2.0, 3.0, 4.0;
                0.0, 2.0, 2.0, 0.0, 1.0;
            ],
            2,
            KnotLayout::Clamped,
        )
        .unwrap();
        let elevated = elevate_degree(&spline, amount, CONTROL_POINT_EPSILON).unwrap();

        assert_eq!(elevated.degree(), 2 + amount);
        for i in 0..=100 {
            let u = i as f64 / 100.0;
            assert_relative_eq!(
                spline.eval(u).unwrap().result(),
                elevated.eval(u).unwrap().result(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn merges_continuous_junctions() {
        let spline = Spline::with_control_points(
            dmatrix![1.0, 2.0, 3.0, 4.0;],
            2,
            KnotLayout::Clamped,
        )
        .unwrap();
        // Two segments joined at 0.5; elevation keeps the junction merged.
        let elevated = elevate_degree(&spline, 1, CONTROL_POINT_EPSILON).unwrap();

        assert_eq!(elevated.degree(), 3);
        assert_eq!(elevated.num_control_points(), 7);
        assert_eq!(
            elevated.knots(),
            &dvector![0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn keeps_gaps_apart() {
        // Two disconnected linear segments.
        let spline = Spline::with_control_points(
            dmatrix![0.0, 1.0, 5.0, 6.0;],
            1,
            KnotLayout::Beziers,
        )
        .unwrap();
        let elevated = elevate_degree(&spline, 1, CONTROL_POINT_EPSILON).unwrap();

        assert_eq!(elevated.degree(), 2);
        assert_eq!(elevated.num_control_points(), 6);
        assert_eq!(elevated.multiplicity(0.5), 3);
        let net = elevated.eval(0.5).unwrap();
        assert_eq!(net.num_result(), 2);
        assert_eq!(net.result_points(), dmatrix![1.0, 5.0;]);
    }

    #[test]
    fn amount_zero_is_identity() {
        let spline = Spline::with_control_points(
            dmatrix![1.0, 2.0, 3.0;],
            2,
            KnotLayout::Clamped,
        )
        .unwrap();
        assert_eq!(elevate_degree(&spline, 0, CONTROL_POINT_EPSILON).unwrap(), spline);
    }
}

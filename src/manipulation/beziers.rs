//! Decomposes a spline into a sequence of Bézier segments.
//!
//! Decomposition inserts every interior knot until its multiplicity equals
//! the order of the spline. The control point buffer of the result is the
//! concatenation of independent Bézier segments, one per non-empty knot
//! span. Opened splines are clamped onto their domain first, discarding
//! the control points that do not influence it.

use crate::error::Result;
use crate::manipulation::insert;
use crate::spline::Spline;
use crate::types::knots_equal;

/// Returns the Bézier decomposition of `spline`.
///
/// The result evaluates to the same points as `spline` over the whole
/// domain, and its number of control points is a multiple of the order.
/// Decomposing an already decomposed spline is a no-op.
pub fn to_beziers(spline: &Spline) -> Result<Spline> {
    let order = spline.order();
    let mut worker = spline.clone();

    // Clamp the start.
    let (min, _) = worker.domain();
    let multiplicity = worker.multiplicity(min);
    if multiplicity < order {
        insert::insert(&mut worker, min, order - multiplicity)?;
    }
    let k = worker.locate(min).0;
    if k + 1 > order {
        worker.trim_front(k + 1 - order);
    }

    // Clamp the end.
    let (_, max) = worker.domain();
    let multiplicity = worker.multiplicity(max);
    if multiplicity < order {
        insert::insert(&mut worker, max, order - multiplicity)?;
    }
    let k = worker.locate(max).0;
    worker.trim_back(k + 1);

    // Raise every interior knot to full multiplicity.
    while let Some((u, multiplicity)) = next_partial_knot(&worker) {
        insert::insert(&mut worker, u, order - multiplicity)?;
    }
    Ok(worker)
}

/// Finds an interior knot whose multiplicity is below the order.
fn next_partial_knot(spline: &Spline) -> Option<(f64, usize)> {
    let (min, max) = spline.domain();
    let order = spline.order();
    for i in spline.degree() + 1..spline.num_control_points() {
        let u = spline.knots()[i];
        if knots_equal(u, min) || knots_equal(u, max) {
            continue;
        }
        let multiplicity = spline.multiplicity(u);
        if multiplicity < order {
            return Some((u, multiplicity));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    use crate::spline::KnotLayout;

    use super::*;

    #[test]
    fn single_segment_is_untouched() {
        let spline = Spline::with_control_points(
            dmatrix![
                0.0, 1.0, 2.0, 3.0;
                0.0, 2.0, 2.0, 0.0;
            ],
            3,
            KnotLayout::Clamped,
        )
        .unwrap();
        let beziers = to_beziers(&spline).unwrap();
        assert_eq!(beziers, spline);
        assert_eq!(beziers.num_control_points(), 4);
    }

    #[test]
    fn clamped_spline_with_interior_knots() {
        let spline = Spline::with_control_points(
            dmatrix![1.0, 2.0, 3.0, 4.0;],
            2,
            KnotLayout::Clamped,
        )
        .unwrap();
        // Interior knot 0.5 reaches multiplicity 3.
        let beziers = to_beziers(&spline).unwrap();
        assert_eq!(beziers.num_control_points() % beziers.order(), 0);
        assert_eq!(beziers.num_control_points(), 6);
        assert_eq!(
            beziers.knots(),
            &dvector![0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]
        );
        for i in 0..=50 {
            let u = i as f64 / 50.0;
            assert_relative_eq!(
                spline.eval(u).unwrap().result(),
                beziers.eval(u).unwrap().result(),
                epsilon = crate::CONTROL_POINT_EPSILON
            );
        }
    }

    #[test]
    fn opened_spline_is_clamped_onto_its_domain() {
        let spline = Spline::with_control_points(
            dmatrix![1.0, 2.0, 3.0, 4.0;],
            2,
            KnotLayout::Opened,
        )
        .unwrap();
        let (min, max) = spline.domain();
        let beziers = to_beziers(&spline).unwrap();

        assert_eq!(beziers.num_control_points(), 6);
        assert_eq!(beziers.domain(), (min, max));
        for i in 0..=50 {
            let u = min + (max - min) * i as f64 / 50.0;
            assert_relative_eq!(
                spline.eval(u).unwrap().result(),
                beziers.eval(u).unwrap().result(),
                epsilon = crate::CONTROL_POINT_EPSILON
            );
        }
    }

    #[test]
    fn idempotent() {
        let spline = Spline::with_control_points(
            dmatrix![
                0.0, 1.0, 2.0, 3.0, 4.0, 5.0;
                0.0, 2.0, 2.0, 0.0, 1.0, 3.0;
            ],
            3,
            KnotLayout::Clamped,
        )
        .unwrap();
        let once = to_beziers(&spline).unwrap();
        let twice = to_beziers(&once).unwrap();
        assert_eq!(once, twice);
    }
}

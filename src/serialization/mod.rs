//! Canonical JSON serialization and file persistence.
//!
//! The canonical form is a single object:
//!
//! ```json
//! { "degree": 2, "dimension": 2,
//!   "control_points": [1.0, -3.14, 2.0, 0.0, 3.0, 1.0],
//!   "knots": [0.0, 0.0, 0.0, 1.0, 1.0, 1.0] }
//! ```
//!
//! Control points are flattened into `dimension`-sized tuples, so
//! `len(control_points)` must equal `dimension * (len(knots) - degree - 1)`.
//! Parsing re-validates every representation invariant before a spline is
//! produced. Numbers are written and read locale-independently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplineError};
use crate::spline::Spline;
use crate::types::{MatD, VecD};
use crate::MAX_NUM_KNOTS;

/// Mirror of the canonical on-disk format. The field order fixes the key
/// order of the serialized object.
#[derive(Serialize, Deserialize)]
struct SplineData {
    degree: usize,
    dimension: usize,
    control_points: Vec<f64>,
    knots: Vec<f64>,
}

/// Serializes `spline` to its canonical JSON form.
pub fn to_json(spline: &Spline) -> Result<String> {
    let data = SplineData {
        degree: spline.degree(),
        dimension: spline.dimension(),
        control_points: spline.control_points().as_slice().to_vec(),
        knots: spline.knots().as_slice().to_vec(),
    };
    serde_json::to_string(&data).map_err(|err| SplineError::Parse(err.to_string()))
}

/// Parses a spline from its canonical JSON form, enforcing all
/// representation invariants.
///
/// # Errors
///
/// [`Parse`](SplineError::Parse) for malformed JSON,
/// [`DimensionZero`](SplineError::DimensionZero),
/// [`DimensionMismatch`](SplineError::DimensionMismatch) if the control
/// point buffer is not a whole number of tuples,
/// [`DegreeTooLarge`](SplineError::DegreeTooLarge),
/// [`KnotCount`](SplineError::KnotCount) if the number of knots does not
/// match the control points and degree,
/// [`DecreasingKnots`](SplineError::DecreasingKnots), and
/// [`Multiplicity`](SplineError::Multiplicity) for invalid knot vectors.
pub fn parse_json(json: &str) -> Result<Spline> {
    let data: SplineData =
        serde_json::from_str(json).map_err(|err| SplineError::Parse(err.to_string()))?;
    spline_from_data(data)
}

/// Saves `spline` as a JSON file at `path` (UTF-8).
pub fn save(spline: &Spline, path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(spline)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Loads a spline from the JSON file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Spline> {
    let json = std::fs::read_to_string(path)?;
    parse_json(&json)
}

fn spline_from_data(data: SplineData) -> Result<Spline> {
    if data.dimension == 0 {
        return Err(SplineError::DimensionZero);
    }
    if data.control_points.len() % data.dimension != 0 {
        return Err(SplineError::DimensionMismatch {
            len: data.control_points.len(),
            dimension: data.dimension,
        });
    }
    let num_control_points = data.control_points.len() / data.dimension;
    if data.degree >= num_control_points {
        return Err(SplineError::DegreeTooLarge { degree: data.degree, num_control_points });
    }
    let order = data.degree + 1;
    if data.knots.len() != num_control_points + order {
        return Err(SplineError::KnotCount {
            expected: num_control_points + order,
            found: data.knots.len(),
        });
    }
    if data.knots.len() > MAX_NUM_KNOTS {
        return Err(SplineError::TooManyKnots {
            requested: data.knots.len(),
            max: MAX_NUM_KNOTS,
        });
    }
    let knots = VecD::from_vec(data.knots);
    Spline::validate_knots(&knots, order)?;
    let points = MatD::from_column_slice(data.dimension, num_control_points, &data.control_points);
    Ok(Spline::from_raw(data.degree, points, knots))
}

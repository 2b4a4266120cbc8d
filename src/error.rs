//! The error taxonomy of the crate.

use thiserror::Error;

/// A [`Result`](core::result::Result) with [`SplineError`] as error type.
pub type Result<T> = core::result::Result<T, SplineError>;

/// Errors reported by fallible spline operations.
///
/// Every variant maps to a stable numeric code (see [`SplineError::code`])
/// so that consumers can match on codes across releases and language
/// boundaries. The pair `(error.code(), error.to_string())` forms the
/// status of a failed operation; no global or thread-local error state is
/// involved.
#[derive(Error, Debug)]
pub enum SplineError {
    #[error("The dimension of the control points must be greater than zero.")]
    DimensionZero,

    #[error(
        "The degree `p = {degree}` must be less than the number of \
        control points `n = {num_control_points}`."
    )]
    DegreeTooLarge { degree: usize, num_control_points: usize },

    #[error("Parameter `u = {u}` lies outside the domain `[{min}, {max}]`.")]
    UndefinedParameter { u: f64, min: f64, max: f64 },

    #[error(
        "Knot `u = {knot}` would reach multiplicity `{multiplicity}`, \
        exceeding the order `{order}` of the spline."
    )]
    Multiplicity { knot: f64, multiplicity: usize, order: usize },

    #[error("The knot vector is decreasing at index `{index}`.")]
    DecreasingKnots { index: usize },

    #[error("Expected `{expected}` knots, found `{found}`.")]
    KnotCount { expected: usize, found: usize },

    #[error(
        "`{num_control_points}` control points cannot form whole Bézier \
        segments of order `{order}`."
    )]
    BezierSegments { num_control_points: usize, order: usize },

    #[error("A spline must not have more than `{max}` knots (requested `{requested}`).")]
    TooManyKnots { requested: usize, max: usize },

    #[error(
        "The spline is discontinuous at knot `u = {u}`; the gap `{gap}` \
        exceeds `{epsilon}`."
    )]
    Underivable { u: f64, gap: f64, epsilon: f64 },

    #[error(
        "The control point buffer length `{len}` is not a multiple of the \
        dimension `{dimension}`."
    )]
    DimensionMismatch { len: usize, dimension: usize },

    #[error("The splines have different dimensions (`{first}` vs `{second}`).")]
    DimensionsDiffer { first: usize, second: usize },

    #[error(
        "A `{rows} x {cols}` control point buffer does not match the \
        spline's `{dimension} x {num_control_points}` layout."
    )]
    ShapeMismatch { rows: usize, cols: usize, dimension: usize, num_control_points: usize },

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing failed: {0}")]
    Parse(String),

    #[error("Index `{index}` is out of range `0..{len}`.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No point satisfied the distance condition within `{iterations}` iterations.")]
    NoResult { iterations: usize },

    #[error("At least one point is required.")]
    NoPoints,
}

impl SplineError {
    /// The stable numeric code of this error.
    ///
    /// `0` denotes success and is never produced by an error value. `-1`
    /// (allocation failure, which aborts in Rust) and `-9` are reserved,
    /// unused codes.
    pub fn code(&self) -> i32 {
        match self {
            SplineError::DimensionZero => -2,
            SplineError::DegreeTooLarge { .. } => -3,
            SplineError::UndefinedParameter { .. } => -4,
            SplineError::Multiplicity { .. } => -5,
            SplineError::DecreasingKnots { .. } => -6,
            SplineError::KnotCount { .. }
            | SplineError::BezierSegments { .. }
            | SplineError::TooManyKnots { .. } => -7,
            SplineError::Underivable { .. } => -8,
            SplineError::DimensionMismatch { .. }
            | SplineError::DimensionsDiffer { .. }
            | SplineError::ShapeMismatch { .. } => -10,
            SplineError::Io(_) => -11,
            SplineError::Parse(_) => -12,
            SplineError::IndexOutOfRange { .. } => -13,
            SplineError::NoResult { .. } => -14,
            SplineError::NoPoints => -15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(SplineError::DimensionZero.code(), -2);
        assert_eq!(
            SplineError::DegreeTooLarge { degree: 3, num_control_points: 3 }.code(),
            -3
        );
        assert_eq!(
            SplineError::UndefinedParameter { u: 2.0, min: 0.0, max: 1.0 }.code(),
            -4
        );
        assert_eq!(
            SplineError::Multiplicity { knot: 0.5, multiplicity: 5, order: 4 }.code(),
            -5
        );
        assert_eq!(SplineError::DecreasingKnots { index: 3 }.code(), -6);
        assert_eq!(SplineError::KnotCount { expected: 8, found: 7 }.code(), -7);
        assert_eq!(
            SplineError::BezierSegments { num_control_points: 5, order: 4 }.code(),
            -7
        );
        assert_eq!(
            SplineError::TooManyKnots { requested: 10_001, max: 10_000 }.code(),
            -7
        );
        assert_eq!(
            SplineError::Underivable { u: 0.5, gap: 1.0, epsilon: 0.1 }.code(),
            -8
        );
        assert_eq!(
            SplineError::DimensionMismatch { len: 7, dimension: 2 }.code(),
            -10
        );
        assert_eq!(
            SplineError::DimensionsDiffer { first: 2, second: 3 }.code(),
            -10
        );
        assert_eq!(
            SplineError::ShapeMismatch { rows: 3, cols: 4, dimension: 2, num_control_points: 3 }
                .code(),
            -10
        );
        assert_eq!(SplineError::Io(std::io::Error::other("fail")).code(), -11);
        assert_eq!(SplineError::Parse("fail".into()).code(), -12);
        assert_eq!(SplineError::IndexOutOfRange { index: 4, len: 4 }.code(), -13);
        assert_eq!(SplineError::NoResult { iterations: 30 }.code(), -14);
        assert_eq!(SplineError::NoPoints.code(), -15);
    }

    #[test]
    fn messages_are_short() {
        // Status messages stay compact enough for fixed-size status buffers.
        let err = SplineError::Multiplicity { knot: 0.123456789, multiplicity: 5, order: 4 };
        assert!(err.to_string().len() <= 100);
    }
}

//! Transforms existing splines.
//!
//! Every transformation either preserves the shape of the curve exactly
//! (knot insertion, splitting, Bézier decomposition, degree elevation,
//! alignment) or produces a new curve derived from it (derivatives,
//! morphing, tension). Transformations with a distinct output never modify
//! their input; a failed transformation therefore leaves all involved
//! splines in their previous state.

pub mod beziers;
pub mod derive;
pub mod elevate;
pub mod insert;
pub mod morph;
pub mod tension;

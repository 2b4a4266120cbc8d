//! Constructs splines passing through given data points.
//!
//! Both interpolation methods emit their result as a sequence of cubic
//! Bézier segments (a clamped spline of order 4 whose control point buffer
//! stacks whole segments), which keeps the interpolants directly usable by
//! every transformation in this crate.

mod catmull_rom;
mod natural;

pub use catmull_rom::interpolate_catmull_rom;
pub use natural::interpolate_cubic_natural;

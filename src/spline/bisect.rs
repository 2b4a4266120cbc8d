//! Searches a spline for a point with a given component value.

use crate::error::{Result, SplineError};
use crate::spline::{DeBoorNet, Spline};

impl Spline {
    /// Tries to find a point `P` on the spline such that
    /// `|P[index] - value| <= |epsilon|` using the bisection method over
    /// the domain.
    ///
    /// The control points must be sorted at component `index`, in
    /// ascending order if `ascending` is set and descending otherwise; the
    /// behaviour is undefined if they are not. Each iteration evaluates the
    /// midpoint of the remaining interval and halves it according to the
    /// comparison of the midpoint's component with `value`.
    ///
    /// `max_iter` bounds the number of iterations (30 is a sane default;
    /// depending on the component's range and `epsilon`, 7 to 50 may be
    /// appropriate). If no point satisfies the distance condition within
    /// `max_iter` iterations, the best approximation found so far is
    /// returned, unless `persnickety` is set, in which case
    /// [`NoResult`](SplineError::NoResult) is reported.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](SplineError::IndexOutOfRange) if `index` is not
    /// less than the dimension, and [`NoResult`](SplineError::NoResult) as
    /// described above.
    pub fn bisect(
        &self,
        value: f64,
        epsilon: f64,
        persnickety: bool,
        index: usize,
        ascending: bool,
        max_iter: usize,
    ) -> Result<DeBoorNet> {
        let dim = self.dimension();
        if index >= dim {
            return Err(SplineError::IndexOutOfRange { index, len: dim });
        }
        let epsilon = epsilon.abs();
        let (mut min, mut max) = self.domain();

        let mut best: Option<(f64, DeBoorNet)> = None;
        for _ in 0..max_iter {
            let net = self.eval((min + max) / 2.0)?;
            let component = net.result()[index];
            let distance = (component - value).abs();
            if distance <= epsilon {
                return Ok(net);
            }
            if (component < value) == ascending {
                min = net.knot();
            } else {
                max = net.knot();
            }
            if best.as_ref().is_none_or(|(d, _)| distance < *d) {
                best = Some((distance, net));
            }
        }
        if persnickety {
            Err(SplineError::NoResult { iterations: max_iter })
        } else {
            match best {
                Some((_, net)) => Ok(net),
                None => self.eval((min + max) / 2.0),
            }
        }
    }
}

use std::num::NonZeroUsize;

use exemplar_core::{FitError, HumanProxy, Predict};

/// Number of points retained by [`PiecewiseLinear::windowed`].
pub const DEFAULT_WINDOW: usize = 7;

/// "Connect the dots": linear interpolation between consecutive fit points.
///
/// With a window, only the last `window` points by x-order are kept when more
/// are supplied. Older points are dropped, not averaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PiecewiseLinear {
    window: Option<NonZeroUsize>,
}

impl PiecewiseLinear {
    /// Creates a proxy that keeps every fit point.
    #[must_use]
    pub fn new() -> Self {
        Self { window: None }
    }

    /// Creates a proxy that keeps only the last `window` fit points.
    #[must_use]
    pub fn with_window(window: NonZeroUsize) -> Self {
        Self {
            window: Some(window),
        }
    }

    /// Creates a proxy with a sliding window of [`DEFAULT_WINDOW`] points.
    #[must_use]
    pub fn windowed() -> Self {
        Self {
            window: NonZeroUsize::new(DEFAULT_WINDOW),
        }
    }

    #[must_use]
    pub fn window(&self) -> Option<NonZeroUsize> {
        self.window
    }
}

/// A fitted polyline through points sorted by x.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Polyline {
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the indices of the segment used to predict at `x`.
    ///
    /// Inside the fit range this is the bracketing pair `x1 ≤ x < x2`, found
    /// by a linear scan. Outside it, the first or last segment is used so
    /// that prediction extrapolates along the edge slope.
    fn segment(&self, x: f64) -> (usize, usize) {
        let len = self.xs.len();
        let k = self.xs.iter().position(|&xi| x < xi).unwrap_or(len);
        if k == 0 {
            (0, 1)
        } else if k == len {
            (len - 2, len - 1)
        } else {
            (k - 1, k)
        }
    }
}

impl HumanProxy for PiecewiseLinear {
    type Fitted = Polyline;

    fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<Polyline, FitError> {
        FitError::check(xs, ys)?;

        let mut points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(window) = self.window {
            let excess = points.len().saturating_sub(window.get());
            points.drain(..excess);
        }

        let (xs, ys) = points.into_iter().unzip();
        Ok(Polyline { xs, ys })
    }
}

impl Predict for Polyline {
    fn predict_one(&self, x: f64) -> f64 {
        if self.xs.len() == 1 {
            return self.ys[0];
        }

        let (i1, i2) = self.segment(x);
        let (x1, y1) = (self.xs[i1], self.ys[i1]);
        let (x2, y2) = (self.xs[i2], self.ys[i2]);

        // Zero-width segment or query at x1.
        if (x2 - x1) * (x - x1) == 0.0 {
            return y1;
        }
        if x == x2 {
            return y2;
        }
        y1 + (y2 - y1) / (x2 - x1) * (x - x1)
    }
}

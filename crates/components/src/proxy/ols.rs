use exemplar_core::{FitError, HumanProxy, Predict};

/// Ordinary least squares: fits `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ols;

/// A fitted straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    /// Fits the least-squares line through the given points.
    ///
    /// When x has no spread (a single point, or repeated x) the slope is zero
    /// and the intercept is the mean of y.
    ///
    /// # Errors
    ///
    /// Returns [`FitError`] if the slices are empty or differ in length.
    pub fn least_squares(xs: &[f64], ys: &[f64]) -> Result<Self, FitError> {
        FitError::check(xs, ys)?;

        #[allow(clippy::cast_precision_loss)]
        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let (sxx, sxy) = xs
            .iter()
            .zip(ys)
            .fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
                let dx = x - x_mean;
                (sxx + dx * dx, sxy + dx * (y - y_mean))
            });

        let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }
}

impl HumanProxy for Ols {
    type Fitted = Line;

    fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<Line, FitError> {
        Line::least_squares(xs, ys)
    }
}

impl Predict for Line {
    fn predict_one(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

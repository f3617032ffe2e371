use exemplar_core::{FitError, HumanProxy, Predict};
use nalgebra::{DMatrix, DVector};

/// Least-squares parabola: fits `y = a·x² + b·x + c`.
///
/// The fit expands x into the features `[x, x²]`, centers features and
/// targets, and solves the centered system by SVD. The intercept is then
/// recovered from the means.
///
/// With fewer than three distinct x values the system is underdetermined and
/// the minimum-norm solution is returned: a single point gives a constant, two
/// points give some parabola through both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quadratic;

/// A fitted parabola.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl HumanProxy for Quadratic {
    type Fitted = Parabola;

    fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<Parabola, FitError> {
        FitError::check(xs, ys)?;

        #[allow(clippy::cast_precision_loss)]
        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let x2_mean = xs.iter().map(|x| x * x).sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let design = DMatrix::from_fn(xs.len(), 2, |row, col| match col {
            0 => xs[row] - x_mean,
            _ => xs[row] * xs[row] - x2_mean,
        });
        let target = DVector::from_iterator(ys.len(), ys.iter().map(|y| y - y_mean));

        let svd = design.svd(true, true);
        let largest = svd.singular_values.max();
        let eps = largest * n.max(2.0) * f64::EPSILON;
        let coef = svd.solve(&target, eps).map_err(|_| FitError::Degenerate)?;

        let (b, a) = (coef[0], coef[1]);
        Ok(Parabola {
            a,
            b,
            c: y_mean - b * x_mean - a * x2_mean,
        })
    }
}

impl Predict for Parabola {
    fn predict_one(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

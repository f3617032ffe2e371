use crate::{Dataset, Predict};

/// A distance between a model's predictions and the true series.
///
/// Distances are non-negative and lower is better. They are only comparable
/// between calls to the same evaluator.
pub trait Evaluator {
    /// Returns a stable identifier for this evaluator.
    ///
    /// Memoizing teachers record it alongside cached distances so that a
    /// cache built with one evaluator is never reused with another.
    fn name(&self) -> &'static str;

    /// Computes the distance between equal-length truth and prediction slices.
    ///
    /// Empty slices have distance zero.
    fn distance(&self, truth: &[f64], predicted: &[f64]) -> f64;

    /// Scores a fitted model against the whole dataset.
    fn evaluate<P: Predict + ?Sized>(&self, dataset: &Dataset, model: &P) -> f64 {
        self.distance(dataset.ys(), &model.predict(dataset.xs()))
    }
}

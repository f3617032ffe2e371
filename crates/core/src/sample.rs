use serde::Serialize;

use crate::Dataset;

/// A subset of a dataset's points, chosen by a teacher.
///
/// Points are ordered by x, with ties broken by dataset index. The indices
/// refer to positions in the [`Dataset`] the sample was drawn from.
///
/// Serializes as `{ "x": [...], "y": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    #[serde(skip)]
    indices: Vec<usize>,

    #[serde(rename = "x")]
    xs: Vec<f64>,

    #[serde(rename = "y")]
    ys: Vec<f64>,
}

impl Sample {
    /// Materializes the points at `indices`, sorted by x.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds for `dataset`.
    #[must_use]
    pub fn from_indices(dataset: &Dataset, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        let xs = dataset.xs();
        indices.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]).then(a.cmp(&b)));

        let (xs, ys) = indices.iter().map(|&i| dataset.point(i)).unzip();
        Self { indices, xs, ys }
    }

    /// Returns the dataset indices of the sampled points, in x order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new("s", vec![0.0, 1.0, 2.0, 3.0], vec![5.0, 6.0, 7.0, 8.0]).unwrap()
    }

    #[test]
    fn orders_points_by_x() {
        let sample = Sample::from_indices(&dataset(), [3, 0, 2]);
        assert_eq!(sample.indices(), &[0, 2, 3]);
        assert_eq!(sample.xs(), &[0.0, 2.0, 3.0]);
        assert_eq!(sample.ys(), &[5.0, 7.0, 8.0]);
    }

    #[test]
    fn serializes_plain_sequences() {
        let sample = Sample::from_indices(&dataset(), [1, 2]);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"x":[1.0,2.0],"y":[6.0,7.0]}"#);
    }
}

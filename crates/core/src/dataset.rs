use std::ops::RangeInclusive;

use thiserror::Error;

/// Errors that can occur when constructing a [`Dataset`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("dataset has no points")]
    Empty,

    #[error("x has {xs} values but y has {ys}")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("non-finite value at row {row}")]
    NonFinite { row: usize },
}

/// An ordered time series `D = {(x_i, y_i)}` identified by a name.
///
/// The name is the cache identity used by memoizing teachers: two datasets
/// with the same name are assumed to hold the same series.
///
/// Points are stored sorted by x. Construction sorts stably, so rows that
/// share an x keep their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Dataset {
    /// Creates a dataset from parallel x/y sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences are empty, differ in length, or
    /// contain a NaN or infinite value.
    pub fn new(
        name: impl Into<String>,
        xs: Vec<f64>,
        ys: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        if xs.len() != ys.len() {
            return Err(DatasetError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(DatasetError::Empty);
        }
        if let Some(row) = xs
            .iter()
            .zip(&ys)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(DatasetError::NonFinite { row });
        }

        let mut points: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (xs, ys) = points.into_iter().unzip();

        Ok(Self {
            name: name.into(),
            xs,
            ys,
        })
    }

    /// Returns the dataset's cache identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; construction rejects empty series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the `(x, y)` pair at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn point(&self, i: usize) -> (f64, f64) {
        (self.xs[i], self.ys[i])
    }

    /// Returns the x and y slices covering the inclusive index range.
    ///
    /// # Panics
    ///
    /// Panics if the range extends past the end of the dataset.
    #[must_use]
    pub fn window(&self, range: RangeInclusive<usize>) -> (&[f64], &[f64]) {
        (&self.xs[range.clone()], &self.ys[range])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_points_by_x() {
        let d = Dataset::new("d", vec![2.0, 0.0, 1.0], vec![20.0, 0.0, 10.0]).unwrap();
        assert_eq!(d.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(d.ys(), &[0.0, 10.0, 20.0]);
        assert_eq!(d.name(), "d");
    }

    #[test]
    fn equal_x_keeps_row_order() {
        let d = Dataset::new("d", vec![1.0, 0.0, 1.0], vec![5.0, 0.0, 6.0]).unwrap();
        assert_eq!(d.ys(), &[0.0, 5.0, 6.0]);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = Dataset::new("d", vec![0.0, 1.0], vec![0.0]).unwrap_err();
        assert_eq!(err, DatasetError::LengthMismatch { xs: 2, ys: 1 });
    }

    #[test]
    fn rejects_empty() {
        let err = Dataset::new("d", vec![], vec![]).unwrap_err();
        assert_eq!(err, DatasetError::Empty);
    }

    #[test]
    fn rejects_nan() {
        let err = Dataset::new("d", vec![0.0, 1.0], vec![0.0, f64::NAN]).unwrap_err();
        assert_eq!(err, DatasetError::NonFinite { row: 1 });
    }

    #[test]
    fn window_is_inclusive() {
        let d = Dataset::new("d", vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        let (xs, ys) = d.window(1..=2);
        assert_eq!(xs, &[1.0, 2.0]);
        assert_eq!(ys, &[1.0, 4.0]);
    }
}

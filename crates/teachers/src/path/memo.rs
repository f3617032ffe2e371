use ndarray::Array2;
use serde::{Deserialize, Serialize};

const UNSET: i64 = -1;
const NO_CHAIN: i64 = -2;

/// A solved subproblem: the best continuation after some index with some
/// number of picks remaining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// The best next index and the cost of the best chain through it.
    Chain { next: usize, distance: f64 },

    /// No increasing chain with that many picks fits after the index.
    NoChain,
}

/// Memoized path search subproblems for one dataset.
///
/// Two parallel `N × N` grids indexed by `(previous index, remaining picks)`:
/// one holds the best next index, the other the best remaining distance.
/// Once an entry is populated it is final for the dataset and evaluator it
/// was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoTable {
    len: usize,
    evaluator: String,
    next: Array2<i64>,
    #[serde(with = "grid")]
    distance: Array2<f64>,
}

impl MemoTable {
    /// Creates an empty table for a dataset of `len` points scored by
    /// `evaluator`.
    #[must_use]
    pub fn new(len: usize, evaluator: &str) -> Self {
        Self {
            len,
            evaluator: evaluator.to_owned(),
            next: Array2::from_elem((len, len), UNSET),
            distance: Array2::zeros((len, len)),
        }
    }

    /// Returns the dataset length the table was built for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the name of the evaluator the distances were computed with.
    #[must_use]
    pub fn evaluator(&self) -> &str {
        &self.evaluator
    }

    /// Returns true if the table can serve a search over `len` points scored
    /// by `evaluator`.
    #[must_use]
    pub fn is_compatible(&self, len: usize, evaluator: &str) -> bool {
        self.len == len
            && self.evaluator == evaluator
            && self.next.dim() == (len, len)
            && self.distance.dim() == (len, len)
    }

    /// Returns the solved entry for `(prev, remaining)`, if any.
    #[must_use]
    pub fn get(&self, prev: usize, remaining: usize) -> Option<Entry> {
        match *self.next.get((prev, remaining))? {
            UNSET => None,
            NO_CHAIN => Some(Entry::NoChain),
            next => Some(Entry::Chain {
                next: usize::try_from(next).ok()?,
                distance: self.distance[(prev, remaining)],
            }),
        }
    }

    /// Stores the solved entry for `(prev, remaining)`.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn set(&mut self, prev: usize, remaining: usize, entry: Entry) {
        let (next, distance) = match entry {
            Entry::Chain { next, distance } => (i64::try_from(next).unwrap_or(NO_CHAIN), distance),
            Entry::NoChain => (NO_CHAIN, 0.0),
        };
        if let Some(cell) = self.next.get_mut((prev, remaining)) {
            *cell = next;
            self.distance[(prev, remaining)] = distance;
        }
    }

    /// Returns the number of solved entries.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.next.iter().filter(|&&v| v != UNSET).count()
    }
}

/// Serializes a distance grid with non-finite cells written as labels.
///
/// JSON has no representation for infinities or NaN, and a segment whose
/// squared error overflows is scored as infinite.
mod grid {
    use ndarray::Array2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Finite(f64),
        Label(String),
    }

    impl Cell {
        fn new(value: f64) -> Self {
            match value {
                v if v.is_finite() => Self::Finite(v),
                v if v.is_nan() => Self::Label("nan".to_owned()),
                v if v > 0.0 => Self::Label("inf".to_owned()),
                _ => Self::Label("-inf".to_owned()),
            }
        }

        fn value(self) -> Result<f64, String> {
            match self {
                Self::Finite(v) => Ok(v),
                Self::Label(label) => match label.as_str() {
                    "inf" => Ok(f64::INFINITY),
                    "-inf" => Ok(f64::NEG_INFINITY),
                    "nan" => Ok(f64::NAN),
                    _ => Err(format!("unknown distance label `{label}`")),
                },
            }
        }
    }

    #[derive(Serialize, Deserialize)]
    struct Grid {
        dim: (usize, usize),
        data: Vec<Cell>,
    }

    pub(super) fn serialize<S: Serializer>(
        grid: &Array2<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let data = grid.iter().map(|&v| Cell::new(v)).collect();
        Grid {
            dim: grid.dim(),
            data,
        }
        .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Array2<f64>, D::Error> {
        let Grid { dim, data } = Grid::deserialize(deserializer)?;
        let data = data
            .into_iter()
            .map(Cell::value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(D::Error::custom)?;
        Array2::from_shape_vec(dim, data).map_err(D::Error::custom)
    }
}

//! Bounded dynamic-programming path search.
//!
//! # Algorithm
//!
//! The path search selects an increasing chain of `depth` indices
//! `i₁ < i₂ < … < iₙ` that minimizes the cumulative error of the straight
//! segments joining consecutive picks. Each segment `(a, b)` is a line
//! through those two points, scored with the evaluator over the rows it is
//! responsible for:
//!
//! - the first segment covers the prefix `0..=i₂`,
//! - every later segment covers `a+1..=b`,
//! - the last segment always extends to the end of the series.
//!
//! Errors therefore accumulate left to right. With `depth = 2` the single
//! segment is scored against the whole series, which makes the search agree
//! with [`exhaustive::pairs`](crate::exhaustive::pairs).
//!
//! The best continuation after index `p` with `r` picks remaining satisfies
//!
//! ```text
//! best(p, 0) = 0
//! best(p, r) = min over p < i of  segment(p, i) + best(i, r - 1)
//! ```
//!
//! Each `(p, r)` is solved once and kept in a [`MemoTable`], making the search
//! `O(N²·depth)` segment fits instead of exponential. The outer loop tries
//! every starting pair `(i₁, i₂)` and follows the memoized chain forward.
//!
//! # Memoization
//!
//! Tables are loaded from a [`MemoStore`] under the dataset name before the
//! search and saved back once it ends. Entries do not depend on `depth`, so
//! searches of different depths share a table. A stored table built for a
//! different dataset length or evaluator is discarded. The store trusts the
//! dataset name: two datasets with the same name are assumed identical.
//!
//! A stored table that cannot be parsed is discarded the same way.
//!
//! # Observation
//!
//! Events are emitted once per starting pair, after its chain is solved. The
//! first event therefore arrives only after the subproblems behind the first
//! pair are filled in, and an observer cannot stop the search before then.
//!
//! Datasets shorter than `depth` are searched with `depth = N`.

mod config;
mod memo;
mod search;
mod store;


pub use config::{Config, ConfigError, DEFAULT_DEPTH};
pub use memo::{Entry, MemoTable};
pub use store::{FileStore, InMemoryStore, MemoStore, StoreError};

use exemplar_core::{Dataset, Evaluator, Observer};

use crate::{Action, Error, Event, Solution};

/// Finds the chain of `config.depth()` points with the lowest cumulative
/// segment error.
///
/// The observer receives an [`Event`] for every starting pair, carrying the
/// full chain that pair leads to.
///
/// # Errors
///
/// Returns an error if the memo store fails to load or save, or if a fit
/// fails.
pub fn select<E, S, Obs>(
    dataset: &Dataset,
    evaluator: &E,
    store: &mut S,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    S: MemoStore + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::search(dataset, evaluator, store, config, observer)
}

/// Finds the best chain without observer support.
///
/// # Errors
///
/// Returns an error if the memo store fails to load or save, or if a fit
/// fails.
pub fn select_unobserved<E, S>(
    dataset: &Dataset,
    evaluator: &E,
    store: &mut S,
    config: &Config,
) -> Result<Solution, Error>
where
    E: Evaluator,
    S: MemoStore + ?Sized,
{
    select(dataset, evaluator, store, config, ())
}

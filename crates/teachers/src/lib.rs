//! Teachers: search strategies that choose which points of a dataset to show.
//!
//! A teacher selects a small [`Sample`] of a [`Dataset`] so that a human proxy
//! fit only on the sample approximates the whole series under an evaluator.
//!
//! # Teachers
//!
//! - [`exhaustive`] — every pair (line) or triple (parabola)
//! - [`path`] — bounded dynamic programming over increasing index chains,
//!   memoized in a [`MemoStore`](path::MemoStore)
//! - [`greedy`] — forward construction until the first local optimum in size
//! - [`hill_climb`] — randomized local search with restarts
//!
//! # Observer Events
//!
//! Every teacher emits [`Event::Evaluated`] for each scored candidate and
//! [`Event::Improved`] whenever the best candidate so far changes. Observers
//! can return [`Action::StopEarly`] to halt the search; the best candidate
//! found so far is returned with [`Status::StoppedByObserver`].
//!
//! [`Sample`]: exemplar_core::Sample
//! [`Dataset`]: exemplar_core::Dataset

mod action;
mod best;
mod combinations;
mod error;
mod event;
mod score;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub mod exhaustive;
pub mod greedy;
pub mod hill_climb;
pub mod path;

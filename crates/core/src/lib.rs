//! Core traits and types for the Exemplar framework.
//!
//! This crate defines the shared abstractions that teachers, observers, and
//! pipelines build on:
//!
//! - [`Dataset`] — an immutable, x-sorted time series with a cache identity
//! - [`Sample`] — an x-sorted subset of a dataset chosen by a teacher
//! - [`HumanProxy`] / [`Predict`] — a regression model standing in for how a
//!   human would extrapolate from a handful of points
//! - [`Evaluator`] — a distance between a fitted model and the true series
//! - [`Observer`] — receives teacher events and optionally returns control actions

mod dataset;
mod evaluator;
mod observer;
mod proxy;
mod sample;

pub use dataset::{Dataset, DatasetError};
pub use evaluator::Evaluator;
pub use observer::Observer;
pub use proxy::{FitError, HumanProxy, Predict};
pub use sample::Sample;

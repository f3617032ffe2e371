//! Reusable observers for Exemplar teachers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every teacher in `exemplar-teachers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-teacher observers
//!   ([`HasDistance`], [`CanStopEarly`])
//! - [`Deadline`] — stops a search once a wall-clock budget elapses
//! - [`Trace`] — logs improvements through `tracing`
//!
//! [`Observer`]: exemplar_core::Observer
//! [`HasDistance`]: traits::HasDistance
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod deadline;
mod trace;

pub use deadline::Deadline;
pub use trace::Trace;

//! Shared fixtures for the cross-crate tests.

pub mod fixtures;

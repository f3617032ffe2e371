//! Pipelines binding a human proxy, a teacher, and an evaluator.
//!
//! A [`Pipeline`] is built from component names, usually through a
//! [`PipelineSpec`], and validated before any work happens. It then
//! generates samples with its teacher and scores them by refitting its proxy
//! on the sample and evaluating against the whole series.
//!
//! ```no_run
//! use exemplar_pipeline::{DataDir, PipelineSpec, run_file};
//! use exemplar_teachers::path::FileStore;
//!
//! let data = DataDir::new("data");
//! let mut store = FileStore::new("memo");
//! let spec = PipelineSpec::new("H_PL7", "T_PL7", "E_MSE");
//!
//! let report = run_file(&data, "temperature.csv", &spec, &mut store)?;
//! println!("{}", report.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod loader;
mod pipeline;
mod report;
mod spec;

pub mod registry;

pub use error::{ConfigurationError, Error};
pub use loader::{DataDir, LoadError};
pub use pipeline::{Pipeline, run_file};
pub use registry::{EvaluatorName, ProxyName, TeacherName, UnknownName};
pub use report::Report;
pub use spec::PipelineSpec;

//! # Aggregation Benchmark Suite
//!
//! Holds a fixed-size collection of integers generated once before
//! measurement and exposes four parameterless operations (minimum, maximum,
//! average, sum) that the benchmarking harness invokes repeatedly and
//! times independently.
//!
//! The dataset is owned exclusively by the suite and is never mutated after
//! [`AggregationSuite::setup`]; re-running setup replaces it wholesale with
//! an identical sequence, so operation results are stable across the whole
//! measurement run.

mod dataset;
mod error;
mod handler;
pub mod ops;

pub use dataset::Dataset;
pub use error::{SuiteError, SuiteResult};
pub use handler::AggregationSuite;

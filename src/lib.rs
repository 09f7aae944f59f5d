//! # agg-bench
//!
//! Micro-benchmarks for the four built-in integer aggregations: minimum,
//! maximum, average, and sum.
//!
//! This crate supplies the component under measurement: a fixed dataset
//! generated once before any timed operation, plus four parameterless
//! aggregation entry points over it. All timing, warm-up, statistical
//! analysis, and reporting is delegated to Criterion, which drives the
//! suite through the bench targets under `benches/`.
//!
//! ## Modules
//!
//! - [`suite`]: the dataset and the aggregation operations under test
//! - [`config`]: TOML configuration covering problem size, toolchain-target
//!   metadata, and the allocation-diagnostics toggle consumed by the
//!   bench harness

pub mod config;
pub mod suite;

//! # Configuration System
//!
//! TOML-based configuration for the benchmark suite: the problem size, the
//! toolchain targets the suite should be measured under, and the
//! allocation-diagnostics toggle. The latter two are metadata consumed by
//! the bench harness, not behavior implemented by the suite itself.
//!
//! ## Example Configuration
//!
//! ```toml
//! [suite]
//! size = 9000
//! targets = ["stable", "nightly"]
//! memory_diagnostics = true
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{BenchConfig, LogFormat, LogLevel, LoggingConfig, SuiteConfig, ToolchainTarget};
pub use validation::{BasicValidator, ValidationError, ValidationResult, Validator};

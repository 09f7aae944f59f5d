//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root configuration structure for the benchmark crate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    /// Benchmark suite configuration.
    pub suite: SuiteConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Benchmark suite configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Number of elements in the generated dataset.
    ///
    /// Setup builds the sequence `1..=size`, so the size genuinely controls
    /// the dataset length.
    pub size: usize,

    /// Toolchain targets the suite should be measured under.
    ///
    /// Metadata for the harness side: the suite itself never branches on it.
    pub targets: Vec<ToolchainTarget>,

    /// Track per-operation memory allocation in the bench harness.
    pub memory_diagnostics: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            size: 9000,
            targets: vec![ToolchainTarget::Stable],
            memory_diagnostics: true,
        }
    }
}

impl SuiteConfig {
    /// Create a suite config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dataset size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Replace the target list.
    #[must_use]
    pub fn with_targets(mut self, targets: Vec<ToolchainTarget>) -> Self {
        self.targets = targets;
        self
    }

    /// Enable or disable allocation tracking.
    #[must_use]
    pub fn with_memory_diagnostics(mut self, enabled: bool) -> Self {
        self.memory_diagnostics = enabled;
        self
    }
}

/// Toolchain target the suite is measured under.
///
/// Consumed by whatever runs the benchmarks (CI matrix, scripts); one
/// process invocation measures one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainTarget {
    /// Stable toolchain (default).
    #[default]
    Stable,
    /// Beta toolchain.
    Beta,
    /// Nightly toolchain.
    Nightly,
}

impl fmt::Display for ToolchainTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Beta => write!(f, "beta"),
            Self::Nightly => write!(f, "nightly"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: LogLevel,

    /// Log format (json, pretty, compact).
    pub format: LogFormat,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (most verbose).
    Trace,
    /// Debug level.
    Debug,
    /// Info level (default).
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level (least verbose).
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (machine-readable).
    Json,
    /// Pretty format with colors (default).
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
}

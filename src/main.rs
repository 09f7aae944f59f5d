//! agg-bench binary entry point.
//!
//! Runs the suite once outside the benchmarking harness and prints the four
//! aggregate values. Useful as a smoke check that the configured dataset
//! produces the expected results before a measurement run.

use agg_bench::config::{BasicValidator, ConfigLoader};
use agg_bench::suite::AggregationSuite;

const CONFIG_PATH: &str = "agg-bench.toml";

fn main() {
    if let Err(e) = run() {
        eprintln!("agg-bench: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::new()
        .with_validator(BasicValidator::new())
        .load_or_default(CONFIG_PATH)?;

    println!("agg-bench v{}", env!("CARGO_PKG_VERSION"));
    let targets: Vec<String> = config.suite.targets.iter().map(ToString::to_string).collect();
    println!(
        "suite: size={} targets=[{}] memory_diagnostics={}",
        config.suite.size,
        targets.join(", "),
        config.suite.memory_diagnostics
    );

    let mut suite = AggregationSuite::new(config.suite);
    suite.setup();

    println!("  min     = {}", suite.min()?);
    println!("  max     = {}", suite.max()?);
    println!("  average = {}", suite.average()?);
    println!("  sum     = {}", suite.sum());

    Ok(())
}

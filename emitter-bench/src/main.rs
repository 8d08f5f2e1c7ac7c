mod config;
mod error;
mod runner;

use anyhow::Result;
use clap::Parser;
use config::{BenchConfig, Cli};
use tracing_subscriber::filter::EnvFilter;

fn main() -> Result<()> {
    // 日志写到 stderr，避免与 --json 输出混在一起
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BenchConfig::from(&cli);
    let report = runner::run(&config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}

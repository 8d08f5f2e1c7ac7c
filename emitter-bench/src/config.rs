//! 基准测试配置
//!
//! 循环次数依次取自命令行 `--loops`、环境变量 `EMITTER_BENCH_LOOPS`，均未提供时使用默认值。
//!
use bon::Builder;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "emitter-bench",
    version,
    about = "Measure the on -> emit -> off cycle of the in-process emitter"
)]
pub struct Cli {
    /// Number of on -> emit -> off cycles
    #[arg(short, long, env = "EMITTER_BENCH_LOOPS", default_value_t = BenchConfig::DEFAULT_LOOPS)]
    pub loops: u64,

    /// Event name used for every cycle
    #[arg(long, default_value = BenchConfig::DEFAULT_EVENT)]
    pub event: String,

    /// Handlers subscribed and unsubscribed per cycle
    #[arg(long, default_value_t = 1)]
    pub handlers: usize,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Builder, Debug, Clone)]
pub struct BenchConfig {
    #[builder(default = BenchConfig::DEFAULT_LOOPS)]
    loops: u64,
    #[builder(into, default = BenchConfig::DEFAULT_EVENT.to_string())]
    event: String,
    #[builder(default = 1)]
    handlers: usize,
}

impl BenchConfig {
    pub const DEFAULT_LOOPS: u64 = 100_000;
    pub const DEFAULT_EVENT: &'static str = "event";

    pub fn loops(&self) -> u64 {
        self.loops
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn handlers(&self) -> usize {
        self.handlers
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&Cli> for BenchConfig {
    fn from(cli: &Cli) -> Self {
        Self::builder()
            .loops(cli.loops)
            .event(cli.event.as_str())
            .handlers(cli.handlers)
            .build()
    }
}

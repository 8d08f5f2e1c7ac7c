//! 订阅 → 发布 → 取消订阅循环的计时运行器
//!
//! 每次迭代对同一事件名依次执行：注册全部处理器、发布一次、逐个取消注册。
//! 计时只覆盖循环本身；循环结束后额外发布一次（不计时）用于确认没有残留处理器。
//!
use crate::config::BenchConfig;
use crate::error::BenchError;
use emitter::{Emitter, Handler};
use serde::Serialize;
use std::fmt;
use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub event: String,
    pub loops: u64,
    pub handlers: usize,
    pub invocations: u64,
    pub elapsed_ms: f64,
    pub ns_per_cycle: f64,
}

impl BenchReport {
    fn new(config: &BenchConfig, elapsed: Duration, invocations: u64) -> Self {
        let ns_per_cycle = if config.loops() == 0 {
            0.0
        } else {
            elapsed.as_nanos() as f64 / config.loops() as f64
        };

        Self {
            event: config.event().to_string(),
            loops: config.loops(),
            handlers: config.handlers(),
            invocations,
            elapsed_ms: elapsed.as_secs_f64() * 1_000.0,
            ns_per_cycle,
        }
    }

    pub fn to_json(&self) -> Result<String, BenchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elapsed: {:.2} ms ({} loops x {} handlers, {:.1} ns per cycle, {} invocations)",
            self.elapsed_ms, self.loops, self.handlers, self.ns_per_cycle, self.invocations
        )
    }
}

/// 基准处理器：做一次乘法并计数
fn doubling_handler(invocations: Arc<AtomicU64>) -> Handler<()> {
    Handler::infallible(move |_| {
        let mut a = black_box(1);
        a *= 2;
        black_box(a);
        invocations.fetch_add(1, Ordering::Relaxed);
    })
}

/// 再发布一次（不计时），若仍有处理器被调用说明 `off` 没有抵消 `on`
fn ensure_no_leftovers(
    emitter: &Emitter<()>,
    event: &str,
    invocations: &AtomicU64,
) -> Result<(), BenchError> {
    let before = invocations.load(Ordering::Relaxed);
    emitter.emit(event, ())?;
    let remaining = invocations.load(Ordering::Relaxed) - before;
    if remaining > 0 {
        return Err(BenchError::Leaked { remaining });
    }
    Ok(())
}

pub fn run(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    let emitter: Emitter<()> = Emitter::new();
    let invocations = Arc::new(AtomicU64::new(0));
    let handlers: Vec<_> = (0..config.handlers())
        .map(|_| doubling_handler(invocations.clone()))
        .collect();
    let event = config.event();

    info!(
        loops = config.loops(),
        handlers = config.handlers(),
        event,
        "starting on -> emit -> off cycle"
    );

    let started = Instant::now();
    for _ in 0..config.loops() {
        for h in &handlers {
            emitter.on(event, h.clone());
        }
        emitter.emit(event, ())?;
        for h in &handlers {
            emitter.off(event, h);
        }
    }
    let elapsed = started.elapsed();

    let observed = invocations.load(Ordering::Relaxed);
    ensure_no_leftovers(&emitter, event, &invocations)?;

    let report = BenchReport::new(config, elapsed, observed);
    info!(
        elapsed_ms = report.elapsed_ms,
        ns_per_cycle = report.ns_per_cycle,
        "cycle finished"
    );

    Ok(report)
}

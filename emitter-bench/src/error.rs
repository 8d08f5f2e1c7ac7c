use emitter::EmitError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("emit: {0}")]
    Emit(#[from] EmitError),

    #[error("report: {0}")]
    Report(#[from] serde_json::Error),

    /// 循环结束后仍有处理器残留在列表中（`off` 未抵消 `on`）
    #[error("handlers leaked after cycle: remaining={remaining}")]
    Leaked { remaining: u64 },
}

//! 发射器错误定义
//!
//! 未注册过的事件不视为错误：`off` 与 `emit` 对其均为空操作。
//! 唯一的失败来源是处理器本身，`emit` 遇到第一个失败即停止分发（fail-fast），
//! 处理器之间不做隔离。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EmitError {
    /// 处理器返回错误，`position` 为其在本次分发快照中的下标（从 0 开始）
    #[error("event handler failed: position={position}, reason={source}")]
    Handler {
        position: usize,
        #[source]
        source: anyhow::Error,
    },
}

impl EmitError {
    pub fn handler(position: usize, source: anyhow::Error) -> Self {
        Self::Handler { position, source }
    }

    /// 失败处理器在分发快照中的位置
    pub fn position(&self) -> usize {
        match self {
            Self::Handler { position, .. } => *position,
        }
    }
}

pub type EmitResult<T> = Result<T, EmitError>;

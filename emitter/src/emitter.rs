//! 事件发射器（Emitter）
//!
//! 基于 `DashMap` 的事件名 → 处理器列表映射：
//! - 列表在首次 `on` 时惰性创建，之后即使被 `off` 清空也不会删除条目；
//! - `on`/`off` 持有对应分片的写锁，同一事件名上的修改互斥；
//! - `emit` 在读锁下克隆列表快照后立即释放锁，再逐个调用处理器。
//!   因此并发的 `on`/`off` 不会影响正在进行的分发，处理器内部也可以重入同一个发射器。
//!
use crate::error::{EmitError, EmitResult};
use crate::handler::Handler;
use dashmap::DashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// 事件发射器：事件名 → 按注册顺序排列的处理器列表
pub struct Emitter<A, K = String> {
    events: DashMap<K, Vec<Handler<A>>>,
}

impl<A, K> Default for Emitter<A, K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            events: DashMap::new(),
        }
    }
}

impl<A, K> Emitter<A, K>
where
    K: Eq + Hash,
{
    /// 创建一个不含任何事件的发射器
    pub fn new() -> Self {
        Self::default()
    }

    /// 订阅：将处理器追加到事件列表末尾，已有条目的顺序保持不变
    ///
    /// 同一处理器重复注册会产生两个独立条目，`emit` 时各调用一次。
    pub fn on(&self, event: impl Into<K>, handler: Handler<A>) {
        self.events.entry(event.into()).or_default().push(handler);
    }

    /// 取消订阅：移除注册顺序中第一个与 `handler` 相同的条目
    ///
    /// 事件从未注册过或处理器不在列表中时为空操作。
    pub fn off<Q>(&self, event: &Q, handler: &Handler<A>)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(mut handlers) = self.events.get_mut(event) else {
            tracing::trace!("off: event has never been registered, ignored");
            return;
        };

        if let Some(index) = handlers.iter().position(|h| h == handler) {
            handlers.remove(index);
        }
    }

    /// 发布：按注册顺序同步调用事件下的全部处理器，每个处理器收到同一份参数的引用
    ///
    /// - 事件未注册或列表为空时不调用任何处理器，返回 `Ok(())`；
    /// - 分发基于调用开始时的列表快照，处理器对列表的修改只影响之后的 `emit`；
    /// - 第一个失败的处理器会中止本次分发，错误带着其位置返回给调用方；
    /// - 处理器 panic 不做捕获，直接穿过 `emit` 向上展开。
    pub fn emit<Q>(&self, event: &Q, args: A) -> EmitResult<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(snapshot) = self.events.get(event).map(|h| h.value().clone()) else {
            tracing::trace!("emit: event has never been registered, ignored");
            return Ok(());
        };

        for (position, handler) in snapshot.iter().enumerate() {
            handler.call(&args).map_err(|source| {
                tracing::trace!(position, "emit: handler failed, remaining handlers skipped");
                EmitError::handler(position, source)
            })?;
        }

        Ok(())
    }
}

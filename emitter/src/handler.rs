//! 事件处理器（Handler）
//!
//! 对调用方提供的闭包做类型擦除并以 `Arc` 共享。发射器只关心两件事：
//! - 调用：`emit` 时以参数引用调用；
//! - 身份：`off` 时按身份比较。同一个 `Handler` 的克隆彼此相等，
//!   分别构造的两个处理器即使闭包完全相同也互不相等。
//!
use std::fmt;
use std::sync::Arc;

type HandlerFn<A> = dyn Fn(&A) -> anyhow::Result<()> + Send + Sync;

pub struct Handler<A> {
    f: Arc<HandlerFn<A>>,
}

impl<A> Handler<A> {
    /// 由可能失败的闭包构造处理器，错误会经 `emit` 传递给调用方
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// 由不会失败的闭包构造处理器，返回值被忽略
    pub fn infallible<F>(f: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self::new(move |args| {
            f(args);
            Ok(())
        })
    }

    pub(crate) fn call(&self, args: &A) -> anyhow::Result<()> {
        (self.f)(args)
    }
}

impl<A> Clone for Handler<A> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<A> PartialEq for Handler<A> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl<A> Eq for Handler<A> {}

impl<A> fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("ptr", &Arc::as_ptr(&self.f).cast::<()>())
            .finish()
    }
}

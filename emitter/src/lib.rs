//! 进程内事件发射器（emitter）
//!
//! 以事件名为键，维护一组按注册顺序排列的处理器，并提供三个操作：
//! - `on`：在事件的处理器列表末尾追加处理器；
//! - `off`：移除该事件下第一个与给定处理器相同的条目；
//! - `emit`：按注册顺序同步调用该事件下的全部处理器，并原样转发参数。
//!
//! 与全局单例不同，`Emitter` 是显式构造的值，多个实例之间互不影响，便于测试隔离。
//!
//! 典型用法：
//! ```rust
//! use emitter::{Emitter, Handler};
//!
//! let emitter: Emitter<(i32, &'static str)> = Emitter::new();
//! let handler = Handler::infallible(|(n, s): &(i32, &'static str)| {
//!     assert_eq!((*n, *s), (5, "five"));
//! });
//!
//! emitter.on("x", handler.clone());
//! emitter.emit("x", (5, "five")).unwrap();
//! emitter.off("x", &handler);
//! ```
//!
pub mod emitter;
pub mod error;
pub mod handler;

pub use emitter::Emitter;
pub use error::{EmitError, EmitResult};
pub use handler::Handler;

//! External tool invocation.
//!
//! [`ProcessInvoker`] runs one configured tool per call with a wall-clock
//! limit and hands back captured output. Non-zero exits are not errors at
//! this layer; callers decide via [`ProcessOutput::into_usable`].

pub mod invoker;
pub mod subprocess;

pub use invoker::{ProcessError, ProcessInvoker, ProcessOutput, ToolSpec};

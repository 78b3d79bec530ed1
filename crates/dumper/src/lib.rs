//! # Dumper
//!
//! `dump` / `dd` 调试输出模块。
//!
//! 负责：
//! - 为控制台渲染每个参数（完整展开的 `Debug`）
//! - 开启时把序列化后的参数追加到日志文件
//! - 第一个参数是 [`Responder`] 时改为写入响应
//! - `dd` 把终止信号交还给调用方
//!
//! # Example
//!
//! ```no_run
//! use dumper::{DumpArg, Dumper, DumperConfig};
//!
//! let mut dumper = Dumper::new(DumperConfig::default());
//! let user = ("bob", 42);
//! let outcome = dumper.dd(vec![DumpArg::from(&user)]).unwrap();
//! outcome.enforce();
//! ```

pub mod dumper;
pub mod error;
pub mod formatter;
mod macros;
pub mod selector;
pub mod sinks;

pub use contracts::{
    DumpArg, DumpMode, DumpResponse, DumpValue, DumperConfig, JsonReply, Outcome, Responder,
    ResponseStatus,
};
pub use dumper::{response_body, Dumper};
pub use error::DumpError;
pub use selector::{select, Selection, Target};
pub use sinks::{ConsoleSink, HttpResponder, LogFileSink, RecordedResponse};

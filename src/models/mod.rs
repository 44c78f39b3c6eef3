//! 核心数据模型模块
//!
//! 定义人格、会话与实时通道事件。

pub mod event;
pub mod personality;
pub mod session;

pub use event::*;
pub use personality::*;
pub use session::*;

//!
//! src/message/mod.rs
//! Message 层：消息定义
//!
//! Event 层把按键翻译成消息，Dispatcher 把命令结果包装成消息，
//! Update 层只消费消息。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage 顶层消息
//!         mod content;    // ContentMessage 列表视图操作
//!         mod form;       // FormMessage 表单操作
//!         mod result;     // ResultMessage 命令结果
//!
//!
//!     消息的两个来源：
//!
//!         按键 ──▶ event::handle_event() ──▶ AppMessage::{Quit, Content, Form, DismissError}
//!
//!         命令 ──▶ Dispatcher ──▶ 事件队列 ──▶ AppMessage::Delivered(Delivery { epoch, message })
//!                                                                              ↑↑↑↑↑↑↑
//!                                                                         ResultMessage
//!
//!     表单提交/取消不经过队列，由 update 层直接转换成 ResultMessage
//!     后交给同一个 reducer 入口处理。
//!

mod app;
mod content;
mod form;
mod result;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use form::FormMessage;
pub use result::{AppError, InfoPurpose, ResultMessage};

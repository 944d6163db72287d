//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘
//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：终端的初始化和恢复，以及会话日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 会话日志（tracing subscriber）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     会话日志：
//!         在 src/main.rs 中，有：
//!
//!             let subscriber = util::session_subscriber(&log_path, &cli.log_level)?;
//!             let _log_guard = tracing::subscriber::set_default(subscriber);
//!
//!         set_default 只对当前线程生效，守卫析构时自动卸载。
//!         命令在 tokio 工作线程上执行，派发时通过
//!         `WithSubscriber::with_current_subscriber()` 把同一个 subscriber 带过去；
//!         输入线程启动前也会捕获当前 Dispatch。
//!
//!
//!     终端：
//!         init_terminal()     启用原始模式并进入备用屏幕
//!         restore_terminal()  禁用原始模式、离开备用屏幕、显示光标
//!
//!         注意：无论主循环是正常退出还是返回错误，都必须调用 restore_terminal！
//!               否则终端会保持在原始模式，用户输入不会正常显示。

mod logging;
mod terminal;

pub use logging::{default_log_path, session_subscriber};
pub use terminal::{init_terminal, restore_terminal, Term};

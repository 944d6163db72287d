//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌──────────┐  Input   ┌────────────┐   pop    ┌──────────┐               │
//！│   │ 输入线程  │ ───────▶ │  事件队列   │ ───────▶ │  Event   │ ─▶ Message    │
//！│   │ (pump)   │          │ (mpsc)     │          │   层     │               │
//！│   └──────────┘          └────────────┘          └──────────┘               │
//！│                               ▲                                            │
//！│                               │ Delivery                                   │
//！│                         ┌────────────┐                                     │
//！│                         │ Dispatcher │  (tokio 工作线程)                    │
//！│                         └────────────┘                                     │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责读取终端输入，并将键盘事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!         mod pump;           // 输入线程
//!
//!         pub use handler::handle_event;
//!         pub use pump::InputPump;
//!
//!
//!     其中有：
//!         · InputPump       输入线程，由 main.rs 启动
//!
//!             loop {
//!                 if event::poll(100ms)? {            // 最长等待 100ms，以便响应停止信号
//!                     sender.send(QueueEvent::Input(event::read()?))
//!                 }
//!             }
//!
//!             读取失败时发送 QueueEvent::InputFailed 后退出，主循环随之结束。
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，下一轮自动重绘
//!             其他事件                             // 忽略
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 只处理 Press，忽略 Release / Repeat
//!                 - 错误屏打开时，任意键 → AppMessage::DismissError
//!                 - 表单视图中，调用 handle_form_keys 处理（q 作为普通字符）
//!                 - q / Ctrl+C → AppMessage::Quit
//!                 - 其余调用 handle_list_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     列表视图：
//!             ↑ / k           → ContentMessage::SelectPrevious
//!             ↓ / j           → ContentMessage::SelectNext
//!             Home / End      → ContentMessage::SelectFirst / SelectLast
//!             Enter           → ContentMessage::Confirm
//!             a / n           → ContentMessage::Add
//!             e               → ContentMessage::Edit
//!             d               → ContentMessage::Delete
//!             r               → ContentMessage::Refresh
//!             Esc / Backspace → ContentMessage::Back
//!             b               → ContentMessage::Home
//!             m               → ContentMessage::Messages
//!
//!         各按键在不同视图中的含义由 update 层决定，
//!         例如 Enter 在集群列表中是连接，在 Topic 列表中是查看详情。
//!
//!     表单视图：
//!             Esc / Ctrl+C        → FormMessage::Cancel
//!             Tab / ↓             → FormMessage::NextField
//!             Shift+Tab / ↑       → FormMessage::PrevField
//!             ← / →               → FormMessage::SwitchButton
//!             Enter               → FormMessage::Confirm
//!             字符输入             → FormMessage::Input(c)
//!             Backspace           → FormMessage::Backspace

mod handler;
mod keymap;
mod pump;

pub use handler::handle_event;
pub use pump::InputPump;

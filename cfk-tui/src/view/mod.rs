//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│         ┌──────────┐    读取     ┌─────────┐    绘制     ┌─────────┐       │
//！│         │  Model   │ ─────────▶ │  View   │ ─────────▶ │  终端    │       │
//！│         │   层     │            │   层    │            │ (Frame) │       │
//！│         └──────────┘            └─────────┘            └─────────┘       │
//！└─────────────────────────────────────────────────────────────────────────┘
//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 App，不修改任何状态，也不发出命令。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局
//!         pub mod theme;          // 主题和颜色
//!         mod components;         // 通用组件（状态栏、表单、错误屏、列表）
//!         mod pages;              // 各视图的页面内容
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 布局
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌──────────────────────────────────────────────────────────┐
//!     │ cfk v0.1.0 │ ● local                          ← 标题栏    │
//!     ├─ Topics @ local ─────────────────────────────────────────┤
//!     │ ▶ orders     12 partitions, RF 3                         │
//!     │   payments   Unknown details              ← 页面内容      │
//!     │                                                          │
//!     ├──────────────────────────────────────────────────────────┤
//!     │ ↑↓ Select │ Enter Details │ ... │ Topic orders created  │ ← 状态栏
//!     └──────────────────────────────────────────────────────────┘
//!
//!     渲染顺序：
//!         1. 标题栏（当前连接）
//!         2. 页面内容，按 app.view.backdrop() 选择：
//!                 ClusterList     → pages::clusters
//!                 TopicList       → pages::topics
//!                 TopicDetail     → pages::topic_detail
//!                 MessageViewport → pages::messages（占位）
//!            表单视图显示其背后的列表
//!         3. 状态栏（快捷键提示 + 最近的状态消息）
//!         4. 表单浮层（表单视图时）
//!         5. 错误屏（app.error 为 Some 时，在最上层）
//!
//!
//!     主题：
//!         启动时由配置文件的 ui.theme 调用 theme::set_theme()，
//!         之后各组件通过 theme::colors() 取色。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

//!
//! src/update/mod.rs
//! Update 层：状态更新（reducer）
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 列表视图操作
//!         mod form;           // 表单操作
//!         mod navigation;     // 视图跳转（多处共用）
//!         mod result;         // 命令结果 / 表单结果
//!
//!
//!     唯一入口：
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Envelope>
//!                                                         ↑↑↑↑↑↑↑↑↑↑↑↑↑
//!                                            需要执行的命令，由主循环交给 Dispatcher
//!
//!     update 不做 I/O，也不 spawn 任何东西，所以可以直接在测试里驱动。
//!
//!
//!     结果送达时先检查纪元：
//!
//!         Delivery { epoch: Some(e), .. } 且 e != app.epoch   → 丢弃
//!             （被丢弃的 Connected 仍然要发出 Close，避免连接泄漏）
//!         Delivery { epoch: None, .. }                        → 总是处理
//!
//!
//!     错误屏：
//!         任意键关闭。如果当前视图离不开那份没加载成功的数据
//!         （详情为空的 TopicDetail、表单为空的 EditTopic），先退回 Topic 列表。
//!

mod content;
mod form;
mod navigation;
mod result;

use crate::command::{Command, Delivery, Envelope};
use crate::message::{AppMessage, ResultMessage};
use crate::model::{App, ViewState};

/// 处理一条消息，返回需要派发的命令
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Envelope> {
    match msg {
        AppMessage::Quit => {
            tracing::info!("quit requested");
            app.should_quit = true;
            Vec::new()
        }
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Form(form_msg) => form::update(app, form_msg),
        AppMessage::Delivered(delivery) => deliver(app, delivery),
        AppMessage::DismissError => dismiss_error(app),
        AppMessage::Noop => Vec::new(),
    }
}

/// 命令结果送达
fn deliver(app: &mut App, delivery: Delivery) -> Vec<Envelope> {
    let Delivery { epoch, message } = delivery;

    if let Some(epoch) = epoch {
        if epoch != app.epoch() {
            tracing::debug!(epoch, current = app.epoch(), "discarding stale result");
            if let ResultMessage::Connected { client, .. } = message {
                return vec![Envelope::session(Command::Close(client))];
            }
            return Vec::new();
        }
    }

    result::apply(app, message)
}

/// 关闭错误屏
fn dismiss_error(app: &mut App) -> Vec<Envelope> {
    if app.error.take().is_none() {
        return Vec::new();
    }

    let orphaned = match app.view {
        ViewState::TopicDetail => app.detail.is_none(),
        ViewState::EditTopic => app.form.is_none(),
        _ => false,
    };
    if orphaned {
        navigation::enter_topic_list(app)
    } else {
        Vec::new()
    }
}

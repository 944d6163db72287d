//! 应用级消息定义

use super::{ContentMessage, FormMessage};
use crate::command::Delivery;

/// 应用级消息（顶层消息类型）
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 列表视图消息
    Content(ContentMessage),

    /// 表单消息
    Form(FormMessage),

    /// 命令结果送达
    Delivered(Delivery),

    /// 关闭错误屏
    DismissError,

    /// 无操作
    Noop,
}

//! 事件队列
//!
//! 按键和命令结果共用一个无界队列，主循环是唯一的消费者。

use crossterm::event::Event;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::Delivery;

/// 队列中的事件
#[derive(Debug)]
pub enum QueueEvent {
    /// 终端输入
    Input(Event),
    /// 命令结果
    Delivery(Delivery),
    /// 输入线程读取终端失败
    InputFailed(String),
}

/// 队列发送端（可任意克隆）
pub type QueueSender = UnboundedSender<QueueEvent>;

/// 事件队列
pub struct EventQueue {
    sender: QueueSender,
    receiver: UnboundedReceiver<QueueEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> QueueSender {
        self.sender.clone()
    }

    /// 阻塞等待下一个事件
    ///
    /// 只能在运行时之外的线程调用。队列自己持有一个发送端，
    /// 所以正常情况下不会返回 `None`。
    pub fn next(&mut self) -> Option<QueueEvent> {
        self.receiver.blocking_recv()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

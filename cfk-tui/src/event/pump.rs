//! 输入线程
//!
//! crossterm 的读取是阻塞的，放在独立线程里轮询，
//! 读到的事件送进和命令结果相同的队列。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;

use crate::command::{QueueEvent, QueueSender};

/// 轮询间隔，决定停止信号的响应延迟
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 输入线程句柄
pub struct InputPump {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputPump {
    /// 启动输入线程
    pub fn spawn(sender: QueueSender) -> Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        // 线程里沿用主线程的 subscriber
        let dispatch = tracing::dispatcher::get_default(Clone::clone);

        let handle = thread::Builder::new()
            .name("cfk-input".into())
            .spawn(move || {
                tracing::dispatcher::with_default(&dispatch, || pump(&flag, &sender));
            })
            .context("failed to spawn input thread")?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// 通知线程退出并等待
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("input thread panicked");
            }
        }
    }
}

fn pump(stop: &AtomicBool, sender: &QueueSender) {
    tracing::debug!("input thread started");
    while !stop.load(Ordering::Relaxed) {
        let event = match event::poll(POLL_INTERVAL) {
            Ok(true) => event::read(),
            Ok(false) => continue,
            Err(e) => Err(e),
        };
        let queued = match event {
            Ok(event) => QueueEvent::Input(event),
            Err(e) => {
                tracing::error!(error = %e, "failed to read terminal input");
                // 通知主循环后退出，读取失败通常不可恢复
                let _ = sender.send(QueueEvent::InputFailed(e.to_string()));
                return;
            }
        };
        if sender.send(queued).is_err() {
            // 主循环已退出
            return;
        }
    }
    tracing::debug!("input thread stopped");
}

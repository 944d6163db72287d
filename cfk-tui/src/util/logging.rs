//! 会话日志
//!
//! 终端处于原始模式时不能向 stdout/stderr 写任何东西，
//! 所以日志写入单独的会话日志文件。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// 默认日志文件：`<config_dir>/cfk/cfk.log`
pub fn default_log_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cfk")
        .join("cfk.log")
}

/// 构建写入 `path` 的 subscriber
///
/// 调用方用 `tracing::subscriber::set_default` 安装，守卫存活期间生效。
/// `level` 接受 `EnvFilter` 语法，例如 `debug` 或 `cfk=trace,info`。
pub fn session_subscriber(path: &Path, level: &str) -> Result<impl Subscriber + Send + Sync> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level \"{level}\""))?;

    Ok(tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_names(true),
        )
        .with(filter))
}

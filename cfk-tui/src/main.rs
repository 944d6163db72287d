//! cfk: Kafka 风格集群的终端控制台
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回需要执行的命令
//! - **Command**: 命令执行与事件队列 (`command/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置存储 (`backend/`)
//!
//!
//! main.rs
//! cfk 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                // 解析命令行参数
//!     session_subscriber()        // 安装会话日志
//!     Runtime::new()              // 创建 tokio 多线程运行时（命令在这里执行）
//!     JsonConfigStore::load()     // 加载配置，失败则退出码为 1
//!     init_terminal()             // 初始化终端
//!     InputPump::spawn()          // 启动输入线程
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!     client.close()              // 关闭仍然存活的连接
//!
//! }

mod app;
mod backend;
mod command;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Runtime;

use cfk_core::{ClusterConnector, InMemoryCluster, ProfileStore};

use backend::{default_config_path, JsonConfigStore};
use command::{Dispatcher, EventQueue, COMMAND_TIMEOUT};
use event::InputPump;
use util::{default_log_path, init_terminal, restore_terminal, session_subscriber};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "cfk", version, about = "Terminal console for Kafka-style streaming clusters")]
struct Cli {
    /// 配置文件路径
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 会话日志文件路径
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// 日志级别（EnvFilter 语法）
    #[arg(long, value_name = "LEVEL", env = "CFK_LOG", default_value = "info")]
    log_level: String,

    /// 模拟集群每次请求的延迟（毫秒）
    #[arg(long, value_name = "N", default_value_t = 0)]
    latency_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 会话日志（终端进入原始模式后不能再写 stdout）
    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let subscriber = session_subscriber(&log_path, &cli.log_level)?;
    let _log_guard = tracing::subscriber::set_default(subscriber);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cfk starting");

    // 2. 命令运行时
    let runtime = Runtime::new().context("failed to start async runtime")?;

    // 3. 加载配置
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let (store, config) = runtime
        .block_on(JsonConfigStore::load(&config_path))
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;
    tracing::debug!(path = %store.path().display(), theme = ?config.ui.theme, "using configuration");
    view::theme::set_theme(config.ui.theme);

    // 4. 组装命令派发器
    let connector: Arc<dyn ClusterConnector> = Arc::new(
        InMemoryCluster::new().with_latency(Duration::from_millis(cli.latency_ms)),
    );
    let store: Arc<dyn ProfileStore> = Arc::new(store);
    let mut queue = EventQueue::new();
    let dispatcher = Dispatcher::new(runtime.handle().clone(), queue.sender(), connector, store);

    // 5. 创建应用实例
    let mut app = model::App::new(config.clusters);

    // 6. 初始化终端并启动输入线程
    let mut terminal = init_terminal()?;
    let pump = match InputPump::spawn(queue.sender()) {
        Ok(pump) => pump,
        Err(e) => {
            restore_terminal(&mut terminal)?;
            return Err(e);
        }
    };

    // 7. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut queue, &dispatcher);
    if let Err(ref e) = result {
        tracing::error!(error = %e, "main loop failed");
    }

    // 8. 停止输入线程，恢复终端（无论成功失败都执行）
    pump.stop();
    restore_terminal(&mut terminal)?;

    // 9. 关闭仍然存活的连接
    if let Some(client) = app.connection.take() {
        let closed = runtime.block_on(tokio::time::timeout(COMMAND_TIMEOUT, client.close()));
        match closed {
            Ok(Ok(())) => tracing::info!(cluster = client.cluster_name(), "connection closed"),
            Ok(Err(e)) => tracing::warn!(error = %e, "failed to close connection"),
            Err(_) => tracing::warn!("closing connection timed out"),
        }
    }

    tracing::info!("cfk stopped");
    result
}

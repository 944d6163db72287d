//!
//! src/command/mod.rs
//! Command 层：异步命令派发
//!
//! Update 层不做任何 I/O，它只返回一组 `Envelope`。
//! 主循环把它们交给 Dispatcher，Dispatcher 在 tokio 运行时上执行，
//! 结果作为 `Delivery` 推回事件队列，在之后的某一轮循环中被消费。
//!
//!
//!     ┌──────────┐  Vec<Envelope>  ┌────────────┐  spawn   ┌───────────────────────┐
//!     │  Update  │ ──────────────▶ │ Dispatcher │ ───────▶ │ worker (10s timeout)   │
//!     └──────────┘                 └────────────┘          └──────────┬────────────┘
//!          ▲                                                          │ JoinHandle
//!          │                                                          ▼
//!          │        ┌──────────────┐    Delivery     ┌───────────────────────┐
//!          └─────── │  EventQueue  │ ◀────────────── │ supervisor            │
//!        主循环消费  └──────────────┘                 │ (超时/panic 也只送一条) │
//!                          ▲                          └───────────────────────┘
//!                          │ Input(Event)
//!                   ┌──────────────┐
//!                   │ 输入线程      │
//!                   └──────────────┘
//!
//!
//!     纪元：
//!         视图级命令（Connect / ListTopics / DescribeTopics / GetTopicInfo / LoadProfiles）
//!         带着发出时的视图纪元 Some(epoch)；
//!         会话级命令（SaveProfiles / CreateTopic / DeleteTopic / UpdateTopicPartitions / Close）
//!         带 None，结果总会被处理。
//!

mod dispatcher;
mod queue;

use std::sync::Arc;

use cfk_core::{ClusterClient, ClusterProfile};

use crate::message::{InfoPurpose, ResultMessage};

pub use dispatcher::{Dispatcher, COMMAND_TIMEOUT};
pub use queue::{EventQueue, QueueEvent, QueueSender};

/// 命令
///
/// 每条命令绑定一次适配器或配置存储调用，恰好产生一条 `ResultMessage`。
/// 需要连接的命令携带发出时的连接，没有连接时结果为 `NotConnected`。
#[derive(Debug, Clone)]
pub enum Command {
    Connect(ClusterProfile),
    ListTopics {
        client: Option<Arc<dyn ClusterClient>>,
    },
    /// 对每个 Topic 调用 describe，整体共用一个超时
    DescribeTopics {
        client: Option<Arc<dyn ClusterClient>>,
        names: Vec<String>,
    },
    GetTopicInfo {
        client: Option<Arc<dyn ClusterClient>>,
        name: String,
        purpose: InfoPurpose,
    },
    CreateTopic {
        client: Option<Arc<dyn ClusterClient>>,
        name: String,
        partitions: u32,
        replication_factor: u32,
    },
    DeleteTopic {
        client: Option<Arc<dyn ClusterClient>>,
        name: String,
    },
    UpdateTopicPartitions {
        client: Option<Arc<dyn ClusterClient>>,
        name: String,
        partitions: u32,
    },
    Close(Arc<dyn ClusterClient>),
    LoadProfiles,
    /// 整体写回集群配置；`removed` 为被删除的集群名称
    SaveProfiles {
        profiles: Vec<ClusterProfile>,
        removed: Option<String>,
    },
}

impl Command {
    /// 操作名称（日志和超时消息）
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Connect(_) => "connect",
            Self::ListTopics { .. } => "list topics",
            Self::DescribeTopics { .. } => "describe topics",
            Self::GetTopicInfo { .. } => "get topic info",
            Self::CreateTopic { .. } => "create topic",
            Self::DeleteTopic { .. } => "delete topic",
            Self::UpdateTopicPartitions { .. } => "update partitions",
            Self::Close(_) => "close connection",
            Self::LoadProfiles => "load profiles",
            Self::SaveProfiles { .. } => "save profiles",
        }
    }
}

/// 带纪元的命令
#[derive(Debug, Clone)]
pub struct Envelope {
    pub epoch: Option<u64>,
    pub command: Command,
}

impl Envelope {
    /// 视图级命令
    pub fn scoped(epoch: u64, command: Command) -> Self {
        Self {
            epoch: Some(epoch),
            command,
        }
    }

    /// 会话级命令
    pub fn session(command: Command) -> Self {
        Self {
            epoch: None,
            command,
        }
    }
}

/// 命令结果
#[derive(Debug, Clone)]
pub struct Delivery {
    pub epoch: Option<u64>,
    pub message: ResultMessage,
}

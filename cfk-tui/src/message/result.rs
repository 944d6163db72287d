//! 命令结果消息

use std::fmt;
use std::sync::Arc;

use cfk_core::{ClusterClient, ClusterProfile, CoreError, ErrorKind, TopicDetail};

use crate::model::domain::TopicItem;

/// Topic 详情的用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPurpose {
    /// TopicDetail 视图
    Detail,
    /// EditTopic 表单的初始值
    Edit,
}

/// 显示给用户的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// 结果消息
///
/// 每条命令恰好产生一条；表单的提交/取消也以结果消息的形式进入 reducer。
#[derive(Debug, Clone)]
pub enum ResultMessage {
    // ========== 连接 ==========
    Connected {
        cluster: String,
        client: Arc<dyn ClusterClient>,
    },
    Disconnected {
        cluster: String,
    },

    // ========== Topic 查询 ==========
    TopicsLoaded(Vec<String>),
    ItemsUpdated(Vec<TopicItem>),
    TopicInfoLoaded {
        detail: TopicDetail,
        purpose: InfoPurpose,
    },

    // ========== 集群配置 ==========
    ProfilesLoaded(Vec<ClusterProfile>),
    ProfilesSaved(Vec<ClusterProfile>),
    ClusterAdded(ClusterProfile),
    ClusterUpdated(ClusterProfile),
    ClusterRemoved {
        name: String,
    },

    // ========== Topic 变更 ==========
    TopicAdded {
        name: String,
        partitions: u32,
        replication_factor: u32,
    },
    TopicUpdated {
        name: String,
        partitions: u32,
    },
    TopicCreated {
        name: String,
    },
    TopicPartitionsUpdated {
        name: String,
        partitions: u32,
    },
    TopicDeleted {
        name: String,
    },

    FormCancelled,
    Error(AppError),
}

impl From<CoreError> for ResultMessage {
    fn from(err: CoreError) -> Self {
        Self::Error(err.into())
    }
}

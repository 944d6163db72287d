//! 视图跳转
//!
//! 多个消息共用的视图切换逻辑

use cfk_core::ErrorKind;

use crate::command::{Command, Envelope};
use crate::message::AppError;
use crate::model::{App, ViewState};

/// 回到集群列表
pub fn enter_cluster_list(app: &mut App) {
    app.form = None;
    app.enter_view(ViewState::ClusterList);
}

/// 进入 Topic 列表
///
/// 每次进入都会刷新列表。
pub fn enter_topic_list(app: &mut App) -> Vec<Envelope> {
    app.form = None;
    app.enter_view(ViewState::TopicList);
    refresh_topics(app)
}

/// 刷新 Topic 列表
pub fn refresh_topics(app: &mut App) -> Vec<Envelope> {
    app.topics.loading = true;
    vec![app.scoped(Command::ListTopics {
        client: app.client(),
    })]
}

/// 连接指定名称的集群
///
/// 视图在收到 `Connected` 之后才切换到 Topic 列表。
pub fn connect_to_cluster(app: &mut App, name: &str) -> Vec<Envelope> {
    let Some(profile) = app.clusters.find(name).cloned() else {
        tracing::warn!(cluster = name, "connect requested for unknown cluster");
        app.error = Some(AppError::new(
            ErrorKind::ConnectionFailed,
            format!("cluster {name} not found in configuration"),
        ));
        return Vec::new();
    };

    tracing::info!(cluster = name, "connecting");
    app.set_status(format!("Connecting to {name}..."));
    vec![app.scoped(Command::Connect(profile))]
}

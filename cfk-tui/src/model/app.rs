//! 应用主状态结构

use std::sync::Arc;

use cfk_core::{ClusterClient, ClusterProfile, TopicDetail};

use super::{ActiveForm, ClustersState, TopicsState, ViewState};
use crate::command::{Command, Envelope};
use crate::message::AppError;

/// 应用主状态
///
/// 只由主循环线程修改，命令结果通过事件队列送回。
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 当前视图
    pub view: ViewState,
    /// 视图纪元，每次切换视图加一
    epoch: u64,
    /// 状态栏消息
    pub status_message: Option<String>,
    /// 错误屏（覆盖在当前视图之上）
    pub error: Option<AppError>,

    // === 各视图状态 ===
    /// 集群列表
    pub clusters: ClustersState,
    /// Topic 列表
    pub topics: TopicsState,
    /// Topic 详情（加载完成前为 None）
    pub detail: Option<TopicDetail>,
    /// 表单（EditTopic 加载完成前为 None）
    pub form: Option<ActiveForm>,

    /// 当前连接
    pub connection: Option<Arc<dyn ClusterClient>>,
}

impl App {
    /// 以启动时加载的集群配置创建应用
    pub fn new(profiles: Vec<ClusterProfile>) -> Self {
        Self {
            should_quit: false,
            view: ViewState::ClusterList,
            epoch: 0,
            status_message: None,
            error: None,
            clusters: ClustersState::new(profiles),
            topics: TopicsState::new(),
            detail: None,
            form: None,
            connection: None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// 切换视图
    ///
    /// 纪元随之递增，之前发出的视图级命令的结果都会被丢弃。
    pub fn enter_view(&mut self, view: ViewState) {
        tracing::debug!(from = ?self.view, to = ?view, epoch = self.epoch + 1, "view transition");
        self.view = view;
        self.epoch += 1;
    }

    /// 绑定到当前视图的命令
    pub fn scoped(&self, command: Command) -> Envelope {
        Envelope::scoped(self.epoch, command)
    }

    /// 当前连接的集群名称
    pub fn connected_cluster(&self) -> Option<&str> {
        self.connection.as_deref().map(|c| c.cluster_name())
    }

    pub fn client(&self) -> Option<Arc<dyn ClusterClient>> {
        self.connection.clone()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

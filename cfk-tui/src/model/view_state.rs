//! 视图状态定义

/// 当前视图
///
/// 任一时刻只有一个视图处于活动状态，切换统一经过 `App::enter_view`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    ClusterList,
    TopicList,
    TopicDetail,
    MessageViewport,
    AddCluster,
    EditCluster,
    AddTopic,
    EditTopic,
}

impl ViewState {
    /// 是否是表单视图
    pub fn is_form(self) -> bool {
        matches!(
            self,
            Self::AddCluster | Self::EditCluster | Self::AddTopic | Self::EditTopic
        )
    }

    /// 表单背后显示的列表视图
    pub fn backdrop(self) -> Self {
        match self {
            Self::AddCluster | Self::EditCluster => Self::ClusterList,
            Self::AddTopic | Self::EditTopic => Self::TopicList,
            other => other,
        }
    }

    /// 视图标题
    pub fn title(self) -> &'static str {
        match self {
            Self::ClusterList => "Clusters",
            Self::TopicList => "Topics",
            Self::TopicDetail => "Topic Detail",
            Self::MessageViewport => "Messages",
            Self::AddCluster => "Add Cluster",
            Self::EditCluster => "Edit Cluster",
            Self::AddTopic => "Create Topic",
            Self::EditTopic => "Edit Topic",
        }
    }
}

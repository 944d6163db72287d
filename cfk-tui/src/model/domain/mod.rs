//! 领域模型
//!
//! 集群配置和 Topic 详情直接使用 cfk-core 的类型，
//! 这里只定义 TUI 专用的列表投影。

mod item;

pub use item::{project_clusters, project_topics, DisplayItem, TopicItem};

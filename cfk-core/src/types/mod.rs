//! 类型定义模块

mod cluster;
mod topic;

pub use cluster::{ClusterProfile, Secret};
pub use topic::TopicDetail;

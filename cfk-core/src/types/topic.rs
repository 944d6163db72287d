//! Topic 相关类型定义

use serde::{Deserialize, Serialize};

/// Topic 详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDetail {
    /// Topic 名称（集群内唯一）
    pub name: String,
    /// 分区数（≥ 1）
    pub partition_count: u32,
    /// 副本因子（尽力获取，可能未知）
    pub replication_factor: Option<u32>,
}

impl TopicDetail {
    pub fn new(name: impl Into<String>, partition_count: u32, replication_factor: Option<u32>) -> Self {
        Self {
            name: name.into(),
            partition_count,
            replication_factor,
        }
    }
}

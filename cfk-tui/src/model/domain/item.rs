//! 列表项投影
//!
//! 集群和 Topic 列表共用同一种显示项。具体类型在投影时确定一次，
//! 视图层只需要 `title()` 和 `subtitle()`。

use cfk_core::{ClusterProfile, TopicDetail};

/// 集群列表项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterItem {
    pub name: String,
    pub endpoints: Vec<String>,
}

impl ClusterItem {
    fn subtitle(&self) -> String {
        match self.endpoints.split_first() {
            None => "No bootstrap servers".to_string(),
            Some((first, [])) => first.clone(),
            Some((first, rest)) => format!("{first} (+{} more)", rest.len()),
        }
    }
}

impl From<&ClusterProfile> for ClusterItem {
    fn from(profile: &ClusterProfile) -> Self {
        Self {
            name: profile.name.clone(),
            endpoints: profile.endpoints.clone(),
        }
    }
}

/// Topic 列表项
///
/// `detail` 在名称列表到达之后由 describe 结果补全。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicItem {
    pub name: String,
    pub detail: Option<TopicDetail>,
}

impl TopicItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    fn subtitle(&self) -> String {
        match &self.detail {
            None => "Unknown details".to_string(),
            Some(detail) => match detail.replication_factor {
                Some(rf) => format!("{} partitions, RF {rf}", detail.partition_count),
                None => format!("{} partitions", detail.partition_count),
            },
        }
    }
}

impl From<TopicDetail> for TopicItem {
    fn from(detail: TopicDetail) -> Self {
        Self {
            name: detail.name.clone(),
            detail: Some(detail),
        }
    }
}

/// 显示项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Cluster(ClusterItem),
    Topic(TopicItem),
}

impl DisplayItem {
    pub fn title(&self) -> &str {
        match self {
            Self::Cluster(item) => &item.name,
            Self::Topic(item) => &item.name,
        }
    }

    pub fn subtitle(&self) -> String {
        match self {
            Self::Cluster(item) => item.subtitle(),
            Self::Topic(item) => item.subtitle(),
        }
    }
}

/// 集群配置 → 显示项
pub fn project_clusters(profiles: &[ClusterProfile]) -> Vec<DisplayItem> {
    profiles
        .iter()
        .map(|p| DisplayItem::Cluster(ClusterItem::from(p)))
        .collect()
}

/// Topic 列表项 → 显示项
pub fn project_topics(items: &[TopicItem]) -> Vec<DisplayItem> {
    items.iter().cloned().map(DisplayItem::Topic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_subtitle_counts_extra_endpoints() {
        let none = ClusterProfile::new("a", vec![]);
        let one = ClusterProfile::new("b", vec!["k1:9092".into()]);
        let three = ClusterProfile::new("c", vec!["k1:9092".into(), "k2:9092".into(), "k3:9092".into()]);

        let items = project_clusters(&[none, one, three]);

        assert_eq!(items[0].subtitle(), "No bootstrap servers");
        assert_eq!(items[1].subtitle(), "k1:9092");
        assert_eq!(items[2].subtitle(), "k1:9092 (+2 more)");
        assert_eq!(items[2].title(), "c");
    }

    #[test]
    fn topic_subtitle_reflects_known_details() {
        let unknown = TopicItem::new("orders");
        let partial = TopicItem::from(TopicDetail::new("events", 3, None));
        let full = TopicItem::from(TopicDetail::new("payments", 6, Some(3)));

        let items = project_topics(&[unknown, partial, full]);

        assert_eq!(items[0].subtitle(), "Unknown details");
        assert_eq!(items[1].subtitle(), "3 partitions");
        assert_eq!(items[2].subtitle(), "6 partitions, RF 3");
    }
}

//! Topic 列表状态

use crate::model::domain::{project_topics, DisplayItem, TopicItem};

/// Topic 列表状态
#[derive(Debug, Default)]
pub struct TopicsState {
    /// Topic 列表（按名称排序）
    pub items: Vec<TopicItem>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
}

impl TopicsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    /// 当前选中的 Topic 名称
    pub fn selected_name(&self) -> Option<&str> {
        self.items.get(self.selected).map(|t| t.name.as_str())
    }

    /// 设置名称列表
    ///
    /// 已知的详情会保留，选中项按名称跟随。
    pub fn set_names(&mut self, mut names: Vec<String>) {
        names.sort();
        names.dedup();

        let previous = self.selected_name().map(str::to_string);
        let old = std::mem::take(&mut self.items);
        self.items = names
            .into_iter()
            .map(|name| {
                let detail = old
                    .iter()
                    .find(|t| t.name == name)
                    .and_then(|t| t.detail.clone());
                TopicItem { name, detail }
            })
            .collect();

        self.selected = previous
            .and_then(|p| self.items.iter().position(|t| t.name == p))
            .unwrap_or(0)
            .min(self.items.len().saturating_sub(1));
        self.loading = false;
    }

    /// 合并 describe 结果
    ///
    /// 没有详情的项（describe 失败）不会覆盖已知详情。
    pub fn merge_items(&mut self, updates: Vec<TopicItem>) {
        for update in updates {
            let Some(detail) = update.detail else {
                continue;
            };
            if let Some(item) = self.items.iter_mut().find(|t| t.name == update.name) {
                item.detail = Some(detail);
            }
        }
    }

    /// 所有 Topic 名称
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|t| t.name.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = 0;
        self.loading = false;
    }

    pub fn display_items(&self) -> Vec<DisplayItem> {
        project_topics(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use cfk_core::TopicDetail;

    use super::*;

    #[test]
    fn names_are_sorted_and_details_survive_refresh() {
        let mut state = TopicsState::new();
        state.set_names(vec!["payments".into(), "orders".into()]);
        assert_eq!(state.names(), vec!["orders", "payments"]);

        state.merge_items(vec![TopicItem::from(TopicDetail::new("payments", 3, Some(1)))]);
        state.select_last();

        state.set_names(vec!["payments".into(), "audit".into(), "orders".into()]);
        assert_eq!(state.selected_name(), Some("payments"));
        assert!(state.items[2].detail.is_some());
        assert!(state.items[0].detail.is_none());
    }

    #[test]
    fn details_for_unknown_topics_are_ignored() {
        let mut state = TopicsState::new();
        state.set_names(vec!["orders".into()]);
        state.merge_items(vec![TopicItem::from(TopicDetail::new("ghost", 1, None))]);
        assert_eq!(state.items.len(), 1);
        assert!(state.items[0].detail.is_none());

        state.merge_items(vec![TopicItem::from(TopicDetail::new("orders", 2, None))]);
        state.merge_items(vec![TopicItem::new("orders")]);
        assert_eq!(state.items[0].detail.as_ref().map(|d| d.partition_count), Some(2));
    }
}

//! 集群列表状态

use cfk_core::ClusterProfile;

use crate::model::domain::{project_clusters, DisplayItem};

/// 集群列表状态
#[derive(Debug, Default)]
pub struct ClustersState {
    /// 已保存的集群配置（文件顺序）
    pub profiles: Vec<ClusterProfile>,
    /// 当前选中的索引
    pub selected: usize,
}

impl ClustersState {
    pub fn new(profiles: Vec<ClusterProfile>) -> Self {
        Self {
            profiles,
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.profiles.is_empty() && self.selected < self.profiles.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.profiles.is_empty() {
            self.selected = self.profiles.len() - 1;
        }
    }

    /// 获取当前选中的集群
    pub fn selected_profile(&self) -> Option<&ClusterProfile> {
        self.profiles.get(self.selected)
    }

    pub fn find(&self, name: &str) -> Option<&ClusterProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// 替换整个列表，尽量保持选中项不越界
    pub fn set_profiles(&mut self, profiles: Vec<ClusterProfile>) {
        self.profiles = profiles;
        self.selected = self.selected.min(self.profiles.len().saturating_sub(1));
    }

    /// 追加一个集群并选中它
    pub fn push(&mut self, profile: ClusterProfile) {
        self.profiles.push(profile);
        self.selected = self.profiles.len() - 1;
    }

    /// 按名称替换；不存在时返回 false
    pub fn replace(&mut self, profile: ClusterProfile) -> bool {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(slot) => {
                *slot = profile;
                true
            }
            None => false,
        }
    }

    /// 按名称移除；不存在时返回 false
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.name != name);
        self.selected = self.selected.min(self.profiles.len().saturating_sub(1));
        self.profiles.len() != before
    }

    pub fn items(&self) -> Vec<DisplayItem> {
        project_clusters(&self.profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles(names: &[&str]) -> Vec<ClusterProfile> {
        names
            .iter()
            .map(|n| ClusterProfile::new(*n, vec![format!("{n}:9092")]))
            .collect()
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = ClustersState::new(profiles(&["a", "b", "c"]));
        state.select_last();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 2);

        state.set_profiles(profiles(&["a"]));
        assert_eq!(state.selected, 0);

        state.set_profiles(Vec::new());
        assert_eq!(state.selected, 0);
        assert!(state.selected_profile().is_none());
    }

    #[test]
    fn remove_keeps_selection_in_bounds() {
        let mut state = ClustersState::new(profiles(&["a", "b"]));
        state.select_last();

        assert!(state.remove("b"));
        assert_eq!(state.profiles.len(), 1);
        assert_eq!(state.selected, 0);
        assert!(!state.remove("b"));
    }
}

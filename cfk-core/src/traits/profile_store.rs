//! Cluster profile persistence abstract Trait

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::ClusterProfile;

/// Cluster Profile Store Trait
///
/// Platform implementation:
/// - TUI: `JsonConfigStore` (JSON file under the user config directory)
/// - Tests: [`MemoryProfileStore`]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load all saved profiles, in file order
    async fn load_profiles(&self) -> CoreResult<Vec<ClusterProfile>>;

    /// Replace the saved profiles
    ///
    /// # Arguments
    /// * `profiles` - Complete profile list
    async fn save_profiles(&self, profiles: &[ClusterProfile]) -> CoreResult<()>;
}

/// 内存实现的配置存储
pub struct MemoryProfileStore {
    profiles: RwLock<Vec<ClusterProfile>>,
    /// 如果 Some，save 时返回此错误（用于测试持久化失败路径）
    save_error: RwLock<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new(profiles: Vec<ClusterProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    /// 当前保存的内容
    pub async fn snapshot(&self) -> Vec<ClusterProfile> {
        self.profiles.read().await.clone()
    }
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load_profiles(&self) -> CoreResult<Vec<ClusterProfile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn save_profiles(&self, profiles: &[ClusterProfile]) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::ConfigPersistFailed(msg.clone()));
        }
        *self.profiles.write().await = profiles.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_replaces_profiles() {
        let store = MemoryProfileStore::new(vec![ClusterProfile::new("old", vec![])]);
        let next = vec![
            ClusterProfile::new("a", vec!["a:9092".to_string()]),
            ClusterProfile::new("b", vec!["b:9092".to_string()]),
        ];

        store.save_profiles(&next).await.unwrap();

        assert_eq!(store.load_profiles().await.unwrap(), next);
    }

    #[tokio::test]
    async fn save_error_keeps_previous_state() {
        let initial = vec![ClusterProfile::new("keep", vec![])];
        let store = MemoryProfileStore::new(initial.clone());
        store.set_save_error(Some("disk full".to_string())).await;

        let result = store.save_profiles(&[]).await;

        assert_eq!(
            result,
            Err(CoreError::ConfigPersistFailed("disk full".to_string()))
        );
        assert_eq!(store.snapshot().await, initial);
    }
}

//! 配置存储
//!
//! 使用 JSON 文件存储集群配置和界面设置
//! 实现 cfk-core 的 ProfileStore trait

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cfk_core::{ClusterProfile, CoreError, CoreResult, ProfileStore};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use crate::view::theme::Theme;

/// 获取默认配置文件路径：`<config_dir>/cfk/config.json`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cfk")
        .join("config.json")
}

/// 配置文件内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 集群配置（按文件顺序）
    #[serde(default)]
    pub clusters: Vec<ClusterProfile>,
    /// 界面设置
    #[serde(default)]
    pub ui: UiConfig,
}

/// 界面设置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: Theme,
}

/// 基于 JSON 文件的配置存储
pub struct JsonConfigStore {
    path: PathBuf,
    /// 内存缓存，写回时保留 `ui` 部分
    cache: Mutex<AppConfig>,
}

impl JsonConfigStore {
    /// 打开配置文件，不存在时写入默认配置
    pub async fn load(path: impl Into<PathBuf>) -> CoreResult<(Self, AppConfig)> {
        let path = path.into();
        let config = if fs::try_exists(&path).await.unwrap_or(false) {
            read_config(&path).await?
        } else {
            tracing::info!(path = %path.display(), "config file missing, writing defaults");
            let config = AppConfig::default();
            write_config(&path, &config).await?;
            config
        };

        tracing::info!(
            path = %path.display(),
            clusters = config.clusters.len(),
            "configuration loaded"
        );

        let store = Self {
            path,
            cache: Mutex::new(config.clone()),
        };
        Ok((store, config))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 从文件读取配置
async fn read_config(path: &Path) -> CoreResult<AppConfig> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        CoreError::ConfigPersistFailed(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        CoreError::ConfigPersistFailed(format!("failed to parse {}: {e}", path.display()))
    })
}

/// 把配置整体写回文件
async fn write_config(path: &Path, config: &AppConfig) -> CoreResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await.map_err(|e| {
            CoreError::ConfigPersistFailed(format!("failed to create {}: {e}", dir.display()))
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content).await.map_err(|e| {
        CoreError::ConfigPersistFailed(format!("failed to write {}: {e}", path.display()))
    })
}

#[async_trait]
impl ProfileStore for JsonConfigStore {
    async fn load_profiles(&self) -> CoreResult<Vec<ClusterProfile>> {
        let config = read_config(&self.path).await?;
        let profiles = config.clusters.clone();
        *self.cache.lock().await = config;
        Ok(profiles)
    }

    async fn save_profiles(&self, profiles: &[ClusterProfile]) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        let mut config = cache.clone();
        config.clusters = profiles.to_vec();

        write_config(&self.path, &config).await?;

        // 写入成功后才更新缓存
        *cache = config;
        tracing::debug!(path = %self.path.display(), count = profiles.len(), "profiles written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cfk_core::ErrorKind;

    use super::*;

    fn profile(name: &str) -> ClusterProfile {
        ClusterProfile::new(name, vec!["localhost:9092".into()])
    }

    #[tokio::test]
    async fn creates_default_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfk").join("config.json");

        let (_store, config) = JsonConfigStore::load(&path).await.unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn save_round_trips_and_keeps_ui_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"clusters":[],"ui":{"theme":"light"}}"#).unwrap();

        let (store, config) = JsonConfigStore::load(&path).await.unwrap();
        assert_eq!(config.ui.theme, Theme::Light);

        store.save_profiles(&[profile("local")]).await.unwrap();

        let profiles = store.load_profiles().await.unwrap();
        assert_eq!(profiles, vec![profile("local")]);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["ui"]["theme"], "light");
        assert_eq!(raw["clusters"][0]["bootstrap_servers"][0], "localhost:9092");
    }

    #[tokio::test]
    async fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonConfigStore::load(&path).await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ConfigPersistFailed);
    }

    #[tokio::test]
    async fn write_failure_maps_to_config_persist_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let (store, _) = JsonConfigStore::load(&path).await.unwrap();

        // 用目录占住文件路径，写入必然失败
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let err = store.save_profiles(&[profile("x")]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigPersistFailed);
    }
}

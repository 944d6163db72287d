//! src/backend/mod.rs
//! Backend 层：协作方的具体实现
//!
//! Backend 层与 UI 完全解耦，只负责把 cfk-core 定义的 trait 落到具体存储上。
//! 集群访问使用 cfk-core 自带的 `InMemoryCluster`（进程内模拟集群）。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_store;       // 配置持久化（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 配置存储（JsonConfigStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_store.rs 中定义：
//!
//!         实现 cfk-core 的 ProfileStore trait。
//!         将集群配置和界面设置持久化到同一个 JSON 文件。
//!
//!         存储位置：~/.config/cfk/config.json（可用 --config 覆盖）
//!
//!         文件格式：
//!             {
//!               "clusters": [
//!                 { "name": "local", "bootstrap_servers": ["localhost:9092"],
//!                   "ssl": false, "sasl": false }
//!               ],
//!               "ui": { "theme": "dark" }
//!             }
//!
//!         主要方法：
//!             - load(path)                打开配置，不存在时写入默认配置
//!             - load_profiles()           重新读取集群列表
//!             - save_profiles(profiles)   整体写回集群列表（保留 ui 部分）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在集群表单中按下 Submit
//!         ↓
//!     Update 层处理 ResultMessage::ClusterAdded，返回 Command::SaveProfiles
//!         ↓
//!     Dispatcher 在 tokio 工作线程上调用 ProfileStore::save_profiles
//!         ↓
//!     JsonConfigStore 写入文件
//!         ↓
//!     ResultMessage::ProfilesSaved 经事件队列送回主循环
//!

mod config_store;

pub use config_store::{default_config_path, JsonConfigStore};

//! 结果消息更新逻辑
//!
//! 命令结果和表单结果都在这里落到 App 上

use cfk_core::ErrorKind;

use crate::command::{Command, Envelope};
use crate::message::{AppError, InfoPurpose, ResultMessage};
use crate::model::state::{ActiveForm, FormState, TopicDraft};
use crate::model::{App, ViewState};

use super::navigation::{enter_cluster_list, enter_topic_list, refresh_topics};

/// 应用一条结果消息
pub fn apply(app: &mut App, msg: ResultMessage) -> Vec<Envelope> {
    match msg {
        // ========== 连接 ==========
        ResultMessage::Connected { cluster, client } => {
            // 连接途中集群已被删除
            if !app.clusters.contains(&cluster) {
                tracing::warn!(%cluster, "cluster removed while connecting, closing");
                app.clear_status();
                return vec![Envelope::session(Command::Close(client))];
            }
            let mut out = Vec::new();
            if let Some(old) = app.connection.replace(client) {
                out.push(Envelope::session(Command::Close(old)));
            }
            app.topics.clear();
            app.detail = None;
            app.set_status(format!("Connected to {cluster}"));
            out.extend(enter_topic_list(app));
            out
        }

        ResultMessage::Disconnected { cluster } => {
            tracing::debug!(%cluster, "connection closed");
            Vec::new()
        }

        // ========== Topic 查询 ==========
        ResultMessage::TopicsLoaded(names) => {
            tracing::debug!(count = names.len(), "topics loaded");
            app.topics.set_names(names);
            if app.topics.items.is_empty() {
                return Vec::new();
            }
            vec![app.scoped(Command::DescribeTopics {
                client: app.client(),
                names: app.topics.names(),
            })]
        }

        ResultMessage::ItemsUpdated(items) => {
            app.topics.merge_items(items);
            Vec::new()
        }

        ResultMessage::TopicInfoLoaded { detail, purpose } => {
            match (purpose, app.view) {
                (InfoPurpose::Detail, ViewState::TopicDetail) => app.detail = Some(detail),
                (InfoPurpose::Edit, ViewState::EditTopic) => {
                    app.form = Some(ActiveForm::Topic(FormState::edit(TopicDraft::from(detail))));
                }
                _ => tracing::debug!(?purpose, view = ?app.view, "topic info arrived for another view"),
            }
            Vec::new()
        }

        // ========== 集群配置 ==========
        ResultMessage::ProfilesLoaded(profiles) => {
            app.set_status(format!("Loaded {} clusters", profiles.len()));
            app.clusters.set_profiles(profiles);
            Vec::new()
        }

        ResultMessage::ProfilesSaved(profiles) => {
            tracing::debug!(count = profiles.len(), "profiles saved");
            app.set_status("Configuration saved");
            Vec::new()
        }

        ResultMessage::ClusterAdded(profile) => {
            if app.clusters.contains(&profile.name) {
                let message = format!("cluster with name {} already exists", profile.name);
                match app.form.as_mut() {
                    Some(ActiveForm::Cluster(form)) => form.set_error(message),
                    _ => app.error = Some(AppError::new(ErrorKind::InvalidInput, message)),
                }
                return Vec::new();
            }
            app.set_status(format!("Cluster {} added", profile.name));
            app.clusters.push(profile);
            enter_cluster_list(app);
            save_profiles(app)
        }

        ResultMessage::ClusterUpdated(profile) => {
            app.set_status(format!("Cluster {} updated", profile.name));
            if !app.clusters.replace(profile.clone()) {
                app.clusters.push(profile);
            }
            enter_cluster_list(app);
            save_profiles(app)
        }

        ResultMessage::ClusterRemoved { name } => {
            // 通常已在按下 d 时移除
            app.clusters.remove(&name);
            app.set_status(format!("Cluster {name} removed"));
            if app.connected_cluster() == Some(name.as_str()) {
                app.topics.clear();
                app.detail = None;
                if let Some(client) = app.connection.take() {
                    return vec![Envelope::session(Command::Close(client))];
                }
            }
            Vec::new()
        }

        // ========== Topic 变更 ==========
        ResultMessage::TopicAdded {
            name,
            partitions,
            replication_factor,
        } => {
            app.set_status(format!("Creating topic {name}..."));
            let mut out = vec![Envelope::session(Command::CreateTopic {
                client: app.client(),
                name,
                partitions,
                replication_factor,
            })];
            out.extend(enter_topic_list(app));
            out
        }

        ResultMessage::TopicUpdated { name, partitions } => {
            app.set_status(format!("Updating topic {name}..."));
            let mut out = vec![Envelope::session(Command::UpdateTopicPartitions {
                client: app.client(),
                name,
                partitions,
            })];
            out.extend(enter_topic_list(app));
            out
        }

        ResultMessage::TopicCreated { name } => {
            app.set_status(format!("Topic {name} created"));
            refresh_if_listing(app)
        }

        ResultMessage::TopicPartitionsUpdated { name, partitions } => {
            app.set_status(format!("Topic {name} now has {partitions} partitions"));
            refresh_if_listing(app)
        }

        ResultMessage::TopicDeleted { name } => {
            app.set_status(format!("Topic {name} deleted"));
            if app.detail.as_ref().is_some_and(|d| d.name == name) {
                app.detail = None;
            }
            refresh_if_listing(app)
        }

        // ========== 表单 ==========
        ResultMessage::FormCancelled => {
            app.form = None;
            match app.view.backdrop() {
                ViewState::ClusterList => {
                    enter_cluster_list(app);
                    Vec::new()
                }
                ViewState::TopicList => enter_topic_list(app),
                _ => Vec::new(),
            }
        }

        ResultMessage::Error(err) => {
            app.clear_status();
            if app.view == ViewState::TopicList {
                app.topics.loading = false;
            }
            app.error = Some(err);
            Vec::new()
        }
    }
}

/// 整体写回集群配置
fn save_profiles(app: &App) -> Vec<Envelope> {
    vec![Envelope::session(Command::SaveProfiles {
        profiles: app.clusters.profiles.clone(),
        removed: None,
    })]
}

/// 会话级结果只在 Topic 列表可见时触发刷新
fn refresh_if_listing(app: &mut App) -> Vec<Envelope> {
    if app.view == ViewState::TopicList {
        refresh_topics(app)
    } else {
        Vec::new()
    }
}

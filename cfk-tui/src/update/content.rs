//! 列表视图更新逻辑
//!
//! 处理列表类视图（集群列表、Topic 列表、详情、消息）中的操作消息

use crate::command::{Command, Envelope};
use crate::message::{ContentMessage, InfoPurpose};
use crate::model::state::{ActiveForm, FormState};
use crate::model::{App, ViewState};

use super::navigation::{connect_to_cluster, enter_cluster_list, enter_topic_list, refresh_topics};

/// 处理列表视图消息
pub fn update(app: &mut App, msg: ContentMessage) -> Vec<Envelope> {
    match app.view {
        ViewState::ClusterList => cluster_list(app, msg),
        ViewState::TopicList => topic_list(app, msg),
        ViewState::TopicDetail => topic_detail(app, msg),
        ViewState::MessageViewport => message_viewport(app, msg),
        // 表单视图的按键走 FormMessage
        ViewState::AddCluster
        | ViewState::EditCluster
        | ViewState::AddTopic
        | ViewState::EditTopic => Vec::new(),
    }
}

// ========== 集群列表 ==========

fn cluster_list(app: &mut App, msg: ContentMessage) -> Vec<Envelope> {
    match msg {
        ContentMessage::SelectPrevious => app.clusters.select_previous(),
        ContentMessage::SelectNext => app.clusters.select_next(),
        ContentMessage::SelectFirst => app.clusters.select_first(),
        ContentMessage::SelectLast => app.clusters.select_last(),

        ContentMessage::Confirm => {
            if let Some(name) = app.clusters.selected_profile().map(|p| p.name.clone()) {
                return connect_to_cluster(app, &name);
            }
        }

        ContentMessage::Add => {
            app.form = Some(ActiveForm::Cluster(FormState::new()));
            app.enter_view(ViewState::AddCluster);
        }

        ContentMessage::Edit => {
            if let Some(profile) = app.clusters.selected_profile().cloned() {
                app.form = Some(ActiveForm::Cluster(FormState::edit(profile)));
                app.enter_view(ViewState::EditCluster);
            }
        }

        ContentMessage::Delete => {
            if let Some(name) = app.clusters.selected_profile().map(|p| p.name.clone()) {
                // 先从内存列表移除，之后的保存不会把它写回去
                app.clusters.remove(&name);
                app.set_status(format!("Removing cluster {name}..."));
                return vec![Envelope::session(Command::SaveProfiles {
                    profiles: app.clusters.profiles.clone(),
                    removed: Some(name),
                })];
            }
        }

        ContentMessage::Refresh => {
            app.set_status("Reloading configuration...");
            return vec![app.scoped(Command::LoadProfiles)];
        }

        ContentMessage::Back | ContentMessage::Home | ContentMessage::Messages => {}
    }
    Vec::new()
}

// ========== Topic 列表 ==========

fn topic_list(app: &mut App, msg: ContentMessage) -> Vec<Envelope> {
    match msg {
        ContentMessage::SelectPrevious => app.topics.select_previous(),
        ContentMessage::SelectNext => app.topics.select_next(),
        ContentMessage::SelectFirst => app.topics.select_first(),
        ContentMessage::SelectLast => app.topics.select_last(),

        ContentMessage::Confirm => {
            if let Some(name) = app.topics.selected_name().map(str::to_string) {
                app.detail = None;
                app.enter_view(ViewState::TopicDetail);
                return vec![app.scoped(Command::GetTopicInfo {
                    client: app.client(),
                    name,
                    purpose: InfoPurpose::Detail,
                })];
            }
        }

        ContentMessage::Add => {
            app.form = Some(ActiveForm::Topic(FormState::new()));
            app.enter_view(ViewState::AddTopic);
        }

        ContentMessage::Edit => {
            if let Some(name) = app.topics.selected_name().map(str::to_string) {
                // 表单在详情加载完成后创建
                app.form = None;
                app.enter_view(ViewState::EditTopic);
                return vec![app.scoped(Command::GetTopicInfo {
                    client: app.client(),
                    name,
                    purpose: InfoPurpose::Edit,
                })];
            }
        }

        ContentMessage::Delete => {
            if let Some(name) = app.topics.selected_name().map(str::to_string) {
                app.set_status(format!("Deleting topic {name}..."));
                return vec![Envelope::session(Command::DeleteTopic {
                    client: app.client(),
                    name,
                })];
            }
        }

        ContentMessage::Refresh => return refresh_topics(app),

        ContentMessage::Back | ContentMessage::Home => enter_cluster_list(app),

        ContentMessage::Messages => {}
    }
    Vec::new()
}

// ========== Topic 详情 ==========

fn topic_detail(app: &mut App, msg: ContentMessage) -> Vec<Envelope> {
    match msg {
        ContentMessage::Back => return enter_topic_list(app),
        ContentMessage::Home => enter_cluster_list(app),
        ContentMessage::Messages => app.enter_view(ViewState::MessageViewport),
        ContentMessage::Refresh => {
            if let Some(name) = app.detail.as_ref().map(|d| d.name.clone()) {
                return vec![app.scoped(Command::GetTopicInfo {
                    client: app.client(),
                    name,
                    purpose: InfoPurpose::Detail,
                })];
            }
        }
        _ => {}
    }
    Vec::new()
}

// ========== 消息视图 ==========

fn message_viewport(app: &mut App, msg: ContentMessage) -> Vec<Envelope> {
    match msg {
        ContentMessage::Back => app.enter_view(ViewState::TopicDetail),
        ContentMessage::Home => enter_cluster_list(app),
        _ => {}
    }
    Vec::new()
}

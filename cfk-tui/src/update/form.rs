//! 表单更新逻辑
//!
//! 表单的提交/取消结果被转换成 `ResultMessage`，
//! 与命令结果走同一个 reducer 入口。

use cfk_core::ClusterProfile;

use crate::command::Envelope;
use crate::message::{FormMessage, ResultMessage};
use crate::model::state::form::{FormEntity, FormOutcome, FormState, TopicDraft};
use crate::model::state::ActiveForm;
use crate::model::App;

use super::result;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Vec<Envelope> {
    let outcome = match app.form.as_mut() {
        Some(ActiveForm::Cluster(form)) => step(form, msg).map(cluster_result),
        Some(ActiveForm::Topic(form)) => step(form, msg).map(topic_result),
        // EditTopic 详情加载中，只能取消
        None => (msg == FormMessage::Cancel && app.view.is_form())
            .then_some(ResultMessage::FormCancelled),
    };

    match outcome {
        Some(message) => result::apply(app, message),
        None => Vec::new(),
    }
}

/// 把一条消息作用到表单上
fn step<E: FormEntity>(form: &mut FormState<E>, msg: FormMessage) -> Option<FormOutcome<E>> {
    match msg {
        FormMessage::NextField => form.focus_next(),
        FormMessage::PrevField => form.focus_prev(),
        FormMessage::SwitchButton => form.switch_button(),
        FormMessage::Input(c) => form.input(c),
        FormMessage::Backspace => form.backspace(),
        FormMessage::Confirm => return form.confirm(),
        FormMessage::Cancel => return Some(FormOutcome::Cancelled),
    }
    None
}

fn cluster_result(outcome: FormOutcome<ClusterProfile>) -> ResultMessage {
    match outcome {
        FormOutcome::Added(profile) => ResultMessage::ClusterAdded(profile),
        FormOutcome::Updated { entity, .. } => ResultMessage::ClusterUpdated(entity),
        FormOutcome::Cancelled => ResultMessage::FormCancelled,
    }
}

fn topic_result(outcome: FormOutcome<TopicDraft>) -> ResultMessage {
    match outcome {
        FormOutcome::Added(draft) => ResultMessage::TopicAdded {
            name: draft.name,
            partitions: draft.partitions,
            replication_factor: draft.replication_factor,
        },
        FormOutcome::Updated { entity, .. } => ResultMessage::TopicUpdated {
            name: entity.name,
            partitions: entity.partitions,
        },
        FormOutcome::Cancelled => ResultMessage::FormCancelled,
    }
}

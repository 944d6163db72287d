//! Topic 表单

use cfk_core::TopicDetail;

use super::{FieldSpec, FieldValue, FormEntity, FormError};

const NAME: usize = 0;
const PARTITIONS: usize = 1;

/// 新建 Topic 时的副本因子
pub const DEFAULT_REPLICATION_FACTOR: u32 = 1;

/// 表单中编辑的 Topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDraft {
    pub name: String,
    pub partitions: u32,
    pub replication_factor: u32,
}

impl TopicDraft {
    pub fn new(name: impl Into<String>, partitions: u32, replication_factor: u32) -> Self {
        Self {
            name: name.into(),
            partitions,
            replication_factor,
        }
    }
}

impl From<TopicDetail> for TopicDraft {
    fn from(detail: TopicDetail) -> Self {
        Self {
            name: detail.name,
            partitions: detail.partition_count,
            replication_factor: detail
                .replication_factor
                .unwrap_or(DEFAULT_REPLICATION_FACTOR),
        }
    }
}

/// 解析分区数，空值视为 1
fn parse_partitions(raw: &str) -> Result<u32, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(1);
    }
    match raw.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(FormError::InvalidInput(
            "invalid number of partitions".to_string(),
        )),
    }
}

impl FormEntity for TopicDraft {
    type Key = String;

    const ADD_TITLE: &'static str = "Create Topic";
    const EDIT_TITLE: &'static str = "Edit Topic";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("Topic Name", "orders"),
        FieldSpec::text("Partitions", "1"),
    ];

    const IDENTITY_FIELD: usize = NAME;

    fn identity(&self) -> String {
        self.name.clone()
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.clone()),
            FieldValue::Text(self.partitions.to_string()),
        ]
    }

    fn from_values(values: &[FieldValue], original: Option<&Self>) -> Result<Self, FormError> {
        let name = values.get(NAME).map_or("", FieldValue::as_text).trim();
        if name.is_empty() {
            return Err(FormError::InvalidInput("topic name is required".to_string()));
        }
        let partitions = parse_partitions(values.get(PARTITIONS).map_or("", FieldValue::as_text))?;

        Ok(Self {
            name: name.to_string(),
            partitions,
            replication_factor: original
                .map_or(DEFAULT_REPLICATION_FACTOR, |o| o.replication_factor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::{type_text, FormOutcome, FormState};
    use super::*;

    fn add_form(name: &str, partitions: &str) -> FormState<TopicDraft> {
        let mut form = FormState::new();
        type_text(&mut form, name);
        form.focus_next();
        type_text(&mut form, partitions);
        form
    }

    #[test]
    fn rejects_non_numeric_and_zero_partitions() {
        for bad in ["abc", "0", "-1", "3.5", "4x"] {
            let mut form = add_form("metrics", bad);
            assert_eq!(
                form.submit(),
                Err(FormError::InvalidInput("invalid number of partitions".into())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn empty_partitions_default_to_one() {
        let mut form = add_form("metrics", "");
        assert_eq!(
            form.submit(),
            Ok(FormOutcome::Added(TopicDraft::new("metrics", 1, 1)))
        );
    }

    #[test]
    fn edit_keeps_name_and_replication_factor() {
        let detail = TopicDetail::new("orders", 3, Some(2));
        let mut form = FormState::edit(TopicDraft::from(detail));
        form.backspace();
        type_text(&mut form, "6");

        assert_eq!(
            form.submit(),
            Ok(FormOutcome::Updated {
                identity: "orders".to_string(),
                entity: TopicDraft::new("orders", 6, 2),
            })
        );
    }
}

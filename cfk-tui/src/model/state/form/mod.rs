//! 通用弹窗表单
//!
//! 一个 `FormState<E>` 管理任意实体的编辑：字段值、焦点循环、
//! 编辑锁定和提交校验。实体通过 [`FormEntity`] 描述自己的字段，
//! 表单逻辑本身不关心具体是集群配置还是 Topic。
//!
//! 焦点顺序：
//!
//!     字段 0 → 字段 1 → … → 最后一个字段 → [Submit] → [Cancel] → 字段 0
//!
//! 编辑模式下主键字段被锁定：既不能获得焦点，也不接受输入。

mod cluster;
mod topic;

use std::fmt;

use thiserror::Error;

use cfk_core::ClusterProfile;

pub use topic::TopicDraft;

/// 字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 普通文本
    Text,
    /// 文本，显示时遮蔽
    Secret,
    /// 开关
    Toggle,
}

/// 字段描述
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            kind: FieldKind::Text,
        }
    }

    pub const fn secret(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            kind: FieldKind::Secret,
        }
    }

    pub const fn toggle(label: &'static str) -> Self {
        Self {
            label,
            placeholder: "",
            kind: FieldKind::Toggle,
        }
    }

    fn empty_value(self) -> FieldValue {
        match self.kind {
            FieldKind::Text | FieldKind::Secret => FieldValue::Text(String::new()),
            FieldKind::Toggle => FieldValue::Toggle(false),
        }
    }
}

/// 字段值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl FieldValue {
    /// 文本内容（开关字段返回空串）
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Toggle(_) => "",
        }
    }

    pub fn as_toggle(&self) -> bool {
        matches!(self, Self::Toggle(true))
    }
}

/// 表单按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Submit,
    Cancel,
}

/// 表单焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Buttons(Button),
}

/// 表单校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    InvalidInput(String),
}

/// 表单结果
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<E: FormEntity> {
    Added(E),
    Updated { identity: E::Key, entity: E },
    Cancelled,
}

/// 可以被表单编辑的实体
pub trait FormEntity: Sized {
    /// 主键类型
    type Key: Clone + PartialEq + fmt::Debug;

    const ADD_TITLE: &'static str;
    const EDIT_TITLE: &'static str;

    /// 字段列表（顺序即显示和焦点顺序）
    const FIELDS: &'static [FieldSpec];

    /// 主键所在字段，编辑模式下锁定
    const IDENTITY_FIELD: usize;

    fn identity(&self) -> Self::Key;

    /// 实体 → 字段值（与 `FIELDS` 一一对应）
    fn to_values(&self) -> Vec<FieldValue>;

    /// 字段值 → 实体
    ///
    /// `original` 是编辑模式下的原始实体，用来保留表单之外的属性。
    fn from_values(values: &[FieldValue], original: Option<&Self>) -> Result<Self, FormError>;
}

/// 表单状态
#[derive(Debug, Clone)]
pub struct FormState<E: FormEntity> {
    values: Vec<FieldValue>,
    focus: Focus,
    is_edit: bool,
    original: Option<E>,
    error: Option<String>,
}

impl<E: FormEntity> FormState<E> {
    /// 新建模式
    pub fn new() -> Self {
        let values = E::FIELDS.iter().map(|f| f.empty_value()).collect();
        Self::build(values, None)
    }

    /// 编辑模式，以 `entity` 的当前值填充
    pub fn edit(entity: E) -> Self {
        let values = entity.to_values();
        Self::build(values, Some(entity))
    }

    fn build(values: Vec<FieldValue>, original: Option<E>) -> Self {
        let mut form = Self {
            values,
            focus: Focus::Buttons(Button::Submit),
            is_edit: original.is_some(),
            original,
            error: None,
        };
        if let Some(first) = form.first_focusable() {
            form.focus = Focus::Field(first);
        }
        form
    }

    pub fn is_edit(&self) -> bool {
        self.is_edit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn identity(&self) -> Option<E::Key> {
        self.original.as_ref().map(E::identity)
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit {
            E::EDIT_TITLE
        } else {
            E::ADD_TITLE
        }
    }

    /// 字段是否被编辑锁定
    pub fn is_locked(&self, index: usize) -> bool {
        self.is_edit && index == E::IDENTITY_FIELD
    }

    fn focusable(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        (0..self.values.len()).filter(|&i| !self.is_locked(i))
    }

    fn first_focusable(&self) -> Option<usize> {
        self.focusable().next()
    }

    fn last_focusable(&self) -> Option<usize> {
        self.focusable().next_back()
    }

    /// 可获得焦点的字段数量
    pub fn focusable_count(&self) -> usize {
        self.focusable().count()
    }

    /// 焦点后移
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Field(i) => match self.focusable().find(|&j| j > i) {
                Some(j) => Focus::Field(j),
                None => Focus::Buttons(Button::Submit),
            },
            Focus::Buttons(Button::Submit) => Focus::Buttons(Button::Cancel),
            Focus::Buttons(Button::Cancel) => match self.first_focusable() {
                Some(j) => Focus::Field(j),
                None => Focus::Buttons(Button::Submit),
            },
        };
    }

    /// 焦点前移
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Field(i) => match self.focusable().rev().find(|&j| j < i) {
                Some(j) => Focus::Field(j),
                None => Focus::Buttons(Button::Cancel),
            },
            Focus::Buttons(Button::Cancel) => Focus::Buttons(Button::Submit),
            Focus::Buttons(Button::Submit) => match self.last_focusable() {
                Some(j) => Focus::Field(j),
                None => Focus::Buttons(Button::Cancel),
            },
        };
    }

    /// 按钮行获得焦点时在 Submit / Cancel 之间切换
    pub fn switch_button(&mut self) {
        if let Focus::Buttons(button) = self.focus {
            self.focus = Focus::Buttons(match button {
                Button::Submit => Button::Cancel,
                Button::Cancel => Button::Submit,
            });
        }
    }

    /// 当前获得焦点且可编辑的字段
    fn editable_field(&mut self) -> Option<(FieldKind, &mut FieldValue)> {
        let Focus::Field(i) = self.focus else {
            return None;
        };
        if self.is_locked(i) {
            return None;
        }
        let kind = E::FIELDS.get(i)?.kind;
        self.values.get_mut(i).map(|v| (kind, v))
    }

    /// 字符输入
    pub fn input(&mut self, c: char) {
        let Some((kind, value)) = self.editable_field() else {
            return;
        };
        let changed = match (kind, value) {
            (FieldKind::Text | FieldKind::Secret, FieldValue::Text(s)) => {
                s.push(c);
                true
            }
            (FieldKind::Toggle, FieldValue::Toggle(on)) => match c {
                ' ' => {
                    *on = !*on;
                    true
                }
                'y' | 'Y' => {
                    *on = true;
                    true
                }
                'n' | 'N' => {
                    *on = false;
                    true
                }
                _ => false,
            },
            _ => false,
        };
        if changed {
            self.error = None;
        }
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        let Some((_, value)) = self.editable_field() else {
            return;
        };
        if let FieldValue::Text(s) = value {
            if s.pop().is_some() {
                self.error = None;
            }
        }
    }

    /// Enter 键
    ///
    /// 在字段上前进焦点；在 Submit 上提交；在 Cancel 上取消。
    /// 校验失败时返回 `None`，错误记录在表单上。
    pub fn confirm(&mut self) -> Option<FormOutcome<E>> {
        match self.focus {
            Focus::Field(_) => {
                self.focus_next();
                None
            }
            Focus::Buttons(Button::Submit) => self.submit().ok(),
            Focus::Buttons(Button::Cancel) => Some(FormOutcome::Cancelled),
        }
    }

    /// 校验并生成结果
    ///
    /// 失败时设置 `error`，字段值和焦点保持不变。
    pub fn submit(&mut self) -> Result<FormOutcome<E>, FormError> {
        match E::from_values(&self.values, self.original.as_ref()) {
            Ok(entity) => {
                self.error = None;
                Ok(match self.original.as_ref() {
                    Some(original) => FormOutcome::Updated {
                        identity: original.identity(),
                        entity,
                    },
                    None => FormOutcome::Added(entity),
                })
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl<E: FormEntity> Default for FormState<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// 渲染用的字段行
#[derive(Debug, Clone, Copy)]
pub struct FieldRow<'a> {
    pub spec: &'a FieldSpec,
    pub value: &'a FieldValue,
    pub focused: bool,
    pub locked: bool,
}

/// 当前打开的表单
#[derive(Debug, Clone)]
pub enum ActiveForm {
    Cluster(FormState<ClusterProfile>),
    Topic(FormState<TopicDraft>),
}

impl ActiveForm {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Cluster(f) => f.title(),
            Self::Topic(f) => f.title(),
        }
    }

    pub fn focus(&self) -> Focus {
        match self {
            Self::Cluster(f) => f.focus(),
            Self::Topic(f) => f.focus(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Cluster(f) => f.error(),
            Self::Topic(f) => f.error(),
        }
    }

    pub fn rows(&self) -> Vec<FieldRow<'_>> {
        match self {
            Self::Cluster(f) => rows_of(f),
            Self::Topic(f) => rows_of(f),
        }
    }
}

fn rows_of<E: FormEntity>(form: &FormState<E>) -> Vec<FieldRow<'_>> {
    E::FIELDS
        .iter()
        .zip(form.values())
        .enumerate()
        .map(|(i, (spec, value))| FieldRow {
            spec,
            value,
            focused: form.focus() == Focus::Field(i),
            locked: form.is_locked(i),
        })
        .collect()
}

/// 测试用：把字符串逐字输入到当前字段
#[cfg(test)]
pub(crate) fn type_text<E: FormEntity>(form: &mut FormState<E>, text: &str) {
    for c in text.chars() {
        form.input(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_len<E: FormEntity>(form: &mut FormState<E>, forward: bool) -> usize {
        let start = form.focus();
        let mut steps = 0;
        loop {
            if forward {
                form.focus_next();
            } else {
                form.focus_prev();
            }
            steps += 1;
            if form.focus() == start || steps > 100 {
                return steps;
            }
        }
    }

    #[test]
    fn focus_cycle_closes_in_both_modes() {
        let mut add = FormState::<ClusterProfile>::new();
        let expected = add.focusable_count() + 2;
        assert_eq!(add.focusable_count(), ClusterProfile::FIELDS.len());
        assert_eq!(cycle_len(&mut add, true), expected);
        assert_eq!(cycle_len(&mut add, false), expected);

        let mut edit = FormState::edit(ClusterProfile::new("prod", vec!["k:9092".into()]));
        let expected = edit.focusable_count() + 2;
        assert_eq!(edit.focusable_count(), ClusterProfile::FIELDS.len() - 1);
        assert_eq!(cycle_len(&mut edit, true), expected);
        assert_eq!(cycle_len(&mut edit, false), expected);

        let mut topic = FormState::edit(TopicDraft::new("orders", 3, 1));
        assert_eq!(cycle_len(&mut topic, true), 3);
        assert_eq!(cycle_len(&mut topic, false), 3);
    }

    #[test]
    fn focus_order_passes_through_buttons() {
        let mut form = FormState::<TopicDraft>::new();
        assert_eq!(form.focus(), Focus::Field(0));

        form.focus_next();
        assert_eq!(form.focus(), Focus::Field(1));
        form.focus_next();
        assert_eq!(form.focus(), Focus::Buttons(Button::Submit));
        form.focus_next();
        assert_eq!(form.focus(), Focus::Buttons(Button::Cancel));
        form.focus_next();
        assert_eq!(form.focus(), Focus::Field(0));

        form.focus_prev();
        assert_eq!(form.focus(), Focus::Buttons(Button::Cancel));
        form.focus_prev();
        assert_eq!(form.focus(), Focus::Buttons(Button::Submit));
        form.focus_prev();
        assert_eq!(form.focus(), Focus::Field(1));
    }

    #[test]
    fn edit_mode_skips_and_protects_identity() {
        let mut form = FormState::edit(TopicDraft::new("orders", 3, 1));
        assert!(form.is_edit());
        assert_eq!(form.identity(), Some("orders".to_string()));
        assert_eq!(form.focus(), Focus::Field(1));

        for _ in 0..7 {
            form.focus_prev();
            assert_ne!(form.focus(), Focus::Field(0));
            form.input('x');
            form.backspace();
            form.input('z');
        }
        for _ in 0..7 {
            form.focus_next();
            assert_ne!(form.focus(), Focus::Field(0));
            form.input('x');
        }

        assert_eq!(form.values()[0], FieldValue::Text("orders".to_string()));
        assert!(form.is_edit());
    }

    #[test]
    fn enter_advances_then_submits_or_cancels() {
        let mut form = FormState::<TopicDraft>::new();
        type_text(&mut form, "metrics");
        assert_eq!(form.confirm(), None);
        type_text(&mut form, "3");
        assert_eq!(form.confirm(), None);
        assert_eq!(form.focus(), Focus::Buttons(Button::Submit));

        assert_eq!(
            form.confirm(),
            Some(FormOutcome::Added(TopicDraft::new("metrics", 3, 1)))
        );

        form.switch_button();
        assert_eq!(form.confirm(), Some(FormOutcome::Cancelled));
    }

    #[test]
    fn failed_submit_keeps_values_and_focus() {
        let mut form = FormState::<TopicDraft>::new();
        type_text(&mut form, "metrics");
        form.focus_next();
        type_text(&mut form, "abc");
        let before = form.values().to_vec();

        let err = form.submit().unwrap_err();

        assert_eq!(err, FormError::InvalidInput("invalid number of partitions".into()));
        assert_eq!(form.error(), Some("invalid number of partitions"));
        assert_eq!(form.values(), before.as_slice());
        assert_eq!(form.focus(), Focus::Field(1));

        form.backspace();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn toggle_fields_take_space_and_yes_no() {
        let mut form = FormState::<ClusterProfile>::new();
        let tls = ClusterProfile::FIELDS
            .iter()
            .position(|f| f.kind == FieldKind::Toggle)
            .unwrap();
        while form.focus() != Focus::Field(tls) {
            form.focus_next();
        }

        form.input(' ');
        assert!(form.values()[tls].as_toggle());
        form.input('n');
        assert!(!form.values()[tls].as_toggle());
        form.input('y');
        assert!(form.values()[tls].as_toggle());
        form.input('q');
        assert!(form.values()[tls].as_toggle());
    }
}

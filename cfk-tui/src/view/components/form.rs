//! 表单组件
//!
//! 集群和 Topic 表单共用这一个渲染函数，字段由 `ActiveForm::rows()` 给出。

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::state::form::{Button, FieldKind, FieldRow, FieldValue, Focus};
use crate::model::App;
use crate::view::theme::colors;

use super::centered_rect;

const FORM_WIDTH: u16 = 56;

/// 渲染当前表单
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref form) = app.form else {
        // EditTopic 详情还没返回
        render_loading(app.view.title(), frame);
        return;
    };

    let rows = form.rows();
    // 每个字段 3 行 + 错误(2) + 按钮(2) + 提示(1) + 边框(2)
    let height = rows.len() as u16 * 3 + 2 + 2 + 1 + 2;
    let area = centered_rect(FORM_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for row in &rows {
        lines.extend(field_lines(row));
    }

    // === 错误信息 ===
    match form.error() {
        Some(err) => lines.push(Line::styled(format!("  ⚠ {err}"), Style::default().fg(c.error))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(""));

    // === 按钮 ===
    lines.push(button_line(form.focus()));
    lines.push(Line::from(""));

    // === 操作提示 ===
    lines.push(Line::from(vec![
        Span::styled("  Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Confirm | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 一个字段占三行：标签、值、空行
fn field_lines(row: &FieldRow<'_>) -> [Line<'static>; 3] {
    let c = colors();

    let mut label = row.spec.label.to_string();
    if row.locked {
        label.push_str(" (locked)");
    }
    let label_line = Line::styled(label, Style::default().fg(c.muted));

    let value_style = if row.locked {
        Style::default().fg(c.muted)
    } else if row.focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let value_line = match (row.spec.kind, row.value) {
        (FieldKind::Toggle, value) => {
            let mark = if value.as_toggle() { "[x]" } else { "[ ]" };
            let hint = if row.focused { "  (space to toggle)" } else { "" };
            Line::from(vec![
                Span::styled(format!("  {mark}"), value_style),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ])
        }
        (kind, FieldValue::Text(text)) => {
            if text.is_empty() && !row.focused {
                Line::styled(
                    format!("  {}", row.spec.placeholder),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                let shown = if kind == FieldKind::Secret {
                    "•".repeat(text.chars().count().min(20))
                } else {
                    text.clone()
                };
                let cursor = if row.focused { "▎" } else { "" };
                Line::styled(format!("  {shown}{cursor}"), value_style)
            }
        }
        (_, FieldValue::Toggle(on)) => Line::styled(format!("  {on}"), value_style),
    };

    [label_line, value_line, Line::from("")]
}

fn button_line(focus: Focus) -> Line<'static> {
    let c = colors();
    let style_for = |button: Button| {
        if focus == Focus::Buttons(button) {
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        }
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(" Submit ", style_for(Button::Submit)),
        Span::raw("   "),
        Span::styled(" Cancel ", style_for(Button::Cancel)),
    ])
}

fn render_loading(title: &str, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(FORM_WIDTH, 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    let paragraph = Paragraph::new(vec![
        Line::styled("Loading...", Style::default().fg(c.muted)),
        Line::styled("Esc to cancel", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

//! Topic 详情页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染 Topic 详情
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let Some(ref detail) = app.detail else {
        let loading = vec![
            Line::from(""),
            Line::styled("  Loading topic details...", Style::default().fg(c.warning)),
        ];
        frame.render_widget(Paragraph::new(loading), area);
        return;
    };

    let label = Style::default().fg(c.muted);
    let value = Style::default().fg(c.fg).add_modifier(Modifier::BOLD);
    let replication = detail
        .replication_factor
        .map_or_else(|| "unknown".to_string(), |rf| rf.to_string());

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Name:               ", label),
            Span::styled(detail.name.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("  Partitions:         ", label),
            Span::styled(detail.partition_count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Replication factor: ", label),
            Span::styled(replication, value),
        ]),
        Line::from(""),
        Line::styled(
            "  r refresh  m messages",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

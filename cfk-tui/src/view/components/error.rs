//! 错误屏

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::message::AppError;
use crate::view::theme::colors;

use super::centered_rect;

/// 渲染错误屏（覆盖在当前视图之上）
pub fn render(error: &AppError, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", error.title()))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(c.error).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 2,
        area.width.saturating_sub(4),
        area.height.saturating_sub(4),
    );

    let lines = vec![
        Line::styled(error.message.clone(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Press any key to continue", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

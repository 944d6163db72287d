//! 消息浏览页面（占位）

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

/// 渲染占位内容
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let topic = app.detail.as_ref().map_or("", |d| d.name.as_str());
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("Message browsing for {topic} is not available"),
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled("Esc to go back", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

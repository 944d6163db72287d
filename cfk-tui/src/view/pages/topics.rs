//! Topic 列表页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::components::item_list;
use crate::view::theme::colors;

/// 渲染 Topic 列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let topics = &app.topics;
    if topics.items.is_empty() {
        let message = if topics.loading {
            Line::styled("  Loading topics...", Style::default().fg(colors().warning))
        } else {
            Line::styled("  No topics", Style::default().fg(Color::Gray))
        };
        let content = vec![
            Line::from(""),
            message,
            Line::from(""),
            Line::styled(
                "  Press a to create a topic, r to refresh",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    item_list::render(&topics.display_items(), topics.selected, frame, area);
}

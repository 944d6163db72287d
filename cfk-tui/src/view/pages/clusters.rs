//! 集群列表页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::components::item_list;

/// 渲染集群列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.clusters.profiles.is_empty() {
        render_empty(frame, area);
    } else {
        item_list::render(&app.clusters.items(), app.clusters.selected, frame, area);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  No clusters configured", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            "  Press a to add a cluster",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

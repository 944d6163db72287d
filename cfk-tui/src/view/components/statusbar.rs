//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, ViewState};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前视图生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.error.is_some() {
        return vec![("Any key", "Dismiss")];
    }

    match app.view {
        ViewState::ClusterList => vec![
            ("↑↓", "Select"),
            ("Enter", "Connect"),
            ("a", "Add"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("q", "Quit"),
        ],
        ViewState::TopicList => vec![
            ("↑↓", "Select"),
            ("Enter", "Details"),
            ("a", "Create"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("r", "Refresh"),
            ("Esc", "Back"),
        ],
        ViewState::TopicDetail => vec![
            ("r", "Refresh"),
            ("m", "Messages"),
            ("Esc", "Back"),
            ("b", "Clusters"),
        ],
        ViewState::MessageViewport => vec![("Esc", "Back"), ("b", "Clusters"), ("q", "Quit")],
        ViewState::AddCluster
        | ViewState::EditCluster
        | ViewState::AddTopic
        | ViewState::EditTopic => vec![
            ("Tab", "Next"),
            ("←→", "Buttons"),
            ("Enter", "Confirm"),
            ("Esc", "Cancel"),
        ],
    }
}

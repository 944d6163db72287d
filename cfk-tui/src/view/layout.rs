//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, ViewState};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(colors().bg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 表单浮在列表之上，错误屏在最上层
    if app.view.is_form() {
        components::form::render(app, frame);
    }
    if let Some(ref error) = app.error {
        components::error::render(error, frame);
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let connection = match app.connected_cluster() {
        Some(name) => Span::styled(format!("● {name}"), Style::default().fg(c.success)),
        None => Span::styled("○ not connected", Style::default().fg(c.muted)),
    };
    let line = Line::from(vec![
        Span::raw(concat!(" cfk v", env!("CARGO_PKG_VERSION"), " │ ")),
        connection,
    ]);
    let title = Paragraph::new(line).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前视图渲染内容
///
/// 表单视图渲染其背后的列表。
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let page = app.view.backdrop();

    let border_style = if app.view.is_form() || app.error.is_some() {
        Style::default().fg(c.border)
    } else {
        Style::default().fg(c.border_focused)
    };

    let block = Block::default()
        .title(format!(" {} ", page_title(app, page)))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match page {
        ViewState::ClusterList => pages::clusters::render(app, frame, inner_area),
        ViewState::TopicList => pages::topics::render(app, frame, inner_area),
        ViewState::TopicDetail => pages::topic_detail::render(app, frame, inner_area),
        ViewState::MessageViewport => pages::messages::render(app, frame, inner_area),
        // backdrop() 不会返回表单视图
        ViewState::AddCluster
        | ViewState::EditCluster
        | ViewState::AddTopic
        | ViewState::EditTopic => {}
    }
}

fn page_title(app: &App, page: ViewState) -> String {
    match (page, app.connected_cluster()) {
        (ViewState::TopicList | ViewState::TopicDetail | ViewState::MessageViewport, Some(cluster)) => {
            format!("{} @ {cluster}", page.title())
        }
        _ => page.title().to_string(),
    }
}

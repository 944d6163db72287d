//! 列表组件
//!
//! 集群和 Topic 列表都渲染 `DisplayItem`：左列标题，右列副标题。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::domain::DisplayItem;
use crate::view::theme::colors;

/// 标题列最大宽度
const MAX_TITLE_WIDTH: usize = 48;

/// 渲染列表
pub fn render(items: &[DisplayItem], selected: usize, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title_width = items
        .iter()
        .map(|item| item.title().width())
        .max()
        .unwrap_or(0)
        .min(MAX_TITLE_WIDTH);

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == selected;

            let style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            let dim_style = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(c.muted)
            };

            let marker = if is_selected { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, style),
                Span::styled(pad_to_width(item.title(), title_width), style),
                Span::styled("  ", dim_style),
                Span::styled(item.subtitle(), dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(rows).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 按显示宽度补齐或截断（中文等宽字符占两列）
fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("订单", 6), "订单  ");
        assert_eq!(pad_to_width("订单", 3), "订 ");
        assert_eq!(pad_to_width("orders", 3), "ord");
    }
}

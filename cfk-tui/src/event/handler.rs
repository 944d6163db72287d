//! 事件处理器

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage};
use crate::model::App;

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 错误屏：任意键关闭
    if app.error.is_some() {
        return AppMessage::DismissError;
    }

    // 表单中 q 是普通字符
    if app.view.is_form() {
        return handle_form_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    handle_list_keys(key)
}

/// 处理列表类视图的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) || DefaultKeymap::ACTION_NEW.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Content(ContentMessage::Refresh);
    }
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::BACK_ALT.matches(&key) {
        return AppMessage::Content(ContentMessage::Back);
    }
    if DefaultKeymap::HOME.matches(&key) {
        return AppMessage::Content(ContentMessage::Home);
    }
    if DefaultKeymap::MESSAGES.matches(&key) {
        return AppMessage::Content(ContentMessage::Messages);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 进入选中项
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理表单中的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭表单
    if DefaultKeymap::FORM_CANCEL.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Form(FormMessage::Cancel);
    }

    match key.code {
        // Tab / ↓: 下一个焦点
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab / ↑: 上一个焦点
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // ← →: 切换按钮
        KeyCode::Left | KeyCode::Right => AppMessage::Form(FormMessage::SwitchButton),

        // Enter: 前进 / 提交 / 取消
        KeyCode::Enter => AppMessage::Form(FormMessage::Confirm),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 字符输入
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Form(FormMessage::Input(c))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;
    use crate::message::AppError;
    use crate::model::ViewState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn list_keys_map_to_content_messages() {
        let app = App::default();
        let cases = [
            (KeyCode::Char('a'), ContentMessage::Add),
            (KeyCode::Char('n'), ContentMessage::Add),
            (KeyCode::Char('e'), ContentMessage::Edit),
            (KeyCode::Char('d'), ContentMessage::Delete),
            (KeyCode::Char('r'), ContentMessage::Refresh),
            (KeyCode::Esc, ContentMessage::Back),
            (KeyCode::Backspace, ContentMessage::Back),
            (KeyCode::Char('b'), ContentMessage::Home),
            (KeyCode::Char('m'), ContentMessage::Messages),
            (KeyCode::Char('k'), ContentMessage::SelectPrevious),
            (KeyCode::Down, ContentMessage::SelectNext),
            (KeyCode::Enter, ContentMessage::Confirm),
            (KeyCode::End, ContentMessage::SelectLast),
        ];
        for (code, expected) in cases {
            match handle_event(press(code), &app) {
                AppMessage::Content(msg) => assert_eq!(msg, expected, "{code:?}"),
                other => panic!("{code:?} produced {other:?}"),
            }
        }
    }

    #[test]
    fn quit_keys_outside_forms() {
        let app = App::default();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
        assert!(matches!(handle_event(ctrl('c'), &app), AppMessage::Quit));
    }

    #[test]
    fn forms_treat_q_as_text_and_esc_as_cancel() {
        let mut app = App::default();
        app.view = ViewState::AddTopic;

        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Form(FormMessage::Cancel)
        ));
        assert!(matches!(
            handle_event(ctrl('c'), &app),
            AppMessage::Form(FormMessage::Cancel)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::BackTab), &app),
            AppMessage::Form(FormMessage::PrevField)
        ));
    }

    #[test]
    fn any_key_dismisses_error_screen() {
        let mut app = App::default();
        app.error = Some(AppError::new(cfk_core::ErrorKind::Timeout, "slow"));

        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::DismissError
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(handle_event(Event::Key(release), &app), AppMessage::Noop));
    }
}

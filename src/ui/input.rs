//! 键盘事件映射 (Input -> Action)

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Pane};

/// 根据当前焦点面板和按键获取对应的 Action
pub fn get_action(pane: Pane, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match pane {
        Pane::Form => match key.code {
            KeyCode::Down => Some(Action::FocusNext),
            KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Pane::List => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 `true` 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(app.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

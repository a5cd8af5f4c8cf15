//! 视图层模块
//!
//! 主渲染入口：把 `App` 映射为各个组件

pub mod components;
pub mod form;
pub mod list;
pub mod restaurant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Pane};
use form::render_form;
use list::render_list;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 表单 + 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_title(frame, chunks[0]);
    render_form(frame, &app.form, app.focus == Pane::Form, body[0]);
    render_list(
        frame,
        &app.restaurants,
        app.selected_index,
        app.focus == Pane::List,
        body[1],
    );
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Restaurants")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Pane::Form => "[Tab/↓] next  [Shift+Tab/↑] prev  [Enter] submit  [Esc] quit",
        Pane::List => "[j/k] scroll  [Tab] back to form  [q/Esc] quit",
    };

    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}  |  {}", help_text, message),
        _ => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

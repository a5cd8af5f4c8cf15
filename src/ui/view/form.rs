use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

use super::components::{render_button, render_input_widget};
use crate::models::{Field, InputKind};
use crate::ui::form::{AddRestaurantForm, FormFocus};

/// 渲染添加餐厅表单：五个带标签的输入框和一个提交按钮
pub fn render_form(frame: &mut Frame, form: &AddRestaurantForm, has_focus: bool, area: Rect) {
    let border_color = if has_focus { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title("Add Restaurant")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 每个字段一行，最后是按钮
    let mut constraints = vec![Constraint::Length(3); Field::ALL.len() + 1];
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let focused = has_focus && form.focus == FormFocus::Field(field);
        let title = control_title(field);
        let value = form.draft.get(field);
        render_input_widget(frame, chunks[i], &title, value, focused, Color::Yellow);

        if focused {
            let area = chunks[i];
            // 按显示宽度计算，全角字符占两列
            let width = Line::from(value).width() as u16;
            let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }

    let submit_focused = has_focus && form.focus == FormFocus::Submit;
    render_button(frame, chunks[Field::ALL.len()], "Submit", submit_focused);
}

/// 数字控件在标题中标出取值范围，例如 "Rating: (1-5)"
fn control_title(field: Field) -> String {
    match field.kind() {
        InputKind::Number { min, max } => format!("{} ({}-{})", field.label(), min, max),
        InputKind::Tel | InputKind::Text => field.label().to_string(),
    }
}

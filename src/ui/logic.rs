//! 业务逻辑处理 (Update/Dispatch)
//!
//! 把 Action 应用到 App 状态

use super::actions::Action;
use super::form::FormFocus;
use super::state::{App, Pane};
use crate::models::Field;

impl App {
    /// 核心逻辑分发，返回 `true` 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),

            Action::Submit => self.submit(),
            Action::Input(c) => self.form.type_char(c),
            Action::DeleteChar => self.form.delete_char(),

            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
        }
        false
    }

    // ============ 焦点相关 ============

    /// 焦点顺序：name → … → rating → submit → list → name
    pub fn focus_next(&mut self) {
        match (self.focus, self.form.focus) {
            (Pane::Form, FormFocus::Submit) => self.focus = Pane::List,
            (Pane::Form, _) => self.form.focus_next(),
            (Pane::List, _) => {
                self.focus = Pane::Form;
                self.form.focus = FormFocus::Field(Field::Name);
            }
        }
    }

    pub fn focus_prev(&mut self) {
        match (self.focus, self.form.focus) {
            (Pane::Form, FormFocus::Field(Field::Name)) => self.focus = Pane::List,
            (Pane::Form, _) => self.form.focus_prev(),
            (Pane::List, _) => {
                self.focus = Pane::Form;
                self.form.focus = FormFocus::Submit;
            }
        }
    }

    // ============ 表单相关 ============

    /// 提交表单，提交的记录交给 `append_restaurant`
    pub fn submit(&mut self) {
        let mut submitted = None;
        match self.form.on_submit(|record| submitted = Some(record)) {
            Ok(()) => {
                if let Some(record) = submitted {
                    self.message = Some(format!("Added {}", record.name));
                    self.append_restaurant(record);
                }
            }
            Err(violation) => {
                // 与浏览器一致：聚焦到无效控件并提示原因
                self.form.focus = FormFocus::Field(violation.field);
                self.message = Some(format!("{} {}", violation.field.label(), violation.kind));
            }
        }
    }

    // ============ 列表相关 ============

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.restaurants.len() {
            self.selected_index += 1;
        }
    }
}

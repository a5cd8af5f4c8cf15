//! 添加餐厅表单状态
//!
//! 表单独占草稿。提交时先做控件约束检查，全部通过后把草稿副本交给调用方的
//! 更新回调。

use thiserror::Error;

use crate::models::{Field, InputKind, Restaurant};

/// 提交被拦截的原因，以及拦截它的控件
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {kind}")]
pub struct ConstraintViolation {
    pub field: Field,
    pub kind: Violation,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("Please fill out this field.")]
    ValueMissing,
    #[error("Please enter a number.")]
    BadInput,
    #[error("Value must be greater than or equal to {0}.")]
    RangeUnderflow(i64),
    #[error("Value must be less than or equal to {0}.")]
    RangeOverflow(i64),
    #[error("Please enter a valid value. The two nearest valid values are {0} and {1}.")]
    StepMismatch(i64, i64),
}

/// 未提交的字段值，结构与记录相同，初始全为空
pub type FormDraft = Restaurant;

/// 表单内的键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddRestaurantForm {
    pub draft: FormDraft,
    pub focus: FormFocus,
}

impl Default for AddRestaurantForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddRestaurantForm {
    pub fn new() -> Self {
        Self {
            draft: FormDraft::default(),
            focus: FormFocus::Field(Field::Name),
        }
    }

    /// 只覆盖草稿中的一个字段
    pub fn on_field_change(&mut self, field: Field, value: String) {
        tracing::trace!("field {} changed to {:?}", field, value);
        *self.draft.get_mut(field) = value;
    }

    /// 向当前焦点字段追加一个字符
    pub fn type_char(&mut self, c: char) {
        if let FormFocus::Field(field) = self.focus {
            if !field.accepts(c) {
                return;
            }
            let mut value = self.draft.get(field).to_string();
            value.push(c);
            self.on_field_change(field, value);
        }
    }

    /// 焦点字段退格
    pub fn delete_char(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            let mut value = self.draft.get(field).to_string();
            if value.pop().is_some() {
                self.on_field_change(field, value);
            }
        }
    }

    /// 提交表单
    ///
    /// 所有控件有效时以草稿副本调用 `update`。无论成败草稿都保持原样。
    pub fn on_submit<F>(&self, update: F) -> Result<(), ConstraintViolation>
    where
        F: FnOnce(Restaurant),
    {
        if let Some(violation) = self.check_validity() {
            tracing::debug!("submit blocked: {}", violation);
            return Err(violation);
        }

        tracing::info!("submitting {:?}", self.draft);
        update(self.draft.clone());
        Ok(())
    }

    /// 按字段顺序返回第一个无效控件
    pub fn check_validity(&self) -> Option<ConstraintViolation> {
        Field::ALL.into_iter().find_map(|field| {
            validate(field, self.draft.get(field)).map(|kind| ConstraintViolation { field, kind })
        })
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(field) => field.next().map_or(FormFocus::Submit, FormFocus::Field),
            FormFocus::Submit => FormFocus::Field(Field::Name),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(field) => field.prev().map_or(FormFocus::Submit, FormFocus::Field),
            FormFocus::Submit => FormFocus::Field(Field::Rating),
        };
    }
}

fn validate(field: Field, value: &str) -> Option<Violation> {
    if field.required() && value.is_empty() {
        return Some(Violation::ValueMissing);
    }

    match field.kind() {
        InputKind::Number { min, max } => validate_number(value, min, max),
        InputKind::Text | InputKind::Tel => None,
    }
}

fn validate_number(value: &str, min: i64, max: i64) -> Option<Violation> {
    if !is_number_literal(value) {
        return Some(Violation::BadInput);
    }
    let Ok(n) = value.parse::<f64>() else {
        return Some(Violation::BadInput);
    };
    if !n.is_finite() {
        return Some(Violation::BadInput);
    }
    if n < min as f64 {
        return Some(Violation::RangeUnderflow(min));
    }
    if n > max as f64 {
        return Some(Violation::RangeOverflow(max));
    }
    if n.fract() != 0.0 {
        let below = n.floor() as i64;
        return Some(Violation::StepMismatch(below, below + 1));
    }
    None
}

/// 数字输入框接受的文本格式：`-`? (数字 (`.` 数字)? | `.` 数字) ([eE] [+-]? 数字)?
///
/// 比 `str::parse::<f64>` 严格：不允许前导 `+`，不允许以 `.` 结尾。
fn is_number_literal(value: &str) -> bool {
    fn digits(s: &str) -> usize {
        s.bytes().take_while(u8::is_ascii_digit).count()
    }

    let rest = value.strip_prefix('-').unwrap_or(value);

    let int_len = digits(rest);
    let mut rest = &rest[int_len..];
    let mut frac_len = 0;
    if let Some(after_dot) = rest.strip_prefix('.') {
        frac_len = digits(after_dot);
        if frac_len == 0 {
            return false;
        }
        rest = &after_dot[frac_len..];
    }
    if int_len == 0 && frac_len == 0 {
        return false;
    }

    if let Some(exp) = rest.strip_prefix(['e', 'E']) {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        let exp_len = digits(exp);
        return exp_len > 0 && exp_len == exp.len();
    }
    rest.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rating: &str) -> AddRestaurantForm {
        let mut form = AddRestaurantForm::new();
        form.on_field_change(Field::Name, "Café X".to_string());
        form.on_field_change(Field::Address, "1 Main St".to_string());
        form.on_field_change(Field::Phone, "555-0100".to_string());
        form.on_field_change(Field::Cuisine, "French".to_string());
        form.on_field_change(Field::Rating, rating.to_string());
        form
    }

    #[test]
    fn test_draft_starts_empty() {
        let form = AddRestaurantForm::new();
        for field in Field::ALL {
            assert_eq!(form.draft.get(field), "");
        }
        assert_eq!(form.focus, FormFocus::Field(Field::Name));
    }

    #[test]
    fn test_field_change_isolated() {
        let mut form = filled("4");
        form.on_field_change(Field::Phone, "555-9999".to_string());

        assert_eq!(form.draft.phone, "555-9999");
        assert_eq!(form.draft.name, "Café X");
        assert_eq!(form.draft.address, "1 Main St");
        assert_eq!(form.draft.cuisine, "French");
        assert_eq!(form.draft.rating, "4");
    }

    #[test]
    fn test_submit_hands_draft_verbatim() {
        let form = filled("4");
        let mut received = Vec::new();
        form.on_submit(|r| received.push(r)).unwrap();

        assert_eq!(
            received,
            vec![Restaurant::new("Café X", "1 Main St", "555-0100", "French", "4")]
        );
        // 提交后草稿不清空
        assert_eq!(form.draft.name, "Café X");
    }

    #[test]
    fn test_submit_blocked_on_empty_field() {
        let mut form = filled("4");
        form.on_field_change(Field::Address, String::new());

        let mut called = false;
        let err = form.on_submit(|_| called = true).unwrap_err();
        assert!(!called);
        assert_eq!(err.field, Field::Address);
        assert_eq!(err.kind, Violation::ValueMissing);
        assert_eq!(err.kind.to_string(), "Please fill out this field.");
    }

    #[test]
    fn test_first_invalid_field_wins() {
        let form = AddRestaurantForm::new();
        let err = form.check_validity().unwrap();
        assert_eq!(err.field, Field::Name);
    }

    #[test]
    fn test_rating_range() {
        for ok in ["1", "3", "5", "5.0"] {
            assert_eq!(filled(ok).check_validity(), None, "rating {ok}");
        }

        let low = filled("0").check_validity().unwrap();
        assert_eq!(low.field, Field::Rating);
        assert_eq!(low.kind, Violation::RangeUnderflow(1));

        let high = filled("6").check_validity().unwrap();
        assert_eq!(high.kind, Violation::RangeOverflow(5));
        assert_eq!(high.kind.to_string(), "Value must be less than or equal to 5.");

        let neg = filled("-2").check_validity().unwrap();
        assert_eq!(neg.kind, Violation::RangeUnderflow(1));
    }

    #[test]
    fn test_rating_step_and_bad_input() {
        let half = filled("3.5").check_validity().unwrap();
        assert_eq!(half.kind, Violation::StepMismatch(3, 4));

        for junk in ["4-", "+5", "4.", "+4e+0", ".", "-", "e5", "4e", "1.2.3", "--1"] {
            let err = filled(junk).check_validity().unwrap();
            assert_eq!(err.kind, Violation::BadInput, "rating {junk:?}");
        }

        // 格式合法，但小于 min
        let frac = filled(".5").check_validity().unwrap();
        assert_eq!(frac.kind, Violation::RangeUnderflow(1));

        for ok in ["4e0", "4E+0", "40e-1", "-0.0e1", "2.0"] {
            let err = filled(ok).check_validity();
            assert!(
                !matches!(err, Some(ConstraintViolation { kind: Violation::BadInput, .. })),
                "rating {ok:?}"
            );
        }
        assert_eq!(filled("40e-1").check_validity(), None);
    }

    #[test]
    fn test_loose_number_text_never_appended() {
        for rating in ["+5", "4."] {
            let mut appended = None;
            let result = filled(rating).on_submit(|r| appended = Some(r));
            assert!(result.is_err(), "rating {rating:?}");
            assert_eq!(appended, None);
        }
    }

    #[test]
    fn test_out_of_range_rating_never_reaches_callback() {
        let form = filled("9");
        let mut called = false;
        assert!(form.on_submit(|_| called = true).is_err());
        assert!(!called);
    }

    #[test]
    fn test_typing_respects_focus_and_control() {
        let mut form = AddRestaurantForm::new();
        form.type_char('S');
        form.type_char('u');
        form.delete_char();
        assert_eq!(form.draft.name, "S");

        form.focus = FormFocus::Field(Field::Rating);
        form.type_char('x');
        form.type_char('4');
        assert_eq!(form.draft.rating, "4");
        assert_eq!(form.draft.name, "S");

        form.focus = FormFocus::Submit;
        form.type_char('z');
        form.delete_char();
        assert_eq!(form.draft, Restaurant::new("S", "", "", "", "4"));
    }

    #[test]
    fn test_focus_cycles_through_submit() {
        let mut form = AddRestaurantForm::new();
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus, FormFocus::Field(Field::Rating));
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Submit);
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Field(Field::Name));
        form.focus_prev();
        assert_eq!(form.focus, FormFocus::Submit);
        form.focus_prev();
        assert_eq!(form.focus, FormFocus::Field(Field::Rating));
    }
}

//! Action 枚举定义 (Intent)
//!
//! 用户按键转化为明确的语义化 Action

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 焦点
    FocusNext,
    FocusPrev,

    // 表单
    Submit,
    Input(char),
    DeleteChar,

    // 列表
    MoveSelectionUp,
    MoveSelectionDown,
}

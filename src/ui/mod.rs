//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs, form.rs): App 根状态及其持有的表单
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs, input.rs): 按键转化为语义化 Action
//! - Update (logic.rs): 将 Action 应用到状态

pub mod actions;
pub mod form;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;

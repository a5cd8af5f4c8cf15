//! App 状态定义 (Model)
//!
//! 界面根节点：持有餐厅列表，组合表单与列表面板

use super::form::AddRestaurantForm;
use crate::models::{Restaurant, RestaurantList};

/// 应用状态
pub struct App {
    pub restaurants: RestaurantList,
    pub form: AddRestaurantForm,
    pub focus: Pane,
    pub selected_index: usize,
    pub message: Option<String>,
}

/// 接收按键的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Form,
    List,
}

impl App {
    /// 以 `seed` 的副本创建应用
    pub fn new(seed: &[Restaurant]) -> Self {
        Self {
            restaurants: RestaurantList::from_seed(seed),
            form: AddRestaurantForm::new(),
            focus: Pane::Form,
            selected_index: 0,
            message: None,
        }
    }

    /// 追加一条记录（不校验、不去重），并把选中项移到新记录上，使其可见
    pub fn append_restaurant(&mut self, record: Restaurant) {
        self.restaurants.append(record);
        self.selected_index = self.restaurants.len() - 1;
        tracing::debug!("restaurant list now holds {}", self.restaurants.len());
    }
}

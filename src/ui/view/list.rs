use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::restaurant::restaurant_item;
use crate::models::RestaurantList;

/// 按顺序渲染所有餐厅，每条记录一项
///
/// 无论焦点在哪里都会选中 `selected_index`，列表据此滚动；只有列表获得焦点时
/// 才显示高亮。
pub fn render_list(
    frame: &mut Frame,
    restaurants: &RestaurantList,
    selected_index: usize,
    has_focus: bool,
    area: Rect,
) {
    let items: Vec<ListItem> = restaurants
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, r)| restaurant_item(i, r))
        .collect();

    let border_color = if has_focus { Color::Cyan } else { Color::DarkGray };
    let highlight = if has_focus {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Restaurants ({})", restaurants.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(highlight);

    let mut state = ListState::default();
    if !restaurants.is_empty() {
        state.select(Some(selected_index.min(restaurants.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::models::Restaurant;

/// [组件] 单条餐厅：名称作标题，其下依次列出地址、电话、菜系、评分
///
/// 标题前缀为记录的位置序号，屏幕上可用 `"0 Pizza Place"` 定位第一条记录。
pub fn restaurant_item(index: usize, restaurant: &Restaurant) -> ListItem<'_> {
    let heading = Line::from(vec![
        Span::styled(
            format!("{} ", index),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            restaurant.name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut lines = vec![heading];
    lines.extend(
        [
            restaurant.address.as_str(),
            restaurant.phone.as_str(),
            restaurant.cuisine.as_str(),
            restaurant.rating.as_str(),
        ]
        .into_iter()
        .map(|value| Line::from(format!("  • {}", value))),
    );
    lines.push(Line::default());

    ListItem::new(lines)
}

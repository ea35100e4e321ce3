use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::MenuState;

pub fn render_sidebar(frame: &mut Frame<'_>, area: Rect, menu: &MenuState, title: Option<&str>) {
    let items = menu
        .items()
        .iter()
        .map(|item| ListItem::new(item.label.clone()))
        .collect::<Vec<_>>();
    let mut state = ListState::default();
    if !menu.items().is_empty() {
        state.select(Some(menu.selected_index()));
    }
    let list = List::new(items)
        .block(
            Block::default()
                .title(title.unwrap_or("Pages").to_string())
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

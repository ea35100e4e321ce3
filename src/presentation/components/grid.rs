use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::form::{FormState, section::grid_order};

/// Read-only overview of every field, one row each, in grid order.
pub fn render_grid(frame: &mut Frame<'_>, area: Rect, form: &FormState, title: &str) {
    let configs = form
        .fields()
        .map(|field| field.config.clone())
        .collect::<Vec<_>>();
    let focused = form.focused_name();

    let rows = grid_order(&configs)
        .into_iter()
        .filter_map(|config| form.field(&config.name))
        .map(|field| {
            let mut label_style = Style::default().fg(Color::Cyan);
            if focused == Some(field.name()) {
                label_style = label_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            let value = field.display_value().replace('\n', " ⏎ ");
            let value_cell = match field.error() {
                Some(error) => Cell::from(Line::from(vec![
                    Span::raw(value),
                    Span::styled(format!("  ({error})"), Style::default().fg(Color::Red)),
                ])),
                None => Cell::from(value),
            };
            Row::new(vec![
                Cell::from(Span::styled(field.label().to_string(), label_style)),
                value_cell,
            ])
        })
        .collect::<Vec<_>>();

    let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
        .header(
            Row::new(vec!["Field", "Value"])
                .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)),
        )
        .block(
            Block::default()
                .title(format!("{title} (grid)"))
                .borders(Borders::ALL),
        );
    frame.render_widget(table, area);
}

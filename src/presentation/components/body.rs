use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{fields::render_section, grid::render_grid};
use crate::presentation::view::{PageView, UiContext};

pub fn render_body(frame: &mut Frame<'_>, area: Rect, page: PageView<'_>, ctx: &UiContext<'_>) {
    let title = ctx.page_label.unwrap_or("Page").to_string();
    match page {
        PageView::Idle => {
            let placeholder = Paragraph::new("Select a page with PageUp/PageDown")
                .block(Block::default().title(title).borders(Borders::ALL));
            frame.render_widget(placeholder, area);
        }
        PageView::Loading { page } => {
            let placeholder = Paragraph::new(format!("Loading {page}…"))
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().title(title).borders(Borders::ALL));
            frame.render_widget(placeholder, area);
        }
        PageView::Failed { message } => {
            let panel = Paragraph::new(format!("{message}\n\nPress F5 to retry."))
                .wrap(Wrap { trim: false })
                .style(Style::default().fg(Color::Red))
                .block(Block::default().title(title).borders(Borders::ALL));
            frame.render_widget(panel, area);
        }
        PageView::Form { form, grid } => {
            let mut area = area;
            if let Some(message) = ctx.page_error {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(4), Constraint::Min(3)])
                    .split(area);
                let banner = Paragraph::new(message.to_string())
                    .wrap(Wrap { trim: true })
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .block(Block::default().title("Save failed").borders(Borders::ALL));
                frame.render_widget(banner, chunks[0]);
                area = chunks[1];
            }

            if form.is_empty() {
                let placeholder = Paragraph::new("This page has no fields")
                    .block(Block::default().title(title).borders(Borders::ALL));
                frame.render_widget(placeholder, area);
                return;
            }

            if grid {
                render_grid(frame, area, form, &title);
                return;
            }

            let section_index = form.section_index;
            let field_index = form.field_index;
            let (sections, fields) = form.sections_with_fields();
            if sections.is_empty() {
                let placeholder = Paragraph::new("No sections configured")
                    .block(Block::default().title(title).borders(Borders::ALL));
                frame.render_widget(placeholder, area);
                return;
            }
            let constraints = vec![Constraint::Ratio(1, sections.len() as u32); sections.len()];
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);
            for (idx, section) in sections.iter_mut().enumerate() {
                let focused = (idx == section_index).then_some(field_index);
                render_section(frame, columns[idx], section, fields, focused, !ctx.busy);
            }
        }
    }
}

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::presentation::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    if let Some(help) = ctx.help {
        let keys = Paragraph::new(help.to_string())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(keys, rows[0]);
    }

    let mut spans = vec![status_badge(ctx), Span::raw(" ")];
    let message = if ctx.status_message.trim().is_empty() {
        "Ready"
    } else {
        ctx.status_message
    };
    spans.push(Span::raw(message.to_string()));
    if ctx.dirty {
        spans.push(Span::styled(
            " • modified",
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(label) = ctx.focus_label {
        spans.push(Span::styled(
            format!(" • {label}"),
            Style::default().fg(Color::Cyan),
        ));
    }
    let mut lines = vec![Line::from(spans)];
    if let Some(first) = ctx.global_errors.first() {
        let more = ctx.global_errors.len() - 1;
        let text = if more > 0 {
            format!("{first} (+{more} more)")
        } else {
            first.clone()
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[1]);
}

fn status_badge(ctx: &UiContext<'_>) -> Span<'static> {
    if ctx.busy {
        Span::styled(
            "[…]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if ctx.error_count > 0 {
        Span::styled(
            format!("[! {}]", ctx.error_count),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    }
}

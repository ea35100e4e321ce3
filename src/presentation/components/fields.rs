use indexmap::IndexMap;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::form::{ComponentKind, FieldState, SectionState};

/// Highlight symbol plus the value indent and focus marker.
const VALUE_INDENT: u16 = 6;

/// Renders one section column. `focused` is the index of the focused field
/// when focus is inside this section.
pub fn render_section(
    frame: &mut Frame<'_>,
    area: Rect,
    section: &mut SectionState,
    fields: &IndexMap<String, FieldState>,
    focused: Option<usize>,
    enable_cursor: bool,
) {
    let title_style = if focused.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(Span::styled(section.title.clone(), title_style))
        .borders(Borders::ALL);

    if section.is_empty() {
        frame.render_widget(Paragraph::new("No fields").block(block), area);
        return;
    }

    let content_width = area.width.saturating_sub(4);
    let mut items = Vec::with_capacity(section.fields.len());
    let mut cursor_hint: Option<CursorHint> = None;
    let mut line_offset = 0usize;
    if let Some(selected) = focused {
        adjust_scroll_offset(section, selected, area.height);
    }

    for (idx, name) in section.fields.iter().enumerate() {
        let Some(field) = fields.get(name) else {
            continue;
        };
        let is_selected = focused == Some(idx);
        let render = build_field_render(field, is_selected, content_width);
        if idx >= section.scroll_offset
            && let Some(mut hint) = render.cursor_hint
        {
            hint.line_offset += line_offset;
            cursor_hint = Some(hint);
        }
        if idx >= section.scroll_offset {
            line_offset += render.lines.len();
        }
        items.push(ListItem::new(render.lines));
    }

    let mut list_state = ListState::default();
    list_state.select(focused);
    *list_state.offset_mut() = section.scroll_offset;

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);

    if enable_cursor && let Some(cursor) = cursor_hint {
        let inner_y = area.y.saturating_add(1);
        let inner_x = area.x.saturating_add(1);
        let line = cursor
            .line_offset
            .min(area.height.saturating_sub(2) as usize) as u16;
        let cursor_x = inner_x
            .saturating_add(VALUE_INDENT)
            .saturating_add(cursor.value_width)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, inner_y.saturating_add(line)));
    }
}

fn adjust_scroll_offset(section: &mut SectionState, selected: usize, height: u16) {
    // Fields take about five lines each; keep the focused one inside the window.
    let window = (height.saturating_sub(2) / 5).max(1) as usize;
    if selected < section.scroll_offset {
        section.scroll_offset = selected;
    } else if selected >= section.scroll_offset + window {
        section.scroll_offset = selected + 1 - window;
    }
}

struct FieldRender {
    lines: Vec<Line<'static>>,
    cursor_hint: Option<CursorHint>,
}

struct CursorHint {
    line_offset: usize,
    value_width: u16,
}

fn build_field_render(field: &FieldState, is_selected: bool, max_width: u16) -> FieldRender {
    let mut lines = Vec::new();
    let mut label = field.label().to_string();
    if field.config.is_required() {
        label.push_str(" *");
    }
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(label, label_style)));

    let (value_panel, cursor_hint) = value_panel_lines(field, is_selected, max_width);
    lines.extend(value_panel);
    lines.push(meta_line(field));
    if let Some(error) = error_lines(field, max_width) {
        lines.extend(error);
    }

    FieldRender { lines, cursor_hint }
}

fn value_segments(field: &FieldState, max_width: usize) -> Vec<String> {
    let text = field.display_value();
    let mut segments = Vec::new();
    for raw_line in text.split('\n') {
        let wrapped = wrap(raw_line, max_width);
        if wrapped.is_empty() {
            segments.push(String::new());
        } else {
            segments.extend(wrapped.into_iter().map(|segment| segment.into_owned()));
        }
    }
    segments
}

fn value_panel_lines(
    field: &FieldState,
    is_selected: bool,
    max_width: u16,
) -> (Vec<Line<'static>>, Option<CursorHint>) {
    let clamp_width = max_width.saturating_sub(4).max(4) as usize;
    let is_empty = field.value().is_empty();
    let hint = field.config.placeholder_text();
    let segments = if is_empty && !hint.is_empty() && field.component_kind() != ComponentKind::Select
    {
        vec![String::new()]
    } else {
        value_segments(field, clamp_width)
    };
    let last_width = segments
        .last()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .unwrap_or(0);

    let value_style = if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if is_selected { "▏ " } else { "  " };

    let mut lines = Vec::with_capacity(segments.len());
    for (idx, segment) in segments.iter().enumerate() {
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(marker, Style::default().fg(Color::Yellow)),
        ];
        if idx == 0 && is_empty && !hint.is_empty() {
            spans.push(Span::styled(
                hint.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(segment.clone(), value_style));
        }
        lines.push(Line::from(spans));
    }

    if let Some(select) = field.select_state()
        && is_selected
    {
        let position = select
            .selected
            .map(|idx| format!("{}/{}", idx + 1, select.options.len()))
            .unwrap_or_else(|| format!("-/{}", select.options.len()));
        lines.push(Line::from(Span::styled(
            format!("    ←/→ choose ({position})"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if is_selected && field.component_kind().is_multiline() {
        lines.push(Line::from(Span::styled(
            "    Enter: new line",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let cursor_hint = (is_selected && field.component_kind() != ComponentKind::Select).then(|| {
        CursorHint {
            line_offset: segments.len(),
            value_width: if is_empty { 0 } else { last_width as u16 },
        }
    });
    (lines, cursor_hint)
}

fn meta_line(field: &FieldState) -> Line<'static> {
    let mut meta = vec![Span::styled(
        format!("  type: {}", field.config.data_type),
        Style::default().fg(Color::DarkGray),
    )];
    // Without a placeholder the tooltip already shows as the empty-value hint.
    if let Some(tip) = &field.config.tool_tip_text
        && field.config.placeholder.is_some()
    {
        meta.push(Span::styled(
            format!("  • {tip}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if field.error().is_some() {
        meta.push(Span::styled(
            "  • invalid",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if field.touched {
        meta.push(Span::styled("  • edited", Style::default().fg(Color::Yellow)));
    }
    Line::from(meta)
}

fn error_lines(field: &FieldState, max_width: u16) -> Option<Vec<Line<'static>>> {
    field.error().map(|message| {
        wrap(&message, max_width.saturating_sub(4).max(8) as usize)
            .into_iter()
            .map(|line| {
                Line::from(Span::styled(
                    format!("    {line}"),
                    Style::default().fg(Color::Red),
                ))
            })
            .collect()
    })
}

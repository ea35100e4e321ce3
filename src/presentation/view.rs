use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{app::MenuState, form::FormState};

use super::components::{render_body, render_footer, render_sidebar};

/// What the page pane shows for the current controller phase.
pub enum PageView<'a> {
    Idle,
    Loading { page: &'a str },
    Failed { message: &'a str },
    Form { form: &'a mut FormState, grid: bool },
}

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub menu: &'a MenuState,
    pub page_label: Option<&'a str>,
    pub page_error: Option<&'a str>,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub focus_label: Option<&'a str>,
    pub global_errors: &'a [String],
    pub error_count: usize,
    pub dirty: bool,
    pub busy: bool,
}

pub fn draw(frame: &mut Frame<'_>, page: PageView<'_>, ctx: UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(rows[0]);

    render_sidebar(frame, columns[0], ctx.menu, ctx.title);
    render_body(frame, columns[1], page, &ctx);
    render_footer(frame, rows[1], &ctx);
}

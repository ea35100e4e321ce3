use std::sync::Arc;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::{
    app::{MenuState, default_menu},
    domain::{DataType, FieldConfig, Layout, PageConfig, Validation},
    form::{FormState, SectionSpec},
    presentation::{PageView, UiContext, draw},
};

fn form() -> FormState {
    let page = PageConfig {
        fields: vec![
            Arc::new(
                FieldConfig::new("email", "Email", DataType::Email)
                    .with_layout(Layout::in_section("leftSection", 1.0).with_grid_order(2.0))
                    .with_validation(Validation::required()),
            ),
            Arc::new(
                FieldConfig::new("carrier", "Carrier", DataType::Text)
                    .with_layout(Layout::in_section("rightSection", 1.0).with_grid_order(1.0))
                    .with_placeholder("DHL"),
            ),
        ],
    };
    FormState::from_page(&page, None, &SectionSpec::defaults())
}

fn context<'a>(menu: &'a MenuState, status: &'a str) -> UiContext<'a> {
    UiContext {
        title: Some("Pages"),
        menu,
        page_label: Some("Orders"),
        page_error: None,
        status_message: status,
        help: Some("Ctrl+S Save"),
        focus_label: None,
        global_errors: &[],
        error_count: 0,
        dirty: false,
        busy: false,
    }
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(page: PageView<'_>, ctx: UiContext<'_>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal.draw(|frame| draw(frame, page, ctx)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

#[test]
fn form_renders_sections_labels_and_required_error() {
    let menu = MenuState::new(default_menu());
    let mut form = form();
    let text = render(
        PageView::Form {
            form: &mut form,
            grid: false,
        },
        context(&menu, "Ready"),
    );
    assert!(text.contains("Details"));
    assert!(text.contains("More"));
    assert!(text.contains("Email *"));
    assert!(text.contains("Email is required"));
    assert!(text.contains("DHL"));
    assert!(text.contains("Shipments"));
}

#[test]
fn grid_lists_fields_in_grid_order() {
    let menu = MenuState::new(default_menu());
    let mut form = form();
    let text = render(
        PageView::Form {
            form: &mut form,
            grid: true,
        },
        context(&menu, "Ready"),
    );
    let carrier = text.find("Carrier").expect("carrier row");
    let email = text.find("Email").expect("email row");
    assert!(carrier < email);
}

#[test]
fn failed_page_shows_message_and_retry_hint() {
    let menu = MenuState::new(default_menu());
    let text = render(
        PageView::Failed {
            message: "Error Code: 500",
        },
        context(&menu, "Could not load the page."),
    );
    assert!(text.contains("Error Code: 500"));
    assert!(text.contains("F5"));
    assert!(text.contains("Could not load the page."));
}

use std::time::Duration;

use crate::form::SectionSpec;

use super::menu::{MenuItem, default_menu};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub menu: Vec<MenuItem>,
    pub sections: Vec<SectionSpec>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            confirm_exit: true,
            show_help: true,
            menu: default_menu(),
            sections: SectionSpec::defaults(),
        }
    }
}

impl UiOptions {
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_menu(mut self, menu: Vec<MenuItem>) -> Self {
        self.menu = menu;
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionSpec>) -> Self {
        self.sections = sections;
        self
    }
}

/// Sidebar entry: a label and the page it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub page_id: String,
    pub label: String,
}

impl MenuItem {
    pub fn new(page_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            label: label.into(),
        }
    }
}

pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("orders", "Orders"),
        MenuItem::new("shipments", "Shipments"),
        MenuItem::new("documents", "Documents"),
        MenuItem::new("appeals", "Appeals"),
    ]
}

#[derive(Debug, Clone)]
pub struct MenuState {
    items: Vec<MenuItem>,
    selected: usize,
}

impl MenuState {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    /// Moves the selection by `delta`, wrapping at both ends.
    pub fn step(&mut self, delta: i32) -> Option<&MenuItem> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len() as i32;
        self.selected = ((self.selected as i32 + delta) % len + len) as usize % self.items.len();
        self.items.get(self.selected)
    }

    /// Selects the entry for `page_id`, adding one when the page is not listed.
    pub fn focus_page(&mut self, page_id: &str) {
        match self.items.iter().position(|item| item.page_id == page_id) {
            Some(idx) => self.selected = idx,
            None => {
                self.items.push(MenuItem::new(page_id, page_id));
                self.selected = self.items.len() - 1;
            }
        }
    }

    pub fn label_for<'a>(&'a self, page_id: &'a str) -> &'a str {
        self.items
            .iter()
            .find(|item| item.page_id == page_id)
            .map(|item| item.label.as_str())
            .unwrap_or(page_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps() {
        let mut menu = MenuState::new(default_menu());
        assert_eq!(menu.step(-1).map(|item| item.page_id.as_str()), Some("appeals"));
        assert_eq!(menu.step(1).map(|item| item.page_id.as_str()), Some("orders"));
    }

    #[test]
    fn unknown_pages_are_appended() {
        let mut menu = MenuState::new(default_menu());
        menu.focus_page("invoices");
        assert_eq!(menu.selected().map(|item| item.label.as_str()), Some("invoices"));
        assert_eq!(menu.items().len(), 5);
    }
}

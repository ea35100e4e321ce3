use crossterm::event::KeyEvent;
use indexmap::IndexMap;

use crate::domain::{ENTITY_ID_KEY, EntityData, FieldConfig, FieldValue, PageConfig};

use super::{
    field::FieldState,
    section::{SectionSpec, SectionState, compose, unplaced},
};

/// Value store for one loaded page.
///
/// Field state is keyed by field name in page-config order, so a name maps to
/// exactly one value no matter which section renders it. Sections only hold
/// names and drive focus; fields outside every section live here too and are
/// validated and submitted with the rest.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: IndexMap<String, FieldState>,
    pub sections: Vec<SectionState>,
    unplaced: Vec<String>,
    pub section_index: usize,
    pub field_index: usize,
}

impl FormState {
    pub fn from_page(page: &PageConfig, values: Option<&EntityData>, specs: &[SectionSpec]) -> Self {
        let fields = page
            .fields
            .iter()
            .map(|config| {
                let value = initial_value(config, values);
                (
                    config.name.clone(),
                    FieldState::with_value(config.clone(), &value),
                )
            })
            .collect();
        let sections = compose(&page.fields, specs)
            .iter()
            .map(SectionState::collect)
            .collect();
        let unplaced = unplaced(&page.fields, specs)
            .iter()
            .map(|field| field.name.clone())
            .collect();
        let mut state = Self {
            fields,
            sections,
            unplaced,
            section_index: 0,
            field_index: 0,
        };
        state.normalize_focus();
        state
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.get_mut(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.values()
    }

    pub fn unplaced_fields(&self) -> impl Iterator<Item = &FieldState> {
        self.unplaced.iter().filter_map(|name| self.fields.get(name))
    }

    /// Sections alongside the value store, for renderers that scroll a
    /// section while reading its fields.
    pub fn sections_with_fields(&mut self) -> (&mut [SectionState], &IndexMap<String, FieldState>) {
        (&mut self.sections, &self.fields)
    }

    pub fn value(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).map(FieldState::value)
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.set_value(&value.into());
                true
            }
            None => false,
        }
    }

    pub fn mark_touched(&mut self, name: &str) -> bool {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.mark_touched();
                true
            }
            None => false,
        }
    }

    pub fn mark_all_touched(&mut self) {
        for field in self.fields.values_mut() {
            field.mark_touched();
        }
    }

    /// Clears every value and touched flag. Placeholders are not reapplied.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.reset();
        }
        self.section_index = 0;
        self.field_index = 0;
        self.normalize_focus();
    }

    /// Rebinds each field to the config of the same name in `page`. Fields
    /// absent from `page` keep their current binding. Returns how many
    /// controls were rebuilt.
    pub fn rebind(&mut self, page: &PageConfig) -> usize {
        page.fields
            .iter()
            .filter_map(|config| {
                self.fields
                    .get_mut(&config.name)
                    .map(|field| field.rebind(config.clone()))
            })
            .filter(|rebuilt| *rebuilt)
            .count()
    }

    /// Current values for every field, in page order.
    pub fn values(&self) -> EntityData {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value()))
            .collect()
    }

    /// Save payload: every field value plus the entity id.
    pub fn entity_data(&self, entity_id: &str) -> EntityData {
        let mut data = self.values();
        data.insert(
            ENTITY_ID_KEY.to_string(),
            FieldValue::Text(entity_id.to_string()),
        );
        data
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldState::is_valid)
    }

    pub fn error_count(&self) -> usize {
        self.fields.values().filter(|field| !field.is_valid()).count()
    }

    /// Visible error messages keyed by field name.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|(name, field)| field.error().map(|message| (name.clone(), message)))
            .collect()
    }

    pub fn is_unplaced(&self, name: &str) -> bool {
        self.unplaced.iter().any(|candidate| candidate == name)
    }

    pub fn active_section(&self) -> Option<&SectionState> {
        self.sections.get(self.section_index)
    }

    pub fn focused_name(&self) -> Option<&str> {
        self.active_section()
            .and_then(|section| section.fields.get(self.field_index))
            .map(String::as_str)
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.focused_name().and_then(|name| self.fields.get(name))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.normalize_focus();
        let name = self.focused_name()?.to_string();
        self.fields.get_mut(&name)
    }

    /// Routes a key to the focused control. Returns the name of the edited
    /// field when the control consumed the key.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<String> {
        let field = self.focused_field_mut()?;
        if field.handle_key(key) {
            Some(field.name().to_string())
        } else {
            None
        }
    }

    /// Moves focus to `name`. Fields outside every section cannot take focus.
    pub fn focus_field(&mut self, name: &str) -> bool {
        let found = self.sections.iter().enumerate().find_map(|(section, state)| {
            state
                .fields
                .iter()
                .position(|candidate| candidate == name)
                .map(|field| (section, field))
        });
        match found {
            Some((section, field)) => {
                self.section_index = section;
                self.field_index = field;
                true
            }
            None => false,
        }
    }

    pub fn focus_next_field(&mut self) {
        self.normalize_focus();
        let Some(section) = self.active_section() else {
            return;
        };
        if section.is_empty() {
            self.advance_section(1);
            return;
        }
        if self.field_index + 1 < section.fields.len() {
            self.field_index += 1;
        } else {
            self.advance_section(1);
        }
    }

    pub fn focus_prev_field(&mut self) {
        self.normalize_focus();
        if self.field_index > 0 {
            self.field_index -= 1;
            return;
        }
        self.advance_section(-1);
        if let Some(current) = self.active_section()
            && !current.is_empty()
        {
            self.field_index = current.fields.len() - 1;
        }
    }

    pub fn focus_next_section(&mut self, delta: i32) {
        self.normalize_focus();
        self.advance_section(delta);
    }

    /// Moves to the next section in `delta` direction that has fields.
    fn advance_section(&mut self, delta: i32) {
        let len = self.sections.len() as i32;
        if len == 0 {
            return;
        }
        let step = if delta < 0 { -1 } else { 1 };
        let mut next = self.section_index as i32;
        for _ in 0..len {
            next = ((next + step) % len + len) % len;
            if !self.sections[next as usize].is_empty() {
                break;
            }
        }
        self.section_index = next as usize;
        self.field_index = 0;
    }

    fn normalize_focus(&mut self) {
        if self.sections.is_empty() {
            self.section_index = 0;
            self.field_index = 0;
            return;
        }
        if self.section_index >= self.sections.len() {
            self.section_index = 0;
        }
        if self.sections[self.section_index].is_empty()
            && let Some(idx) = self.sections.iter().position(|section| !section.is_empty())
        {
            self.section_index = idx;
            self.field_index = 0;
        }
        let field_len = self.sections[self.section_index].fields.len();
        if field_len == 0 {
            self.field_index = 0;
        } else if self.field_index >= field_len {
            self.field_index = field_len - 1;
        }
    }
}

/// Starting value for a field: the loaded entity value when present and
/// non-empty, then the placeholder, then empty.
pub fn initial_value(config: &FieldConfig, values: Option<&EntityData>) -> FieldValue {
    if let Some(value) = values.and_then(|values| values.get(&config.name))
        && !value.is_empty()
    {
        return value.clone();
    }
    match config.placeholder.as_deref() {
        Some(placeholder) if !placeholder.is_empty() => FieldValue::text(placeholder),
        _ => FieldValue::Null,
    }
}

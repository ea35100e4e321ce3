//! Section composition: which fields render in which column, and in what order.

use std::sync::Arc;

use crate::domain::FieldConfig;

pub const LEFT_SECTION: &str = "leftSection";
pub const RIGHT_SECTION: &str = "rightSection";

/// A named column of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
}

impl SectionSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn defaults() -> Vec<SectionSpec> {
        vec![
            SectionSpec::new(LEFT_SECTION, "Details"),
            SectionSpec::new(RIGHT_SECTION, "More"),
        ]
    }
}

/// Fields of one section, in render order.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub fields: Vec<Arc<FieldConfig>>,
}

/// Fields whose `section_id` equals `section_id`, ascending by `order`.
///
/// A missing order sorts as `0`. The sort is stable, so equal orders keep
/// their position from the page config.
pub fn partition(fields: &[Arc<FieldConfig>], section_id: &str) -> Vec<Arc<FieldConfig>> {
    let mut placed = fields
        .iter()
        .filter(|field| field.layout.section_id.as_deref() == Some(section_id))
        .cloned()
        .collect::<Vec<_>>();
    placed.sort_by(|a, b| a.layout.sort_key().total_cmp(&b.layout.sort_key()));
    placed
}

pub fn compose(fields: &[Arc<FieldConfig>], specs: &[SectionSpec]) -> Vec<SectionView> {
    specs
        .iter()
        .map(|spec| SectionView {
            id: spec.id.clone(),
            title: spec.title.clone(),
            fields: partition(fields, &spec.id),
        })
        .collect()
}

/// Fields no section in `specs` will render. They still take part in
/// validation and submission.
pub fn unplaced(fields: &[Arc<FieldConfig>], specs: &[SectionSpec]) -> Vec<Arc<FieldConfig>> {
    fields
        .iter()
        .filter(|field| {
            field
                .layout
                .section_id
                .as_deref()
                .is_none_or(|id| !specs.iter().any(|spec| spec.id == id))
        })
        .cloned()
        .collect()
}

/// Column order for the grid view: ascending `grid_order`, stable.
pub fn grid_order(fields: &[Arc<FieldConfig>]) -> Vec<Arc<FieldConfig>> {
    let mut ordered = fields.to_vec();
    ordered.sort_by(|a, b| {
        a.layout
            .grid_sort_key()
            .total_cmp(&b.layout.grid_sort_key())
    });
    ordered
}

/// Focus bookkeeping for a rendered section: the names of its fields plus
/// the scroll position of its viewport.
#[derive(Debug, Clone)]
pub struct SectionState {
    pub id: String,
    pub title: String,
    pub fields: Vec<String>,
    pub scroll_offset: usize,
}

impl SectionState {
    pub fn collect(view: &SectionView) -> Self {
        Self {
            id: view.id.clone(),
            title: view.title.clone(),
            fields: view.fields.iter().map(|field| field.name.clone()).collect(),
            scroll_offset: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

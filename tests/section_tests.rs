use std::sync::Arc;

use pageform::domain::{DataType, FieldConfig, Layout};
use pageform::form::section::{SectionSpec, compose, grid_order, partition, unplaced};
use pretty_assertions::assert_eq;

fn field(name: &str, layout: Layout) -> Arc<FieldConfig> {
    Arc::new(FieldConfig::new(name, name, DataType::Text).with_layout(layout))
}

fn names(fields: &[Arc<FieldConfig>]) -> Vec<&str> {
    fields.iter().map(|field| field.name.as_str()).collect()
}

#[test]
fn partition_sorts_by_order_with_missing_as_zero() {
    let fields = vec![
        field("a", Layout::in_section("leftSection", 2.0)),
        field("b", Layout::in_section("leftSection", 1.0)),
        field("c", Layout::section("leftSection")),
    ];
    let sorted = partition(&fields, "leftSection");
    assert_eq!(names(&sorted), vec!["c", "b", "a"]);
}

#[test]
fn partition_is_stable_for_equal_orders() {
    let fields = vec![
        field("first", Layout::in_section("s", 1.0)),
        field("second", Layout::in_section("s", 1.0)),
        field("third", Layout::section("s")),
    ];
    assert_eq!(names(&partition(&fields, "s")), vec!["third", "first", "second"]);
}

#[test]
fn partition_leaves_source_untouched() {
    let fields = vec![
        field("a", Layout::in_section("s", 2.0)),
        field("b", Layout::in_section("s", 1.0)),
        field("x", Layout::in_section("other", 0.0)),
    ];
    let sorted = partition(&fields, "s");
    assert_eq!(names(&sorted), vec!["b", "a"]);
    assert_eq!(names(&fields), vec!["a", "b", "x"]);
    assert!(Arc::ptr_eq(&sorted[1], &fields[0]));
}

#[test]
fn compose_follows_specs_and_reports_unplaced() {
    let fields = vec![
        field("left", Layout::in_section("leftSection", 1.0)),
        field("right", Layout::in_section("rightSection", 1.0)),
        field("stray", Layout::in_section("footer", 1.0)),
        field("bare", Layout::default()),
    ];
    let specs = SectionSpec::defaults();
    let views = compose(&fields, &specs);
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].title, "Details");
    assert_eq!(names(&views[0].fields), vec!["left"]);
    assert_eq!(names(&views[1].fields), vec!["right"]);
    assert_eq!(names(&unplaced(&fields, &specs)), vec!["stray", "bare"]);
}

#[test]
fn custom_specs_claim_other_sections() {
    let fields = vec![field("stray", Layout::in_section("footer", 1.0))];
    let specs = vec![SectionSpec::new("footer", "Footer")];
    assert!(unplaced(&fields, &specs).is_empty());
    assert_eq!(names(&compose(&fields, &specs)[0].fields), vec!["stray"]);
}

#[test]
fn grid_order_sorts_independently_of_form_order() {
    let fields = vec![
        field("a", Layout::in_section("s", 1.0).with_grid_order(3.0)),
        field("b", Layout::in_section("s", 2.0).with_grid_order(1.0)),
        field("c", Layout::in_section("s", 3.0)),
    ];
    assert_eq!(names(&grid_order(&fields)), vec!["c", "b", "a"]);
}

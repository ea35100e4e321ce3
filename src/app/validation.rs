use crate::{domain::EntityData, form::FormState, validation::ValidationEngine};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(EntityData),
    Invalid {
        issues: usize,
        global_errors: Vec<String>,
        /// Name of the first failing field in page order.
        first_invalid: Option<String>,
    },
}

/// Submit-time validation. On failure every field is marked touched so each
/// error becomes visible; errors of fields no section renders are returned
/// as global messages.
pub fn validate_form(
    form: &mut FormState,
    engine: &ValidationEngine,
    entity_id: &str,
) -> ValidationOutcome {
    let issues = form
        .fields()
        .filter(|field| !engine.is_valid(&field.config, &field.value(), field.touched))
        .count();
    if issues == 0 {
        return ValidationOutcome::Valid(form.entity_data(entity_id));
    }
    form.mark_all_touched();
    let global_errors = form
        .unplaced_fields()
        .filter_map(|field| {
            engine
                .field_error(&field.config, &field.value(), field.touched)
                .map(|message| format!("{}: {message}", field.name()))
        })
        .collect();
    let values = form
        .fields()
        .map(|field| (field.config.as_ref(), field.value(), field.touched))
        .collect::<Vec<_>>();
    let first_invalid = engine
        .first_error(values.iter().map(|(config, value, touched)| (*config, value, *touched)))
        .map(|(name, _)| name);
    ValidationOutcome::Invalid {
        issues,
        global_errors,
        first_invalid,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        domain::{DataType, FieldConfig, FieldValue, Layout, PageConfig, Validation},
        form::SectionSpec,
    };

    fn page() -> PageConfig {
        PageConfig {
            fields: vec![
                Arc::new(
                    FieldConfig::new("name", "Name", DataType::Text)
                        .with_layout(Layout::in_section("leftSection", 1.0)),
                ),
                Arc::new(
                    FieldConfig::new("sku", "SKU", DataType::Text)
                        .with_layout(Layout::in_section("rightSection", 1.0)),
                ),
            ],
        }
    }

    #[test]
    fn registered_validator_blocks_submit() {
        let engine = ValidationEngine::new().with_custom("sku", |value| {
            (!value.as_text().starts_with("SKU-")).then(|| "SKU must start with SKU-".to_string())
        });
        let page = engine.bind(page());
        let mut form = FormState::from_page(&page, None, &SectionSpec::defaults());
        form.set_value("sku", "123");

        let outcome = validate_form(&mut form, &engine, "1");
        assert_eq!(
            outcome,
            ValidationOutcome::Invalid {
                issues: 1,
                global_errors: Vec::new(),
                first_invalid: Some("sku".to_string()),
            }
        );
        assert!(form.fields().all(|field| field.touched));
    }

    #[test]
    fn valid_form_yields_payload_with_id() {
        let engine = ValidationEngine::new();
        let required = PageConfig {
            fields: vec![Arc::new(
                FieldConfig::new("name", "Name", DataType::Text)
                    .with_validation(Validation::required()),
            )],
        };
        let mut form = FormState::from_page(&required, None, &SectionSpec::defaults());
        form.set_value("name", "Ada");
        match validate_form(&mut form, &engine, "7") {
            ValidationOutcome::Valid(payload) => {
                assert_eq!(payload["name"], FieldValue::text("Ada"));
                assert_eq!(payload["id"], FieldValue::text("7"));
            }
            other => panic!("expected valid outcome, got {other:?}"),
        }
    }
}

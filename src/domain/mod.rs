mod parser;
mod schema;
mod value;

pub use parser::{
    ConfigError, FieldDocument, InputDocument, LayoutDocument, PageConfigDocument,
    PlacementDocument, ValidationDocument, build_page_config, page_config_schema,
    parse_page_config,
};
pub use schema::{
    CustomValidator, DataType, ENTITY_ID_KEY, EntityData, FieldConfig, Layout, PageConfig,
    Pattern, SelectOption, Validation,
};
pub use value::FieldValue;
pub(crate) use value::format_number;

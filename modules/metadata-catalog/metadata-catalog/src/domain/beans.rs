//! Mapping specs of the relational beans.

use metadata_catalog_sdk::{RelationalColumn, RelationalSchema, RelationalTable, SortOrder};

use super::converter::{MappedBean, MappingSpec};
use super::mapping::{AttributeKind, AttributeSpec};

pub const QUALIFIED_NAME: &str = "qualifiedName";
pub const DISPLAY_NAME: &str = "displayName";
pub const DESCRIPTION: &str = "description";
pub const CREATE_TIME: &str = "createTime";

/// Classification marking a column as (part of) the primary key.
pub const PRIMARY_KEY_CLASSIFICATION: &str = "PrimaryKey";

static TABLE_MAPPING: MappingSpec<RelationalTable> = MappingSpec {
    type_name: "RelationalTable",
    attributes: &[
        AttributeSpec::optional(QUALIFIED_NAME, AttributeKind::Text),
        AttributeSpec::required(DISPLAY_NAME, AttributeKind::Text),
        AttributeSpec::optional(DESCRIPTION, AttributeKind::Text),
        AttributeSpec::optional("owner", AttributeKind::Text),
        AttributeSpec::optional(CREATE_TIME, AttributeKind::DateTime),
        AttributeSpec::optional("isDeprecated", AttributeKind::Bool),
    ],
    assemble: |header, attrs| RelationalTable {
        guid: header.guid,
        qualified_name: attrs.text(QUALIFIED_NAME),
        display_name: attrs.text(DISPLAY_NAME),
        description: attrs.optional_text(DESCRIPTION),
        owner: attrs.optional_text("owner"),
        create_time: attrs.datetime(CREATE_TIME),
        is_deprecated: attrs.bool_or("isDeprecated", false),
        classifications: header.classifications,
    },
};

static COLUMN_MAPPING: MappingSpec<RelationalColumn> = MappingSpec {
    type_name: "RelationalColumn",
    attributes: &[
        AttributeSpec::optional(QUALIFIED_NAME, AttributeKind::Text),
        AttributeSpec::required(DISPLAY_NAME, AttributeKind::Text),
        AttributeSpec::required("dataType", AttributeKind::Text),
        AttributeSpec::optional("position", AttributeKind::Int),
        AttributeSpec::optional("length", AttributeKind::Int),
        AttributeSpec::optional("isNullable", AttributeKind::Bool),
        AttributeSpec::optional("sortOrder", AttributeKind::Enum(SortOrder::SYMBOLS)),
    ],
    assemble: |header, attrs| RelationalColumn {
        is_primary_key: header.has_classification(PRIMARY_KEY_CLASSIFICATION),
        guid: header.guid,
        qualified_name: attrs.text(QUALIFIED_NAME),
        display_name: attrs.text(DISPLAY_NAME),
        data_type: attrs.text("dataType"),
        position: attrs.int("position"),
        length: attrs.int("length"),
        is_nullable: attrs.bool_or("isNullable", true),
        sort_order: attrs
            .symbol("sortOrder")
            .and_then(SortOrder::from_symbol)
            .unwrap_or_default(),
        classifications: header.classifications,
    },
};

static SCHEMA_MAPPING: MappingSpec<RelationalSchema> = MappingSpec {
    type_name: "RelationalSchema",
    attributes: &[
        AttributeSpec::optional(QUALIFIED_NAME, AttributeKind::Text),
        AttributeSpec::required(DISPLAY_NAME, AttributeKind::Text),
        AttributeSpec::optional(DESCRIPTION, AttributeKind::Text),
        AttributeSpec::optional(CREATE_TIME, AttributeKind::DateTime),
    ],
    assemble: |header, attrs| RelationalSchema {
        guid: header.guid,
        qualified_name: attrs.text(QUALIFIED_NAME),
        display_name: attrs.text(DISPLAY_NAME),
        description: attrs.optional_text(DESCRIPTION),
        create_time: attrs.datetime(CREATE_TIME),
        classifications: header.classifications,
    },
};

impl MappedBean for RelationalTable {
    fn mapping() -> &'static MappingSpec<Self> {
        &TABLE_MAPPING
    }
}

impl MappedBean for RelationalColumn {
    fn mapping() -> &'static MappingSpec<Self> {
        &COLUMN_MAPPING
    }
}

impl MappedBean for RelationalSchema {
    fn mapping() -> &'static MappingSpec<Self> {
        &SCHEMA_MAPPING
    }
}

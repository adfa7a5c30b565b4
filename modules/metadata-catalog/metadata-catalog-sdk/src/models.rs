//! Public models for the metadata catalog.
//!
//! `GenericEntity` and `PropertyValue` describe what the repository hands
//! over; they carry serde derives because repositories exchange them as JSON.
//! The bean types are transport-agnostic; REST DTOs live in the module crate.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptor of a metadata type exposed for search.
///
/// Fields are private: a descriptor never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    description: String,
    super_type_names: Vec<String>,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, super_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            super_type_names: super_types.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Direct super types, in declaration order.
    #[must_use]
    pub fn super_type_names(&self) -> &[String] {
        &self.super_type_names
    }
}

/// Symbolic enum value as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub ordinal: u32,
    pub symbolic_name: String,
}

/// Loosely-typed property value of a generic entity.
///
/// The JSON form is untagged: `null`, booleans, integers, floats and strings
/// map onto the obvious variants, an object `{ordinal, symbolicName}` is an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Enum(EnumValue),
}

impl PropertyValue {
    /// Short name of the stored representation, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Enum(_) => "enum",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<EnumValue> for PropertyValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

/// Reference to a classification attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassificationRef {
    pub name: String,
}

impl ClassificationRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A typed record as stored by the metadata repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericEntity {
    pub guid: String,
    pub type_name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    pub classifications: BTreeSet<ClassificationRef>,
}

impl GenericEntity {
    #[must_use]
    pub fn new(guid: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            type_name: type_name.into(),
            properties: BTreeMap::new(),
            classifications: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_classification(mut self, name: impl Into<String>) -> Self {
        self.classifications.insert(ClassificationRef::new(name));
        self
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    #[must_use]
    pub fn has_classification(&self, name: &str) -> bool {
        self.classifications.iter().any(|c| c.name == name)
    }

    /// Classification names in set order.
    #[must_use]
    pub fn classification_names(&self) -> Vec<String> {
        self.classifications.iter().map(|c| c.name.clone()).collect()
    }
}

/// Relational table bean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalTable {
    pub guid: String,
    pub qualified_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub create_time: Option<DateTime<Utc>>,
    pub is_deprecated: bool,
    pub classifications: Vec<String>,
}

/// Sort order of a relational column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Canonical symbols, in ordinal order.
    pub const SYMBOLS: &'static [&'static str] = &["UNSORTED", "ASCENDING", "DESCENDING"];

    /// Parses a canonical symbol, ignoring ASCII case.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.to_ascii_uppercase().as_str() {
            "UNSORTED" => Some(Self::Unsorted),
            "ASCENDING" => Some(Self::Ascending),
            "DESCENDING" => Some(Self::Descending),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsorted => "UNSORTED",
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
        }
    }
}

/// Relational column bean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalColumn {
    pub guid: String,
    pub qualified_name: String,
    pub display_name: String,
    pub data_type: String,
    pub position: i64,
    pub length: i64,
    pub is_nullable: bool,
    pub sort_order: SortOrder,
    pub is_primary_key: bool,
    pub classifications: Vec<String>,
}

/// Relational (database) schema bean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalSchema {
    pub guid: String,
    pub qualified_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub create_time: Option<DateTime<Utc>>,
    pub classifications: Vec<String>,
}

/// Paging parameters for listings. `page_size: None` means the module default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub start_from: usize,
    pub page_size: Option<usize>,
}

impl PageRequest {
    #[must_use]
    pub const fn new(start_from: usize, page_size: usize) -> Self {
        Self {
            start_from,
            page_size: Some(page_size),
        }
    }
}

/// One page of converted beans together with the effective paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPage<T> {
    pub elements: Vec<T>,
    pub start_from: usize,
    pub page_size: usize,
}

//! Declarative attribute mapping: attribute specs, strict coercion of
//! repository property values, and the validated attribute set beans are
//! assembled from.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use metadata_catalog_sdk::{GenericEntity, PropertyValue};

use super::error::DomainError;

/// Target representation of a bean attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Text,
    Int,
    Bool,
    DateTime,
    /// One of the listed canonical symbols.
    Enum(&'static [&'static str]),
}

impl AttributeKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::DateTime => "date",
            Self::Enum(_) => "enum",
        }
    }
}

/// One row of a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
}

impl AttributeSpec {
    #[must_use]
    pub const fn required(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A property value after coercion to its declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Int(i64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Enum(&'static str),
}

/// Coerces a raw property value to `kind`.
///
/// `Ok(None)` means the value is null and counts as absent.
///
/// # Errors
/// Returns a human-readable reason when the value cannot represent `kind`.
pub fn coerce(value: &PropertyValue, kind: AttributeKind) -> Result<Option<AttributeValue>, String> {
    if value.is_null() {
        return Ok(None);
    }

    let coerced = match (kind, value) {
        (AttributeKind::Text, PropertyValue::Text(s)) => AttributeValue::Text(s.clone()),
        (AttributeKind::Text, PropertyValue::Enum(e)) => {
            AttributeValue::Text(e.symbolic_name.clone())
        }

        (AttributeKind::Int, PropertyValue::Int(i)) => AttributeValue::Int(*i),
        (AttributeKind::Int, PropertyValue::Text(s)) => s
            .parse::<i64>()
            .map(AttributeValue::Int)
            .map_err(|_| format!("'{s}' is not an integer"))?,

        (AttributeKind::Bool, PropertyValue::Bool(b)) => AttributeValue::Bool(*b),
        (AttributeKind::Bool, PropertyValue::Text(s)) => {
            if s.eq_ignore_ascii_case("true") {
                AttributeValue::Bool(true)
            } else if s.eq_ignore_ascii_case("false") {
                AttributeValue::Bool(false)
            } else {
                return Err(format!("'{s}' is not a boolean"));
            }
        }

        (AttributeKind::DateTime, PropertyValue::Int(millis)) => {
            DateTime::<Utc>::from_timestamp_millis(*millis)
                .map(AttributeValue::DateTime)
                .ok_or_else(|| format!("{millis} is out of the supported date range"))?
        }
        (AttributeKind::DateTime, PropertyValue::Text(s)) => DateTime::parse_from_rfc3339(s)
            .map(|d| AttributeValue::DateTime(d.with_timezone(&Utc)))
            .map_err(|e| format!("'{s}' is not an RFC 3339 date: {e}"))?,

        (AttributeKind::Enum(symbols), PropertyValue::Enum(e)) => {
            AttributeValue::Enum(match_symbol(symbols, &e.symbolic_name)?)
        }
        (AttributeKind::Enum(symbols), PropertyValue::Text(s)) => {
            AttributeValue::Enum(match_symbol(symbols, s)?)
        }

        (kind, other) => {
            return Err(format!(
                "expected {} but found {}",
                kind.label(),
                other.kind_name()
            ));
        }
    };

    Ok(Some(coerced))
}

fn match_symbol(symbols: &'static [&'static str], candidate: &str) -> Result<&'static str, String> {
    symbols
        .iter()
        .copied()
        .find(|symbol| symbol.eq_ignore_ascii_case(candidate))
        .ok_or_else(|| format!("'{candidate}' is not one of {}", symbols.join(", ")))
}

/// Validated attributes of one entity, keyed by attribute name.
///
/// Accessors remove the value they return and fall back to the attribute's
/// default when the source had no value.
#[derive(Debug, Default)]
pub struct MappedAttributes {
    values: HashMap<&'static str, AttributeValue>,
}

impl MappedAttributes {
    /// Text value, or `""`.
    pub fn text(&mut self, name: &str) -> String {
        self.optional_text(name).unwrap_or_default()
    }

    pub fn optional_text(&mut self, name: &str) -> Option<String> {
        match self.values.remove(name) {
            Some(AttributeValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Integer value, or `0`.
    pub fn int(&mut self, name: &str) -> i64 {
        match self.values.remove(name) {
            Some(AttributeValue::Int(i)) => i,
            _ => 0,
        }
    }

    pub fn bool_or(&mut self, name: &str, default: bool) -> bool {
        match self.values.remove(name) {
            Some(AttributeValue::Bool(b)) => b,
            _ => default,
        }
    }

    pub fn datetime(&mut self, name: &str) -> Option<DateTime<Utc>> {
        match self.values.remove(name) {
            Some(AttributeValue::DateTime(d)) => Some(d),
            _ => None,
        }
    }

    /// Canonical enum symbol.
    pub fn symbol(&mut self, name: &str) -> Option<&'static str> {
        match self.values.remove(name) {
            Some(AttributeValue::Enum(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Looks up, coerces, and validates every declared attribute of `entity`.
///
/// Properties not named in `specs` are ignored.
///
/// # Errors
/// `MissingAttribute` for an absent or null required attribute,
/// `InvalidAttribute` when coercion fails.
pub fn map_attributes(
    entity: &GenericEntity,
    specs: &[AttributeSpec],
) -> Result<MappedAttributes, DomainError> {
    let mut mapped = MappedAttributes::default();

    for spec in specs {
        let coerced = match entity.property(spec.name) {
            Some(value) => coerce(value, spec.kind)
                .map_err(|reason| DomainError::invalid_attribute(&entity.guid, spec.name, reason))?,
            None => None,
        };

        match coerced {
            Some(value) => {
                mapped.values.insert(spec.name, value);
            }
            None if spec.required => {
                return Err(DomainError::missing_attribute(&entity.guid, spec.name));
            }
            None => {}
        }
    }

    Ok(mapped)
}

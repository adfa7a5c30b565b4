//! Configuration for the metadata catalog module.

use metadata_catalog_sdk::{GenericEntity, TypeDescriptor};
use serde::{Deserialize, Serialize};

/// Metadata catalog module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataCatalogConfig {
    /// Supported search types, in the order they are listed.
    /// Empty means the built-in relational catalog.
    pub types: Vec<TypeDescriptorConfig>,

    /// Entities loaded into the in-memory repository at startup.
    pub entities: Vec<GenericEntity>,

    /// Page size used when a listing request does not name one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Largest page size a caller may request.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Users allowed to call the REST API. `None` allows everybody.
    pub authorized_users: Option<Vec<String>>,

    /// Answer with the envelope's `relatedHTTPCode` as HTTP status.
    /// When `false` every envelope is sent with `200 OK`.
    #[serde(default = "default_mirror_http_status")]
    pub mirror_http_status: bool,
}

/// A type descriptor as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDescriptorConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub super_types: Vec<String>,
}

impl From<&TypeDescriptorConfig> for TypeDescriptor {
    fn from(cfg: &TypeDescriptorConfig) -> Self {
        TypeDescriptor::new(
            cfg.name.clone(),
            cfg.description.clone(),
            cfg.super_types.iter().cloned(),
        )
    }
}

fn default_page_size() -> usize {
    25
}

fn default_max_page_size() -> usize {
    500
}

fn default_mirror_http_status() -> bool {
    true
}

impl Default for MetadataCatalogConfig {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            entities: Vec::new(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            authorized_users: None,
            mirror_http_status: default_mirror_http_status(),
        }
    }
}

impl MetadataCatalogConfig {
    /// Checks the paging limits.
    ///
    /// # Errors
    /// Returns an error if a page size is zero or the default exceeds the maximum.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.max_page_size > 0, "max_page_size must be positive");
        anyhow::ensure!(
            self.default_page_size > 0,
            "default_page_size must be positive"
        );
        anyhow::ensure!(
            self.default_page_size <= self.max_page_size,
            "default_page_size ({}) must not exceed max_page_size ({})",
            self.default_page_size,
            self.max_page_size
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata_catalog_sdk::PropertyValue;

    #[test]
    fn test_config_default() {
        let config = MetadataCatalogConfig::default();
        assert!(config.types.is_empty());
        assert!(config.entities.is_empty());
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_page_size, 500);
        assert!(config.authorized_users.is_none());
        assert!(config.mirror_http_status);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_yaml() {
        let yaml = r#"
types:
  - name: Table
    description: "A table"
  - name: Column
    super_types: [Attribute]
entities:
  - guid: g1
    typeName: Table
    properties:
      displayName: orders
      rowCount: 12
default_page_size: 10
authorized_users: [alice]
mirror_http_status: false
"#;
        let config: MetadataCatalogConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.types.len(), 2);
        assert_eq!(config.types[1].super_types, vec!["Attribute".to_owned()]);
        assert_eq!(config.entities[0].type_name, "Table");
        assert_eq!(
            config.entities[0].property("displayName"),
            Some(&PropertyValue::from("orders"))
        );
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 500);
        assert_eq!(config.authorized_users, Some(vec!["alice".to_owned()]));
        assert!(!config.mirror_http_status);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = "page_limit: 3\n";
        let result: Result<MetadataCatalogConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_page_sizes() {
        let config = MetadataCatalogConfig {
            default_page_size: 50,
            max_page_size: 10,
            ..MetadataCatalogConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MetadataCatalogConfig {
            default_page_size: 0,
            ..MetadataCatalogConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_type_descriptor_from_config() {
        let cfg = TypeDescriptorConfig {
            name: "RelationalView".to_owned(),
            description: "A view".to_owned(),
            super_types: vec!["RelationalTable".to_owned()],
        };
        let descriptor = TypeDescriptor::from(&cfg);
        assert_eq!(descriptor.name(), "RelationalView");
        assert_eq!(descriptor.super_type_names(), ["RelationalTable".to_owned()]);
    }
}

//! Catalog of the metadata types exposed for search.
//!
//! The registry is built once at startup and never mutated afterwards, so it
//! is shared between request handlers through `Arc` without any locking.
//! Descriptors are listed in declaration order.

use std::collections::{HashMap, HashSet, VecDeque};

use metadata_catalog_sdk::TypeDescriptor;
use thiserror::Error;

/// Errors raised while building the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("type descriptor #{position} has an empty name")]
    EmptyName { position: usize },

    #[error("type '{0}' is declared more than once")]
    DuplicateType(String),
}

/// Immutable, ordered catalog of [`TypeDescriptor`]s.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    descriptors: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

const BUILTIN_TYPES: &[(&str, &str, &[&str])] = &[
    (
        "RelationalSchema",
        "Schema of a relational database that groups tables and views.",
        &["DeployedDatabaseSchema"],
    ),
    (
        "RelationalTable",
        "Table of a relational database schema.",
        &["SchemaAttribute"],
    ),
    (
        "RelationalView",
        "View defined over one or more relational tables.",
        &["RelationalTable"],
    ),
    (
        "RelationalColumn",
        "Column of a relational table or view.",
        &["SchemaAttribute"],
    ),
];

impl TypeRegistry {
    /// Builds a registry from descriptors, keeping their order.
    ///
    /// # Errors
    /// Returns `CatalogError` if a name is empty or declared twice.
    pub fn new(descriptors: impl IntoIterator<Item = TypeDescriptor>) -> Result<Self, CatalogError> {
        let descriptors: Vec<TypeDescriptor> = descriptors.into_iter().collect();
        let mut index = HashMap::with_capacity(descriptors.len());

        for (position, descriptor) in descriptors.iter().enumerate() {
            if descriptor.name().trim().is_empty() {
                return Err(CatalogError::EmptyName { position });
            }
            if index.insert(descriptor.name().to_owned(), position).is_some() {
                return Err(CatalogError::DuplicateType(descriptor.name().to_owned()));
            }
        }

        Ok(Self { descriptors, index })
    }

    /// The built-in relational catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let descriptors: Vec<TypeDescriptor> = BUILTIN_TYPES
            .iter()
            .map(|(name, description, supers)| {
                TypeDescriptor::new(*name, *description, supers.iter().copied())
            })
            .collect();
        let index = descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name().to_owned(), i))
            .collect();
        Self { descriptors, index }
    }

    /// All descriptors in declaration order.
    #[must_use]
    pub fn list_supported_types(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns `true` if `actual` is `target` or inherits from it, following
    /// super types transitively through registered descriptors.
    #[must_use]
    pub fn is_assignable(&self, actual: &str, target: &str) -> bool {
        if actual == target {
            return true;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([actual]);

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            let Some(descriptor) = self.get(current) else {
                continue;
            };
            for parent in descriptor.super_type_names() {
                if parent == target {
                    return true;
                }
                queue.push_back(parent.as_str());
            }
        }

        false
    }

    /// `target` followed by every registered type assignable to it, in
    /// declaration order.
    #[must_use]
    pub fn assignable_type_names(&self, target: &str) -> Vec<String> {
        let mut names = vec![target.to_owned()];
        names.extend(
            self.descriptors
                .iter()
                .map(TypeDescriptor::name)
                .filter(|name| *name != target && self.is_assignable(name, target))
                .map(str::to_owned),
        );
        names
    }
}

pub mod beans;
pub mod converter;
pub mod error;
pub mod mapping;
pub mod service;
pub mod type_registry;

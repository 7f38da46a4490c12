//! Infrastructure layer: concrete catalog gateways and configuration loading.

pub mod config_service;
pub mod firestore;
pub mod memory_catalog_repository;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::firestore::FirestoreCatalogRepository;
pub use crate::memory_catalog_repository::InMemoryCatalogRepository;

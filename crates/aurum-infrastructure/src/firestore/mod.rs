//! Firestore-backed catalog storage.

mod document;
mod repository;

pub use repository::FirestoreCatalogRepository;

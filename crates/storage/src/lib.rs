#![forbid(unsafe_code)]

pub mod catalog;
pub mod http;
pub mod repository;

pub use catalog::{CatalogError, CourseCatalog, StaticCatalog};
pub use http::{RemoteConfig, RemoteProgressRepository};
pub use repository::{
    InMemoryProgressRepository, ProgressQuery, ProgressRepository, Storage, StorageError,
};

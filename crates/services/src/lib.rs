#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod error;
pub mod progress_service;
pub mod query_cache;

pub use gateway_core::Clock;

pub use app_services::AppServices;
pub use auth::{AuthProvider, LocalAuthProvider, NewAccount};
pub use error::{AuthError, ProgressError};
pub use progress_service::{DEFAULT_CACHE_LIFETIME_SECS, Fetch, ProgressService};
pub use query_cache::QueryCache;

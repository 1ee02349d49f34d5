use async_trait::async_trait;
use gateway_core::model::{CourseId, UserCourse, UserId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::catalog::{CourseCatalog, StaticCatalog};
use crate::http::{RemoteConfig, RemoteProgressRepository};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("unexpected status {0}")]
    HttpStatus(u16),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The two progress reads the front end performs.
///
/// The rendered key doubles as the request path on the progress API and as
/// the cache key in the services layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProgressQuery {
    AllForUser(UserId),
    Single(UserId, CourseId),
}

impl ProgressQuery {
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::AllForUser(user) | Self::Single(user, _) => user,
        }
    }

    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProgressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllForUser(user) => write!(f, "/api/user-courses?userId={user}"),
            Self::Single(user, course) => {
                write!(f, "/api/user-courses/{course}?userId={user}")
            }
        }
    }
}

/// Read-only contract for per-user progress records.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Every progress record assigned to a user.
    ///
    /// An empty list means no courses are assigned; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached or replies
    /// with something unreadable.
    async fn list_user_courses(&self, user_id: &UserId) -> Result<Vec<UserCourse>, StorageError>;

    /// The record for one `(user, course)` pair, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for transport or decoding failures. A missing
    /// record is `Ok(None)`.
    async fn get_user_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<UserCourse>, StorageError>;
}

/// Simple in-memory repository implementation for testing and offline use.
#[derive(Clone, Default)]
pub struct InMemoryProgressRepository {
    records: Arc<Mutex<HashMap<(UserId, CourseId), UserCourse>>>,
}

impl InMemoryProgressRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stand-in for the backend's write side: seeds or replaces a record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert(&self, record: UserCourse) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert((record.user_id.clone(), record.course_id.clone()), record);
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn list_user_courses(&self, user_id: &UserId) -> Result<Vec<UserCourse>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut records: Vec<UserCourse> = guard
            .values()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        Ok(records)
    }

    async fn get_user_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<UserCourse>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&(user_id.clone(), course_id.clone())).cloned())
    }
}

/// Aggregates the catalog and the progress source behind trait objects for
/// easy swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CourseCatalog>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    /// Built-in catalog with an empty in-memory progress store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_progress(Arc::new(InMemoryProgressRepository::new()))
    }

    /// Built-in catalog with the given progress source.
    #[must_use]
    pub fn with_progress(progress: Arc<dyn ProgressRepository>) -> Self {
        let catalog: Arc<dyn CourseCatalog> = StaticCatalog::builtin();
        Self { catalog, progress }
    }

    /// Built-in catalog with progress served by the remote API.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the API URL is invalid.
    pub fn remote(config: &RemoteConfig) -> Result<Self, StorageError> {
        let progress = RemoteProgressRepository::new(config)?;
        Ok(Self::with_progress(Arc::new(progress)))
    }
}

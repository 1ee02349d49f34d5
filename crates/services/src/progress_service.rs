use std::sync::Arc;

use chrono::Duration;
use gateway_core::model::{CourseId, UserCourse, UserId};
use storage::{ProgressQuery, ProgressRepository};

use crate::error::ProgressError;
use crate::query_cache::QueryCache;
use crate::Clock;

/// Default freshness window for cached progress reads.
pub const DEFAULT_CACHE_LIFETIME_SECS: i64 = 300;

/// Outcome of a guarded progress read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch<T> {
    /// A key was missing, so no request was issued.
    Skipped,
    Loaded(T),
}

impl<T> Fetch<T> {
    /// The loaded value, if the read ran.
    pub fn loaded(self) -> Option<T> {
        match self {
            Self::Skipped => None,
            Self::Loaded(value) => Some(value),
        }
    }
}

/// Read path for progress records: guards missing keys and caches results
/// by query key.
pub struct ProgressService {
    clock: Clock,
    repo: Arc<dyn ProgressRepository>,
    lists: QueryCache<Vec<UserCourse>>,
    singles: QueryCache<Option<UserCourse>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn ProgressRepository>) -> Self {
        Self::with_cache_lifetime(clock, repo, Duration::seconds(DEFAULT_CACHE_LIFETIME_SECS))
    }

    #[must_use]
    pub fn with_cache_lifetime(
        clock: Clock,
        repo: Arc<dyn ProgressRepository>,
        lifetime: Duration,
    ) -> Self {
        Self {
            clock,
            repo,
            lists: QueryCache::new(lifetime),
            singles: QueryCache::new(lifetime),
        }
    }

    /// All progress records for the signed-in user.
    ///
    /// Skipped when there is no user.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` when the repository read fails.
    pub async fn user_courses(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<Fetch<Vec<UserCourse>>, ProgressError> {
        let Some(user_id) = user_id else {
            return Ok(Fetch::Skipped);
        };

        let key = ProgressQuery::AllForUser(user_id.clone()).key();
        if let Some(hit) = self.lists.get_fresh(&key, self.clock.now()) {
            tracing::debug!(%key, "progress cache hit");
            return Ok(Fetch::Loaded(hit));
        }

        tracing::debug!(%key, "progress cache miss");
        let records = self.repo.list_user_courses(user_id).await.inspect_err(|err| {
            tracing::warn!(%key, error = %err, "progress list fetch failed");
        })?;
        self.lists.insert(key, records.clone(), self.clock.now());
        Ok(Fetch::Loaded(records))
    }

    /// The signed-in user's record for one course.
    ///
    /// Skipped when either the user or the course id is missing.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` when the repository read fails.
    pub async fn user_course(
        &self,
        user_id: Option<&UserId>,
        course_id: Option<&CourseId>,
    ) -> Result<Fetch<Option<UserCourse>>, ProgressError> {
        let (Some(user_id), Some(course_id)) = (user_id, course_id) else {
            return Ok(Fetch::Skipped);
        };

        let key = ProgressQuery::Single(user_id.clone(), course_id.clone()).key();
        if let Some(hit) = self.singles.get_fresh(&key, self.clock.now()) {
            tracing::debug!(%key, "progress cache hit");
            return Ok(Fetch::Loaded(hit));
        }

        tracing::debug!(%key, "progress cache miss");
        let record = self
            .repo
            .get_user_course(user_id, course_id)
            .await
            .inspect_err(|err| {
                tracing::warn!(%key, error = %err, "progress record fetch failed");
            })?;
        self.singles.insert(key, record.clone(), self.clock.now());
        Ok(Fetch::Loaded(record))
    }

    /// Forget every cached read belonging to `user_id`.
    pub fn invalidate_user(&self, user_id: &UserId) {
        let suffix = format!("?userId={user_id}");
        self.lists.invalidate_where(|key| key.ends_with(&suffix));
        self.singles.invalidate_where(|key| key.ends_with(&suffix));
    }

    pub fn clear(&self) {
        self.lists.clear();
        self.singles.clear();
    }
}

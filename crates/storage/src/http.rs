//! Progress records served by the remote `user-courses` API.

use std::time::Duration;

use async_trait::async_trait;
use gateway_core::model::{CourseId, UserCourse, UserId};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::repository::{ProgressQuery, ProgressRepository, StorageError};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone)]
pub struct RemoteProgressRepository {
    client: Client,
    base_url: Url,
}

impl RemoteProgressRepository {
    /// Build a repository against `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the base URL is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &RemoteConfig) -> Result<Self, StorageError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| StorageError::Connection(format!("invalid api url: {e}")))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Absolute request URL for a query.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the base URL cannot carry a path.
    pub fn request_url(&self, query: &ProgressQuery) -> Result<Url, StorageError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| StorageError::Connection("api url cannot be a base".into()))?;
            segments.pop_if_empty().extend(["api", "user-courses"]);
            if let ProgressQuery::Single(_, course) = query {
                segments.push(course.as_str());
            }
        }
        url.query_pairs_mut()
            .append_pair("userId", query.user_id().as_str());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        query: &ProgressQuery,
    ) -> Result<Option<T>, StorageError> {
        let url = self.request_url(query)?;
        tracing::debug!(%url, "fetching progress");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StorageError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        decode_body(&body)
    }
}

/// Decodes a JSON body where `null` means "no record".
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, StorageError> {
    serde_json::from_slice::<Option<T>>(body).map_err(|e| StorageError::Serialization(e.to_string()))
}

#[async_trait]
impl ProgressRepository for RemoteProgressRepository {
    async fn list_user_courses(&self, user_id: &UserId) -> Result<Vec<UserCourse>, StorageError> {
        let query = ProgressQuery::AllForUser(user_id.clone());
        self.get_json::<Vec<UserCourse>>(&query)
            .await?
            .ok_or(StorageError::NotFound)
    }

    async fn get_user_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<UserCourse>, StorageError> {
        let query = ProgressQuery::Single(user_id.clone(), course_id.clone());
        self.get_json::<UserCourse>(&query).await
    }
}

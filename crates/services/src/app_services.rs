use std::sync::Arc;

use chrono::Duration;
use storage::{CourseCatalog, Storage};

use crate::auth::AuthProvider;
use crate::progress_service::{DEFAULT_CACHE_LIFETIME_SECS, ProgressService};
use crate::Clock;

/// Assembles the app-facing services from a storage bundle and an auth provider.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CourseCatalog>,
    progress: Arc<ProgressService>,
    auth: Arc<dyn AuthProvider>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, auth: Arc<dyn AuthProvider>, clock: Clock) -> Self {
        Self::with_cache_lifetime(
            storage,
            auth,
            clock,
            Duration::seconds(DEFAULT_CACHE_LIFETIME_SECS),
        )
    }

    #[must_use]
    pub fn with_cache_lifetime(
        storage: &Storage,
        auth: Arc<dyn AuthProvider>,
        clock: Clock,
        cache_lifetime: Duration,
    ) -> Self {
        let progress = Arc::new(ProgressService::with_cache_lifetime(
            clock,
            Arc::clone(&storage.progress),
            cache_lifetime,
        ));

        Self {
            catalog: Arc::clone(&storage.catalog),
            progress,
            auth,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<dyn CourseCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<dyn AuthProvider> {
        Arc::clone(&self.auth)
    }
}

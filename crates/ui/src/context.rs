use std::sync::Arc;

use dioxus::prelude::*;
use gateway_core::model::{AuthUser, UserId};
use services::{AuthProvider, ProgressService};
use storage::CourseCatalog;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<dyn CourseCatalog>;
    fn progress(&self) -> Arc<ProgressService>;
    fn auth(&self) -> Arc<dyn AuthProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<dyn CourseCatalog>,
    progress: Arc<ProgressService>,
    auth: Arc<dyn AuthProvider>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            auth: app.auth(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive view of the signed-in user.
///
/// Seeded from the auth provider once per app root; sign-in, registration and
/// sign-out update it so guards and the navbar re-render.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    user: Signal<Option<AuthUser>>,
}

impl SessionState {
    /// Current user; subscribes the calling scope to changes.
    #[must_use]
    pub fn user(&self) -> Option<AuthUser> {
        self.user.cloned()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user.read().as_ref().map(|user| user.id.clone())
    }

    pub fn set_user(&mut self, user: Option<AuthUser>) {
        self.user.set(user);
    }
}

/// Provide a `SessionState` for the current scope and its children.
pub fn use_session_provider(ctx: &AppContext) -> SessionState {
    let auth = ctx.auth();
    use_context_provider(move || SessionState {
        user: Signal::new(auth.current_user()),
    })
}

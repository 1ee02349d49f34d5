use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gateway_core::model::{AuthUser, UserId};

use crate::error::AuthError;

/// Registration form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

/// Session capability handed to the UI: who is signed in, and how to change it.
///
/// The real implementation belongs to the hosted auth backend; the UI only
/// depends on this trait.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<AuthUser>;

    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the email/password pair
    /// is not recognised.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` or `AuthError::InvalidInput`.
    async fn register(&self, account: NewAccount) -> Result<AuthUser, AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError::Unavailable` if the backend cannot be reached.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

struct Account {
    user: AuthUser,
    password: String,
}

#[derive(Default)]
struct LocalState {
    accounts: HashMap<String, Account>,
    current: Option<AuthUser>,
    next_id: u64,
}

/// Process-local auth provider for offline mode and tests.
///
/// Accounts live in memory for the lifetime of the process.
#[derive(Default)]
pub struct LocalAuthProvider {
    state: Mutex<LocalState>,
}

impl LocalAuthProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account up front (demo data, fixtures).
    #[must_use]
    pub fn with_account(self, user: AuthUser, password: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.accounts.insert(
                normalize_email(&user.email),
                Account {
                    user,
                    password: password.into(),
                },
            );
        }
        self
    }

    /// Start with `user` already signed in.
    #[must_use]
    pub fn signed_in_as(self, user: AuthUser) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.current = Some(user);
        }
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, LocalState>, AuthError> {
        self.state
            .lock()
            .map_err(|e| AuthError::Unavailable(e.to_string()))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn current_user(&self) -> Option<AuthUser> {
        self.state.lock().ok().and_then(|state| state.current.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let mut state = self.lock()?;
        let user = state
            .accounts
            .get(&normalize_email(email))
            .filter(|account| account.password == password)
            .map(|account| account.user.clone())
            .ok_or(AuthError::InvalidCredentials)?;
        state.current = Some(user.clone());
        tracing::info!(user = %user.id, "signed in");
        Ok(user)
    }

    async fn register(&self, account: NewAccount) -> Result<AuthUser, AuthError> {
        let email = normalize_email(&account.email);
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::InvalidInput("enter a valid email address"));
        }
        if account.password.len() < 6 {
            return Err(AuthError::InvalidInput(
                "password must be at least 6 characters",
            ));
        }

        let mut state = self.lock()?;
        if state.accounts.contains_key(&email) {
            return Err(AuthError::EmailTaken);
        }

        state.next_id += 1;
        let user = AuthUser::new(
            UserId::new(format!("local-{}", state.next_id)),
            email.clone(),
            account.display_name.trim(),
        );
        state.accounts.insert(
            email,
            Account {
                user: user.clone(),
                password: account.password,
            },
        );
        state.current = Some(user.clone());
        tracing::info!(user = %user.id, "registered");
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let mut state = self.lock()?;
        if let Some(user) = state.current.take() {
            tracing::info!(user = %user.id, "signed out");
        }
        Ok(())
    }
}

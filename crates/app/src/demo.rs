use gateway_core::model::{AuthUser, CourseId, UserCourse, UserId};
use services::LocalAuthProvider;
use storage::{InMemoryProgressRepository, StorageError};

pub const DEMO_EMAIL: &str = "demo@share.test";
pub const DEMO_PASSWORD: &str = "share-demo";

pub fn demo_user() -> AuthUser {
    AuthUser::new(UserId::new("demo-staff"), DEMO_EMAIL, "Demo Staff")
}

/// Local auth with the demo account registered but nobody signed in.
pub fn demo_auth() -> LocalAuthProvider {
    LocalAuthProvider::new().with_account(demo_user(), DEMO_PASSWORD)
}

/// In-memory progress for the demo account: orientation started, one lesson done.
pub fn demo_progress() -> Result<InMemoryProgressRepository, StorageError> {
    let repo = InMemoryProgressRepository::new();
    repo.insert(
        UserCourse::new(demo_user().id, CourseId::new("orientation_common"))
            .with_lessons(["l1"])
            .with_progress(25),
    )?;
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::AuthProvider;
    use storage::ProgressRepository;

    #[tokio::test]
    async fn demo_progress_belongs_to_demo_user() {
        let repo = demo_progress().unwrap();
        let records = repo.list_user_courses(&demo_user().id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].has_completed_lesson(&"l1".into()));
    }

    #[tokio::test]
    async fn demo_account_can_sign_in() {
        let auth = demo_auth();
        assert!(auth.current_user().is_none());
        let user = auth.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(user, demo_user());
    }
}

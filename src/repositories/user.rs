use crate::domain::{User, UserRole};
use crate::repositories::forward_repository;
use store_object::{DbContext, GenericRepository, Repository, StoreError};

/// Users, looked up by email
#[derive(Debug, Clone)]
pub struct UserRepository {
    repo: GenericRepository<User>,
}

forward_repository!(UserRepository, User);

/// Emails are compared trimmed and lowercased
fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

impl UserRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<User> {
        &self.repo
    }

    /// Whether any user, active or not, holds this email
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        self.repo
            .exists_by_column("email", normalize_email(email), true)
            .await
    }

    /// The active user with this email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.repo
            .find_one_by_column("email", normalize_email(email), false)
            .await
    }

    /// Stage a new user with the named role.
    ///
    /// Fails with `InvalidOperation` when the role name is unknown or the
    /// email is already taken, either stored or staged in this unit of work.
    pub async fn register(&self, mut user: User, role_name: &str) -> Result<User, StoreError> {
        let role: UserRole = role_name
            .parse()
            .map_err(|message: String| StoreError::invalid_operation("User", message))?;

        user.email = normalize_email(&user.email);
        let taken = self.exists_by_email(&user.email).await?
            || self.repo.is_staged_with("email", user.email.clone()).await?;
        if taken {
            return Err(StoreError::invalid_operation(
                "User",
                format!("email '{}' is already registered", user.email),
            ));
        }

        user.role = role;
        tracing::debug!(email = %user.email, role = %role, "Registering user");
        self.repo.add(user).await
    }
}

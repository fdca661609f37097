//! Auth service: user registration and username lookup

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::user::{NewUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a user; the unique username is checked before the write.
    /// The password is stored as an argon2 hash.
    pub async fn register(&self, user: NewUser) -> AppResult<User> {
        if self
            .repository
            .users
            .find_by_username(&user.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A user with this username already exists.".to_string(),
            ));
        }

        let password_hash = Self::hash_password(&user.password)?;
        self.repository.users.create(&user.username, &password_hash).await
    }

    /// Username lookup exposed to the auth service's caller
    pub async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.repository
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User not found with username: {}", username))
            })
    }

    /// Hash a password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }
}

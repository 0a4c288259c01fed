use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use types::{ADMIN_ROLE, User};
use uuid::Uuid;

use crate::password;

/// A user account row, including the password hash. Only the `types::User`
/// part ever leaves the server.
#[derive(Debug, sqlx::FromRow)]
pub struct StoredUser {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub role: String,
    password_hash: String,
}

impl StoredUser {
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        display_name: &str,
        role: &str,
        password: &SecretString,
    ) -> Result<Self> {
        let user = Self {
            id: Uuid::now_v7(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            role: role.to_string(),
            password_hash: password::hash(password.expose_secret())?,
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, username, display_name, role, password_hash)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.display_name)
        .bind(&user.role)
        .bind(&user.password_hash)
        .execute(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>(
            r#"
            SELECT id, username, display_name, role, password_hash
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Create the admin account from configuration if it does not exist yet.
    pub async fn seed_admin(
        pool: &SqlitePool,
        username: &str,
        password: &SecretString,
    ) -> Result<()> {
        if Self::find_by_username(pool, username).await?.is_some() {
            return Ok(());
        }

        tracing::info!(username, "seeding admin account");
        Self::create(pool, username, "Administrator", ADMIN_ROLE, password).await?;
        Ok(())
    }

    pub fn verify_password(&self, password: &str) -> bool {
        password::verify(password, &self.password_hash)
    }

    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            role: self.role,
        }
    }
}

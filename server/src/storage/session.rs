use anyhow::{Context, Result, bail};
use jiff::{SignedDuration, Timestamp};
use secrecy::SecretString;
use sqlx::SqlitePool;
use types::User;
use uuid::Uuid;

use crate::token::SignedTokenExt;

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    user_snapshot: String,
}

/// A server-side session. The id is a UUIDv7, so it doubles as the session's
/// creation time. The user record is snapshotted at login.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        let id = Uuid::now_v7();

        Self { id, user }
    }

    pub async fn create(pool: &SqlitePool, user: User) -> Result<Self> {
        let session = Self::new(user);
        session.insert(pool).await?;
        Ok(session)
    }

    pub async fn find(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_snapshot
            FROM sessions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self {
                id: row.id,
                user: serde_json::from_str(&row.user_snapshot)?,
            })),
            None => Ok(None),
        }
    }

    /// Find a session by signed token (cookie value). A token that fails
    /// signature verification reads as no session.
    pub async fn find_token(
        pool: &SqlitePool,
        token: &str,
        secret: &SecretString,
    ) -> Result<Option<Self>> {
        let Ok(id) = Uuid::from_token(token, secret) else {
            return Ok(None);
        };
        Self::find(pool, id).await
    }

    /// Resolve a cookie token to a live session. An expired session is
    /// deleted on first sight and reads as an error, i.e. logged out.
    pub async fn resolve(
        pool: &SqlitePool,
        token: &str,
        secret: &SecretString,
        ttl_hours: u64,
    ) -> Result<Self> {
        let session = Self::find_token(pool, token, secret)
            .await?
            .context("no session for token")?;

        if session.is_expired(ttl_hours) {
            session.delete(pool).await?;
            bail!("session expired");
        }

        Ok(session)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }

    pub fn as_token(&self, secret: &SecretString) -> Result<String> {
        self.id.as_token(secret)
    }

    pub fn created_at(&self) -> Timestamp {
        self.id.jiff_timestamp()
    }

    pub fn is_expired(&self, ttl_hours: u64) -> bool {
        let age = Timestamp::now().duration_since(self.created_at());
        age > SignedDuration::from_secs(ttl_hours as i64 * 3600)
    }

    pub async fn insert(&self, pool: &SqlitePool) -> Result<()> {
        let user_snapshot = serde_json::to_string(&self.user)?;

        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_snapshot)
            VALUES (?, ?)
            "#,
        )
        .bind(self.id)
        .bind(user_snapshot)
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE id = ?
            "#,
        )
        .bind(self.id)
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn delete_token(pool: &SqlitePool, token: &str, secret: &SecretString) -> Result<()> {
        if let Some(session) = Self::find_token(pool, token, secret).await? {
            session.delete(pool).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_pool;

    fn field_rep() -> User {
        User {
            id: Uuid::now_v7(),
            username: "rep1".into(),
            display_name: "Rep One".into(),
            role: "field_rep".into(),
        }
    }

    fn secret() -> SecretString {
        "test-signing-secret".into()
    }

    #[tokio::test]
    async fn create_then_find_by_token() {
        let pool = test_pool().await;
        let session = Session::create(&pool, field_rep()).await.unwrap();
        let token = session.as_token(&secret()).unwrap();

        let found = Session::find_token(&pool, &token, &secret())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user(), session.user());
    }

    #[tokio::test]
    async fn bad_token_reads_as_no_session() {
        let pool = test_pool().await;
        Session::create(&pool, field_rep()).await.unwrap();

        let found = Session::find_token(&pool, "garbage", &secret()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn delete_token_removes_the_session() {
        let pool = test_pool().await;
        let session = Session::create(&pool, field_rep()).await.unwrap();
        let token = session.as_token(&secret()).unwrap();

        Session::delete_token(&pool, &token, &secret()).await.unwrap();
        assert!(Session::find(&pool, session.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn resolve_returns_a_live_session() {
        let pool = test_pool().await;
        let session = Session::create(&pool, field_rep()).await.unwrap();
        let token = session.as_token(&secret()).unwrap();

        let resolved = Session::resolve(&pool, &token, &secret(), 1).await.unwrap();
        assert_eq!(resolved.user(), session.user());
    }

    #[tokio::test]
    async fn resolve_deletes_an_expired_session_and_reads_as_logged_out() {
        let pool = test_pool().await;

        let two_hours_ago = Timestamp::now().as_second() - 2 * 3600;
        let id = Uuid::new_v7(uuid::Timestamp::from_unix(
            uuid::NoContext,
            two_hours_ago as u64,
            0,
        ));
        let session = Session {
            id,
            user: field_rep(),
        };
        session.insert(&pool).await.unwrap();
        let token = session.as_token(&secret()).unwrap();

        assert!(Session::resolve(&pool, &token, &secret(), 1).await.is_err());

        // Deleted on first sight: the row is gone.
        assert!(Session::find(&pool, id).await.unwrap().is_none());
    }

    #[test]
    fn fresh_session_is_not_expired() {
        let session = Session::new(field_rep());
        assert!(!session.is_expired(1));
    }

    #[test]
    fn old_session_is_expired() {
        let two_hours_ago = Timestamp::now().as_second() - 2 * 3600;
        let id = Uuid::new_v7(uuid::Timestamp::from_unix(
            uuid::NoContext,
            two_hours_ago as u64,
            0,
        ));
        let session = Session {
            id,
            user: field_rep(),
        };

        assert!(session.is_expired(1));
        assert!(!session.is_expired(3));
    }
}

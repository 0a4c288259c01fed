mod auth_routes;
mod config;
mod password;
pub mod storage;
mod token;

use anyhow::Context;
use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use types::{AuthSession, SESSION_COOKIE_NAME};

pub use crate::config::CONFIG;

use crate::auth_routes::auth_router;
use crate::storage::{POOL, Session, StoredUser};

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Run migrations, seed the admin account, and return the auth router to
/// merge into the app.
pub async fn init() -> anyhow::Result<Router> {
    storage::migrate().await?;
    StoredUser::seed_admin(&*POOL, &CONFIG.admin_username, &CONFIG.admin_password).await?;

    Ok(auth_router())
}

/// Resolve the request's session cookie to the logged-in user.
///
/// Every failure mode (no cookie, bad signature, unknown or expired session)
/// is just an error here; the API layer collapses them all to "logged out".
pub async fn current_session() -> types::Result<AuthSession> {
    current_session_inner().await.map_err(Into::into)
}

async fn current_session_inner() -> anyhow::Result<AuthSession> {
    let headers: HeaderMap = FullstackContext::extract().await?;

    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .context("no cookies in request")?;

    let token =
        cookie_value(cookie_header, SESSION_COOKIE_NAME).context("session cookie not found")?;

    let session = Session::resolve(
        &*POOL,
        token,
        &CONFIG.session_secret,
        CONFIG.session_ttl_hours,
    )
    .await?;

    Ok(AuthSession {
        user: session.into_user(),
    })
}

/// Pull one cookie's value out of a `Cookie` request header.
pub(crate) fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_the_session_cookie() {
        let header = format!("theme=dark; {SESSION_COOKIE_NAME}=abc.def; lang=en");
        assert_eq!(cookie_value(&header, SESSION_COOKIE_NAME), Some("abc.def"));
    }

    #[test]
    fn cookie_value_is_exact_on_names() {
        let header = format!("x{SESSION_COOKIE_NAME}=evil; other=1");
        assert_eq!(cookie_value(&header, SESSION_COOKIE_NAME), None);
        assert_eq!(cookie_value("", SESSION_COOKIE_NAME), None);
        assert_eq!(cookie_value("bare-token", SESSION_COOKIE_NAME), None);
    }
}

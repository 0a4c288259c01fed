use axum::{
    Router,
    extract::Form,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::Cookie;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use types::SESSION_COOKIE_NAME;

use crate::{
    CONFIG, cookie_value,
    storage::{POOL, Session, StoredUser},
};

pub fn auth_router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: SecretString,
}

async fn login(Form(form): Form<LoginForm>) -> Response {
    let username = form.username.clone();
    match login_inner(form).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(username, "login failed: {err:#}");
            login_rejected()
        }
    }
}

async fn login_inner(form: LoginForm) -> anyhow::Result<Response> {
    let Some(user) = StoredUser::find_by_username(&*POOL, &form.username).await? else {
        tracing::info!(username = %form.username, "login attempt for unknown user");
        return Ok(login_rejected());
    };

    if !user.verify_password(form.password.expose_secret()) {
        tracing::info!(username = %form.username, "login attempt with wrong password");
        return Ok(login_rejected());
    }

    let session = Session::create(&*POOL, user.into_user()).await?;
    let token = session.as_token(&CONFIG.session_secret)?;
    tracing::info!(username = %form.username, "login succeeded");

    let cookie = Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .build();

    let mut response = Redirect::to("/").into_response();
    response.headers_mut().insert(
        axum::http::header::SET_COOKIE,
        cookie.to_string().parse().unwrap(),
    );

    Ok(response)
}

/// Invalid credentials and internal failures look the same to the client:
/// back to the login view.
fn login_rejected() -> Response {
    Redirect::to("/login?error=invalid-credentials").into_response()
}

async fn logout(headers: HeaderMap) -> impl IntoResponse {
    // Try to delete the session row
    if let Some(cookie_header) = headers.get(axum::http::header::COOKIE)
        && let Ok(cookie_str) = cookie_header.to_str()
        && let Some(token) = cookie_value(cookie_str, SESSION_COOKIE_NAME)
    {
        let _ = Session::delete_token(&*POOL, token, &CONFIG.session_secret).await;
    }

    // Clear the session cookie
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    let mut response = Redirect::to("/login").into_response();
    response.headers_mut().insert(
        axum::http::header::SET_COOKIE,
        cookie.to_string().parse().unwrap(),
    );

    response
}

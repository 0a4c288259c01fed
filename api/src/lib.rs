use dioxus::prelude::*;
use types::AuthSession;

/// Fetch the current session's user.
///
/// A fetch that fails server-side is indistinguishable from having no
/// session: both come back as `None` and route to the login view.
#[get("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<AuthSession>> {
    match server::current_session().await {
        Ok(session) => Ok(Some(session)),
        Err(_) => Ok(None),
    }
}

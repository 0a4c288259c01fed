use types::AuthSession;

/// The three-way branch every guarded view takes on the current-user query.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Query still in flight; show a loading indicator, never a dashboard.
    Pending,
    /// Resolved with no user, or the fetch failed. Both mean the login view.
    SignedOut,
    /// Resolved with a user.
    Ready(AuthSession),
}

impl Gate {
    pub fn from_query<E>(state: Option<&Result<Option<AuthSession>, E>>) -> Self {
        match state {
            None => Gate::Pending,
            Some(Ok(Some(session))) => Gate::Ready(session.clone()),
            Some(Ok(None)) | Some(Err(_)) => Gate::SignedOut,
        }
    }
}

/// Which dashboard a signed-in user lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardKind {
    Admin,
    FieldRep,
}

impl DashboardKind {
    pub fn for_user(user: &types::User) -> Self {
        if user.is_admin() {
            DashboardKind::Admin
        } else {
            DashboardKind::FieldRep
        }
    }
}

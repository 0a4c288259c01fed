mod error;
mod session;

pub use error::{Error, Result};
pub use session::{ADMIN_ROLE, AuthSession, SESSION_COOKIE_NAME, User};

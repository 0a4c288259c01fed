use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for crossing the server-function boundary.
///
/// When `RUST_BACKTRACE=1` is set, the message will include the full backtrace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    /// The error message (includes chain and backtrace from anyhow's Debug output)
    pub message: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        // The Debug representation includes the error chain and backtrace
        Self {
            message: format!("{report:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn carries_the_anyhow_chain() {
        let report = anyhow::anyhow!("db unreachable")
            .context("session lookup failed")
            .context("current user unavailable");
        let error = Error::from(report);

        assert!(error.message.contains("current user unavailable"));
        assert!(error.message.contains("session lookup failed"));
        assert!(error.message.contains("db unreachable"));
    }
}

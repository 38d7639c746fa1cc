use thiserror::Error;

/// Printed on stdout for every fatal failure, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Something has failed. The file could not be uploaded.";

#[derive(Error, Debug)]
pub enum Error {
    /// Opening, sending or reading the response failed. Ends the process.
    #[error("transfer failed: {0:#}")]
    Transfer(anyhow::Error),

    /// No usable clipboard on this host. Never changes the exit status.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

impl Error {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Transfer(_))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Transfer(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transfer_failures_are_fatal() {
        assert!(Error::Transfer(anyhow::anyhow!("connection refused")).is_fatal());
        assert!(!Error::ClipboardUnavailable("no display".into()).is_fatal());
    }

    #[test]
    fn transfer_error_keeps_the_context_chain() {
        let err: Error = anyhow::anyhow!("connection refused")
            .context("Failed to send upload request")
            .into();
        assert_eq!(
            err.to_string(),
            "transfer failed: Failed to send upload request: connection refused"
        );
    }
}

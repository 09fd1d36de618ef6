/// All error types that can occur when driving a group of Wiz lights.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The group configuration is unusable (empty target list, zero port,
    /// unparseable address).
    #[error("invalid group configuration: {0}")]
    InvalidConfig(String),

    /// Failed to serialize a command to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// The UDP socket could not be created. The driver stays retry-able:
    /// the next send attempts socket creation again.
    #[error("transport unavailable: socket {action} failed: {err:?}")]
    TransportUnavailable { action: String, err: std::io::Error },

    /// Every configured target rejected the datagram. Per-target failures
    /// below this threshold are logged at warn and not surfaced.
    #[error("delivery failed for all {attempted} targets")]
    TotalDeliveryFailure { attempted: usize },
}

impl Error {
    /// Create a new transport error
    pub fn transport(action: &str, err: std::io::Error) -> Self {
        Error::TransportUnavailable {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(reason: &str) -> Self {
        Error::InvalidConfig(reason.to_string())
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

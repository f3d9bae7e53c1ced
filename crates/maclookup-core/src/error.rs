// ── Core error types ──
//
// Domain errors for a single lookup. The `From<maclookup_api::Error>` impl
// folds transport-level detail into variants the CLI can explain.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the Dashboard API: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Rate limited by the Dashboard API (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Client not found: {identifier}")]
    ClientNotFound { identifier: String },

    #[error("Device not found: {serial}")]
    DeviceNotFound { serial: String },

    #[error("Malformed API response: {message}")]
    MalformedResponse { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Re-tag a generic not-found as a client miss.
    pub(crate) fn for_client(self, mac: impl Into<String>) -> Self {
        match self {
            Self::Api {
                status: Some(404), ..
            } => Self::ClientNotFound {
                identifier: mac.into(),
            },
            other => other,
        }
    }

    /// Re-tag a generic not-found as a device miss.
    pub(crate) fn for_device(self, serial: impl Into<String>) -> Self {
        match self {
            Self::Api {
                status: Some(404), ..
            } => Self::DeviceNotFound {
                serial: serial.into(),
            },
            other => other,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<maclookup_api::Error> for CoreError {
    fn from(err: maclookup_api::Error) -> Self {
        use maclookup_api::Error as ApiError;

        match err {
            ApiError::Authentication { message } => CoreError::AuthenticationFailed { message },
            ApiError::InvalidApiKey => CoreError::AuthenticationFailed {
                message: "Invalid API key".into(),
            },
            ApiError::Transport(ref e) => {
                if e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            ApiError::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            ApiError::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            ApiError::Tls(msg) => CoreError::ConnectionFailed {
                reason: format!("TLS error: {msg}"),
            },
            ApiError::RateLimited { retry_after_secs } => {
                CoreError::RateLimited { retry_after_secs }
            }
            ApiError::NotFound { resource } => CoreError::Api {
                message: format!("{resource} not found"),
                status: Some(404),
            },
            ApiError::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            ApiError::Deserialization { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_retagged_per_resource() {
        let err = CoreError::from(maclookup_api::Error::NotFound {
            resource: "/networks/N_1/clients/AA".into(),
        });
        assert!(matches!(
            err.for_client("AA:BB:CC:DD:EE:FF"),
            CoreError::ClientNotFound { ref identifier } if identifier == "AA:BB:CC:DD:EE:FF"
        ));

        let err = CoreError::from(maclookup_api::Error::NotFound {
            resource: "/devices/Q2".into(),
        });
        assert!(matches!(err.for_device("Q2"), CoreError::DeviceNotFound { .. }));
    }

    #[test]
    fn other_errors_are_not_retagged() {
        let err = CoreError::from(maclookup_api::Error::Api {
            status: 500,
            message: "boom".into(),
        });
        assert!(matches!(
            err.for_client("x"),
            CoreError::Api {
                status: Some(500),
                ..
            }
        ));
    }

    #[test]
    fn invalid_key_maps_to_auth_failure() {
        let err = CoreError::from(maclookup_api::Error::InvalidApiKey);
        assert!(matches!(err, CoreError::AuthenticationFailed { .. }));
    }
}

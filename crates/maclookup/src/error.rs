//! CLI error types with miette diagnostics.
//!
//! Maps config and core errors into user-facing errors with help text,
//! and each error to a process exit code.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use maclookup_config::ConfigError;
use maclookup_core::{CoreError, ExportError};

/// Process exit codes.
pub mod exit_code {
    /// Every address resolved, some failed, or none resolved.
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    /// Reserved for clap's own argument errors.
    #[allow(dead_code)]
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const NO_INPUT: i32 = 4;
    pub const WRITE: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("No valid MAC addresses to process from {source_desc}")]
    #[diagnostic(
        code(maclookup::no_input),
        help(
            "Pass a single address with --mac AA:BB:CC:DD:EE:FF, or a file with\n\
             one address per line via --file. Addresses use ':' or '-' throughout."
        )
    )]
    NoInput { source_desc: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No API key found in ${env} or the system keyring")]
    #[diagnostic(
        code(maclookup::no_credentials),
        help(
            "Export the key: export {env}=<key>\n\
             Or store it in the keyring under service 'maclookup', account '{profile}/api-key'."
        )
    )]
    NoCredentials { env: String, profile: String },

    #[error("A literal api_key in the configuration file is not accepted")]
    #[diagnostic(
        code(maclookup::plaintext_credential),
        help("Remove api_key from the config file and export MERAKI_API_KEY instead.")
    )]
    PlaintextCredential,

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(
        code(maclookup::validation),
        help("Set it with a flag (e.g. --network-id), MACLOOKUP_* env vars, or {path}")
    )]
    Validation {
        field: String,
        reason: String,
        path: String,
    },

    #[error(transparent)]
    #[diagnostic(code(maclookup::config))]
    Config(ConfigError),

    // ── Lookup ───────────────────────────────────────────────────────
    #[error("Could not set up the Dashboard client: {0}")]
    #[diagnostic(code(maclookup::client_setup))]
    ClientSetup(CoreError),

    // ── Output ───────────────────────────────────────────────────────
    #[error("Failed to write report to {}", path.display())]
    #[diagnostic(
        code(maclookup::write_failed),
        help("Check that the directory exists and is writable, or pick another --output.")
    )]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: ExportError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInput { .. } => exit_code::NO_INPUT,
            Self::NoCredentials { .. }
            | Self::PlaintextCredential
            | Self::Validation { .. }
            | Self::Config(_)
            | Self::ClientSetup(_) => exit_code::CONFIG,
            Self::WriteFailed { .. } => exit_code::WRITE,
            Self::Io(_) => exit_code::GENERAL,
        }
    }

    /// Whether the failing component already wrote this to the log.
    pub fn logged_at_source(&self) -> bool {
        matches!(self, Self::NoInput { .. })
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { env, profile } => Self::NoCredentials { env, profile },
            ConfigError::PlaintextCredential => Self::PlaintextCredential,
            ConfigError::Validation { field, reason } => Self::Validation {
                field,
                reason,
                path: maclookup_config::config_path().display().to_string(),
            },
            other => Self::Config(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::ClientSetup(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_class() {
        let no_input = CliError::NoInput {
            source_desc: "--mac".into(),
        };
        assert_eq!(no_input.exit_code(), exit_code::NO_INPUT);
        assert!(no_input.logged_at_source());

        let write = CliError::WriteFailed {
            path: "out.csv".into(),
            source: ExportError::Empty,
        };
        assert_eq!(write.exit_code(), exit_code::WRITE);
        assert!(!write.logged_at_source());

        assert_eq!(CliError::PlaintextCredential.exit_code(), exit_code::CONFIG);
    }

    #[test]
    fn config_validation_carries_config_path() {
        let err = CliError::from(ConfigError::Validation {
            field: "network_id".into(),
            reason: "no network id configured".into(),
        });
        match err {
            CliError::Validation { field, path, .. } => {
                assert_eq!(field, "network_id");
                assert!(!path.is_empty());
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}

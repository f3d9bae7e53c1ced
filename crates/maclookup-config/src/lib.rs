//! Configuration for maclookup.
//!
//! TOML settings layered with `MACLOOKUP_*` environment variables, API key
//! resolution (env + keyring), and translation to
//! `maclookup_core::LookupConfig`. The CLI applies its flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use maclookup_core::LookupConfig;

/// Keyring service name; the account is `{profile}/api-key`.
pub const KEYRING_SERVICE: &str = "maclookup";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API key found in ${env} or the system keyring (profile '{profile}')")]
    NoCredentials { env: String, profile: String },

    #[error("refusing to use a literal api_key from configuration")]
    PlaintextCredential,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Top-level settings, after file and environment layering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Dashboard network to look clients up in.
    #[serde(default)]
    pub network_id: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Never honoured; only read so it can be rejected.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Keyring account prefix.
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Retries on HTTP 429.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// CSV report path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Append-mode log path.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Extra CA certificate (PEM).
    #[serde(default)]
    pub ca_cert: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            network_id: None,
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            api_key: None,
            profile: default_profile(),
            timeout: default_timeout(),
            max_retries: default_max_retries(),
            output: default_output(),
            log_file: default_log_file(),
            ca_cert: None,
        }
    }
}

fn default_base_url() -> String {
    maclookup_api::DEFAULT_BASE_URL.into()
}
fn default_api_key_env() -> String {
    "MERAKI_API_KEY".into()
}
fn default_profile() -> String {
    "default".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_max_retries() -> u32 {
    3
}
fn default_output() -> PathBuf {
    "device_info.csv".into()
}
fn default_log_file() -> PathBuf {
    "device_lookup.log".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "maclookup", "maclookup").map_or_else(
        || PathBuf::from(".maclookup.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load settings: defaults, then the TOML file (if it exists), then
/// `MACLOOKUP_*` environment variables.
///
/// `MACLOOKUP_API_KEY` is ignored; a literal `api_key` in the file is an
/// error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    let settings: Settings = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("MACLOOKUP_").ignore(&["api_key"]))
        .extract()?;

    if settings.api_key.is_some() {
        return Err(ConfigError::PlaintextCredential);
    }
    Ok(settings)
}

/// Render the effective settings as TOML (credentials never included).
pub fn render_settings(settings: &Settings) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(settings)?)
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the API key: the configured env var first, then the keyring.
pub fn resolve_api_key(settings: &Settings) -> Result<SecretString, ConfigError> {
    resolve_api_key_with(
        settings,
        |name| std::env::var(name).ok(),
        |account| {
            keyring::Entry::new(KEYRING_SERVICE, account)
                .and_then(|entry| entry.get_password())
                .ok()
        },
    )
}

/// Credential chain with injectable sources.
pub fn resolve_api_key_with(
    settings: &Settings,
    env: impl Fn(&str) -> Option<String>,
    keyring: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    // 1. Environment
    if let Some(key) = env(&settings.api_key_env).filter(|k| !k.trim().is_empty()) {
        return Ok(SecretString::from(key));
    }

    // 2. System keyring
    if let Some(key) = keyring(&format!("{}/api-key", settings.profile)) {
        return Ok(SecretString::from(key));
    }

    Err(ConfigError::NoCredentials {
        env: settings.api_key_env.clone(),
        profile: settings.profile.clone(),
    })
}

// ── Translation ─────────────────────────────────────────────────────

/// Validate settings and pair them with a resolved key.
pub fn to_lookup_config(
    settings: &Settings,
    api_key: SecretString,
) -> Result<LookupConfig, ConfigError> {
    let network_id = settings
        .network_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ConfigError::Validation {
            field: "network_id".into(),
            reason: "no network id configured".into(),
        })?;

    let base_url: url::Url = settings
        .base_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL: {}", settings.base_url),
        })?;

    if settings.timeout == 0 {
        return Err(ConfigError::Validation {
            field: "timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    Ok(LookupConfig {
        base_url,
        network_id: network_id.to_owned(),
        api_key,
        ca_cert: settings.ca_cert.clone(),
        timeout: Duration::from_secs(settings.timeout),
        max_retries: settings.max_retries,
    })
}

// ── Runtime lookup configuration ──
//
// Describes *how* to reach the Dashboard. Carries the credential and
// connection tuning but never touches disk: the binary builds a
// `LookupConfig` from its config layers and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use maclookup_api::{TlsMode, TransportConfig};
use secrecy::SecretString;
use url::Url;

/// Everything needed to resolve MACs against one network.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// API root, e.g. `https://api.meraki.com/api/v1`.
    pub base_url: Url,
    /// Dashboard network the clients are looked up in.
    pub network_id: String,
    pub api_key: SecretString,
    /// Extra CA for TLS-inspecting proxies.
    pub ca_cert: Option<PathBuf>,
    pub timeout: Duration,
    /// Retries on HTTP 429.
    pub max_retries: u32,
}

impl LookupConfig {
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self
                .ca_cert
                .clone()
                .map_or(TlsMode::System, TlsMode::CustomCa),
            timeout: self.timeout,
            max_retries: self.max_retries,
        }
    }
}

// ── Device resolution ──
//
// One client-by-MAC request per input address. When the client names an
// upstream device, that device is fetched by serial through the run's
// `DeviceCache`; serial lookups are enrichment only and never stand in
// for the MAC lookup.

use maclookup_api::{DashboardClient, Device, NetworkClient};
use tracing::{debug, trace, warn};

use crate::cache::DeviceCache;
use crate::config::LookupConfig;
use crate::error::CoreError;
use crate::mac::MacAddress;
use crate::report::{ReportRow, flatten};

/// A client record with its upstream switch, when one could be fetched.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub mac: MacAddress,
    pub client: NetworkClient,
    pub switch: Option<Device>,
}

impl Resolved {
    pub fn to_row(&self) -> ReportRow {
        flatten(&self.mac, &self.client, self.switch.as_ref())
    }
}

/// Resolves MAC addresses against one Dashboard network.
///
/// Owns the device cache, so its lifetime is the lifetime of the cache.
pub struct Resolver {
    client: DashboardClient,
    network_id: String,
    devices: DeviceCache,
}

impl Resolver {
    pub fn new(client: DashboardClient, network_id: impl Into<String>) -> Self {
        Self {
            client,
            network_id: network_id.into(),
            devices: DeviceCache::new(),
        }
    }

    /// Build the HTTP client from a runtime config.
    pub fn connect(config: &LookupConfig) -> Result<Self, CoreError> {
        let client = DashboardClient::from_api_key(
            config.base_url.as_str(),
            &config.api_key,
            &config.transport(),
        )?;
        Ok(Self::new(client, config.network_id.clone()))
    }

    pub fn cache(&self) -> &DeviceCache {
        &self.devices
    }

    /// Fetch a device by serial, serving repeats from the cache.
    ///
    /// Only successes are cached: a failed serial is requested again the
    /// next time it comes up.
    pub async fn device(&mut self, serial: &str) -> Result<Device, CoreError> {
        if let Some(device) = self.devices.get(serial) {
            trace!(serial, "device cache hit");
            return Ok(device.clone());
        }

        let device = self
            .client
            .get_device(serial)
            .await
            .map_err(|e| CoreError::from(e).for_device(serial))?;
        self.devices.insert(serial, device.clone());
        Ok(device)
    }

    /// Resolve one MAC to its client record and upstream switch.
    ///
    /// A failed switch fetch only degrades the result: the switch columns
    /// fall back to placeholders.
    pub async fn resolve(&mut self, mac: MacAddress) -> Result<Resolved, CoreError> {
        let id = mac.to_string();
        let client = self
            .client
            .get_network_client(&self.network_id, &id)
            .await
            .map_err(|e| CoreError::from(e).for_client(id.as_str()))?;

        let switch = match client.upstream_serial() {
            Some(serial) => match self.device(serial).await {
                Ok(device) => Some(device),
                Err(err) => {
                    warn!(%mac, serial, "upstream device lookup failed: {err}");
                    None
                }
            },
            None => {
                debug!(%mac, "client reports no upstream device");
                None
            }
        };

        Ok(Resolved {
            mac,
            client,
            switch,
        })
    }
}

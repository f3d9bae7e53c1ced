// Dashboard device endpoints
//
// Infrastructure device detail by serial (switches, access points).

use tracing::debug;

use super::client::DashboardClient;
use super::models::Device;
use crate::error::Error;

impl DashboardClient {
    /// Fetch a single device.
    ///
    /// `GET /devices/{serial}`
    pub async fn get_device(&self, serial: &str) -> Result<Device, Error> {
        let url = self.url(&["devices", serial])?;
        debug!(serial, "fetching device");
        self.get(url).await
    }
}

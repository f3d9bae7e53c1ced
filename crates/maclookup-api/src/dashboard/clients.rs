// Dashboard client (station) endpoints
//
// Lookup of a single network client by MAC address.

use tracing::debug;

use super::client::DashboardClient;
use super::models::NetworkClient;
use crate::error::Error;

impl DashboardClient {
    /// Fetch one client of a network, including its usage counters.
    ///
    /// `GET /networks/{networkId}/clients/{clientId}` where `clientId` is
    /// the client's MAC address.
    pub async fn get_network_client(
        &self,
        network_id: &str,
        mac: &str,
    ) -> Result<NetworkClient, Error> {
        let url = self.url(&["networks", network_id, "clients", mac])?;
        debug!(network_id, mac, "fetching network client");
        self.get(url).await
    }
}

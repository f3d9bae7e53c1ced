// ── Record flattening ──
//
// Turns a typed client record (plus its switch) into a fixed-shape row.
// Every column is always present; absent source fields become `N/A`, so
// the CSV header taken from the first row fits every row.

use std::fmt;

use maclookup_api::{Device, NetworkClient};
use serde::Serialize;

use crate::mac::MacAddress;

/// Literal written for any field the API did not supply.
pub const PLACEHOLDER: &str = "N/A";

/// How the client is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    Wired,
    Wireless,
}

impl ConnectionType {
    /// Use the API's own `recentDeviceConnection` when it is recognisable,
    /// otherwise guess: an SSID means wireless. The guess is a heuristic;
    /// a wireless client whose SSID is not reported reads as wired.
    pub fn classify(client: &NetworkClient) -> Self {
        match client
            .recent_device_connection
            .as_deref()
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("wireless") => Self::Wireless,
            Some("wired") => Self::Wired,
            _ if client.ssid().is_some() => Self::Wireless,
            _ => Self::Wired,
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wired => "Wired",
            Self::Wireless => "Wireless",
        })
    }
}

/// One line of the report. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "MAC Address")]
    pub mac_address: MacAddress,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Connection Type")]
    pub connection_type: String,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
    #[serde(rename = "VLAN")]
    pub vlan: String,
    #[serde(rename = "SSID")]
    pub ssid: String,
    #[serde(rename = "Switch Name")]
    pub switch_name: String,
    #[serde(rename = "Switch Model")]
    pub switch_model: String,
    #[serde(rename = "Switch Port")]
    pub switch_port: String,
    #[serde(rename = "Usage (KB)")]
    pub usage_kb: String,
}

impl ReportRow {
    pub const HEADERS: [&'static str; 10] = [
        "MAC Address",
        "Description",
        "Connection Type",
        "IP Address",
        "VLAN",
        "SSID",
        "Switch Name",
        "Switch Model",
        "Switch Port",
        "Usage (KB)",
    ];
}

pub fn flatten(mac: &MacAddress, client: &NetworkClient, switch: Option<&Device>) -> ReportRow {
    let switch_name = switch
        .and_then(|d| d.name.as_deref())
        .or(client.recent_device_name.as_deref());

    ReportRow {
        mac_address: *mac,
        description: or_placeholder(client.description.as_deref()),
        connection_type: ConnectionType::classify(client).to_string(),
        ip_address: or_placeholder(client.ip.as_deref()),
        vlan: client
            .vlan
            .as_ref()
            .map_or_else(|| PLACEHOLDER.to_owned(), ToString::to_string),
        ssid: or_placeholder(client.ssid()),
        switch_name: or_placeholder(switch_name),
        switch_model: or_placeholder(switch.and_then(|d| d.model.as_deref())),
        switch_port: or_placeholder(client.switchport.as_deref()),
        usage_kb: client
            .usage_total_kb()
            .map_or_else(|| PLACEHOLDER.to_owned(), |kb| kb.to_string()),
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_owned()
}

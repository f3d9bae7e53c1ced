// Dashboard API response types
//
// Models for the two endpoints this crate consumes. Every field except a
// device's serial is optional: the Dashboard omits or nulls fields freely
// depending on client type and firmware, and unknown fields are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Client ───────────────────────────────────────────────────────────

/// A network client from `GET /networks/{networkId}/clients/{clientId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkClient {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub vlan: Option<Vlan>,
    /// Only set for wireless clients.
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default, alias = "switchPort")]
    pub switchport: Option<String>,
    /// Serial of the switch or AP the client was last seen on.
    #[serde(default, alias = "switchSerial")]
    pub recent_device_serial: Option<String>,
    #[serde(default)]
    pub recent_device_name: Option<String>,
    /// `"Wired"` or `"Wireless"` on networks that report it.
    #[serde(default)]
    pub recent_device_connection: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl NetworkClient {
    /// Upstream device serial, ignoring empty strings.
    pub fn upstream_serial(&self) -> Option<&str> {
        non_empty(self.recent_device_serial.as_deref())
    }

    /// SSID, ignoring empty strings.
    pub fn ssid(&self) -> Option<&str> {
        non_empty(self.ssid.as_deref())
    }

    /// Total usage in kilobytes, if reported.
    pub fn usage_total_kb(&self) -> Option<f64> {
        self.usage.as_ref().and_then(Usage::total_kb)
    }
}

/// VLAN id. The Dashboard returns it as a number on some networks and as
/// a string on others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vlan {
    Id(u64),
    Name(String),
}

impl fmt::Display for Vlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Data usage in kilobytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub sent: Option<f64>,
    #[serde(default)]
    pub recv: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl Usage {
    /// `total` when present, else `sent + recv`. The single-client endpoint
    /// usually reports only the two directions.
    pub fn total_kb(&self) -> Option<f64> {
        match (self.total, self.sent, self.recv) {
            (Some(total), _, _) => Some(total),
            (None, None, None) => None,
            (None, sent, recv) => Some(sent.unwrap_or(0.0) + recv.unwrap_or(0.0)),
        }
    }
}

// ── Device ───────────────────────────────────────────────────────────

/// An infrastructure device from `GET /devices/{serial}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub serial: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub lan_ip: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub firmware: Option<String>,
}

// ── Error body ───────────────────────────────────────────────────────

/// Error body shape: `{"errors": ["..."]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn client_with_only_description_and_vlan() {
        let client: NetworkClient =
            serde_json::from_value(json!({"description": "desk1", "vlan": 10})).unwrap();
        assert_eq!(client.description.as_deref(), Some("desk1"));
        assert_eq!(client.vlan, Some(Vlan::Id(10)));
        assert!(client.ssid.is_none());
        assert!(client.upstream_serial().is_none());
        assert!(client.usage_total_kb().is_none());
    }

    #[test]
    fn vlan_accepts_strings() {
        let client: NetworkClient = serde_json::from_value(json!({"vlan": "20"})).unwrap();
        assert_eq!(client.vlan.unwrap().to_string(), "20");
    }

    #[test]
    fn switch_aliases_are_accepted() {
        let client: NetworkClient = serde_json::from_value(json!({
            "switchSerial": "Q2XX-AAAA-BBBB",
            "switchPort": "12"
        }))
        .unwrap();
        assert_eq!(client.upstream_serial(), Some("Q2XX-AAAA-BBBB"));
        assert_eq!(client.switchport.as_deref(), Some("12"));
    }

    #[test]
    fn empty_strings_read_as_absent() {
        let client: NetworkClient =
            serde_json::from_value(json!({"ssid": "", "recentDeviceSerial": " "})).unwrap();
        assert!(client.ssid().is_none());
        assert!(client.upstream_serial().is_none());
    }

    #[test]
    fn full_client_payload() {
        let client: NetworkClient = serde_json::from_value(json!({
            "id": "k74272e",
            "mac": "aa:bb:cc:dd:ee:ff",
            "description": "Printer",
            "ip": "10.0.0.12",
            "vlan": 30,
            "ssid": null,
            "switchport": "7",
            "recentDeviceSerial": "Q234-ABCD-5678",
            "recentDeviceName": "Closet Switch",
            "recentDeviceConnection": "Wired",
            "usage": {"sent": 100.0, "recv": 412.5, "total": 512.5},
            "status": "Online"
        }))
        .unwrap();
        assert_eq!(client.usage_total_kb(), Some(512.5));
        assert_eq!(client.recent_device_connection.as_deref(), Some("Wired"));
    }

    #[test]
    fn usage_without_total_sums_directions() {
        let client: NetworkClient =
            serde_json::from_value(json!({"usage": {"sent": 138.0, "recv": 61.0}})).unwrap();
        assert_eq!(client.usage_total_kb(), Some(199.0));

        let client: NetworkClient =
            serde_json::from_value(json!({"usage": {"recv": 61.5}})).unwrap();
        assert_eq!(client.usage_total_kb(), Some(61.5));

        let client: NetworkClient = serde_json::from_value(json!({"usage": {}})).unwrap();
        assert!(client.usage_total_kb().is_none());
    }

    #[test]
    fn device_requires_serial() {
        let result: Result<Device, _> = serde_json::from_value(json!({"name": "no serial"}));
        assert!(result.is_err());
    }
}

// maclookup-api: Async Rust client for the Meraki Dashboard API

pub mod dashboard;
pub mod error;
pub mod transport;

pub use dashboard::{DEFAULT_BASE_URL, DashboardClient, Device, NetworkClient, Usage, Vlan};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};

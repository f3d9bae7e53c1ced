// Dashboard API v1 surface: REST + JSON, bearer-token auth.

pub mod client;
pub mod clients;
pub mod devices;
pub mod models;

pub use client::{DEFAULT_BASE_URL, DashboardClient};
pub use models::{Device, NetworkClient, Usage, Vlan};

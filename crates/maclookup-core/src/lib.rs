//! Resolution pipeline between `maclookup-api` and the CLI.
//!
//! - **[`mac`]**: syntactic MAC validation and the canonical [`MacAddress`] type.
//! - **[`input`]**: reads MAC lists from a single value or a newline-delimited file.
//! - **[`Resolver`]**: turns a MAC into a Dashboard client record plus its
//!   upstream switch, fetching each switch once per run through a [`DeviceCache`].
//! - **[`report`]**: flattens resolved records into fixed-shape [`ReportRow`]s.
//! - **[`export`]**: writes rows as CSV.
//! - **[`pipeline`]**: drives a whole batch, skipping per-item failures.

pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod mac;
pub mod pipeline;
pub mod report;
pub mod resolver;

// ── Primary re-exports ──────────────────────────────────────────────
pub use cache::{CacheStats, DeviceCache};
pub use config::LookupConfig;
pub use error::CoreError;
pub use export::{ExportError, write_report};
pub use input::{InputError, InputSource, MacList, RejectedLine, read_input};
pub use mac::{InvalidMac, MacAddress, validate_mac};
pub use pipeline::{BatchReport, Failure, run_batch};
pub use report::{ConnectionType, PLACEHOLDER, ReportRow, flatten};
pub use resolver::{Resolved, Resolver};

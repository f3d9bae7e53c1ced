//! Clap derive structures for the `maclookup` CLI.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// maclookup -- resolve client MAC addresses through the Meraki Dashboard
#[derive(Debug, Parser)]
#[command(
    name = "maclookup",
    version,
    about = "Resolve client MAC addresses to Meraki Dashboard attributes and write a CSV report",
    long_about = "Looks up each MAC address as a client of one Dashboard network, enriches it\n\
        with the switch it was last seen on, and writes one CSV row per resolved\n\
        client. Per-address failures are logged and skipped.\n\n\
        The API key is read from $MERAKI_API_KEY (or the variable named by\n\
        api_key_env), falling back to the system keyring."
)]
pub struct Cli {
    /// Path to file containing MAC addresses, one per line
    #[arg(long, short = 'f', default_value = "mac_addresses.txt")]
    pub file: PathBuf,

    /// A single MAC address to look up (takes precedence over --file)
    #[arg(long, short = 'm')]
    pub mac: Option<String>,

    /// CSV report path [default: device_info.csv]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Dashboard network ID to look clients up in
    #[arg(long, short = 'n')]
    pub network_id: Option<String>,

    /// Dashboard API root [default: https://api.meraki.com/api/v1]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Append-mode log file [default: device_lookup.log]
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Alternate configuration file
    #[arg(long, env = "MACLOOKUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Retries after an HTTP 429 [default: 3]
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Increase stderr verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress bar and summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

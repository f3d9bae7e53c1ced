//! CLI configuration -- thin wrapper around `maclookup_config`.
//!
//! Loads the shared settings and applies flag overrides on top of them.

use maclookup_config::Settings;
use maclookup_core::LookupConfig;

use crate::cli::Cli;
use crate::error::CliError;

/// Settings from file + env, with CLI flags taking priority.
pub fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let mut settings = maclookup_config::load_settings(cli.config.as_deref())?;
    apply_overrides(&mut settings, cli);
    Ok(settings)
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(ref id) = cli.network_id {
        settings.network_id = Some(id.clone());
    }
    if let Some(ref url) = cli.base_url {
        settings.base_url.clone_from(url);
    }
    if let Some(ref path) = cli.output {
        settings.output.clone_from(path);
    }
    if let Some(ref path) = cli.log_file {
        settings.log_file.clone_from(path);
    }
    if let Some(timeout) = cli.timeout {
        settings.timeout = timeout;
    }
    if let Some(retries) = cli.max_retries {
        settings.max_retries = retries;
    }
}

/// Log path to use when settings themselves failed to load.
pub fn fallback_log_file(cli: &Cli) -> std::path::PathBuf {
    cli.log_file
        .clone()
        .unwrap_or_else(|| Settings::default().log_file)
}

/// Resolve credentials and validate into a runtime `LookupConfig`.
pub fn resolve_lookup_config(settings: &Settings) -> Result<LookupConfig, CliError> {
    let api_key = maclookup_config::resolve_api_key(settings)?;
    Ok(maclookup_config::to_lookup_config(settings, api_key)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "maclookup",
            "--network-id",
            "N_flag",
            "--output",
            "report.csv",
            "--timeout",
            "7",
        ])
        .unwrap();
        let mut settings = Settings {
            network_id: Some("N_file".into()),
            ..Settings::default()
        };
        apply_overrides(&mut settings, &cli);

        assert_eq!(settings.network_id.as_deref(), Some("N_flag"));
        assert_eq!(settings.output, std::path::PathBuf::from("report.csv"));
        assert_eq!(settings.timeout, 7);
        assert_eq!(settings.max_retries, 3);
    }

    #[test]
    fn absent_flags_leave_settings_alone() {
        let cli = Cli::try_parse_from(["maclookup"]).unwrap();
        let mut settings = Settings {
            network_id: Some("N_file".into()),
            ..Settings::default()
        };
        apply_overrides(&mut settings, &cli);
        assert_eq!(settings.network_id.as_deref(), Some("N_file"));
        assert_eq!(fallback_log_file(&cli), Settings::default().log_file);
    }
}

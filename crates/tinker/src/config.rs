//! CLI configuration — thin wrapper around `tinker_config`.
//!
//! Adds `GlobalOpts` flag overrides on top of file + environment layering
//! and builds the API client the resource commands share.

use std::path::PathBuf;

use tinker_api::ApiClient;
use tinker_config::Config;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Config file in effect: `--config` / `TINKER_CONFIG`, else the platform path.
pub fn config_file(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(tinker_config::config_path)
}

/// Load config from file + env, then apply flag overrides.
///
/// Flags take priority over everything else. Validation runs once, on the
/// merged result, so a flag can replace a bad file or env value.
pub fn effective_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = tinker_config::extract_config_from(&config_file(global))?;

    if let Some(ref base_url) = global.base_url {
        cfg.api.base_url.clone_from(base_url);
    }
    if let Some(timeout) = global.timeout {
        cfg.api.timeout_secs = Some(timeout);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Build the API client from the effective config.
pub fn build_client(global: &GlobalOpts) -> Result<ApiClient, CliError> {
    let cfg = effective_config(global)?;
    let client = ApiClient::new(cfg.api_client_config()?, &cfg.transport_config()?)?;

    tracing::debug!(base_url = client.config().base_url(), "API client ready");
    Ok(client)
}

//! Connection settings shared by all commands

use anyhow::Result;
use baymax_client::{
    AUTH_TOKEN_ENV, AuthToken, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, HttpClinicalApi,
};
use baymax_dashboard::Dashboard;
use baymax_diagnostics::{BMX0402, BaymaxError};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use super::output::OutputFormat;

/// Backend connection flags
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// Backend base URL
    #[arg(long = "api-url", env = BASE_URL_ENV, global = true)]
    pub api_url: Option<String>,

    /// Bearer token of the signed-in user
    #[arg(long = "auth-token", env = AUTH_TOKEN_ENV, global = true, hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Do not send the tunnel warning header
    #[arg(long = "no-tunnel-header", global = true)]
    pub no_tunnel_header: bool,

    /// Server-relative directory prepended to summary requests
    #[arg(long = "summary-prefix", global = true)]
    pub summary_prefix: Option<String>,
}

impl ConnectionArgs {
    pub fn client_config(&self) -> Result<ClientConfig> {
        let base_url = self.api_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let mut config = ClientConfig::new(base_url)
            .map_err(|e| {
                BaymaxError::system(BMX0402, format!("Invalid API URL: {base_url}"))
                    .with_context(e.to_string())
            })?
            .with_tunnel_header(!self.no_tunnel_header)
            .with_auth_token(
                self.auth_token
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .map(AuthToken::new),
            );
        if let Some(prefix) = &self.summary_prefix {
            config = config.with_summary_prefix(prefix.clone());
        }
        Ok(config)
    }

    /// Build the HTTP client and a dashboard session over it
    pub fn connect(&self) -> Result<Dashboard> {
        let config = self.client_config()?;
        log::debug!("connecting to {}", config.base_url);
        let api = HttpClinicalApi::new(config).map_err(|e| {
            BaymaxError::system(BMX0402, "Failed to create HTTP client").with_context(e.to_string())
        })?;
        Ok(Dashboard::new(Arc::new(api)))
    }
}

/// Settings every one-shot command needs
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub connection: ConnectionArgs,
    pub output_format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

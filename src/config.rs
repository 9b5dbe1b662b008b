use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://davar.icfpcontest.org";

/// Credentials and endpoint for the contest web service.
///
/// Sourced from the environment (`DAVAR_API_TOKEN`, `DAVAR_TEAM_ID` and
/// optional `DAVAR_ENDPOINT`) or from a JSON config file with the same
/// fields in snake_case.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_token: String,
    pub team_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let api_token = std::env::var("DAVAR_API_TOKEN").context("DAVAR_API_TOKEN not set")?;
        let team_id = std::env::var("DAVAR_TEAM_ID").context("DAVAR_TEAM_ID not set")?;
        let endpoint = std::env::var("DAVAR_ENDPOINT").unwrap_or_else(|_| default_endpoint());
        Ok(Config {
            api_token,
            team_id,
            endpoint,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// File if given, environment otherwise.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::from_file(path),
            None => Config::from_env(),
        }
    }

    /// The solutions resource for this team.
    pub fn solutions_url(&self) -> String {
        format!(
            "{}/teams/{}/solutions",
            self.endpoint.trim_end_matches('/'),
            self.team_id
        )
    }
}

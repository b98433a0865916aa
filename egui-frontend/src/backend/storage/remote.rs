//! # Remote Table Client
//!
//! Read-only client for the externally hosted "orphanages" table. The client
//! is constructed explicitly with its configuration and handed to whichever
//! service needs it; there is no module-level singleton. When the endpoint or
//! key is missing or still the placeholder from the setup instructions, the
//! client is never built and the seed catalog is used instead.

use anyhow::Result;
use log::{debug, info};
use reqwest::blocking::Client;
use shared::Orphanage;
use std::env;
use std::time::Duration;
use thiserror::Error;

use super::traits::OrphanageSource;

/// Placeholder sentinel from the setup instructions, treated as "unset"
const PLACEHOLDER_SENTINEL: &str = "YOUR_API_KEY";

/// Environment variable naming the hosted table endpoint URL
pub const ENDPOINT_ENV_VAR: &str = "HOPE_SUPABASE_URL";
/// Environment variable naming the anon key for the hosted table
pub const ANON_KEY_ENV_VAR: &str = "HOPE_SUPABASE_ANON_KEY";

#[derive(Debug, Error)]
pub enum RemoteTableError {
    #[error("remote table is not configured")]
    NotConfigured,
    #[error("remote table request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Connection settings for the hosted orphanages table
#[derive(Debug, Clone, Default)]
pub struct RemoteTableConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl RemoteTableConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        Self {
            url: env::var(ENDPOINT_ENV_VAR).ok(),
            anon_key: env::var(ANON_KEY_ENV_VAR).ok(),
        }
    }

    /// The endpoint URL, if set to a real value
    pub fn endpoint(&self) -> Option<&str> {
        match self.url.as_deref() {
            Some(url) if url.starts_with("http") && !url.contains(PLACEHOLDER_SENTINEL) => {
                Some(url)
            }
            _ => None,
        }
    }

    /// The anon key, if set to a real value
    pub fn key(&self) -> Option<&str> {
        match self.anon_key.as_deref() {
            Some(key) if !key.is_empty() && !key.contains(PLACEHOLDER_SENTINEL) => Some(key),
            _ => None,
        }
    }

    /// Whether both endpoint and key hold non-placeholder values.
    /// When false, no network attempt is ever made.
    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some() && self.key().is_some()
    }
}

/// Client performing the one-shot read-all query against the hosted table
pub struct RemoteTableClient {
    config: RemoteTableConfig,
    http: Client,
}

impl RemoteTableClient {
    /// Build a client from configuration. Fails with `NotConfigured` rather
    /// than attempting requests against placeholder values.
    pub fn new(config: RemoteTableConfig) -> Result<Self, RemoteTableError> {
        if !config.is_configured() {
            return Err(RemoteTableError::NotConfigured);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        info!("Remote orphanage table configured at {}", config.endpoint().unwrap_or_default());

        Ok(Self { config, http })
    }

    /// Read all rows of the remote "orphanages" table
    pub fn fetch_all(&self) -> Result<Vec<Orphanage>, RemoteTableError> {
        let endpoint = self.config.endpoint().ok_or(RemoteTableError::NotConfigured)?;
        let key = self.config.key().ok_or(RemoteTableError::NotConfigured)?;

        let url = format!("{}/rest/v1/orphanages", endpoint.trim_end_matches('/'));
        debug!("Fetching orphanages from {}", url);

        let rows = self
            .http
            .get(&url)
            .query(&[("select", "*")])
            .header("apikey", key)
            .bearer_auth(key)
            .send()?
            .error_for_status()?
            .json::<Vec<Orphanage>>()?;

        info!("Fetched {} orphanage rows from remote table", rows.len());

        Ok(rows)
    }
}

impl OrphanageSource for RemoteTableClient {
    fn fetch_orphanages(&self) -> Result<Vec<Orphanage>> {
        Ok(self.fetch_all()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>, key: Option<&str>) -> RemoteTableConfig {
        RemoteTableConfig {
            url: url.map(String::from),
            anon_key: key.map(String::from),
        }
    }

    #[test]
    fn test_unset_values_disable_the_client() {
        assert!(!config(None, None).is_configured());
        assert!(!config(Some("https://example.supabase.co"), None).is_configured());
        assert!(!config(None, Some("real-key")).is_configured());
    }

    #[test]
    fn test_placeholder_values_disable_the_client() {
        assert!(!config(Some("YOUR_API_KEY"), Some("real-key")).is_configured());
        assert!(!config(Some("https://YOUR_API_KEY.supabase.co"), Some("real-key")).is_configured());
        assert!(!config(Some("https://example.supabase.co"), Some("YOUR_API_KEY")).is_configured());
        // URL must actually be a URL
        assert!(!config(Some("example.supabase.co"), Some("real-key")).is_configured());
    }

    #[test]
    fn test_real_values_enable_the_client() {
        let cfg = config(Some("https://example.supabase.co"), Some("anon-key-123"));
        assert!(cfg.is_configured());
        assert_eq!(cfg.endpoint(), Some("https://example.supabase.co"));
        assert_eq!(cfg.key(), Some("anon-key-123"));
    }

    #[test]
    fn test_client_construction_rejects_placeholder_config() {
        let result = RemoteTableClient::new(config(Some("YOUR_API_KEY"), Some("YOUR_API_KEY")));
        assert!(matches!(result, Err(RemoteTableError::NotConfigured)));
    }
}

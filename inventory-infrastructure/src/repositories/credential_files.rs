use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::services::{OAuthClientConfig, OAuthToken};

#[derive(Debug, Deserialize)]
struct ClientSecretFile {
    #[serde(default)]
    installed: Option<OAuthClientConfig>,
    #[serde(default)]
    web: Option<OAuthClientConfig>,
}

pub struct CredentialFileRepository;

impl CredentialFileRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn load_client_secret(&self, path: &str) -> Result<OAuthClientConfig> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("unable to read client secret file {}", path))?;
        parse_client_secret(&content)
            .with_context(|| format!("unable to parse client secret file {}", path))
    }

    pub async fn load_token(&self, path: &str) -> Result<OAuthToken> {
        let content = fs::read_to_string(path).await?;
        let token: OAuthToken = serde_json::from_str(&content)?;
        Ok(token)
    }

    pub async fn save_token(&self, path: &str, token: &OAuthToken) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_vec(token)?;
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options
            .open(path)
            .await
            .with_context(|| format!("unable to cache oauth token at {}", path))?;
        file.write_all(&content).await?;
        file.flush().await?;
        Ok(())
    }
}

impl Default for CredentialFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_client_secret(content: &str) -> Result<OAuthClientConfig> {
    let file: ClientSecretFile = serde_json::from_str(content)?;
    let config = file
        .web
        .or(file.installed)
        .ok_or_else(|| anyhow!("missing 'installed' or 'web' client block"))?;
    if config.client_id.trim().is_empty() || config.token_uri.trim().is_empty() {
        return Err(anyhow!("client_id and token_uri are required"));
    }
    Ok(config)
}

use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use inventory_domain::RuntimeConfig;

use crate::config::validation::validate_column;
use crate::utils::resolve_path;

pub const CONFIG_ENV: &str = "INVENTORY_CONFIG";
pub const DEFAULT_SPREADSHEET_ID: &str = "1yXblmmqKpCuhtVYQ93O2lyJVEHuItLgr0dG8FqPll7g";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub spreadsheet_id: String,
    pub barcode_column: String,
    pub status_column: String,
    pub client_secret_path: String,
    pub token_path: String,
    pub sheets_api_base: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub api_base: String,
    pub client_secret_path: String,
    pub token_path: String,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            barcode_column: "H".to_string(),
            status_column: "C".to_string(),
            client_secret_path: "client_secret.json".to_string(),
            token_path: "token.json".to_string(),
            sheets_api_base: "https://sheets.googleapis.com".to_string(),
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.spreadsheet_id = self.spreadsheet_id.trim().to_string();
        self.barcode_column = self.barcode_column.trim().to_ascii_uppercase();
        self.status_column = self.status_column.trim().to_ascii_uppercase();
        self.sheets_api_base = self.sheets_api_base.trim().trim_end_matches('/').to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.client_secret_path = resolve_path(base, &self.client_secret_path);
        self.token_path = resolve_path(base, &self.token_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.spreadsheet_id.is_empty() {
            return Err(anyhow!("spreadsheet_id must not be empty"));
        }
        validate_column(&self.barcode_column)
            .map_err(|err| anyhow!("invalid barcode_column: {}", err))?;
        validate_column(&self.status_column)
            .map_err(|err| anyhow!("invalid status_column: {}", err))?;
        if self.client_secret_path.trim().is_empty() || self.token_path.trim().is_empty() {
            return Err(anyhow!("client_secret_path and token_path must not be empty"));
        }
        if !self.sheets_api_base.starts_with("http://") && !self.sheets_api_base.starts_with("https://") {
            return Err(anyhow!("sheets_api_base must be an http(s) url"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            spreadsheet_id: self.spreadsheet_id.clone(),
            barcode_column: self.barcode_column.clone(),
            status_column: self.status_column.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_sheets_config(&self) -> SheetsConfig {
        SheetsConfig {
            api_base: self.sheets_api_base.clone(),
            client_secret_path: self.client_secret_path.clone(),
            token_path: self.token_path.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("INVENTORY_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("INVENTORY_SPREADSHEET_ID") {
            self.spreadsheet_id = value;
        }
        if let Ok(value) = env::var("INVENTORY_BARCODE_COLUMN") {
            self.barcode_column = value;
        }
        if let Ok(value) = env::var("INVENTORY_STATUS_COLUMN") {
            self.status_column = value;
        }
        if let Ok(value) = env::var("INVENTORY_CLIENT_SECRET_PATH") {
            self.client_secret_path = value;
        }
        if let Ok(value) = env::var("INVENTORY_TOKEN_PATH") {
            self.token_path = value;
        }
        if let Ok(value) = env::var("INVENTORY_SHEETS_API_BASE") {
            self.sheets_api_base = value;
        }
        if let Ok(value) = env::var("INVENTORY_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("INVENTORY_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

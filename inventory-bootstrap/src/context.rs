use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use inventory_application::commands::barcode_index_commands;
use inventory_application::AppState;
use inventory_infrastructure::{
    AppConfig, CredentialFileRepository, GoogleOAuth, GoogleSheetsClient,
};

use crate::credentials::load_or_provision_token;

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let sheets_config = config.to_sheets_config();

        let credentials = CredentialFileRepository::new();
        let client_config = credentials
            .load_client_secret(&sheets_config.client_secret_path)
            .await?;
        let http = GoogleSheetsClient::http_client(sheets_config.request_timeout_seconds)?;
        let oauth = GoogleOAuth::new(http.clone(), client_config);
        let token =
            load_or_provision_token(&oauth, &credentials, &sheets_config.token_path).await?;

        let sheets = Arc::new(
            GoogleSheetsClient::new(http, &sheets_config.api_base, oauth, token)
                .with_token_path(&sheets_config.token_path),
        );
        let barcode_index =
            barcode_index_commands::build_barcode_index(sheets.as_ref(), &runtime_config).await;
        info!(
            spreadsheet = %runtime_config.spreadsheet_id,
            barcodes = barcode_index.len(),
            "spreadsheet client ready"
        );

        Ok(Self {
            state: AppState::new(runtime_config, sheets, barcode_index),
        })
    }
}

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{info, warn};

use inventory_domain::ports::SpreadsheetClient;

use crate::error::SheetsError;
use crate::repositories::CredentialFileRepository;
use crate::services::{GoogleOAuth, OAuthToken};
use crate::utils::{api_error_message, cell_to_string};

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: &'a str,
    major_dimension: &'static str,
    values: Vec<Vec<String>>,
}

pub struct GoogleSheetsClient {
    http: Client,
    api_base: String,
    oauth: GoogleOAuth,
    token: Mutex<OAuthToken>,
    token_path: Option<String>,
    credentials: CredentialFileRepository,
}

impl GoogleSheetsClient {
    pub fn new(http: Client, api_base: &str, oauth: GoogleOAuth, token: OAuthToken) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            oauth,
            token: Mutex::new(token),
            token_path: None,
            credentials: CredentialFileRepository::new(),
        }
    }

    pub fn with_token_path(mut self, path: &str) -> Self {
        self.token_path = Some(path.to_string());
        self
    }

    pub fn http_client(timeout_seconds: u64) -> Result<Client, SheetsError> {
        Ok(Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(1)))
            .build()?)
    }

    async fn bearer(&self) -> Result<String, SheetsError> {
        let mut token = self.token.lock().await;
        if token.is_expired(Utc::now()) {
            let refreshed = self.oauth.refresh(&token).await?;
            info!("oauth access token refreshed");
            if let Some(path) = &self.token_path {
                if let Err(err) = self.credentials.save_token(path, &refreshed).await {
                    warn!("failed to persist refreshed token to {}: {:#}", path, err);
                }
            }
            *token = refreshed;
        }
        Ok(token.access_token.clone())
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, SheetsError> {
        let mut url =
            Url::parse(&self.api_base).map_err(|err| SheetsError::Url(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Url(format!("{} cannot be a base", self.api_base)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);
        Ok(url)
    }
}

async fn check_status(response: Response) -> Result<Response, SheetsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SheetsError::Api {
        status: status.as_u16(),
        message: api_error_message(&body),
    })
}

#[async_trait]
impl SpreadsheetClient for GoogleSheetsClient {
    async fn read_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> anyhow::Result<Vec<Vec<String>>> {
        let url = self.values_url(spreadsheet_id, range)?;
        let bearer = self.bearer().await?;
        let response = self
            .http
            .get(url)
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(SheetsError::from)?;
        let body: ValueRange = check_status(response)
            .await?
            .json()
            .await
            .map_err(SheetsError::from)?;
        Ok(body
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    async fn update_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> anyhow::Result<()> {
        let url = self.values_url(spreadsheet_id, range)?;
        let bearer = self.bearer().await?;
        let body = ValueRangeBody {
            range,
            major_dimension: "ROWS",
            values,
        };
        let response = self
            .http
            .put(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(bearer)
            .json(&body)
            .send()
            .await
            .map_err(SheetsError::from)?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex as StdMutex};

    use axum::extract::{Path, Query, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Form, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;
    use crate::services::OAuthClientConfig;

    #[derive(Clone, Default)]
    struct Recorded {
        calls: Arc<StdMutex<Vec<(String, String, Option<String>, Value)>>>,
    }

    async fn read_values(
        State(recorded): State<Recorded>,
        Path((id, range)): Path<(String, String)>,
        headers: HeaderMap,
    ) -> (StatusCode, Json<Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        recorded
            .calls
            .lock()
            .unwrap()
            .push((id, range.clone(), None, json!(auth)));
        if range == "Z1" {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({"error": {"code": 403, "message": "The caller does not have permission"}})),
            );
        }
        (
            StatusCode::OK,
            Json(json!({
                "range": "Sheet1!H1:H4",
                "majorDimension": "ROWS",
                "values": [["Barcodes:"], [], [1042], ["BC100"]]
            })),
        )
    }

    async fn update_values(
        State(recorded): State<Recorded>,
        Path((id, range)): Path<(String, String)>,
        Query(query): Query<std::collections::HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        recorded.calls.lock().unwrap().push((
            id,
            range,
            query.get("valueInputOption").cloned(),
            body,
        ));
        Json(json!({"updatedCells": 3}))
    }

    async fn issue_token(
        State(recorded): State<Recorded>,
        Form(form): Form<std::collections::HashMap<String, String>>,
    ) -> Json<Value> {
        recorded.calls.lock().unwrap().push((
            "token".to_string(),
            form.get("grant_type").cloned().unwrap_or_default(),
            form.get("refresh_token").cloned(),
            json!(form.get("client_id")),
        ));
        Json(json!({
            "access_token": "fresh",
            "token_type": "Bearer",
            "expires_in": 3599
        }))
    }

    async fn serve(recorded: Recorded) -> String {
        let app = Router::new()
            .route("/token", post(issue_token))
            .route(
                "/v4/spreadsheets/:id/values/:range",
                get(read_values).put(update_values),
            )
            .with_state(recorded);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base: &str) -> GoogleSheetsClient {
        let http = GoogleSheetsClient::http_client(5).unwrap();
        let oauth = GoogleOAuth::new(
            http.clone(),
            OAuthClientConfig {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
                auth_uri: format!("{}/auth", base),
                token_uri: format!("{}/token", base),
                redirect_uris: Vec::new(),
            },
        );
        let token = OAuthToken {
            access_token: "test-access".to_string(),
            token_type: "Bearer".to_string(),
            refresh_token: None,
            expiry: None,
        };
        GoogleSheetsClient::new(http, base, oauth, token)
    }

    #[tokio::test]
    async fn reads_column_as_strings() {
        let recorded = Recorded::default();
        let base = serve(recorded.clone()).await;
        let grid = client(&base).read_range("sheet-1", "H:H").await.expect("read");

        assert_eq!(
            grid,
            vec![
                vec!["Barcodes:".to_string()],
                Vec::new(),
                vec!["1042".to_string()],
                vec!["BC100".to_string()],
            ]
        );
        let calls = recorded.calls.lock().unwrap().clone();
        assert_eq!(calls[0].0, "sheet-1");
        assert_eq!(calls[0].1, "H:H");
        assert_eq!(calls[0].3, json!("Bearer test-access"));
    }

    #[tokio::test]
    async fn update_sends_raw_row() {
        let recorded = Recorded::default();
        let base = serve(recorded.clone()).await;
        client(&base)
            .update_range(
                "sheet-1",
                "C5",
                vec![vec![
                    "Unavailable".to_string(),
                    "Alice".to_string(),
                    "Black".to_string(),
                ]],
            )
            .await
            .expect("update");

        let calls = recorded.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        let (id, range, input_option, body) = &calls[0];
        assert_eq!(id, "sheet-1");
        assert_eq!(range, "C5");
        assert_eq!(input_option.as_deref(), Some("RAW"));
        assert_eq!(
            body,
            &json!({
                "range": "C5",
                "majorDimension": "ROWS",
                "values": [["Unavailable", "Alice", "Black"]]
            })
        );
    }

    #[tokio::test]
    async fn api_errors_carry_google_message() {
        let base = serve(Recorded::default()).await;
        let err = client(&base)
            .read_range("sheet-1", "Z1")
            .await
            .expect_err("forbidden");
        let sheets_err = err.downcast_ref::<SheetsError>().expect("sheets error");
        match sheets_err {
            SheetsError::Api { status, message } => {
                assert_eq!(*status, 403);
                assert_eq!(message, "The caller does not have permission");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn expired_token_without_refresh_token_fails_before_request() {
        let recorded = Recorded::default();
        let base = serve(recorded.clone()).await;
        let client = client(&base);
        {
            let mut token = client.token.lock().await;
            token.expiry = Some(Utc::now() - chrono::Duration::minutes(5));
        }
        let err = client.read_range("sheet-1", "H:H").await.expect_err("auth");
        assert!(matches!(
            err.downcast_ref::<SheetsError>(),
            Some(SheetsError::Auth(_))
        ));
        assert!(recorded.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn expired_token_is_refreshed_and_persisted() {
        let recorded = Recorded::default();
        let base = serve(recorded.clone()).await;
        let dir = std::env::temp_dir().join(format!("inventory-refresh-{}", std::process::id()));
        let token_path = dir.join("token.json").to_string_lossy().to_string();
        let client = client(&base).with_token_path(&token_path);
        {
            let mut token = client.token.lock().await;
            token.refresh_token = Some("r".to_string());
            token.expiry = Some(Utc::now() - chrono::Duration::minutes(5));
        }

        client.read_range("sheet-1", "H:H").await.expect("read");

        let calls = recorded.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "token");
        assert_eq!(calls[0].1, "refresh_token");
        assert_eq!(calls[0].2.as_deref(), Some("r"));
        assert_eq!(calls[0].3, json!("id"));
        assert_eq!(calls[1].1, "H:H");
        assert_eq!(calls[1].3, json!("Bearer fresh"));

        let saved = CredentialFileRepository::new()
            .load_token(&token_path)
            .await
            .expect("saved token");
        assert_eq!(saved.access_token, "fresh");
        assert_eq!(saved.refresh_token.as_deref(), Some("r"));
        assert!(!saved.is_expired(Utc::now()));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::SheetsError;
use crate::utils::api_error_message;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const OOB_REDIRECT: &str = "urn:ietf:wg:oauth:2.0:oob";
// Seconds before the recorded expiry at which a token counts as expired.
const EXPIRY_SKEW_SECONDS: i64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

impl OAuthClientConfig {
    pub fn redirect_uri(&self) -> &str {
        self.redirect_uris
            .first()
            .map(String::as_str)
            .unwrap_or(OOB_REDIRECT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl OAuthToken {
    // A missing or pre-epoch expiry never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expiry.filter(|expiry| expiry.timestamp() > 0) {
            Some(expiry) => expiry - Duration::seconds(EXPIRY_SKEW_SECONDS) <= now,
            None => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_token(self, now: DateTime<Utc>, previous_refresh: Option<String>) -> OAuthToken {
        OAuthToken {
            access_token: self.access_token,
            token_type: self.token_type.unwrap_or_else(default_token_type),
            refresh_token: self.refresh_token.or(previous_refresh),
            expiry: self
                .expires_in
                .filter(|secs| *secs > 0)
                .map(|secs| now + Duration::seconds(secs)),
        }
    }
}

#[derive(Clone)]
pub struct GoogleOAuth {
    http: Client,
    config: OAuthClientConfig,
}

impl GoogleOAuth {
    pub fn new(http: Client, config: OAuthClientConfig) -> Self {
        Self { http, config }
    }

    pub fn authorization_url(&self, state: &str) -> Result<String, SheetsError> {
        let url = Url::parse_with_params(
            &self.config.auth_uri,
            &[
                ("access_type", "offline"),
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri()),
                ("response_type", "code"),
                ("scope", SPREADSHEETS_SCOPE),
                ("state", state),
            ],
        )
        .map_err(|err| SheetsError::Url(err.to_string()))?;
        Ok(url.to_string())
    }

    pub async fn exchange_code(&self, code: &str) -> Result<OAuthToken, SheetsError> {
        let response = self
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code.trim()),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_uri()),
            ])
            .await?;
        Ok(response.into_token(Utc::now(), None))
    }

    pub async fn refresh(&self, token: &OAuthToken) -> Result<OAuthToken, SheetsError> {
        let refresh_token = token
            .refresh_token
            .as_deref()
            .ok_or_else(|| SheetsError::Auth("token expired and has no refresh_token".to_string()))?;
        let response = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .await?;
        Ok(response.into_token(Utc::now(), token.refresh_token.clone()))
    }

    async fn request_token(&self, params: &[(&str, &str)]) -> Result<TokenResponse, SheetsError> {
        let response = self
            .http
            .post(&self.config.token_uri)
            .form(params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Auth(format!(
                "token endpoint responded {}: {}",
                status.as_u16(),
                api_error_message(&body)
            )));
        }
        Ok(response.json::<TokenResponse>().await?)
    }
}

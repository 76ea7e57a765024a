use anyhow::{anyhow, Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use inventory_infrastructure::{CredentialFileRepository, GoogleOAuth, OAuthToken};

const AUTH_STATE: &str = "state-token";

pub async fn load_or_provision_token(
    oauth: &GoogleOAuth,
    credentials: &CredentialFileRepository,
    token_path: &str,
) -> Result<OAuthToken> {
    match credentials.load_token(token_path).await {
        Ok(token) => Ok(token),
        Err(err) => {
            warn!("no usable token at {} ({:#}), starting authorization", token_path, err);
            let input = BufReader::new(tokio::io::stdin());
            provision_token(oauth, credentials, token_path, input).await
        }
    }
}

pub async fn provision_token<R>(
    oauth: &GoogleOAuth,
    credentials: &CredentialFileRepository,
    token_path: &str,
    mut input: R,
) -> Result<OAuthToken>
where
    R: AsyncBufRead + Unpin,
{
    let url = oauth.authorization_url(AUTH_STATE)?;
    println!(
        "Go to the following link in your browser then type the authorization code:\n{}",
        url
    );

    let mut code = String::new();
    input
        .read_line(&mut code)
        .await
        .context("unable to read authorization code")?;
    let code = code.trim();
    if code.is_empty() {
        return Err(anyhow!("no authorization code entered"));
    }

    let token = oauth
        .exchange_code(code)
        .await
        .context("unable to retrieve token from web")?;
    info!("saving credential file to {}", token_path);
    credentials.save_token(token_path, &token).await?;
    Ok(token)
}

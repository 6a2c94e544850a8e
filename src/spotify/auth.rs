use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    Error, Res, config,
    management::{CredentialStore, TokenManager},
    server::start_api_server,
    spotify::client::SpotifyClient,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

pub const SCOPE_FOLLOW_READ: &str = "user-follow-read";
pub const SCOPE_LIBRARY_READ: &str = "user-library-read";
pub const SCOPE_LIBRARY_MODIFY: &str = "user-library-modify";
pub const SCOPE_TOP_READ: &str = "user-top-read";

/// Seconds to wait for the user to finish the browser authorization.
const AUTHORIZATION_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    scope: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

impl From<TokenResponse> for Token {
    fn from(res: TokenResponse) -> Self {
        Token {
            access_token: res.access_token,
            refresh_token: res.refresh_token,
            scope: res.scope,
            expires_in: res.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Hands out authenticated clients for a user.
///
/// A stored token is reused while it carries the requested scope; an
/// expired one is refreshed first. Without a usable token the OAuth 2.0
/// PKCE flow runs in the browser. Every new or refreshed token is written
/// back to the credential store.
pub struct Authenticator<C: CredentialStore> {
    store: C,
}

impl<C: CredentialStore> Authenticator<C> {
    pub fn new(store: C) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Returns a client for `username` whose token carries `scope`.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`Error::Auth`] naming the user.
    pub async fn client(&self, username: &str, scope: &str) -> Res<SpotifyClient> {
        self.token(username, scope)
            .await
            .map(|token| SpotifyClient::new(token.access_token))
            .map_err(|e| match e {
                Error::Auth { .. } => e,
                other => Error::Auth {
                    username: username.to_string(),
                    reason: other.to_string(),
                },
            })
    }

    async fn token(&self, username: &str, scope: &str) -> Res<Token> {
        if let Some(token) = self.store.load(username).await? {
            let mut manager = TokenManager::new(token);
            if manager.covers(scope) {
                if !manager.is_expired() {
                    return Ok(manager.current_token().clone());
                }

                match manager.refresh().await {
                    Ok(()) => {
                        self.store.store(username, manager.current_token()).await?;
                        return Ok(manager.current_token().clone());
                    }
                    Err(e) => warning!("Cannot refresh token for {}: {}", username, e),
                }
            }
        }

        let token = authorize(username).await?;
        self.store.store(username, &token).await?;
        Ok(token)
    }
}

/// Runs the complete OAuth 2.0 PKCE authorization flow in the browser.
///
/// 1. Generates the code verifier and its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser
/// 4. Waits for the callback handler to exchange the code for a token
///
/// The configured scopes are requested all at once so that a single
/// authorization serves every command of a chain.
pub async fn authorize(username: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(Some(PkceToken {
        code_verifier,
        token: None,
    })));

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = client_id,
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = config::spotify_scope().replace(' ', "%20")
    );

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    match token {
        Some(t) => {
            success!("Authenticated as {}", username);
            Ok(t)
        }
        None => Err(Error::Auth {
            username: username.to_string(),
            reason: "authorization failed or timed out".to_string(),
        }),
    }
}

/// Polls the shared state once a second until the callback stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(AUTHORIZATION_TIMEOUT_SECS);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a new access token.
pub async fn refresh_token(refresh_token: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json = res.json::<TokenResponse>().await?;
    Ok(json.into())
}

/// Exchanges the authorization code from the callback for a token.
///
/// `verifier` must be the code verifier whose challenge started the flow.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri();

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json = res.json::<TokenResponse>().await?;
    Ok(json.into())
}

//! Configuration management for Powerspot.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, endpoints, the default username
//! and the local callback server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Error, Res};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "user-follow-read user-library-read user-library-modify user-top-read";
pub const DEFAULT_MARKET: &str = "FR";

/// Returns the application directory inside the platform local data directory.
///
/// - Linux: `~/.local/share/powerspot`
/// - macOS: `~/Library/Application Support/powerspot`
/// - Windows: `%LOCALAPPDATA%/powerspot`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("powerspot");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the application directory if it doesn't exist and loads
/// `powerspot/.env` from it. A missing `.env` file is not an error: every
/// setting can also come from the process environment, and most have
/// defaults. Variables already present in the environment are not overridden.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or if an existing
/// `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use powerspot::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }
    Ok(())
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the default Spotify username taken from `SPOTIFY_USER`, if any.
pub fn spotify_user() -> Option<String> {
    env::var("SPOTIFY_USER")
        .ok()
        .filter(|u| !u.trim().is_empty())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves `SPOTIFY_API_AUTH_CLIENT_ID`, the client ID obtained when
/// registering the application with Spotify's developer platform. Only
/// needed when a new authorization or a token refresh happens.
///
/// # Errors
///
/// Returns [`Error::Config`] when the variable is not set.
pub fn spotify_client_id() -> Res<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .map_err(|_| Error::Config("SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string()))
}

/// Returns the address the local OAuth callback server binds to.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify OAuth redirect URI.
///
/// Must match the redirect URI registered in the Spotify application
/// settings and point at [`server_addr`].
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the space separated scopes requested during authorization.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the market used when looking up an artist's albums.
pub fn spotify_market() -> String {
    var_or("SPOTIFY_MARKET", DEFAULT_MARKET)
}

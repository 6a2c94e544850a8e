use chrono::Utc;

use crate::{Res, spotify, types::Token};

/// Seconds before the real expiry at which a token counts as expired.
pub const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Whether the token was granted `scope`.
    pub fn covers(&self, scope: &str) -> bool {
        self.token.scope.split_whitespace().any(|s| s == scope)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        let expires_at = self.token.obtained_at + self.token.expires_in;
        now + EXPIRY_MARGIN_SECS >= expires_at
    }

    /// Replaces the token with a refreshed one.
    ///
    /// Spotify may omit the refresh token from the response, in which case
    /// the current one is kept.
    pub async fn refresh(&mut self) -> Res<()> {
        let mut fresh = spotify::auth::refresh_token(&self.token.refresh_token).await?;
        if fresh.refresh_token.is_empty() {
            fresh.refresh_token = self.token.refresh_token.clone();
        }
        self.token = fresh;
        Ok(())
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }
}

use std::collections::HashMap;

use crate::{
    Res, config,
    management::CredentialStore,
    spotify::{
        albums, artists,
        auth::{
            Authenticator, SCOPE_FOLLOW_READ, SCOPE_LIBRARY_MODIFY, SCOPE_LIBRARY_READ,
            SCOPE_TOP_READ,
        },
        client::SpotifyClient,
        releases::{self, ReleaseSource},
        tracks,
    },
    types::{Album, Artist, Term, Track},
};

/// Everything a chain can ask of the remote music library.
#[allow(async_fn_in_trait)]
pub trait Library: ReleaseSource {
    /// Followed artists, sorted case-insensitively by name.
    async fn followed_artists(&mut self) -> Res<Vec<Artist>>;

    async fn saved_albums(&mut self) -> Res<Vec<Album>>;

    async fn saved_tracks(&mut self) -> Res<Vec<Track>>;

    async fn top_artists(&mut self, term: Term) -> Res<Vec<Artist>>;

    async fn top_tracks(&mut self, term: Term) -> Res<Vec<Track>>;

    async fn save_albums(&mut self, albums: &[Album]) -> Res<()>;
}

/// The Spotify account of one user.
///
/// Clients are obtained on first use of a scope and reused for the rest of
/// the chain.
pub struct SpotifyLibrary<C: CredentialStore> {
    username: String,
    market: String,
    auth: Authenticator<C>,
    clients: HashMap<&'static str, SpotifyClient>,
}

impl<C: CredentialStore> SpotifyLibrary<C> {
    pub fn new(username: impl Into<String>, auth: Authenticator<C>) -> Self {
        Self {
            username: username.into(),
            market: config::spotify_market(),
            auth,
            clients: HashMap::new(),
        }
    }

    async fn client(&mut self, scope: &'static str) -> Res<SpotifyClient> {
        if let Some(client) = self.clients.get(scope) {
            return Ok(client.clone());
        }

        let client = self.auth.client(&self.username, scope).await?;
        self.clients.insert(scope, client.clone());
        Ok(client)
    }
}

impl<C: CredentialStore> ReleaseSource for SpotifyLibrary<C> {
    async fn latest_album(&mut self, artist_id: &str) -> Res<Option<Album>> {
        let client = self.client(SCOPE_FOLLOW_READ).await?;
        releases::latest_album(&client, artist_id, &self.market).await
    }
}

impl<C: CredentialStore> Library for SpotifyLibrary<C> {
    async fn followed_artists(&mut self) -> Res<Vec<Artist>> {
        let client = self.client(SCOPE_FOLLOW_READ).await?;
        artists::followed_artists(&client).await
    }

    async fn saved_albums(&mut self) -> Res<Vec<Album>> {
        let client = self.client(SCOPE_LIBRARY_READ).await?;
        albums::saved_albums(&client).await
    }

    async fn saved_tracks(&mut self) -> Res<Vec<Track>> {
        let client = self.client(SCOPE_LIBRARY_READ).await?;
        tracks::saved_tracks(&client).await
    }

    async fn top_artists(&mut self, term: Term) -> Res<Vec<Artist>> {
        let client = self.client(SCOPE_TOP_READ).await?;
        artists::top_artists(&client, term).await
    }

    async fn top_tracks(&mut self, term: Term) -> Res<Vec<Track>> {
        let client = self.client(SCOPE_TOP_READ).await?;
        tracks::top_tracks(&client, term).await
    }

    async fn save_albums(&mut self, to_save: &[Album]) -> Res<()> {
        let client = self.client(SCOPE_LIBRARY_MODIFY).await?;
        albums::save_albums(&client, to_save).await
    }
}

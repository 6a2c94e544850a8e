use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{Res, config};

/// An authenticated handle on the Spotify Web API.
///
/// Every API operation takes one of these explicitly instead of looking up
/// a token on its own; [`crate::spotify::auth::Authenticator`] hands them out.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_api_url(access_token, config::spotify_apiurl())
    }

    pub fn with_api_url(access_token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Absolute URL of an API path such as `/me/albums`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// GETs an absolute URL and decodes the JSON body.
    ///
    /// Error statuses are turned into errors; nothing is retried.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Res<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    /// GETs an API path with query parameters and decodes the JSON body.
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Res<T> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    /// PUTs a comma separated `ids` query to an API path.
    pub async fn put_ids(&self, path: &str, ids: &[&str]) -> Res<()> {
        self.http
            .put(self.url(path))
            .query(&[("ids", ids.join(","))])
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONTENT_LENGTH, 0)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

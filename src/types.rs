use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// An artist as returned by the followed and top artists endpoints.
///
/// Only `id` and `name` are read; every other field of the payload is kept
/// in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The simplified artist embedded in albums and tracks.
///
/// Ids are `null` for the artists of local files, hence `Option`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Album {
    /// Name of the first credited artist, empty when the album credits nobody.
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(|a| a.name.as_str()).unwrap_or("")
    }
}

/// The simplified album embedded in tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A track as returned by the saved and top tracks endpoints.
///
/// Local files added to the library come back with `"id": null` on the
/// track and on its album and artists; the `null` is written back as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: AlbumRef,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(|a| a.name.as_str()).unwrap_or("")
    }
}

/// Spotify's generic paging object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedArtistsResponse {
    pub artists: Paging<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbum {
    pub added_at: Option<String>,
    pub album: Album,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub added_at: Option<String>,
    pub track: Track,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Date")]
    pub date: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Track")]
    pub track: String,
    #[tabled(rename = "Album")]
    pub album: String,
}

/// Ranking window of the top artists and top tracks endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Term {
    Short,
    Medium,
    #[default]
    Long,
}

impl Term {
    pub fn time_range(&self) -> &'static str {
        match self {
            Term::Short => "short_term",
            Term::Medium => "medium_term",
            Term::Long => "long_term",
        }
    }
}

/// Lower bound for new releases, before it is resolved against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    Date(NaiveDate),
    Weeks(u32),
}

#![allow(dead_code)]

use std::collections::HashMap;

use serde_json::Map;

use powerspot::{
    Error, Res,
    spotify::{Library, ReleaseSource},
    types::{Album, AlbumRef, Artist, ArtistRef, Term, Track},
};

pub fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        extra: Map::new(),
    }
}

pub fn album(id: &str, artist_name: &str, name: &str, release_date: &str) -> Album {
    Album {
        id: Some(id.to_string()),
        name: name.to_string(),
        release_date: release_date.to_string(),
        artists: vec![ArtistRef {
            id: Some(format!("{}_artist", id)),
            name: artist_name.to_string(),
            extra: Map::new(),
        }],
        extra: Map::new(),
    }
}

pub fn track(id: &str, artist_name: &str, name: &str, album_name: &str) -> Track {
    Track {
        id: Some(id.to_string()),
        name: name.to_string(),
        artists: vec![ArtistRef {
            id: Some(format!("{}_artist", id)),
            name: artist_name.to_string(),
            extra: Map::new(),
        }],
        album: AlbumRef {
            id: Some(format!("{}_album", id)),
            name: album_name.to_string(),
            extra: Map::new(),
        },
        extra: Map::new(),
    }
}

/// In-memory library recording what was saved.
#[derive(Debug, Default)]
pub struct FakeLibrary {
    pub followed: Vec<Artist>,
    pub albums: Vec<Album>,
    pub tracks: Vec<Track>,
    pub top_artists: Vec<Artist>,
    pub top_tracks: Vec<Track>,
    /// Latest album per artist id.
    pub latest: HashMap<String, Album>,
    /// Artist ids whose lookup fails.
    pub failing: Vec<String>,
    pub saved: Vec<Album>,
    pub terms: Vec<Term>,
    pub lookups: Vec<String>,
}

impl FakeLibrary {
    pub fn with_latest(mut self, artist_id: &str, album: Album) -> Self {
        self.latest.insert(artist_id.to_string(), album);
        self
    }
}

impl ReleaseSource for FakeLibrary {
    async fn latest_album(&mut self, artist_id: &str) -> Res<Option<Album>> {
        self.lookups.push(artist_id.to_string());
        if self.failing.iter().any(|id| id == artist_id) {
            return Err(Error::Auth {
                username: "tester".to_string(),
                reason: "refused".to_string(),
            });
        }
        Ok(self.latest.get(artist_id).cloned())
    }
}

impl Library for FakeLibrary {
    async fn followed_artists(&mut self) -> Res<Vec<Artist>> {
        Ok(self.followed.clone())
    }

    async fn saved_albums(&mut self) -> Res<Vec<Album>> {
        Ok(self.albums.clone())
    }

    async fn saved_tracks(&mut self) -> Res<Vec<Track>> {
        Ok(self.tracks.clone())
    }

    async fn top_artists(&mut self, term: Term) -> Res<Vec<Artist>> {
        self.terms.push(term);
        Ok(self.top_artists.clone())
    }

    async fn top_tracks(&mut self, term: Term) -> Res<Vec<Track>> {
        self.terms.push(term);
        Ok(self.top_tracks.clone())
    }

    async fn save_albums(&mut self, albums: &[Album]) -> Res<()> {
        self.saved.extend_from_slice(albums);
        Ok(())
    }
}

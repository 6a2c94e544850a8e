//! # Export Module
//!
//! Turns the records produced by a chain into text. Two representations
//! exist for the value a chain exports:
//!
//! - **JSON**: the raw records, exactly as the remote API delivered them
//!   (see [`Export::to_json`]).
//! - **Formatted text**: bullet lists or aligned tables produced by the
//!   [`format`] functions, optionally headed by a date marker line
//!   (`%date YYYY-MM-DD`).
//!
//! The [`marker`] submodule reads such a date marker back so that a later
//! run can ask for everything released since the previous export.

pub mod format;
pub mod marker;

pub use format::{
    Formatter, date_marker, format_albums, format_artists, tabulate_albums, tabulate_tracks,
};
pub use marker::{parse_date_marker, read_date};

use crate::{
    Res,
    types::{Album, Artist, Track},
};

/// The value most recently produced by a chain, tagged with its record kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Export {
    Artists(Vec<Artist>),
    Albums(Vec<Album>),
    Tracks(Vec<Track>),
}

impl Export {
    /// Formatter used for this value unless a command picks another one.
    pub fn default_formatter(&self) -> Formatter {
        match self {
            Export::Artists(_) => Formatter::ArtistList,
            Export::Albums(_) => Formatter::AlbumTable,
            Export::Tracks(_) => Formatter::TrackTable,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Export::Artists(a) => a.len(),
            Export::Albums(a) => a.len(),
            Export::Tracks(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encodes the records as a JSON array.
    pub fn to_json(&self) -> Res<String> {
        let json = match self {
            Export::Artists(a) => serde_json::to_string(a)?,
            Export::Albums(a) => serde_json::to_string(a)?,
            Export::Tracks(t) => serde_json::to_string(t)?,
        };
        Ok(json)
    }

    /// Renders the records through `formatter`.
    ///
    /// A formatter that does not fit the record kind falls back to the
    /// kind's default layout.
    pub fn render(&self, formatter: Formatter, print_date: bool) -> String {
        match (self, formatter) {
            (Export::Albums(albums), Formatter::AlbumList) => format_albums(albums, print_date),
            (Export::Albums(albums), _) => tabulate_albums(albums, print_date),
            (Export::Artists(artists), _) => format_artists(artists, print_date),
            (Export::Tracks(tracks), _) => tabulate_tracks(tracks, print_date),
        }
    }
}

use crate::{
    Error, Res,
    export::{Export, Formatter},
    types::{Album, Artist, Track},
};

/// A named piece of state a step can provide or need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Artists,
    Albums,
    Tracks,
    Export,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Artists => "artists",
            Slot::Albums => "albums",
            Slot::Tracks => "tracks",
            Slot::Export => "a result to export",
        }
    }
}

/// State shared by the steps of one chain.
///
/// Each producing step fills its own slot and replaces `export` with the
/// same records, together with the formatter that fits them. A slot, once
/// filled, stays filled until a later step of the same kind overwrites it.
#[derive(Debug, Default)]
pub struct Context {
    artists: Option<Vec<Artist>>,
    albums: Option<Vec<Album>>,
    tracks: Option<Vec<Track>>,
    export: Option<Export>,
    last: Option<Formatter>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_artists(&mut self, artists: Vec<Artist>) {
        self.set_export(Export::Artists(artists.clone()));
        self.artists = Some(artists);
    }

    pub fn set_albums(&mut self, albums: Vec<Album>) {
        self.set_export(Export::Albums(albums.clone()));
        self.albums = Some(albums);
    }

    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.set_export(Export::Tracks(tracks.clone()));
        self.tracks = Some(tracks);
    }

    fn set_export(&mut self, export: Export) {
        self.last = Some(export.default_formatter());
        self.export = Some(export);
    }

    pub fn has(&self, slot: Slot) -> bool {
        match slot {
            Slot::Artists => self.artists.is_some(),
            Slot::Albums => self.albums.is_some(),
            Slot::Tracks => self.tracks.is_some(),
            Slot::Export => self.export.is_some(),
        }
    }

    pub fn artists(&self) -> Option<&[Artist]> {
        self.artists.as_deref()
    }

    pub fn albums(&self) -> Option<&[Album]> {
        self.albums.as_deref()
    }

    pub fn tracks(&self) -> Option<&[Track]> {
        self.tracks.as_deref()
    }

    pub fn export(&self) -> Option<&Export> {
        self.export.as_ref()
    }

    /// Formatter that applies to [`Context::export`].
    pub fn last(&self) -> Option<Formatter> {
        self.last
    }

    pub fn require_artists(&self, step: &'static str) -> Res<&[Artist]> {
        self.artists().ok_or(Error::MissingContext {
            step,
            key: Slot::Artists.as_str(),
        })
    }

    pub fn require_albums(&self, step: &'static str) -> Res<&[Album]> {
        self.albums().ok_or(Error::MissingContext {
            step,
            key: Slot::Albums.as_str(),
        })
    }

    /// The export together with its formatter.
    pub fn require_export(&self, step: &'static str) -> Res<(&Export, Formatter)> {
        match (&self.export, self.last) {
            (Some(export), Some(last)) => Ok((export, last)),
            _ => Err(Error::MissingContext {
                step,
                key: Slot::Export.as_str(),
            }),
        }
    }
}

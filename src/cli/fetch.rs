use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    Res,
    chain::Context,
    info,
    spotify::Library,
    types::{Album, Artist, Term, Track},
};

/// Reads a JSON array of records, as written by `write <file>.json`.
pub async fn load_records<T: DeserializeOwned>(path: &Path) -> Res<Vec<T>> {
    let content = async_fs::read_to_string(path).await?;
    let records = serde_json::from_str(&content)?;
    Ok(records)
}

pub async fn artists<L: Library>(ctx: &mut Context, library: &mut L, file: Option<&Path>) -> Res<()> {
    let artists: Vec<Artist> = match file {
        Some(path) => load_records(path).await?,
        None => library.followed_artists().await?,
    };

    info!("{} artists", artists.len());
    ctx.set_artists(artists);
    Ok(())
}

pub async fn albums<L: Library>(ctx: &mut Context, library: &mut L, file: Option<&Path>) -> Res<()> {
    let albums: Vec<Album> = match file {
        Some(path) => load_records(path).await?,
        None => library.saved_albums().await?,
    };

    info!("{} albums", albums.len());
    ctx.set_albums(albums);
    Ok(())
}

pub async fn tracks<L: Library>(ctx: &mut Context, library: &mut L, file: Option<&Path>) -> Res<()> {
    let tracks: Vec<Track> = match file {
        Some(path) => load_records(path).await?,
        None => library.saved_tracks().await?,
    };

    info!("{} tracks", tracks.len());
    ctx.set_tracks(tracks);
    Ok(())
}

pub async fn top_artists<L: Library>(ctx: &mut Context, library: &mut L, term: Term) -> Res<()> {
    let artists = library.top_artists(term).await?;
    ctx.set_artists(artists);
    Ok(())
}

pub async fn top_tracks<L: Library>(ctx: &mut Context, library: &mut L, term: Term) -> Res<()> {
    let tracks = library.top_tracks(term).await?;
    ctx.set_tracks(tracks);
    Ok(())
}

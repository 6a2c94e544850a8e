use crate::{
    Res,
    spotify::{
        client::SpotifyClient,
        pagination::{ApiPages, drain},
    },
    types::{Album, Paging, SavedAlbum},
    warning,
};

const SAVED_PAGE_LIMIT: u32 = 50;
/// Maximum number of ids `PUT /me/albums` accepts per request.
pub const SAVE_BATCH_SIZE: usize = 20;

/// Retrieves every album saved in the user's library, in library order.
///
/// The endpoint wraps each album as `{added_at, album}`; only the album is
/// returned.
pub async fn saved_albums(client: &SpotifyClient) -> Res<Vec<Album>> {
    let first = format!(
        "{uri}?limit={limit}",
        uri = client.url("/me/albums"),
        limit = SAVED_PAGE_LIMIT
    );

    let mut pages = ApiPages::<Paging<SavedAlbum>>::new(client, first);
    let saved = drain(&mut pages, "saved albums").await?;
    Ok(saved.into_iter().map(|s| s.album).collect())
}

/// Saves albums to the user's library in batches of [`SAVE_BATCH_SIZE`].
///
/// Albums without an id cannot be saved and are skipped. Batches already
/// sent stay saved when a later batch fails.
pub async fn save_albums(client: &SpotifyClient, albums: &[Album]) -> Res<()> {
    let ids: Vec<&str> = albums.iter().filter_map(|a| a.id.as_deref()).collect();
    if ids.len() < albums.len() {
        warning!("Skipping {} albums without id", albums.len() - ids.len());
    }

    for chunk in ids.chunks(SAVE_BATCH_SIZE) {
        client.put_ids("/me/albums", chunk).await?;
    }
    Ok(())
}

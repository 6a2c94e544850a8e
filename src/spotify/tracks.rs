use crate::{
    Res,
    spotify::{
        artists::TOP_LIMIT,
        client::SpotifyClient,
        pagination::{ApiPages, drain},
    },
    types::{Paging, SavedTrack, Term, Track},
};

const SAVED_PAGE_LIMIT: u32 = 50;

/// Retrieves every track saved in the user's library, in library order.
pub async fn saved_tracks(client: &SpotifyClient) -> Res<Vec<Track>> {
    let first = format!(
        "{uri}?limit={limit}",
        uri = client.url("/me/tracks"),
        limit = SAVED_PAGE_LIMIT
    );

    let mut pages = ApiPages::<Paging<SavedTrack>>::new(client, first);
    let saved = drain(&mut pages, "saved tracks").await?;
    Ok(saved.into_iter().map(|s| s.track).collect())
}

/// Retrieves the user's top tracks for the given ranking window.
pub async fn top_tracks(client: &SpotifyClient, term: Term) -> Res<Vec<Track>> {
    let page = client
        .get_query::<Paging<Track>>(
            "/me/top/tracks",
            &[
                ("time_range", term.time_range().to_string()),
                ("limit", TOP_LIMIT.to_string()),
            ],
        )
        .await?;

    Ok(page.items)
}

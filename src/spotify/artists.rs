use crate::{
    Res,
    spotify::{
        client::SpotifyClient,
        pagination::{ApiPages, drain},
    },
    types::{Artist, FollowedArtistsResponse, Paging, Term},
    utils,
};

/// Maximum page size of the followed artists endpoint.
const FOLLOWED_PAGE_LIMIT: u32 = 50;
/// Number of top artists requested.
pub const TOP_LIMIT: u32 = 20;

/// Retrieves every artist the user follows, sorted by name.
///
/// Walks `GET /me/following?type=artist` page by page (cursor based, up to
/// 50 artists per page) and sorts the complete list case-insensitively by
/// name once all pages are in.
///
/// # Errors
///
/// The first failing page aborts the whole fetch.
pub async fn followed_artists(client: &SpotifyClient) -> Res<Vec<Artist>> {
    let first = format!(
        "{uri}?type=artist&limit={limit}",
        uri = client.url("/me/following"),
        limit = FOLLOWED_PAGE_LIMIT
    );

    let mut pages = ApiPages::<FollowedArtistsResponse>::new(client, first);
    let mut artists = drain(&mut pages, "followed artists").await?;
    utils::sort_artists_by_name(&mut artists);
    Ok(artists)
}

/// Retrieves the user's top artists for the given ranking window.
///
/// Only the first page is read.
pub async fn top_artists(client: &SpotifyClient, term: Term) -> Res<Vec<Artist>> {
    let page = client
        .get_query::<Paging<Artist>>(
            "/me/top/artists",
            &[
                ("time_range", term.time_range().to_string()),
                ("limit", TOP_LIMIT.to_string()),
            ],
        )
        .await?;

    Ok(page.items)
}

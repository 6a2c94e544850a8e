use chrono::NaiveDateTime;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error, Res,
    spotify::client::SpotifyClient,
    types::{Album, Artist, Paging},
    utils,
};

/// Looks up the most recent album of an artist.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource {
    /// Returns the newest release of type `album`, or `None` when the artist
    /// has no album at all.
    async fn latest_album(&mut self, artist_id: &str) -> Res<Option<Album>>;
}

/// Retrieves the newest album of an artist from the Spotify Web API.
///
/// Uses `GET /artists/{id}/albums` with `include_groups=album` and
/// `limit=1`, so singles and compilations never show up, and a newer single
/// does not hide an older album.
pub async fn latest_album(
    client: &SpotifyClient,
    artist_id: &str,
    market: &str,
) -> Res<Option<Album>> {
    let page = client
        .get_query::<Paging<Album>>(
            &format!("/artists/{}/albums", artist_id),
            &[
                ("include_groups", "album".to_string()),
                ("market", market.to_string()),
                ("limit", "1".to_string()),
            ],
        )
        .await?;

    Ok(page.items.into_iter().next())
}

/// Returns the latest album of each artist when it was released after
/// `cutoff`.
///
/// Artists are visited in input order and the result keeps that order.
/// Artists without albums are skipped. Release dates are read as
/// `YYYY-MM-DD` or as a bare year; a date in any other shape aborts the
/// whole pass with [`Error::ReleaseDate`].
pub async fn new_releases<S: ReleaseSource>(
    source: &mut S,
    artists: &[Artist],
    cutoff: NaiveDateTime,
) -> Res<Vec<Album>> {
    let pb = ProgressBar::new(artists.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:30.blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb.set_message("Fetching new releases");

    let mut releases = Vec::new();

    for artist in artists {
        pb.inc(1);

        let album = match source.latest_album(&artist.id).await {
            Ok(Some(album)) => album,
            Ok(None) => continue,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        let Some(release_date) = utils::parse_release_date(&album.release_date) else {
            pb.finish_and_clear();
            return Err(Error::ReleaseDate {
                album: format!("{} - {}", album.primary_artist(), album.name),
                value: album.release_date.clone(),
            });
        };

        if release_date.and_time(chrono::NaiveTime::MIN) > cutoff {
            releases.push(album);
        }
    }

    pb.finish_and_clear();
    Ok(releases)
}

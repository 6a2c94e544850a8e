use chrono::NaiveDate;
use tabled::{Table, settings::Style};

use crate::{
    types::{Album, AlbumTableRow, Artist, Track, TrackTableRow},
    utils,
};

/// Names one of the text layouts below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    ArtistList,
    AlbumList,
    AlbumTable,
    TrackTable,
}

/// Returns the date marker line for `date`, newline included.
pub fn date_marker(date: NaiveDate) -> String {
    format!("%date {}\n", date.format(utils::DATE_FORMAT))
}

fn output_date(print_date: bool) -> String {
    if print_date {
        date_marker(utils::today())
    } else {
        String::new()
    }
}

/// One `- {name}` line per artist.
pub fn format_artists(artists: &[Artist], print_date: bool) -> String {
    let mut output = output_date(print_date);
    for artist in artists {
        output.push_str(&format!("- {}\n", artist.name));
    }
    output
}

/// One `- {artist} - {album} - {release date}` line per album.
pub fn format_albums(albums: &[Album], print_date: bool) -> String {
    let mut output = output_date(print_date);
    for album in albums {
        output.push_str(&format!(
            "- {} - {} - {}\n",
            album.primary_artist(),
            album.name,
            album.release_date
        ));
    }
    output
}

/// Albums as an aligned `Artist | Album | Date` table.
///
/// Cell contents are not escaped: a name containing `|` shifts the visual
/// columns of its row.
pub fn tabulate_albums(albums: &[Album], print_date: bool) -> String {
    let rows: Vec<AlbumTableRow> = albums
        .iter()
        .map(|a| AlbumTableRow {
            artist: a.primary_artist().to_string(),
            album: a.name.clone(),
            date: a.release_date.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}{}\n", output_date(print_date), table)
}

/// Tracks as an aligned `Artist | Track | Album` table.
pub fn tabulate_tracks(tracks: &[Track], print_date: bool) -> String {
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            artist: t.primary_artist().to_string(),
            track: t.name.clone(),
            album: t.album.name.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}{}\n", output_date(print_date), table)
}

use std::path::Path;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    Error, Res,
    types::{Artist, Cutoff},
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Parses a release date given either as `YYYY-MM-DD` or as a bare `YYYY`.
///
/// A bare year maps to January 1 of that year. Anything else, including the
/// month precision `YYYY-MM`, yields `None`.
pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if let Ok(d) = NaiveDate::parse_from_str(date, DATE_FORMAT) {
        return Some(d);
    }

    if date.len() == 4 && date.chars().all(|c| c.is_ascii_digit()) {
        return date
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    None
}

pub fn sort_artists_by_name(artists: &mut Vec<Artist>) {
    artists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Turns a cutoff into the instant releases must be strictly after.
///
/// A week count reaching before the earliest representable date is
/// [`Error::Cutoff`].
pub fn resolve_cutoff(cutoff: Cutoff, now: NaiveDateTime) -> Res<NaiveDateTime> {
    match cutoff {
        Cutoff::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
        Cutoff::Weeks(weeks) => Duration::try_weeks(weeks as i64)
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or(Error::Cutoff { weeks }),
    }
}

pub fn is_wiki_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("wiki")
}

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use powerspot::Error;
use powerspot::types::{Artist, Cutoff};
use powerspot::utils::*;
use serde_json::Map;

fn create_test_artist(name: &str) -> Artist {
    Artist {
        id: format!("{}_id", name),
        name: name.to_string(),
        extra: Map::new(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA256 is 32 bytes, 43 characters in base64 without padding
    assert_eq!(challenge.len(), 43);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_value() {
    // RFC 7636, appendix B
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_parse_release_date_full() {
    assert_eq!(parse_release_date("2024-02-10"), Some(date(2024, 2, 10)));
    assert_eq!(parse_release_date(" 2024-02-10 "), Some(date(2024, 2, 10)));
}

#[test]
fn test_parse_release_date_year_only() {
    // A bare year is January 1 of that year
    assert_eq!(parse_release_date("2023"), Some(date(2023, 1, 1)));
}

#[test]
fn test_parse_release_date_rejects_other_shapes() {
    assert_eq!(parse_release_date("2023-05"), None);
    assert_eq!(parse_release_date("10/02/2024"), None);
    assert_eq!(parse_release_date("soon"), None);
    assert_eq!(parse_release_date(""), None);
    assert_eq!(parse_release_date("2024-02-30"), None);
}

#[test]
fn test_sort_artists_by_name_ignores_case() {
    let mut artists = vec![
        create_test_artist("Muse"),
        create_test_artist("abba"),
        create_test_artist("Zola"),
        create_test_artist("beck"),
    ];

    sort_artists_by_name(&mut artists);

    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["abba", "beck", "Muse", "Zola"]);
}

#[test]
fn test_resolve_cutoff_date_is_midnight() {
    let now = date(2024, 3, 1).and_hms_opt(15, 30, 0).unwrap();
    let cutoff = resolve_cutoff(Cutoff::Date(date(2024, 1, 1)), now).unwrap();

    assert_eq!(cutoff, date(2024, 1, 1).and_time(NaiveTime::MIN));
}

#[test]
fn test_resolve_cutoff_weeks_counts_back_from_now() {
    let now = date(2024, 3, 1).and_hms_opt(15, 30, 0).unwrap();
    let cutoff = resolve_cutoff(Cutoff::Weeks(2), now).unwrap();

    assert_eq!(cutoff, date(2024, 2, 16).and_hms_opt(15, 30, 0).unwrap());
}

#[test]
fn test_is_wiki_file() {
    assert!(is_wiki_file(Path::new("releases.wiki")));
    assert!(is_wiki_file(Path::new("out/2024/releases.wiki")));
    assert!(!is_wiki_file(Path::new("releases.json")));
    assert!(!is_wiki_file(Path::new("wiki")));
    assert!(!is_wiki_file(Path::new("releases.wiki.json")));
}

#[test]
fn test_resolve_cutoff_weeks_out_of_calendar_range() {
    let now = date(2024, 3, 1).and_hms_opt(15, 30, 0).unwrap();

    // About 380 000 years back, past the earliest supported date
    let result = resolve_cutoff(Cutoff::Weeks(20_000_000), now);
    assert!(matches!(result, Err(Error::Cutoff { weeks: 20_000_000 })));

    let result = resolve_cutoff(Cutoff::Weeks(u32::MAX), now);
    assert!(matches!(result, Err(Error::Cutoff { .. })));
}

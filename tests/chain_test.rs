mod common;

use std::path::PathBuf;

use common::{FakeLibrary, album, artist, track};
use powerspot::{
    Error,
    chain::{Context, ReleasesOptions, Step, WriteOptions, parse_chain, run, validate},
    export::Export,
    prompt::CannedPrompt,
    types::{Album, Term},
    utils,
};
use tempfile::tempdir;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_chain_splits_on_command_names() {
    let steps = parse_chain(&args(&[
        "artists", "releases", "--weeks", "4", "write", "out.json",
    ]))
    .unwrap();

    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].name(), "artists");
    assert_eq!(
        steps[1],
        Step::Releases(ReleasesOptions {
            file: None,
            read_date: None,
            weeks: Some(4),
        })
    );
    assert_eq!(
        steps[2],
        Step::Write(WriteOptions {
            file: PathBuf::from("out.json"),
        })
    );
}

#[test]
fn test_parse_chain_option_value_named_like_a_command() {
    let steps = parse_chain(&args(&["albums", "--file", "artists", "show"])).unwrap();

    assert_eq!(steps.len(), 2);
    match &steps[0] {
        Step::Albums(opt) => assert_eq!(opt.file, Some(PathBuf::from("artists"))),
        other => panic!("unexpected step {:?}", other),
    }
    assert_eq!(steps[1].name(), "show");
}

#[test]
fn test_parse_chain_write_file_named_like_a_command() {
    let steps = parse_chain(&args(&["albums", "write", "albums", "show"])).unwrap();

    assert_eq!(steps.len(), 3);
    assert_eq!(
        steps[1],
        Step::Write(WriteOptions {
            file: PathBuf::from("albums"),
        })
    );
}

#[test]
fn test_parse_chain_short_options_and_terms() {
    let steps = parse_chain(&args(&["toptracks", "-t", "short", "show", "-l"])).unwrap();

    match &steps[0] {
        Step::TopTracks(opt) => assert_eq!(opt.term, Term::Short),
        other => panic!("unexpected step {:?}", other),
    }
    match &steps[1] {
        Step::Show(opt) => assert!(opt.list),
        other => panic!("unexpected step {:?}", other),
    }
}

#[test]
fn test_parse_chain_default_term_is_long() {
    let steps = parse_chain(&args(&["topartists"])).unwrap();
    match &steps[0] {
        Step::TopArtists(opt) => assert_eq!(opt.term, Term::Long),
        other => panic!("unexpected step {:?}", other),
    }
}

#[test]
fn test_parse_chain_unknown_first_token() {
    let result = parse_chain(&args(&["playlist", "show"]));
    assert!(matches!(result, Err(Error::Chain(_))));
}

#[test]
fn test_parse_chain_empty() {
    assert!(matches!(parse_chain(&[]), Err(Error::Chain(_))));
}

#[test]
fn test_parse_chain_rejects_bad_options() {
    assert!(matches!(
        parse_chain(&args(&["releases", "--weeks", "0"])),
        Err(Error::Usage(_))
    ));
    assert!(matches!(
        parse_chain(&args(&["artists", "--unknown"])),
        Err(Error::Usage(_))
    ));
    assert!(matches!(
        parse_chain(&args(&["write"])),
        Err(Error::Usage(_))
    ));
}

#[test]
fn test_validate_accepts_complete_chains() {
    for chain in [
        vec!["artists", "releases", "-w", "2", "save", "show"],
        vec!["releases", "--file", "r.json", "save"],
        vec!["toptracks", "write", "top.wiki"],
        vec!["albums", "save", "--ask"],
        vec!["artists", "tracks", "releases", "-w", "1"],
    ] {
        let steps = parse_chain(&args(&chain)).unwrap();
        assert!(validate(&steps).is_ok(), "chain {:?} should be valid", chain);
    }
}

#[test]
fn test_validate_rejects_missing_context() {
    let cases = [
        (vec!["save"], "save", "albums"),
        (vec!["tracks", "save"], "save", "albums"),
        (vec!["releases", "-w", "2"], "releases", "artists"),
        (vec!["show"], "show", "a result to export"),
        (vec!["write", "out.json", "artists"], "write", "a result to export"),
    ];

    for (chain, expected_step, expected_key) in cases {
        let steps = parse_chain(&args(&chain)).unwrap();
        match validate(&steps) {
            Err(Error::MissingContext { step, key }) => {
                assert_eq!(step, expected_step);
                assert_eq!(key, expected_key);
            }
            other => panic!("chain {:?}: expected missing context, got {:?}", chain, other),
        }
    }
}

#[tokio::test]
async fn test_run_artists_file_releases_write_json() {
    let dir = tempdir().unwrap();
    let artists_file = dir.path().join("artists.json");
    let out_file = dir.path().join("out.json");

    let artists = vec![artist("a1", "Muse"), artist("a2", "Beck")];
    std::fs::write(&artists_file, serde_json::to_string(&artists).unwrap()).unwrap();

    let fresh = album("x1", "Muse", "Future", "2999-01-01");
    let mut library = FakeLibrary::default()
        .with_latest("a1", fresh.clone())
        .with_latest("a2", album("x2", "Beck", "Past", "2000-01-01"));
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&[
        "artists",
        "--file",
        artists_file.to_str().unwrap(),
        "releases",
        "--weeks",
        "4",
        "write",
        out_file.to_str().unwrap(),
    ]))
    .unwrap();
    validate(&steps).unwrap();
    run(&steps, &mut ctx, &mut library, &mut prompt).await.unwrap();

    let written: Vec<Album> =
        serde_json::from_str(&std::fs::read_to_string(&out_file).unwrap()).unwrap();
    assert_eq!(written, vec![fresh]);
    assert_eq!(ctx.artists().unwrap().len(), 2);
    // --weeks given, nothing asked
    assert!(prompt.asked.is_empty());
}

#[tokio::test]
async fn test_run_releases_asks_for_weeks() {
    let mut library = FakeLibrary {
        followed: vec![artist("a1", "Muse")],
        ..Default::default()
    }
    .with_latest("a1", album("x1", "Muse", "Future", "2999-01-01"));
    let mut prompt = CannedPrompt::new().with_numbers([2]);
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&["artists", "releases"])).unwrap();
    run(&steps, &mut ctx, &mut library, &mut prompt).await.unwrap();

    assert_eq!(prompt.asked, vec!["Fetch time interval in weeks"]);
    assert_eq!(ctx.albums().unwrap().len(), 1);
}

#[tokio::test]
async fn test_run_releases_since_date_marker() {
    let dir = tempdir().unwrap();
    let marker_file = dir.path().join("last.wiki");
    std::fs::write(&marker_file, "%date 2024-01-01\n- old\n").unwrap();

    let mut library = FakeLibrary {
        followed: vec![artist("a1", "Muse"), artist("a2", "Beck")],
        ..Default::default()
    }
    .with_latest("a1", album("x1", "Muse", "In", "2024-02-10"))
    .with_latest("a2", album("x2", "Beck", "Out", "2023-12-01"));
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&[
        "artists",
        "releases",
        "--read-date",
        marker_file.to_str().unwrap(),
    ]))
    .unwrap();
    run(&steps, &mut ctx, &mut library, &mut prompt).await.unwrap();

    let names: Vec<&str> = ctx.albums().unwrap().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["In"]);
    assert!(prompt.asked.is_empty());
}

#[tokio::test]
async fn test_run_save_ask_saves_confirmed_only() {
    let mut library = FakeLibrary {
        albums: vec![
            album("x1", "Muse", "Keep", "2024-01-01"),
            album("x2", "Beck", "Skip", "2024-01-02"),
            album("x3", "Zola", "Default", "2024-01-03"),
        ],
        ..Default::default()
    };
    // Third answer falls back to the default (yes)
    let mut prompt = CannedPrompt::new().with_confirmations([true, false]);
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&["albums", "save", "--ask"])).unwrap();
    run(&steps, &mut ctx, &mut library, &mut prompt).await.unwrap();

    let saved: Vec<&str> = library.saved.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(saved, vec!["Keep", "Default"]);
    assert_eq!(prompt.asked.len(), 3);
}

#[tokio::test]
async fn test_run_save_without_ask_saves_everything() {
    let mut library = FakeLibrary {
        albums: vec![
            album("x1", "Muse", "One", "2024-01-01"),
            album("x2", "Beck", "Two", "2024-01-02"),
        ],
        ..Default::default()
    };
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&["albums", "save"])).unwrap();
    run(&steps, &mut ctx, &mut library, &mut prompt).await.unwrap();

    assert_eq!(library.saved.len(), 2);
    assert!(prompt.asked.is_empty());
}

#[tokio::test]
async fn test_run_write_wiki_has_date_marker() {
    let dir = tempdir().unwrap();
    let out_file = dir.path().join("top.wiki");

    let mut library = FakeLibrary {
        top_tracks: vec![track("t1", "Muse", "Psycho", "Drones")],
        ..Default::default()
    };
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&[
        "toptracks",
        "--term",
        "medium",
        "write",
        out_file.to_str().unwrap(),
    ]))
    .unwrap();
    run(&steps, &mut ctx, &mut library, &mut prompt).await.unwrap();

    let content = std::fs::read_to_string(&out_file).unwrap();
    let marker = format!("%date {}\n", utils::today().format(utils::DATE_FORMAT));
    assert!(content.starts_with(&marker));
    assert!(content.contains("Psycho"));
    assert_eq!(library.terms, vec![Term::Medium]);
}

#[tokio::test]
async fn test_run_last_result_follows_latest_step() {
    let mut library = FakeLibrary {
        followed: vec![artist("a1", "Muse")],
        tracks: vec![track("t1", "Muse", "Psycho", "Drones")],
        ..Default::default()
    };
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&["artists", "tracks"])).unwrap();
    run(&steps, &mut ctx, &mut library, &mut prompt).await.unwrap();

    assert!(matches!(ctx.export(), Some(Export::Tracks(_))));
    // Earlier slots stay filled
    assert_eq!(ctx.artists().unwrap().len(), 1);
}

#[tokio::test]
async fn test_run_stops_at_first_failure() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let out_file = dir.path().join("out.json");

    let mut library = FakeLibrary::default();
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&[
        "albums",
        "-f",
        missing.to_str().unwrap(),
        "write",
        out_file.to_str().unwrap(),
    ]))
    .unwrap();
    let result = run(&steps, &mut ctx, &mut library, &mut prompt).await;

    assert!(matches!(result, Err(Error::IoError(_))));
    assert!(!out_file.exists());
}

#[tokio::test]
async fn test_run_missing_context_at_runtime() {
    let mut library = FakeLibrary::default();
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    // Not validated on purpose
    let steps = parse_chain(&args(&["save"])).unwrap();
    let result = run(&steps, &mut ctx, &mut library, &mut prompt).await;

    assert!(matches!(
        result,
        Err(Error::MissingContext {
            step: "save",
            key: "albums"
        })
    ));
}

#[tokio::test]
async fn test_run_releases_with_too_many_weeks_fails() {
    let mut library = FakeLibrary {
        followed: vec![artist("a1", "Muse")],
        ..Default::default()
    }
    .with_latest("a1", album("x1", "Muse", "Future", "2999-01-01"));
    let mut prompt = CannedPrompt::new();
    let mut ctx = Context::new();

    let steps = parse_chain(&args(&["artists", "releases", "--weeks", "20000000"])).unwrap();
    let result = run(&steps, &mut ctx, &mut library, &mut prompt).await;

    assert!(matches!(result, Err(Error::Cutoff { weeks: 20000000 })));
    assert!(library.lookups.is_empty());
    assert!(ctx.albums().is_none());
}

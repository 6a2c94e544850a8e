use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{chain::context::Slot, types::Term};

/// Parses a single chain segment such as `releases --weeks 4`.
#[derive(Parser, Debug, Clone)]
#[clap(name = env!("CARGO_PKG_NAME"), bin_name = env!("CARGO_PKG_NAME"))]
pub struct StepParser {
    #[clap(subcommand)]
    pub step: Step,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Step {
    /// Fetches saved albums from file or Spotify user library
    Albums(SourceOptions),

    /// Fetches followed artists from file or Spotify profile
    Artists(SourceOptions),

    /// Fetches saved tracks from file or Spotify user library
    Tracks(SourceOptions),

    /// Fetches new releases from the artists of the chain
    Releases(ReleasesOptions),

    /// Fetches user top artists from Spotify profile
    #[clap(name = "topartists")]
    TopArtists(TermOptions),

    /// Fetches user top tracks from Spotify profile
    #[clap(name = "toptracks")]
    TopTracks(TermOptions),

    /// Saves the albums of the chain in the Spotify user library
    Save(SaveOptions),

    /// Prints the result of the last command
    Show(ShowOptions),

    /// Writes the result of the last command to a JSON or wiki file
    Write(WriteOptions),
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SourceOptions {
    /// Read records from a JSON file instead of Spotify
    #[clap(long, short = 'f')]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReleasesOptions {
    /// Read releases from a JSON file instead of Spotify
    #[clap(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Only keep releases after the date marker found in this file
    #[clap(long = "read-date", short = 'r')]
    pub read_date: Option<PathBuf>,

    /// Only keep releases of the last N weeks
    #[clap(long, short = 'w', value_parser = clap::value_parser!(u32).range(1..))]
    pub weeks: Option<u32>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TermOptions {
    /// Ranking window
    #[clap(long, short = 't', value_enum, default_value_t = Term::Long)]
    pub term: Term,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SaveOptions {
    /// Ask which albums to save
    #[clap(long, short = 'a')]
    pub ask: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ShowOptions {
    /// Print albums as a list instead of a table
    #[clap(long, short = 'l')]
    pub list: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct WriteOptions {
    /// Target file; a `.wiki` extension writes formatted text, anything else JSON
    pub file: PathBuf,
}

/// Names that start a new chain segment.
pub const STEP_NAMES: [&str; 9] = [
    "albums",
    "artists",
    "tracks",
    "releases",
    "topartists",
    "toptracks",
    "save",
    "show",
    "write",
];

/// Options whose value is the following argument.
pub const VALUE_OPTIONS: [&str; 8] = [
    "-f",
    "--file",
    "-r",
    "--read-date",
    "-w",
    "--weeks",
    "-t",
    "--term",
];

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Albums(_) => "albums",
            Step::Artists(_) => "artists",
            Step::Tracks(_) => "tracks",
            Step::Releases(_) => "releases",
            Step::TopArtists(_) => "topartists",
            Step::TopTracks(_) => "toptracks",
            Step::Save(_) => "save",
            Step::Show(_) => "show",
            Step::Write(_) => "write",
        }
    }

    /// The slot an earlier step must have filled.
    pub fn requires(&self) -> Option<Slot> {
        match self {
            Step::Releases(opt) if opt.file.is_none() => Some(Slot::Artists),
            Step::Save(_) => Some(Slot::Albums),
            Step::Show(_) | Step::Write(_) => Some(Slot::Export),
            _ => None,
        }
    }

    /// The slots this step fills.
    pub fn provides(&self) -> &'static [Slot] {
        match self {
            Step::Artists(_) | Step::TopArtists(_) => &[Slot::Artists, Slot::Export],
            Step::Albums(_) | Step::Releases(_) => &[Slot::Albums, Slot::Export],
            Step::Tracks(_) | Step::TopTracks(_) => &[Slot::Tracks, Slot::Export],
            Step::Save(_) | Step::Show(_) | Step::Write(_) => &[],
        }
    }

    pub fn before_message(&self) -> &'static str {
        match self {
            Step::Albums(_) => "Fetching saved albums...",
            Step::Artists(_) => "Fetching artists...",
            Step::Tracks(_) => "Fetching saved tracks...",
            Step::Releases(_) => "Fetching releases from Spotify...",
            Step::TopArtists(_) => "Fetching top artists...",
            Step::TopTracks(_) => "Fetching top tracks...",
            Step::Save(_) => "Saving releases to account...",
            Step::Show(_) => "Showing last result...",
            Step::Write(_) => "Writing to file...",
        }
    }

    pub fn after_message(&self) -> &'static str {
        match self {
            Step::Albums(_) => "Albums fetched!",
            Step::Artists(_) | Step::TopArtists(_) => "Artists fetched!",
            Step::Tracks(_) | Step::TopTracks(_) => "Tracks fetched!",
            Step::Releases(_) => "Releases fetched!",
            Step::Save(_) => "Releases saved!",
            Step::Show(_) | Step::Write(_) => "Done!",
        }
    }
}

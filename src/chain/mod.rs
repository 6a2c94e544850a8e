//! # Chain Module
//!
//! A powerspot invocation is a chain of subcommands that run in the order
//! given on the command line and share one [`Context`]:
//!
//! ```bash
//! powerspot artists releases --weeks 4 save --ask write releases.wiki
//! ```
//!
//! Running a chain happens in three stages:
//!
//! 1. [`parse_chain`] splits the arguments into one segment per subcommand
//!    and parses each segment with clap.
//! 2. [`validate`] checks that every step finds what it needs (artists for
//!    `releases`, albums for `save`, a result for `show` and `write`) in the
//!    output of an earlier step. A chain that fails here has not touched
//!    the network or any file yet.
//! 3. [`run`] executes the steps one after the other. There is no rollback:
//!    when a step fails, what earlier steps did (albums saved, files
//!    written) stays done.

mod context;
mod step;

pub use context::{Context, Slot};
pub use step::{
    ReleasesOptions, STEP_NAMES, SaveOptions, ShowOptions, SourceOptions, Step, StepParser,
    TermOptions, VALUE_OPTIONS, WriteOptions,
};

use clap::Parser;

use crate::{Error, Res, cli, info, prompt::Prompt, spotify::Library, success};

/// Splits the chain arguments into steps.
///
/// A subcommand name starts a new segment, except when it is the value of
/// the preceding option (`--file albums`) or the file argument `write` is
/// still waiting for (`write albums`).
pub fn parse_chain(args: &[String]) -> Res<Vec<Step>> {
    let mut segments: Vec<Vec<String>> = Vec::new();
    let mut expects_value = false;

    for arg in args {
        let is_step = STEP_NAMES.contains(&arg.as_str());
        let starts_segment = is_step && !expects_value && !awaits_write_file(segments.last());

        if starts_segment {
            segments.push(vec![arg.clone()]);
            expects_value = false;
            continue;
        }

        match segments.last_mut() {
            Some(segment) => segment.push(arg.clone()),
            None => {
                return Err(Error::Chain(format!(
                    "Unknown command '{}'. Expected one of: {}",
                    arg,
                    STEP_NAMES.join(", ")
                )));
            }
        }

        expects_value = !expects_value && VALUE_OPTIONS.contains(&arg.as_str());
    }

    if segments.is_empty() {
        return Err(Error::Chain(format!(
            "No command given. Expected one of: {}",
            STEP_NAMES.join(", ")
        )));
    }

    segments.iter().map(|segment| parse_step(segment)).collect()
}

fn awaits_write_file(segment: Option<&Vec<String>>) -> bool {
    match segment {
        Some(segment) => {
            segment[0] == "write" && segment[1..].iter().all(|arg| arg.starts_with('-'))
        }
        None => false,
    }
}

fn parse_step(segment: &[String]) -> Res<Step> {
    let args = std::iter::once(env!("CARGO_PKG_NAME")).chain(segment.iter().map(String::as_str));
    StepParser::try_parse_from(args)
        .map(|parsed| parsed.step)
        .map_err(Error::Usage)
}

/// Rejects a chain in which a step needs something no earlier step provides.
pub fn validate(steps: &[Step]) -> Res<()> {
    let mut provided: Vec<Slot> = Vec::new();

    for step in steps {
        if let Some(needed) = step.requires() {
            if !provided.contains(&needed) {
                return Err(Error::MissingContext {
                    step: step.name(),
                    key: needed.as_str(),
                });
            }
        }
        provided.extend_from_slice(step.provides());
    }

    Ok(())
}

/// Runs the steps in order against `ctx`.
///
/// The first failing step ends the chain with its error.
pub async fn run<L: Library, P: Prompt>(
    steps: &[Step],
    ctx: &mut Context,
    library: &mut L,
    prompt: &mut P,
) -> Res<()> {
    for step in steps {
        info!("{}", step.before_message());

        match step {
            Step::Albums(opt) => cli::albums(ctx, library, opt.file.as_deref()).await?,
            Step::Artists(opt) => cli::artists(ctx, library, opt.file.as_deref()).await?,
            Step::Tracks(opt) => cli::tracks(ctx, library, opt.file.as_deref()).await?,
            Step::Releases(opt) => cli::releases(ctx, library, prompt, opt).await?,
            Step::TopArtists(opt) => cli::top_artists(ctx, library, opt.term).await?,
            Step::TopTracks(opt) => cli::top_tracks(ctx, library, opt.term).await?,
            Step::Save(opt) => cli::save(ctx, library, prompt, opt.ask).await?,
            Step::Show(opt) => cli::show(ctx, opt.list)?,
            Step::Write(opt) => cli::write(ctx, &opt.file).await?,
        }

        success!("{}", step.after_message());
    }

    Ok(())
}

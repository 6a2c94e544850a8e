use std::path::Path;

use crate::{
    Res,
    chain::{Context, ReleasesOptions},
    cli::fetch::load_records,
    export::{read_date, tabulate_albums},
    info,
    prompt::Prompt,
    spotify::{Library, new_releases},
    types::{Album, Cutoff},
    utils, warning,
};

/// Weeks offered when the user is asked for the fetch interval.
pub const DEFAULT_WEEKS: u32 = 4;

/// Picks the cutoff for `releases`.
///
/// In order: the date marker of `read_date`, the `weeks` option, then the
/// answer to a prompt (default [`DEFAULT_WEEKS`]). A marker file without a
/// usable marker is reported and skipped.
pub async fn cutoff<P: Prompt>(
    read_date_from: Option<&Path>,
    weeks: Option<u32>,
    prompt: &mut P,
) -> Res<Cutoff> {
    if let Some(path) = read_date_from {
        match read_date(path).await? {
            Some(date) => return Ok(Cutoff::Date(date)),
            None => warning!("No usable date marker in {}", path.display()),
        }
    }

    if let Some(weeks) = weeks {
        return Ok(Cutoff::Weeks(weeks));
    }

    let weeks = prompt.input_number("Fetch time interval in weeks", DEFAULT_WEEKS)?;
    Ok(Cutoff::Weeks(weeks))
}

pub async fn releases<L: Library, P: Prompt>(
    ctx: &mut Context,
    library: &mut L,
    prompt: &mut P,
    opt: &ReleasesOptions,
) -> Res<()> {
    let found: Vec<Album> = match &opt.file {
        Some(path) => load_records(path).await?,
        None => {
            let cutoff = cutoff(opt.read_date.as_deref(), opt.weeks, prompt).await?;
            let cutoff = utils::resolve_cutoff(cutoff, utils::now())?;
            info!("Fetching from {}", cutoff.format(utils::DATE_FORMAT));

            let artists = ctx.require_artists("releases")?;
            let found = new_releases(library, artists, cutoff).await?;
            print!("{}", tabulate_albums(&found, false));
            found
        }
    };

    ctx.set_albums(found);
    Ok(())
}

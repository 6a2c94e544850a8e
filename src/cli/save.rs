use colored::Colorize;

use crate::{Res, chain::Context, info, prompt::Prompt, spotify::Library, types::Album};

/// Saves the albums of the chain to the user's library.
///
/// With `ask`, each album is shown as `artist - album` and only the ones
/// confirmed (default yes) are saved.
pub async fn save<L: Library, P: Prompt>(
    ctx: &Context,
    library: &mut L,
    prompt: &mut P,
    ask: bool,
) -> Res<()> {
    let albums = ctx.require_albums("save")?;

    let to_save: Vec<Album> = if ask {
        let mut confirmed = Vec::new();
        for album in albums {
            println!(
                "{}{}{}",
                album.primary_artist().magenta().bold(),
                " - ".white(),
                album.name.blue().bold()
            );
            if prompt.confirm("Save album", true)? {
                confirmed.push(album.clone());
            }
        }
        confirmed
    } else {
        albums.to_vec()
    };

    if to_save.is_empty() {
        info!("No album to save");
        return Ok(());
    }

    library.save_albums(&to_save).await?;
    info!("Saved {} albums", to_save.len());
    Ok(())
}

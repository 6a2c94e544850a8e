use std::path::Path;

use crate::{
    Res,
    chain::Context,
    export::{Export, Formatter},
    info, utils,
};

/// Prints the last result through its formatter, without date marker.
pub fn show(ctx: &Context, list: bool) -> Res<()> {
    let (export, last) = ctx.require_export("show")?;
    let formatter = match export {
        Export::Albums(_) if list => Formatter::AlbumList,
        _ => last,
    };

    print!("{}", export.render(formatter, false));
    Ok(())
}

/// Writes the last result to `path`.
///
/// A `.wiki` file receives the formatted text headed by today's date
/// marker; any other file receives the records as JSON.
pub async fn write(ctx: &Context, path: &Path) -> Res<()> {
    let (export, last) = ctx.require_export("write")?;

    let content = if utils::is_wiki_file(path) {
        export.render(last, true)
    } else {
        export.to_json()?
    };

    async_fs::write(path, content).await?;
    info!("Wrote {} records to {}", export.len(), path.display());
    Ok(())
}

use anyhow::Result;

use crate::cli::MetalsArgs;
use crate::display::{print_metals_table, print_note, Context as DisplayContext};
use crate::files;

pub fn run_metals(args: MetalsArgs, ctx: DisplayContext) -> Result<()> {
    let catalog = files::load_catalog(args.files.catalog.as_deref())?;

    print_metals_table(ctx, &catalog);

    if args.files.catalog.is_some() {
        print_note(
            ctx,
            &format!("{} metals (built-in merged with custom)", catalog.len()),
        );
    }

    Ok(())
}

use anyhow::Result;

use crate::cli::LogArgs;
use crate::display::{print_ledger_table, print_note, Context as DisplayContext};
use crate::files;

pub fn run_log(args: LogArgs, ctx: DisplayContext) -> Result<()> {
    let records = files::load_ledger(&args.files.ledger)?;

    if records.is_empty() {
        print_note(
            ctx,
            &format!("Ledger {} has no entries yet", args.files.ledger.display()),
        );
        return Ok(());
    }

    let start = records.len().saturating_sub(args.limit);
    print_ledger_table(ctx, &records[start..]);

    if records.len() > args.limit {
        print_note(
            ctx,
            &format!("Showing {} of {} entries", args.limit, records.len()),
        );
    }

    Ok(())
}

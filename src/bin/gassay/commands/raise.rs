use anyhow::Result;
use chrono::Utc;

use gold_assay::store::{LedgerRecord, Operation};
use gold_assay::{raise_karat, MassUnit, MAX_KARATS};

use crate::cli::RaiseArgs;
use crate::display::{print_note, print_report, Context as DisplayContext};
use crate::files;

pub fn run_raise(args: RaiseArgs, ctx: DisplayContext) -> Result<()> {
    let unit = MassUnit::from(args.unit);
    let mass_g = unit.to_grams(args.mass);

    let recipe = raise_karat(mass_g, args.from_karat, args.to_karat)?;
    let fine_total_g = mass_g * args.from_karat / MAX_KARATS + recipe.addition_g;

    let rows = vec![
        (
            "Starting alloy",
            format!("{:.3} g at {:.2} K", mass_g, args.from_karat),
        ),
        ("Add pure gold", format!("{:.3} g", recipe.addition_g)),
        ("Total out", format!("{:.3} g", recipe.resulting_total_g)),
        ("Karat", format!("{:.2} K", recipe.resulting_karat)),
        ("Fine gold", format!("{:.3} g", fine_total_g)),
    ];
    print_report(ctx, "Karat Raising", &rows);

    let mut record = LedgerRecord::new(Operation::Raise, Utc::now());
    record.input_g = Some(mass_g);
    record.karats = Some(recipe.resulting_karat);
    record.fine_gold_g = Some(fine_total_g);
    record.addition_g = Some(recipe.addition_g);
    record.total_g = Some(recipe.resulting_total_g);

    files::append_ledger(&args.files.ledger, &record)?;
    print_note(ctx, &format!("Recorded in {}", args.files.ledger.display()));

    Ok(())
}

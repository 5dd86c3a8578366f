use anyhow::Result;
use chrono::Utc;

use gold_assay::store::{LedgerRecord, Operation};
use gold_assay::{alloy_density_g_cm3, synthesize_alloy, MassUnit};

use crate::cli::AlloyArgs;
use crate::display::{print_note, print_report, Context as DisplayContext};
use crate::files;

pub fn run_alloy(args: AlloyArgs, ctx: DisplayContext) -> Result<()> {
    let unit = MassUnit::from(args.unit);
    let gold_g = unit.to_grams(args.gold_mass);

    let catalog = files::load_catalog(args.files.catalog.as_deref())?;
    let metal = catalog.resolve(&args.metal)?;

    let recipe = synthesize_alloy(gold_g, args.karat, metal)?;
    let density = alloy_density_g_cm3(gold_g, recipe.addition_g, metal.density_g_cm3);

    let rows = vec![
        ("Pure gold", format!("{:.3} g", gold_g)),
        ("Additive", metal.to_string()),
        ("Add", format!("{:.3} g", recipe.addition_g)),
        ("Total out", format!("{:.3} g", recipe.resulting_total_g)),
        ("Karat", format!("{:.2} K", recipe.resulting_karat)),
        ("Est. density", format!("{:.4} g/cm³", density)),
    ];
    print_report(ctx, "Alloy Recipe", &rows);

    let mut record = LedgerRecord::new(Operation::Alloy, Utc::now());
    record.metal = Some(metal.name.clone());
    record.input_g = Some(gold_g);
    record.density_g_cm3 = Some(density);
    record.karats = Some(recipe.resulting_karat);
    record.fine_gold_g = Some(gold_g);
    record.addition_g = Some(recipe.addition_g);
    record.total_g = Some(recipe.resulting_total_g);

    files::append_ledger(&args.files.ledger, &record)?;
    print_note(ctx, &format!("Recorded in {}", args.files.ledger.display()));

    Ok(())
}

use anyhow::Result;
use chrono::Utc;

use gold_assay::store::{LedgerRecord, Operation};
use gold_assay::{project_value, resolve_purity, MassUnit, Specimen};

use crate::cli::PurityArgs;
use crate::display::{print_note, print_purity_report, Context as DisplayContext};
use crate::files;

pub fn run_purity(args: PurityArgs, ctx: DisplayContext) -> Result<()> {
    let unit = MassUnit::from(args.unit);
    let mass_g = unit.to_grams(args.mass);

    let catalog = files::load_catalog(args.files.catalog.as_deref())?;
    let impurity = catalog.resolve(&args.metal)?.clone();

    let specimen = Specimen::new(mass_g, args.density, impurity);
    let result = resolve_purity(&specimen);

    let quote = files::load_price(&args.files.price_file)?.filter(|q| q.is_configured());
    let value = quote.as_ref().and_then(|q| {
        project_value(result.pure_gold_mass_g(), q.price_per_gram).map(|v| (v, q.price_per_gram))
    });

    print_purity_report(ctx, &specimen, &result, value);

    if let Some(purity) = result.conclusive() {
        let mut record = LedgerRecord::new(Operation::Purity, Utc::now());
        record.metal = Some(specimen.impurity.name.clone());
        record.input_g = Some(specimen.total_mass_g);
        record.density_g_cm3 = Some(specimen.density_g_cm3);
        record.purity_percent = Some(purity.purity_percent);
        record.karats = Some(purity.karats);
        record.fine_gold_g = Some(purity.pure_gold_mass_g);
        record.value = value.map(|(v, _)| v);

        files::append_ledger(&args.files.ledger, &record)?;
        print_note(ctx, &format!("Recorded in {}", args.files.ledger.display()));
    }

    Ok(())
}

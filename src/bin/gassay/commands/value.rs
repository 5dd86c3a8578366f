use anyhow::{Result, bail};

use gold_assay::{project_value, MassUnit};

use crate::cli::ValueArgs;
use crate::display::{print_report, Context as DisplayContext};
use crate::files;

pub fn run_value(args: ValueArgs, ctx: DisplayContext) -> Result<()> {
    let unit = MassUnit::from(args.unit);
    let fine_g = unit.to_grams(args.fine_gold);

    let price = match args.price {
        Some(price) => price,
        None => match files::load_price(&args.files.price_file)?.filter(|q| q.is_configured()) {
            Some(quote) => quote.price_per_gram,
            None => bail!(
                "No stored gold price in {}; pass --price or run `gassay price --set`",
                args.files.price_file.display()
            ),
        },
    };

    let Some(value) = project_value(fine_g, price) else {
        bail!(
            "Valuation needs a positive mass and price (got {} g at {} per gram)",
            fine_g,
            price
        );
    };

    let rows = vec![
        ("Fine gold", format!("{:.3} g", fine_g)),
        (
            "Price",
            format!(
                "{:.2}/g ({:.2}/ozt)",
                price,
                price * MassUnit::TroyOunce.grams_per_unit()
            ),
        ),
        ("Value", format!("{:.2}", value)),
    ];
    print_report(ctx, "Value Projection", &rows);

    Ok(())
}

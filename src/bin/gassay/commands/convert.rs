use anyhow::Result;

use gold_assay::MassUnit;

use crate::cli::ConvertArgs;
use crate::display::{print_report, Context as DisplayContext};

pub fn run_convert(args: ConvertArgs, ctx: DisplayContext) -> Result<()> {
    let from = MassUnit::from(args.from);
    let grams = from.to_grams(args.value);

    let rows: Vec<(&str, String)> = match args.to {
        Some(to) => {
            let to = MassUnit::from(to);
            vec![(to.symbol(), format!("{:.4}", to.from_grams(grams)))]
        }
        None => MassUnit::ALL
            .iter()
            .map(|unit| (unit.symbol(), format!("{:.4}", unit.from_grams(grams))))
            .collect(),
    };

    let title = format!("{} {} =", args.value, from.symbol());
    print_report(ctx, &title, &rows);

    Ok(())
}

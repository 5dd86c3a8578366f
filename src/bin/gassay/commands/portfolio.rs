use anyhow::{Result, anyhow};

use gold_assay::{appraise_portfolio, Holding, MassUnit};

use crate::cli::PortfolioArgs;
use crate::display::{print_holdings_table, print_report, Context as DisplayContext};
use crate::files;
use crate::util::convert::parse_holding;

pub fn run_portfolio(args: PortfolioArgs, ctx: DisplayContext) -> Result<()> {
    let holdings = args
        .holdings
        .iter()
        .map(|spec| parse_holding(spec).map_err(|detail| anyhow!("Bad --holding value: {}", detail)))
        .collect::<Result<Vec<Holding>>>()?;

    let current = match args.current_price {
        Some(price) => Some(price),
        None => files::load_price(&args.files.price_file)?
            .filter(|q| q.is_configured())
            .map(|q| q.price_per_gram),
    };

    let valuation = appraise_portfolio(&holdings, args.price, current)?;

    print_holdings_table(ctx, &holdings);

    let gross_g: f64 = holdings.iter().map(|h| h.mass_g).sum();
    let troy_oz = MassUnit::TroyOunce.from_grams(valuation.fine_gold_g);

    let mut rows = vec![
        ("Items", format!("{}", holdings.len())),
        ("Gross mass", format!("{:.3} g", gross_g)),
        (
            "Fine gold",
            format!("{:.3} g ({:.4} ozt)", valuation.fine_gold_g, troy_oz),
        ),
        (
            "Value",
            format!("{:.2} @ {:.2}/g", valuation.projected_value, args.price),
        ),
    ];
    if let (Some(change), Some(current)) = (valuation.change_percent, current) {
        rows.push(("Change", format!("{:+.2}% vs {:.2}/g", change, current)));
    }
    print_report(ctx, "Portfolio Appraisal", &rows);

    Ok(())
}

use anyhow::{Result, bail};
use chrono::Utc;

use gold_assay::store::PriceQuote;

use crate::cli::PriceArgs;
use crate::display::{print_note, print_report, Context as DisplayContext};
use crate::files;

pub fn run_price(args: PriceArgs, ctx: DisplayContext) -> Result<()> {
    let path = &args.files.price_file;

    let quote = match args.set {
        Some(price) => {
            if !(price > 0.0) {
                bail!("Price must be positive (got {})", price);
            }

            let quote = if args.per_troy_ounce {
                PriceQuote::per_troy_ounce(price, Utc::now())
            } else {
                PriceQuote::per_gram(price, Utc::now())
            };
            files::save_price(path, &quote)?;
            print_note(ctx, &format!("Stored in {}", path.display()));
            quote
        }

        None => match files::load_price(path)? {
            Some(quote) if quote.is_configured() => quote,
            _ => bail!(
                "No stored gold price in {}; set one with --set",
                path.display()
            ),
        },
    };

    let rows = vec![
        ("Per gram", format!("{:.2}", quote.price_per_gram)),
        ("Per troy ounce", format!("{:.2}", quote.price_per_troy_ounce())),
        (
            "Updated",
            quote.updated.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
    ];
    print_report(ctx, "Gold Price", &rows);

    Ok(())
}

mod alloy;
mod assay;
mod convert;
mod karats;
mod log;
mod metals;
mod portfolio;
mod price;
mod purity;
mod raise;
mod value;

use alloy::run_alloy;
use assay::run_assay;
use convert::run_convert;
use karats::run_karats;
use log::run_log;
use metals::run_metals;
use portfolio::run_portfolio;
use price::run_price;
use purity::run_purity;
use raise::run_raise;
use value::run_value;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Assay(args) => run_assay(args, ctx),
        Command::Purity(args) => run_purity(args, ctx),
        Command::Alloy(args) => run_alloy(args, ctx),
        Command::Raise(args) => run_raise(args, ctx),
        Command::Value(args) => run_value(args, ctx),
        Command::Portfolio(args) => run_portfolio(args, ctx),
        Command::Price(args) => run_price(args, ctx),
        Command::Metals(args) => run_metals(args, ctx),
        Command::Karats => run_karats(ctx),
        Command::Log(args) => run_log(args, ctx),
        Command::Convert(args) => run_convert(args, ctx),
    }
}

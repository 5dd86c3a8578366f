mod banner;
mod error;
mod report;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use report::print_purity_report;
pub use tables::{
    print_holdings_table, print_karat_table, print_ledger_table, print_metals_table, print_note,
    print_report,
};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        use std::io::IsTerminal;

        Self {
            interactive: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}

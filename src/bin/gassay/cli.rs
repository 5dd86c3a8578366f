use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "gassay",
    about = "Gold alloy assay and composition calculations",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Suppress the banner and decorative output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assay an item from air/water weighings (hydrostatic method)
    #[command(visible_alias = "a")]
    Assay(AssayArgs),

    /// Assay an item from an already-measured density
    #[command(visible_alias = "p")]
    Purity(PurityArgs),

    /// Dilute pure gold down to a target karat
    Alloy(AlloyArgs),

    /// Raise the karat of an alloy by adding pure gold
    Raise(RaiseArgs),

    /// Project the market value of a fine-gold mass
    Value(ValueArgs),

    /// Appraise a set of holdings at a projected price
    Portfolio(PortfolioArgs),

    /// Show or update the stored gold price
    Price(PriceArgs),

    /// List the metals in the active catalog
    Metals(MetalsArgs),

    /// Print the karat/fineness reference table
    Karats,

    /// Show recent entries from the assay ledger
    Log(LogArgs),

    /// Convert a mass between supported units
    Convert(ConvertArgs),
}

/// Data file locations shared by commands that touch stored state.
#[derive(Args)]
#[command(next_help_heading = "Data Files")]
pub struct FileOptions {
    /// Stored gold price quote (TOML)
    #[arg(long = "price-file", value_name = "FILE", default_value = "gold_price.toml")]
    pub price_file: PathBuf,

    /// Assay ledger, appended to by assay/purity/alloy/raise (CSV)
    #[arg(long, value_name = "FILE", default_value = "assay_ledger.csv")]
    pub ledger: PathBuf,

    /// Extra metal catalog merged over the built-in one (TOML)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct AssayArgs {
    /// Weight of the item in air
    #[arg(long, value_name = "MASS")]
    pub air: f64,

    /// Weight of the item suspended in water
    #[arg(long, value_name = "MASS")]
    pub water: f64,

    /// Unit both weighings were taken in
    #[arg(short, long, value_name = "UNIT", default_value = "g")]
    pub unit: Unit,

    /// Suspected alloying metal (catalog name)
    #[arg(short, long, value_name = "NAME", default_value = "copper")]
    pub metal: String,

    /// Set stones to deduct from both readings (metric carats)
    #[arg(long = "stone-carats", value_name = "CT", default_value = "0.0")]
    pub stone_carats: f64,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct PurityArgs {
    /// Measured density of the item (g/cm³)
    #[arg(short, long, value_name = "D")]
    pub density: f64,

    /// Mass of the item
    #[arg(long, value_name = "MASS")]
    pub mass: f64,

    /// Unit the mass was measured in
    #[arg(short, long, value_name = "UNIT", default_value = "g")]
    pub unit: Unit,

    /// Suspected alloying metal (catalog name)
    #[arg(short, long, value_name = "NAME", default_value = "copper")]
    pub metal: String,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct AlloyArgs {
    /// Mass of pure gold to start from
    #[arg(long = "gold-mass", value_name = "MASS")]
    pub gold_mass: f64,

    /// Unit of the gold mass
    #[arg(short, long, value_name = "UNIT", default_value = "g")]
    pub unit: Unit,

    /// Target karat (exclusive of 0 and 24)
    #[arg(short, long, value_name = "K")]
    pub karat: f64,

    /// Alloying metal to add (catalog name)
    #[arg(short, long, value_name = "NAME", default_value = "copper")]
    pub metal: String,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct RaiseArgs {
    /// Mass of the starting alloy
    #[arg(long, value_name = "MASS")]
    pub mass: f64,

    /// Unit of the mass
    #[arg(short, long, value_name = "UNIT", default_value = "g")]
    pub unit: Unit,

    /// Karat of the starting alloy
    #[arg(long = "from-karat", value_name = "K")]
    pub from_karat: f64,

    /// Karat to reach by adding pure gold
    #[arg(long = "to-karat", value_name = "K")]
    pub to_karat: f64,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct ValueArgs {
    /// Fine gold mass to value
    #[arg(long = "fine-gold", value_name = "MASS")]
    pub fine_gold: f64,

    /// Unit of the mass
    #[arg(short, long, value_name = "UNIT", default_value = "g")]
    pub unit: Unit,

    /// Price per gram of pure gold (defaults to the stored quote)
    #[arg(short, long, value_name = "PRICE")]
    pub price: Option<f64>,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct PortfolioArgs {
    /// Holding as MASS:KARAT[:LABEL] with mass in grams, repeatable
    #[arg(
        long = "holding",
        value_name = "SPEC",
        action = clap::ArgAction::Append,
        required = true
    )]
    pub holdings: Vec<String>,

    /// Projected price per gram of pure gold
    #[arg(short, long, value_name = "PRICE")]
    pub price: f64,

    /// Current price per gram for the change figure (defaults to the stored quote)
    #[arg(long = "current-price", value_name = "PRICE")]
    pub current_price: Option<f64>,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct PriceArgs {
    /// Store a new price (per gram unless --per-troy-ounce)
    #[arg(long, value_name = "PRICE")]
    pub set: Option<f64>,

    /// Interpret --set as a per-troy-ounce figure
    #[arg(long = "per-troy-ounce", requires = "set")]
    pub per_troy_ounce: bool,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct MetalsArgs {
    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct LogArgs {
    /// Most recent entries to show
    #[arg(short = 'n', long, value_name = "N", default_value = "10")]
    pub limit: usize,

    #[command(flatten)]
    pub files: FileOptions,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Value to convert
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: f64,

    /// Unit of the given value
    #[arg(long, value_name = "UNIT")]
    pub from: Unit,

    /// Target unit (every unit if omitted)
    #[arg(long, value_name = "UNIT")]
    pub to: Option<Unit>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum Unit {
    /// Gram
    #[default]
    #[value(name = "g", alias = "gram")]
    Gram,

    /// Troy ounce (31.1034768 g)
    #[value(name = "ozt", alias = "troy")]
    TroyOunce,

    /// Avoirdupois ounce (28.3495 g)
    #[value(name = "oz", alias = "ounce")]
    Ounce,

    /// Pennyweight (1.55517 g)
    #[value(name = "dwt", alias = "pennyweight")]
    Pennyweight,

    /// Tola (11.6638 g)
    #[value(name = "tola")]
    Tola,
}

pub fn parse() -> Cli {
    Cli::parse()
}

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use anyhow::{Context, Result};

use gold_assay::store::{self, LedgerRecord, PriceQuote};
use gold_assay::MetalCatalog;

/// Reads the stored price quote. A missing file means "not configured",
/// not an error.
pub fn load_price(path: &Path) -> Result<Option<PriceQuote>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open price file: {}", path.display()))
        }
    };

    let quote = store::read_price(BufReader::new(file))
        .with_context(|| format!("Failed to read price file: {}", path.display()))?;
    Ok(Some(quote))
}

pub fn save_price(path: &Path, quote: &PriceQuote) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create price file: {}", path.display()))?;
    store::write_price(file, quote)
        .with_context(|| format!("Failed to write price file: {}", path.display()))?;
    Ok(())
}

/// Appends one record, emitting the header row only when the ledger is new
/// or empty.
pub fn append_ledger(path: &Path, record: &LedgerRecord) -> Result<()> {
    let fresh = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open ledger file: {}", path.display()))?;
    store::append_record(file, record, fresh)
        .with_context(|| format!("Failed to append to ledger: {}", path.display()))?;
    Ok(())
}

/// Reads the whole ledger; a missing file is an empty ledger.
pub fn load_ledger(path: &Path) -> Result<Vec<LedgerRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open ledger file: {}", path.display()))
        }
    };

    store::read_records(BufReader::new(file))
        .with_context(|| format!("Failed to read ledger file: {}", path.display()))
}

/// Loads the metal catalog, merging a user file over the built-in defaults
/// when one is given.
pub fn load_catalog(path: Option<&Path>) -> Result<MetalCatalog> {
    let Some(path) = path else {
        return Ok(MetalCatalog::load(None)?);
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    MetalCatalog::load(Some(&text))
        .with_context(|| format!("Failed to load catalog file: {}", path.display()))
}

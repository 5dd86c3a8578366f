use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_assay_hints(err);
        collector.collect_store_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_assay_hints(&mut self, err: &Error) {
        use gold_assay::AssayError;

        let Some(assay_err) = err.downcast_ref::<AssayError>() else {
            return;
        };

        self.mark_typed();

        match assay_err {
            AssayError::BuoyancyNotPositive { .. } => {
                self.add("Both scale readings must be positive numbers");
                self.add("Re-weigh the item and check the scale tare");
            }

            AssayError::BuoyancyInverted { .. } => {
                self.add("The submerged reading must be below the dry reading");
                self.add("Swap --air and --water if they were entered in reverse");
                self.add("Make sure the item hangs free of the beaker walls");
            }

            AssayError::NonPositiveMass { .. } => {
                self.add("Check the mass value and its --unit");
            }

            AssayError::TargetKaratOutOfRange { .. } => {
                self.add("Pick a target strictly between 0 and 24 (e.g. 18)");
                self.add("24 K is already pure gold and needs no addition");
            }

            AssayError::KaratOrderInvalid { .. } => {
                self.add("The target must lie above the starting karat and below 24");
                self.add("To lower a karat, dilute with `gassay alloy` instead");
            }

            AssayError::InvalidHolding { .. } => {
                self.add("Holdings are written MASS:KARAT[:LABEL], mass in grams");
                self.add("Example: --holding 12.5:18:ring");
            }

            AssayError::NonPositivePrice { .. } => {
                self.add("Pass a positive price, or store one with `gassay price --set`");
            }

            AssayError::CatalogParse(_) => {
                self.add("A catalog is a TOML list of [[metals]] records");
                self.add("Each record needs a name and a density in g/cm³");
            }

            AssayError::InvalidCatalogRecord { .. } => {
                self.add("Each catalog record needs a non-empty name and a density above zero");
            }

            AssayError::UnknownMetal { .. } => {
                self.add("Run `gassay metals` to list the active catalog");
                self.add("Custom metals can be merged in via --catalog <file.toml>");
            }
        }
    }

    fn collect_store_hints(&mut self, err: &Error) {
        use gold_assay::store::Error as StoreError;

        let Some(store_err) = err.downcast_ref::<StoreError>() else {
            return;
        };

        self.mark_typed();

        match store_err {
            StoreError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            StoreError::PriceParse(_) => {
                self.add("The price file needs price_per_gram and updated fields");
                self.add("Re-create it with `gassay price --set <PRICE>`");
            }

            StoreError::PriceEncode(_) => {
                self.add("The quote could not be encoded as TOML");
                self.add("This may indicate a bug; please report it if reproducible");
            }

            StoreError::Ledger(_) => {
                self.add("The ledger must stay a CSV with its original header row");
                self.add("Inspect the file for hand-edited or truncated rows");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or corrupt data");
                self.add("Verify the file is not truncated or corrupted");
            }

            ErrorKind::UnexpectedEof => {
                self.add("Unexpected end of file encountered");
                self.add("The file may be truncated or incomplete");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no stored gold price") || msg.contains("price") {
            self.add("Store a quote with `gassay price --set <PRICE>`");
            self.add("Or pass an explicit price with --price");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

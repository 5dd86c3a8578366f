use std::io::{self, Write};

use gold_assay::store::LedgerRecord;
use gold_assay::{Holding, MetalCatalog};

use super::Context;
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

/// Prints a key/value result report: a boxed table when interactive, plain
/// `key: value` lines when piped or quieted.
pub fn print_report(ctx: Context, title: &str, rows: &[(&str, String)]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if ctx.interactive {
        print_kv_table(&mut out, title, rows);
    } else {
        for (key, val) in rows {
            let _ = writeln!(out, "{}: {}", key, val);
        }
    }
}

/// Interactive-only confirmation line on stderr.
pub fn print_note(ctx: Context, note: &str) {
    if !ctx.interactive {
        return;
    }

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "  \x1b[32m✓\x1b[0m {}", note);
}

/// Fixed-width purity gauge for the interactive assay report.
pub fn purity_bar(percent: f64) -> String {
    let width = 20usize;
    let filled = (((percent / 100.0) * width as f64).round() as usize).min(width);

    format!(
        "{}{} {:>6.2}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

pub fn print_metals_table(ctx: Context, catalog: &MetalCatalog) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !ctx.interactive {
        for metal in catalog.iter() {
            let _ = writeln!(out, "{}\t{}", metal.name, metal.density_g_cm3);
        }
        return;
    }

    let name_w = 14usize;
    let density_w = 16usize;

    let _ = writeln!(out, "{}┌─ Metal Catalog ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{n_line}┬{d_line}┐",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        d_line = "─".repeat(density_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>density_w$} │",
        INDENT,
        "Metal",
        "Density (g/cm³)",
        name_w = name_w,
        density_w = density_w
    );
    let _ = writeln!(
        out,
        "{}├{n_line}┼{d_line}┤",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        d_line = "─".repeat(density_w + 2)
    );

    for metal in catalog.iter() {
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>density_w$} │",
            INDENT,
            truncate(&metal.name, name_w),
            format!("{:.2}", metal.density_g_cm3),
            name_w = name_w,
            density_w = density_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{n_line}┴{d_line}┘",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        d_line = "─".repeat(density_w + 2)
    );
}

/// Hallmark reference rows as (karat, millesimal fineness).
pub fn print_karat_table(ctx: Context, rows: &[(f64, u32)]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !ctx.interactive {
        for (karat, fineness) in rows {
            let _ = writeln!(
                out,
                "{}\t{}\t{:.2}",
                karat,
                fineness,
                karat / 24.0 * 100.0
            );
        }
        return;
    }

    let karat_w = 6usize;
    let hallmark_w = 9usize;
    let gold_w = 13usize;

    let _ = writeln!(out, "{}┌─ Karat Reference ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{h_line}┬{g_line}┐",
        INDENT,
        k_line = "─".repeat(karat_w + 2),
        h_line = "─".repeat(hallmark_w + 2),
        g_line = "─".repeat(gold_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<karat_w$} │ {:>hallmark_w$} │ {:>gold_w$} │",
        INDENT,
        "Karat",
        "Hallmark",
        "Gold content",
        karat_w = karat_w,
        hallmark_w = hallmark_w,
        gold_w = gold_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{h_line}┼{g_line}┤",
        INDENT,
        k_line = "─".repeat(karat_w + 2),
        h_line = "─".repeat(hallmark_w + 2),
        g_line = "─".repeat(gold_w + 2)
    );

    for (karat, fineness) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<karat_w$} │ {:>hallmark_w$} │ {:>gold_w$} │",
            INDENT,
            format!("{} K", karat),
            fineness,
            format!("{:.2}%", karat / 24.0 * 100.0),
            karat_w = karat_w,
            hallmark_w = hallmark_w,
            gold_w = gold_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{h_line}┴{g_line}┘",
        INDENT,
        k_line = "─".repeat(karat_w + 2),
        h_line = "─".repeat(hallmark_w + 2),
        g_line = "─".repeat(gold_w + 2)
    );
}

pub fn print_ledger_table(ctx: Context, records: &[LedgerRecord]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !ctx.interactive {
        for record in records {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}",
                record.timestamp.to_rfc3339(),
                record.operation,
                record
                    .karats
                    .map_or_else(String::new, |k| format!("{:.2}", k)),
                record
                    .total_g
                    .or(record.input_g)
                    .map_or_else(String::new, |g| format!("{:.3}", g))
            );
        }
        return;
    }

    let when_w = 16usize;
    let op_w = 6usize;
    let karat_w = 8usize;
    let sep_overhead = 13;
    let mass_w = SAFE_TABLE_WIDTH.saturating_sub(when_w + op_w + karat_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ Assay Ledger ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{w_line}┬{o_line}┬{k_line}┬{m_line}┐",
        INDENT,
        w_line = "─".repeat(when_w + 2),
        o_line = "─".repeat(op_w + 2),
        k_line = "─".repeat(karat_w + 2),
        m_line = "─".repeat(mass_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<when_w$} │ {:<op_w$} │ {:>karat_w$} │ {:>mass_w$} │",
        INDENT,
        "When (UTC)",
        "Op",
        "Karat",
        "Mass (g)",
        when_w = when_w,
        op_w = op_w,
        karat_w = karat_w,
        mass_w = mass_w
    );
    let _ = writeln!(
        out,
        "{}├{w_line}┼{o_line}┼{k_line}┼{m_line}┤",
        INDENT,
        w_line = "─".repeat(when_w + 2),
        o_line = "─".repeat(op_w + 2),
        k_line = "─".repeat(karat_w + 2),
        m_line = "─".repeat(mass_w + 2)
    );

    for record in records {
        let when_cell = record.timestamp.format("%Y-%m-%d %H:%M").to_string();
        let karat_cell = record
            .karats
            .map_or_else(|| "n/a".to_string(), |k| format!("{:.2} K", k));
        let mass_cell = record
            .total_g
            .or(record.input_g)
            .map_or_else(|| "n/a".to_string(), |g| format!("{:.3}", g));

        let _ = writeln!(
            out,
            "{}│ {:<when_w$} │ {:<op_w$} │ {:>karat_w$} │ {:>mass_w$} │",
            INDENT,
            when_cell,
            truncate(&record.operation.to_string(), op_w),
            karat_cell,
            mass_cell,
            when_w = when_w,
            op_w = op_w,
            karat_w = karat_w,
            mass_w = mass_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{w_line}┴{o_line}┴{k_line}┴{m_line}┘",
        INDENT,
        w_line = "─".repeat(when_w + 2),
        o_line = "─".repeat(op_w + 2),
        k_line = "─".repeat(karat_w + 2),
        m_line = "─".repeat(mass_w + 2)
    );
}

/// Per-item breakdown for the interactive portfolio report. Plain output
/// carries only the summary, so this prints nothing when piped.
pub fn print_holdings_table(ctx: Context, holdings: &[Holding]) {
    if !ctx.interactive {
        return;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mass_w = 9usize;
    let karat_w = 7usize;
    let fine_w = 9usize;
    let sep_overhead = 13;
    let label_w = SAFE_TABLE_WIDTH.saturating_sub(mass_w + karat_w + fine_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ Holdings ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{l_line}┬{m_line}┬{k_line}┬{f_line}┐",
        INDENT,
        l_line = "─".repeat(label_w + 2),
        m_line = "─".repeat(mass_w + 2),
        k_line = "─".repeat(karat_w + 2),
        f_line = "─".repeat(fine_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<label_w$} │ {:>mass_w$} │ {:>karat_w$} │ {:>fine_w$} │",
        INDENT,
        "Item",
        "Mass (g)",
        "Karat",
        "Fine (g)",
        label_w = label_w,
        mass_w = mass_w,
        karat_w = karat_w,
        fine_w = fine_w
    );
    let _ = writeln!(
        out,
        "{}├{l_line}┼{m_line}┼{k_line}┼{f_line}┤",
        INDENT,
        l_line = "─".repeat(label_w + 2),
        m_line = "─".repeat(mass_w + 2),
        k_line = "─".repeat(karat_w + 2),
        f_line = "─".repeat(fine_w + 2)
    );

    for (index, holding) in holdings.iter().enumerate() {
        let label = holding
            .label
            .clone()
            .unwrap_or_else(|| format!("item {}", index + 1));

        let _ = writeln!(
            out,
            "{}│ {:<label_w$} │ {:>mass_w$} │ {:>karat_w$} │ {:>fine_w$} │",
            INDENT,
            truncate(&label, label_w),
            format!("{:.3}", holding.mass_g),
            format!("{:.2} K", holding.karat),
            format!("{:.3}", holding.fine_gold_g()),
            label_w = label_w,
            mass_w = mass_w,
            karat_w = karat_w,
            fine_w = fine_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{l_line}┴{m_line}┴{k_line}┴{f_line}┘",
        INDENT,
        l_line = "─".repeat(label_w + 2),
        m_line = "─".repeat(mass_w + 2),
        k_line = "─".repeat(karat_w + 2),
        f_line = "─".repeat(fine_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

use gold_assay::{Inconclusive, PurityResult, Specimen};

use super::tables::{print_report, purity_bar};
use super::Context;

/// Renders the outcome of a purity resolution, shared by the weighing and
/// known-density commands. `value` carries (projected value, price per gram)
/// when a quote was available.
pub fn print_purity_report(
    ctx: Context,
    specimen: &Specimen,
    result: &PurityResult,
    value: Option<(f64, f64)>,
) {
    let mut rows: Vec<(&str, String)> = vec![
        ("Metal", specimen.impurity.to_string()),
        ("Net mass", format!("{:.3} g", specimen.total_mass_g)),
        ("Density", format!("{:.4} g/cm³", specimen.density_g_cm3)),
    ];

    match result {
        PurityResult::Conclusive(purity) => {
            rows.push(("Verdict", "conclusive".to_string()));
            if ctx.interactive {
                rows.push(("Purity", purity_bar(purity.purity_percent)));
            } else {
                rows.push(("Purity", format!("{:.4}%", purity.purity_percent)));
            }
            rows.push(("Karats", format!("{:.2} K", purity.karats)));
            rows.push(("Fine gold", format!("{:.3} g", purity.pure_gold_mass_g)));

            if let Some((value, price)) = value {
                rows.push(("Est. value", format!("{:.2} @ {:.2}/g", value, price)));
            }
        }

        PurityResult::Inconclusive(Inconclusive::DensityOutOfRange {
            lower_g_cm3,
            upper_g_cm3,
            ..
        }) => {
            rows.push(("Verdict", "inconclusive".to_string()));
            rows.push((
                "Valid range",
                format!("[{:.4}, {:.4}] g/cm³", lower_g_cm3, upper_g_cm3),
            ));
        }

        PurityResult::Inconclusive(reason) => {
            rows.push(("Verdict", "inconclusive".to_string()));
            rows.push(("Reason", reason.to_string()));
        }
    }

    print_report(ctx, "Assay Report", &rows);
}

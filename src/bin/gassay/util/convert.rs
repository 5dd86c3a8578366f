use gold_assay::{Holding, MassUnit};

use crate::cli;

impl From<cli::Unit> for MassUnit {
    fn from(u: cli::Unit) -> Self {
        match u {
            cli::Unit::Gram => Self::Gram,
            cli::Unit::TroyOunce => Self::TroyOunce,
            cli::Unit::Ounce => Self::Ounce,
            cli::Unit::Pennyweight => Self::Pennyweight,
            cli::Unit::Tola => Self::Tola,
        }
    }
}

/// Parses a `MASS:KARAT[:LABEL]` holding spec. Mass is in grams; the label
/// may itself contain colons. Range checks are left to the appraisal.
pub fn parse_holding(spec: &str) -> Result<Holding, String> {
    let parts: Vec<&str> = spec.splitn(3, ':').collect();

    if parts.len() < 2 {
        return Err(format!("expected MASS:KARAT[:LABEL], got '{}'", spec));
    }

    let mass_g: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| format!("invalid mass '{}' in '{}'", parts[0], spec))?;
    let karat: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| format!("invalid karat '{}' in '{}'", parts[1], spec))?;

    match parts.get(2).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(label) => Ok(Holding::labelled(mass_g, karat, label)),
        None => Ok(Holding::new(mass_g, karat)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_without_label() {
        let h = parse_holding("12.5:18").unwrap();
        assert_eq!(h.mass_g, 12.5);
        assert_eq!(h.karat, 18.0);
        assert_eq!(h.label, None);
    }

    #[test]
    fn holding_with_label() {
        let h = parse_holding("3.1:22:grandmother's band").unwrap();
        assert_eq!(h.label.as_deref(), Some("grandmother's band"));
    }

    #[test]
    fn label_keeps_extra_colons() {
        let h = parse_holding("5:14:lot 7: cufflinks").unwrap();
        assert_eq!(h.label.as_deref(), Some("lot 7: cufflinks"));
    }

    #[test]
    fn missing_karat_is_rejected() {
        assert!(parse_holding("12.5").is_err());
    }

    #[test]
    fn garbage_mass_is_rejected() {
        let err = parse_holding("ring:18").unwrap_err();
        assert!(err.contains("invalid mass"));
    }
}

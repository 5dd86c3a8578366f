use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bulk density of pure (24-karat) gold in g/cm³.
pub const GOLD_DENSITY_G_CM3: f64 = 19.32;

/// Measurement slack applied on both sides of the plausible density interval.
pub const DENSITY_TOLERANCE_G_CM3: f64 = 0.05;

/// Full scale of the karat system (pure gold).
pub const MAX_KARATS: f64 = 24.0;

/// Rescale factor from mass purity in percent to karats (24 / 100).
pub const KARATS_PER_PURITY_PERCENT: f64 = 0.24;

/// Metric carat, the gemstone mass unit.
pub const GRAMS_PER_CARAT: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mass unit: '{0}'")]
pub struct ParseMassUnitError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MassUnit {
    #[default]
    Gram,
    TroyOunce,
    Ounce,
    Pennyweight,
    Tola,
}

impl MassUnit {
    /// Conversion factor to grams. The troy ounce is exact by definition;
    /// the other factors are the conventional rounded trade values.
    pub fn grams_per_unit(&self) -> f64 {
        match self {
            MassUnit::Gram => 1.0,
            MassUnit::TroyOunce => 31.1034768,
            MassUnit::Ounce => 28.3495,
            MassUnit::Pennyweight => 1.55517,
            MassUnit::Tola => 11.6638,
        }
    }

    #[inline]
    pub fn to_grams(&self, value: f64) -> f64 {
        value * self.grams_per_unit()
    }

    #[inline]
    pub fn from_grams(&self, grams: f64) -> f64 {
        grams / self.grams_per_unit()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::TroyOunce => "ozt",
            MassUnit::Ounce => "oz",
            MassUnit::Pennyweight => "dwt",
            MassUnit::Tola => "tola",
        }
    }

    pub const ALL: [MassUnit; 5] = [
        MassUnit::Gram,
        MassUnit::TroyOunce,
        MassUnit::Ounce,
        MassUnit::Pennyweight,
        MassUnit::Tola,
    ];
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MassUnit {
    type Err = ParseMassUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(MassUnit::Gram),
            "ozt" | "toz" | "troy" | "troy-ounce" | "troy_ounce" => Ok(MassUnit::TroyOunce),
            "oz" | "ounce" | "avdp" => Ok(MassUnit::Ounce),
            "dwt" | "pennyweight" => Ok(MassUnit::Pennyweight),
            "tola" | "tolas" => Ok(MassUnit::Tola),
            _ => Err(ParseMassUnitError(s.to_string())),
        }
    }
}

/// Gemstone mass from metric carats, for deducting set stones from a
/// weighed piece before any density work.
#[inline]
pub fn stone_carats_to_grams(carats: f64) -> f64 {
    carats * GRAMS_PER_CARAT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn unit_from_str_aliases() {
        assert_eq!(MassUnit::from_str("g").unwrap(), MassUnit::Gram);
        assert_eq!(MassUnit::from_str("grams").unwrap(), MassUnit::Gram);
        assert_eq!(MassUnit::from_str("ozt").unwrap(), MassUnit::TroyOunce);
        assert_eq!(MassUnit::from_str("Troy").unwrap(), MassUnit::TroyOunce);
        assert_eq!(MassUnit::from_str("OZ").unwrap(), MassUnit::Ounce);
        assert_eq!(MassUnit::from_str("dwt").unwrap(), MassUnit::Pennyweight);
        assert_eq!(MassUnit::from_str("tola").unwrap(), MassUnit::Tola);
    }

    #[test]
    fn unit_from_str_invalid() {
        let err = MassUnit::from_str("stone").unwrap_err();
        assert_eq!(format!("{}", err), "unknown mass unit: 'stone'");
    }

    #[test]
    fn conversion_table() {
        assert!(approx_eq(MassUnit::TroyOunce.to_grams(1.0), 31.1034768, 1e-9));
        assert!(approx_eq(MassUnit::Ounce.to_grams(1.0), 28.3495, 1e-9));
        assert!(approx_eq(MassUnit::Pennyweight.to_grams(1.0), 1.55517, 1e-9));
        assert!(approx_eq(MassUnit::Tola.to_grams(1.0), 11.6638, 1e-9));
        assert!(approx_eq(MassUnit::Gram.to_grams(2.5), 2.5, 1e-12));
    }

    #[test]
    fn from_grams_inverts_to_grams() {
        for unit in MassUnit::ALL {
            let grams = unit.to_grams(3.7);
            assert!(approx_eq(unit.from_grams(grams), 3.7, 1e-12));
        }
    }

    #[test]
    fn twenty_pennyweight_is_one_troy_ounce() {
        assert!(approx_eq(
            MassUnit::Pennyweight.to_grams(20.0),
            MassUnit::TroyOunce.to_grams(1.0),
            1e-3
        ));
    }

    #[test]
    fn stone_carats() {
        assert!(approx_eq(stone_carats_to_grams(5.0), 1.0, 1e-12));
        assert!(approx_eq(stone_carats_to_grams(0.0), 0.0, 1e-12));
    }

    #[test]
    fn symbol_display() {
        assert_eq!(MassUnit::TroyOunce.to_string(), "ozt");
        assert_eq!(MassUnit::Gram.symbol(), "g");
    }

    #[test]
    fn karat_rescale_constant() {
        assert!(approx_eq(100.0 * KARATS_PER_PURITY_PERCENT, MAX_KARATS, 1e-12));
    }
}

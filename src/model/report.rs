use std::fmt;

use super::metal::Metal;

/// Outcome of a purity resolution. An indeterminate measurement is a
/// first-class result, never an error and never a silent zero.
#[derive(Debug, Clone, PartialEq)]
pub enum PurityResult {
    Conclusive(Purity),
    Inconclusive(Inconclusive),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Purity {
    /// Gold mass fraction in percent, clamped to [0, 100].
    pub purity_percent: f64,
    /// `purity_percent * 0.24`, so 100% is exactly 24.
    pub karats: f64,
    /// Pure gold content in grams, clamped to [0, total mass].
    pub pure_gold_mass_g: f64,
}

/// Why a resolution could not conclude.
#[derive(Debug, Clone, PartialEq)]
pub enum Inconclusive {
    DensityUnset,
    DensityOutOfRange {
        density_g_cm3: f64,
        lower_g_cm3: f64,
        upper_g_cm3: f64,
    },
    MassUnset,
    ImpurityUnusable { density_g_cm3: f64 },
}

impl PurityResult {
    #[inline]
    pub fn is_conclusive(&self) -> bool {
        matches!(self, PurityResult::Conclusive(_))
    }

    pub fn conclusive(&self) -> Option<&Purity> {
        match self {
            PurityResult::Conclusive(p) => Some(p),
            PurityResult::Inconclusive(_) => None,
        }
    }

    /// 0.0 when inconclusive; the variant keeps that distinguishable from a
    /// genuine zero-purity result.
    #[inline]
    pub fn purity_percent(&self) -> f64 {
        self.conclusive().map_or(0.0, |p| p.purity_percent)
    }

    #[inline]
    pub fn karats(&self) -> f64 {
        self.conclusive().map_or(0.0, |p| p.karats)
    }

    #[inline]
    pub fn pure_gold_mass_g(&self) -> f64 {
        self.conclusive().map_or(0.0, |p| p.pure_gold_mass_g)
    }
}

impl fmt::Display for Inconclusive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconclusive::DensityUnset => {
                write!(f, "density has not been determined for this item")
            }
            Inconclusive::DensityOutOfRange {
                density_g_cm3,
                lower_g_cm3,
                upper_g_cm3,
            } => write!(
                f,
                "density {:.4} g/cm³ is outside the plausible range [{:.4}, {:.4}] for this alloy pair",
                density_g_cm3, lower_g_cm3, upper_g_cm3
            ),
            Inconclusive::MassUnset => write!(f, "total mass has not been set for this item"),
            Inconclusive::ImpurityUnusable { density_g_cm3 } => write!(
                f,
                "impurity metal has no usable density ({} g/cm³)",
                density_g_cm3
            ),
        }
    }
}

/// What to add to an existing quantity of metal, and what comes out.
#[derive(Debug, Clone, PartialEq)]
pub struct AlloyRecipe {
    pub additive: Additive,
    pub addition_g: f64,
    pub resulting_total_g: f64,
    pub resulting_karat: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Additive {
    PureGold,
    Metal(Metal),
}

impl fmt::Display for Additive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Additive::PureGold => f.write_str("pure gold"),
            Additive::Metal(metal) => f.write_str(&metal.name),
        }
    }
}

/// One line of a portfolio: a mass of karat gold, optionally labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub mass_g: f64,
    pub karat: f64,
    pub label: Option<String>,
}

impl Holding {
    pub fn new(mass_g: f64, karat: f64) -> Self {
        Self {
            mass_g,
            karat,
            label: None,
        }
    }

    pub fn labelled(mass_g: f64, karat: f64, label: impl Into<String>) -> Self {
        Self {
            mass_g,
            karat,
            label: Some(label.into()),
        }
    }

    /// Fine gold content of this holding in grams.
    #[inline]
    pub fn fine_gold_g(&self) -> f64 {
        self.mass_g * self.karat / crate::model::units::MAX_KARATS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioValuation {
    pub fine_gold_g: f64,
    pub projected_value: f64,
    /// Value change in percent versus the current price, when one was given.
    pub change_percent: Option<f64>,
}

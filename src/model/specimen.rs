use super::metal::Metal;
use super::units::{DENSITY_TOLERANCE_G_CM3, GOLD_DENSITY_G_CM3};

/// One physical item under evaluation, reduced to the three quantities the
/// resolver needs: net metal mass, bulk density, and the assumed second
/// metal of the binary alloy.
///
/// A density of `0.0` means "not yet determined". Any gemstone mass must be
/// deducted before construction; the resolver treats the mass as metal only.
#[derive(Debug, Clone, PartialEq)]
pub struct Specimen {
    pub total_mass_g: f64,
    pub density_g_cm3: f64,
    pub impurity: Metal,
}

impl Specimen {
    pub fn new(total_mass_g: f64, density_g_cm3: f64, impurity: Metal) -> Self {
        Self {
            total_mass_g,
            density_g_cm3,
            impurity,
        }
    }

    /// Plausible density interval for a gold/impurity binary, widened by the
    /// measurement tolerance on both ends. min/max keeps the interval correct
    /// whether the impurity is lighter or heavier than gold.
    pub fn density_bounds(&self) -> (f64, f64) {
        let imp = self.impurity.density_g_cm3;
        let lower = imp.min(GOLD_DENSITY_G_CM3) - DENSITY_TOLERANCE_G_CM3;
        let upper = imp.max(GOLD_DENSITY_G_CM3) + DENSITY_TOLERANCE_G_CM3;
        (lower, upper)
    }

    /// Single gate every derived quantity passes through. False whenever the
    /// density was never measured, the impurity record is unusable, or the
    /// measured density falls outside [`density_bounds`](Self::density_bounds).
    pub fn is_density_valid(&self) -> bool {
        if self.density_g_cm3 <= 0.0 || !self.impurity.has_usable_density() {
            return false;
        }
        let (lower, upper) = self.density_bounds();
        self.density_g_cm3 >= lower && self.density_g_cm3 <= upper
    }

    /// Specimen volume implied by mass and density. Meaningful only when the
    /// density is positive.
    #[inline]
    pub fn volume_cm3(&self) -> f64 {
        self.total_mass_g / self.density_g_cm3
    }

    #[inline]
    pub fn has_mass(&self) -> bool {
        self.total_mass_g > 0.0
    }
}

use crate::model::report::{Inconclusive, Purity, PurityResult};
use crate::model::specimen::Specimen;
use crate::model::units::{
    DENSITY_TOLERANCE_G_CM3, GOLD_DENSITY_G_CM3, KARATS_PER_PURITY_PERCENT,
};

/// Resolves the composition of a measured item under the binary gold/impurity
/// model.
///
/// The resolution is conclusive exactly when the item has a positive mass and
/// its density passes the [`Specimen::is_density_valid`] gate; otherwise the
/// matching [`Inconclusive`] reason is returned. A density within the
/// measurement tolerance of pure gold short-circuits to a 24-karat result.
/// Everything else goes through the additive-volume mixing rule:
///
/// ```text
/// object_volume      = total_mass / density
/// volume_fraction_au = (density - impurity_density) / (19.32 - impurity_density)
/// pure_gold_mass     = volume_fraction_au * object_volume * 19.32
/// ```
///
/// The raw mixing output is clamped into `[0, total_mass]`: the tolerance
/// band admits densities marginally outside the physical mixing interval,
/// where the unclamped rule would report a negative gold content or more gold
/// than metal.
pub fn resolve_purity(specimen: &Specimen) -> PurityResult {
    if specimen.density_g_cm3 <= 0.0 {
        return PurityResult::Inconclusive(Inconclusive::DensityUnset);
    }
    if !specimen.has_mass() {
        return PurityResult::Inconclusive(Inconclusive::MassUnset);
    }
    if !specimen.impurity.has_usable_density() {
        return PurityResult::Inconclusive(Inconclusive::ImpurityUnusable {
            density_g_cm3: specimen.impurity.density_g_cm3,
        });
    }
    let (lower, upper) = specimen.density_bounds();
    if specimen.density_g_cm3 < lower || specimen.density_g_cm3 > upper {
        return PurityResult::Inconclusive(Inconclusive::DensityOutOfRange {
            density_g_cm3: specimen.density_g_cm3,
            lower_g_cm3: lower,
            upper_g_cm3: upper,
        });
    }

    let pure_gold_mass_g =
        if (specimen.density_g_cm3 - GOLD_DENSITY_G_CM3).abs() < DENSITY_TOLERANCE_G_CM3 {
            // Within scale noise of pure gold the mixing rule only amplifies
            // that noise, so the whole mass is credited as gold.
            specimen.total_mass_g
        } else {
            volume_route_pure_gold(specimen).clamp(0.0, specimen.total_mass_g)
        };

    let purity_percent = 100.0 * pure_gold_mass_g / specimen.total_mass_g;
    PurityResult::Conclusive(Purity {
        purity_percent,
        karats: purity_percent * KARATS_PER_PURITY_PERCENT,
        pure_gold_mass_g,
    })
}

fn volume_route_pure_gold(specimen: &Specimen) -> f64 {
    let object_volume = specimen.volume_cm3();
    let volume_fraction_gold = (specimen.density_g_cm3 - specimen.impurity.density_g_cm3)
        / (GOLD_DENSITY_G_CM3 - specimen.impurity.density_g_cm3);
    volume_fraction_gold * object_volume * GOLD_DENSITY_G_CM3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::metal::Metal;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn copper() -> Metal {
        Metal::new("copper", 8.96)
    }

    fn with_copper(mass_g: f64, density: f64) -> Specimen {
        Specimen::new(mass_g, density, copper())
    }

    /// Same mixing rule written through reciprocal densities. Algebraically
    /// identical to the volume route but a different floating-point path.
    fn mass_fraction_route(specimen: &Specimen) -> f64 {
        let d = specimen.density_g_cm3;
        let imp = specimen.impurity.density_g_cm3;
        let mass_fraction =
            (1.0 / d - 1.0 / imp) / (1.0 / GOLD_DENSITY_G_CM3 - 1.0 / imp);
        specimen.total_mass_g * mass_fraction
    }

    #[test]
    fn pure_gold_shortcut_within_tolerance() {
        for density in [19.28, 19.30, 19.32, 19.36] {
            let r = resolve_purity(&with_copper(50.0, density));
            let p = r.conclusive().expect("should be conclusive");
            assert_eq!(p.purity_percent, 100.0);
            assert_eq!(p.karats, 24.0);
            assert_eq!(p.pure_gold_mass_g, 50.0);
        }
    }

    #[test]
    fn pure_gold_shortcut_for_any_impurity() {
        for imp in [
            Metal::new("copper", 8.96),
            Metal::new("silver", 10.49),
            Metal::new("platinum", 21.45),
        ] {
            let r = resolve_purity(&Specimen::new(12.5, 19.32, imp));
            assert_eq!(r.karats(), 24.0);
            assert_eq!(r.pure_gold_mass_g(), 12.5);
        }
    }

    #[test]
    fn buoyancy_regression_case() {
        // 19 g dry, 18 g submerged: density exactly 19.0 against copper.
        let r = resolve_purity(&with_copper(19.0, 19.0));
        let p = r.conclusive().expect("should be conclusive");
        assert!(approx_eq(p.pure_gold_mass_g, 18.7232432, 1e-6));
        assert!(approx_eq(p.purity_percent, 98.5433855, 1e-6));
        assert!(approx_eq(p.karats, 23.6504125, 1e-6));
    }

    #[test]
    fn eighteen_karat_mixture_recovers_karat() {
        // 75 g gold + 25 g copper under ideal volume additivity.
        let density = 100.0 / (75.0 / 19.32 + 25.0 / 8.96);
        let r = resolve_purity(&with_copper(100.0, density));
        let p = r.conclusive().expect("should be conclusive");
        assert!(approx_eq(p.karats, 18.0, 1e-9));
        assert!(approx_eq(p.pure_gold_mass_g, 75.0, 1e-9));
    }

    #[test]
    fn karats_are_rescaled_purity() {
        let r = resolve_purity(&with_copper(19.0, 19.0));
        let p = r.conclusive().expect("should be conclusive");
        assert_eq!(p.karats, p.purity_percent * KARATS_PER_PURITY_PERCENT);
    }

    #[test]
    fn density_unset_reason() {
        let r = resolve_purity(&with_copper(10.0, 0.0));
        assert!(matches!(
            r,
            PurityResult::Inconclusive(Inconclusive::DensityUnset)
        ));
        assert_eq!(r.karats(), 0.0);
    }

    #[test]
    fn mass_unset_reason() {
        let r = resolve_purity(&with_copper(0.0, 15.0));
        assert!(matches!(
            r,
            PurityResult::Inconclusive(Inconclusive::MassUnset)
        ));
    }

    #[test]
    fn impurity_unusable_reason() {
        let s = Specimen::new(10.0, 15.0, Metal::new("void", -1.0));
        assert!(matches!(
            resolve_purity(&s),
            PurityResult::Inconclusive(Inconclusive::ImpurityUnusable { .. })
        ));
    }

    #[test]
    fn out_of_range_reason_carries_bounds() {
        let r = resolve_purity(&with_copper(10.0, 25.0));
        match r {
            PurityResult::Inconclusive(Inconclusive::DensityOutOfRange {
                density_g_cm3,
                lower_g_cm3,
                upper_g_cm3,
            }) => {
                assert_eq!(density_g_cm3, 25.0);
                assert!(approx_eq(lower_g_cm3, 8.91, 1e-12));
                assert!(approx_eq(upper_g_cm3, 19.37, 1e-12));
            }
            other => panic!("expected out-of-range, got {:?}", other),
        }
    }

    #[test]
    fn upper_tolerance_corner_clamps_to_full_mass() {
        // 19.37 passes the gate but misses the shortcut; the raw mixing rule
        // would credit more gold than there is metal.
        let r = resolve_purity(&with_copper(40.0, 19.37));
        let p = r.conclusive().expect("should be conclusive");
        assert_eq!(p.pure_gold_mass_g, 40.0);
        assert_eq!(p.purity_percent, 100.0);
        assert_eq!(p.karats, 24.0);
    }

    #[test]
    fn lower_tolerance_corner_clamps_to_zero() {
        // 8.91 is marginally below copper itself; raw result would be negative.
        let r = resolve_purity(&with_copper(40.0, 8.91));
        let p = r.conclusive().expect("should be conclusive");
        assert_eq!(p.pure_gold_mass_g, 0.0);
        assert_eq!(p.purity_percent, 0.0);
        assert_eq!(p.karats, 0.0);
        assert!(r.is_conclusive());
    }

    proptest! {
        // Both mixing-rule spellings agree away from the clamped corners.
        #[test]
        fn volume_and_mass_fraction_routes_agree(
            density in 9.0_f64..19.2,
            mass in 0.1_f64..5_000.0,
        ) {
            let s = with_copper(mass, density);
            let volume_route = volume_route_pure_gold(&s);
            let mass_route = mass_fraction_route(&s);
            let tol = 1e-9 * volume_route.abs().max(1.0);
            prop_assert!((volume_route - mass_route).abs() <= tol);
        }

        // Every conclusive result stays inside the published ranges.
        #[test]
        fn conclusive_results_are_bounded(
            density in 8.91_f64..=19.37,
            mass in 0.001_f64..10_000.0,
        ) {
            let r = resolve_purity(&with_copper(mass, density));
            let p = r.conclusive().expect("in-gate density must conclude");
            prop_assert!(p.purity_percent >= 0.0);
            prop_assert!(p.purity_percent <= 100.0);
            prop_assert!(p.pure_gold_mass_g >= 0.0);
            prop_assert!(p.pure_gold_mass_g <= mass);
            prop_assert!(p.karats >= 0.0 && p.karats <= 24.0);
            prop_assert_eq!(p.karats, p.purity_percent * KARATS_PER_PURITY_PERCENT);
        }
    }
}

use super::error::Error;
use crate::model::metal::Metal;
use crate::model::report::{Additive, AlloyRecipe};
use crate::model::units::{GOLD_DENSITY_G_CM3, MAX_KARATS};

/// Computes how much impurity metal to melt into pure gold to reach a target
/// karat rating.
///
/// ```text
/// target_purity = target_karat / 24
/// impurity_mass = gold_mass * (1/target_purity - 1)
/// ```
///
/// # Errors
///
/// [`Error::NonPositiveMass`] for a non-positive gold mass and
/// [`Error::TargetKaratOutOfRange`] unless `0 < target_karat < 24`. 24 is
/// rejected rather than treated as "add nothing": a caller asking to dilute
/// to 24 karats has made a mistake worth surfacing.
pub fn synthesize_alloy(
    gold_mass_g: f64,
    target_karat: f64,
    impurity: &Metal,
) -> Result<AlloyRecipe, Error> {
    if !(gold_mass_g > 0.0) {
        return Err(Error::NonPositiveMass { mass_g: gold_mass_g });
    }
    if !(target_karat > 0.0 && target_karat < MAX_KARATS) {
        return Err(Error::TargetKaratOutOfRange { target_karat });
    }

    let target_purity = target_karat / MAX_KARATS;
    let impurity_mass = gold_mass_g * (1.0 / target_purity - 1.0);
    Ok(AlloyRecipe {
        additive: Additive::Metal(impurity.clone()),
        addition_g: impurity_mass,
        resulting_total_g: gold_mass_g + impurity_mass,
        resulting_karat: target_karat,
    })
}

/// Computes how much pure gold to melt into an existing alloy to raise its
/// karat rating.
///
/// Solving (existing gold + added) / (existing mass + added) = target purity:
///
/// ```text
/// added_gold = initial_mass * (target_purity - initial_purity) / (1 - target_purity)
/// ```
///
/// # Errors
///
/// [`Error::NonPositiveMass`] for a non-positive initial mass and
/// [`Error::KaratOrderInvalid`] unless `0 <= initial < target < 24`. A target
/// of exactly 24 would require infinite gold and is rejected.
pub fn raise_karat(
    initial_mass_g: f64,
    initial_karat: f64,
    target_karat: f64,
) -> Result<AlloyRecipe, Error> {
    if !(initial_mass_g > 0.0) {
        return Err(Error::NonPositiveMass {
            mass_g: initial_mass_g,
        });
    }
    if !(initial_karat >= 0.0 && initial_karat < target_karat && target_karat < MAX_KARATS) {
        return Err(Error::KaratOrderInvalid {
            initial_karat,
            target_karat,
        });
    }

    let initial_purity = initial_karat / MAX_KARATS;
    let target_purity = target_karat / MAX_KARATS;
    let added_gold = initial_mass_g * (target_purity - initial_purity) / (1.0 - target_purity);
    Ok(AlloyRecipe {
        additive: Additive::PureGold,
        addition_g: added_gold,
        resulting_total_g: initial_mass_g + added_gold,
        resulting_karat: target_karat,
    })
}

/// Bulk density of a gold/impurity mixture under ideal volume additivity.
/// This is the density a flawless melt of a [`synthesize_alloy`] recipe
/// should weigh in at.
pub fn alloy_density_g_cm3(pure_gold_g: f64, impurity_g: f64, impurity_density_g_cm3: f64) -> f64 {
    let total_volume = pure_gold_g / GOLD_DENSITY_G_CM3 + impurity_g / impurity_density_g_cm3;
    (pure_gold_g + impurity_g) / total_volume
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assay::purity::resolve_purity;
    use crate::model::specimen::Specimen;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn copper() -> Metal {
        Metal::new("copper", 8.96)
    }

    #[test]
    fn hundred_grams_to_eighteen_karat() {
        let r = synthesize_alloy(100.0, 18.0, &copper()).unwrap();
        assert!(approx_eq(r.addition_g, 33.333333, 1e-6));
        assert!(approx_eq(r.resulting_total_g, 133.333333, 1e-6));
        assert_eq!(r.resulting_karat, 18.0);
        assert!(matches!(r.additive, Additive::Metal(ref m) if m.name == "copper"));
    }

    #[test]
    fn synthesized_alloy_assays_back_to_target() {
        let r = synthesize_alloy(100.0, 18.0, &copper()).unwrap();
        let density = alloy_density_g_cm3(100.0, r.addition_g, 8.96);
        let assayed = resolve_purity(&Specimen::new(r.resulting_total_g, density, copper()));
        assert!(approx_eq(assayed.karats(), 18.0, 0.01));
        assert!(approx_eq(assayed.pure_gold_mass_g(), 100.0, 1e-6));
    }

    #[test]
    fn synthesize_rejects_karat_extremes() {
        assert!(matches!(
            synthesize_alloy(10.0, 24.0, &copper()),
            Err(Error::TargetKaratOutOfRange { .. })
        ));
        assert!(matches!(
            synthesize_alloy(10.0, 0.0, &copper()),
            Err(Error::TargetKaratOutOfRange { .. })
        ));
        assert!(matches!(
            synthesize_alloy(10.0, 24.5, &copper()),
            Err(Error::TargetKaratOutOfRange { .. })
        ));
        assert!(matches!(
            synthesize_alloy(10.0, -2.0, &copper()),
            Err(Error::TargetKaratOutOfRange { .. })
        ));
        assert!(matches!(
            synthesize_alloy(10.0, f64::NAN, &copper()),
            Err(Error::TargetKaratOutOfRange { .. })
        ));
    }

    #[test]
    fn synthesize_rejects_non_positive_mass() {
        assert!(matches!(
            synthesize_alloy(0.0, 18.0, &copper()),
            Err(Error::NonPositiveMass { .. })
        ));
        assert!(matches!(
            synthesize_alloy(-5.0, 18.0, &copper()),
            Err(Error::NonPositiveMass { .. })
        ));
    }

    #[test]
    fn fourteen_to_eighteen_karat() {
        let r = raise_karat(100.0, 14.0, 18.0).unwrap();
        assert!(approx_eq(r.addition_g, 66.666667, 1e-6));
        assert!(approx_eq(r.resulting_total_g, 166.666667, 1e-6));
        assert!(matches!(r.additive, Additive::PureGold));
    }

    #[test]
    fn raised_alloy_assays_back_to_target() {
        let initial_gold = 100.0 * 14.0 / 24.0;
        let impurity_g = 100.0 - initial_gold;
        let r = raise_karat(100.0, 14.0, 18.0).unwrap();
        let density = alloy_density_g_cm3(initial_gold + r.addition_g, impurity_g, 8.96);
        let assayed = resolve_purity(&Specimen::new(r.resulting_total_g, density, copper()));
        assert!(approx_eq(assayed.karats(), 18.0, 0.01));
    }

    #[test]
    fn raise_from_zero_karat() {
        // Pure copper to 12K: the added gold must equal the starting mass.
        let r = raise_karat(100.0, 0.0, 12.0).unwrap();
        assert!(approx_eq(r.addition_g, 100.0, 1e-9));
        assert!(approx_eq(r.resulting_total_g, 200.0, 1e-9));
    }

    #[test]
    fn raise_rejects_bad_orderings() {
        assert!(matches!(
            raise_karat(100.0, 14.0, 14.0),
            Err(Error::KaratOrderInvalid { .. })
        ));
        assert!(matches!(
            raise_karat(100.0, 18.0, 14.0),
            Err(Error::KaratOrderInvalid { .. })
        ));
        assert!(matches!(
            raise_karat(100.0, 14.0, 24.0),
            Err(Error::KaratOrderInvalid { .. })
        ));
        assert!(matches!(
            raise_karat(100.0, -1.0, 18.0),
            Err(Error::KaratOrderInvalid { .. })
        ));
        assert!(matches!(
            raise_karat(100.0, f64::NAN, 18.0),
            Err(Error::KaratOrderInvalid { .. })
        ));
        assert!(matches!(
            raise_karat(0.0, 14.0, 18.0),
            Err(Error::NonPositiveMass { .. })
        ));
    }

    proptest! {
        // Any in-range synthesis assays back to its target karat.
        #[test]
        fn synthesis_round_trips(
            gold in 0.1_f64..2_000.0,
            karat in 0.5_f64..23.5,
        ) {
            let r = synthesize_alloy(gold, karat, &copper()).unwrap();
            prop_assert!(r.addition_g > 0.0);
            let density = alloy_density_g_cm3(gold, r.addition_g, 8.96);
            let assayed = resolve_purity(&Specimen::new(r.resulting_total_g, density, copper()));
            prop_assert!(assayed.is_conclusive());
            prop_assert!((assayed.karats() - karat).abs() < 1e-6);
        }

        // Raising always lands exactly on the target purity.
        #[test]
        fn raising_hits_target_purity(
            mass in 0.1_f64..2_000.0,
            initial in 0.0_f64..20.0,
            bump in 0.1_f64..3.9,
        ) {
            let target = initial + bump;
            let r = raise_karat(mass, initial, target).unwrap();
            let gold_after = mass * initial / 24.0 + r.addition_g;
            let purity_after = gold_after / r.resulting_total_g;
            prop_assert!((purity_after - target / 24.0).abs() < 1e-9);
        }
    }
}

use super::error::Error;
use crate::model::report::{Holding, PortfolioValuation};
use crate::model::units::MAX_KARATS;

/// Projects the market value of a quantity of fine gold.
///
/// Returns `None` unless both the mass and the price are positive. A missing
/// or unconfigured price is represented as zero upstream and must never be
/// read as "worth nothing", so "no value available" is a distinct outcome
/// rather than `Some(0.0)`.
pub fn project_value(pure_gold_mass_g: f64, price_per_gram: f64) -> Option<f64> {
    if pure_gold_mass_g > 0.0 && price_per_gram > 0.0 {
        Some(pure_gold_mass_g * price_per_gram)
    } else {
        None
    }
}

/// Values a set of karat-gold holdings at a projected price.
///
/// Fine gold is aggregated as Σ massᵢ · karatᵢ / 24 and the projected price
/// applied to the total. When a positive current price is supplied the
/// valuation also carries the percent change of the projected price over it.
///
/// # Errors
///
/// [`Error::NonPositivePrice`] for a non-positive projected price, and
/// [`Error::InvalidHolding`] naming the first offending position if any
/// holding has a non-positive mass or a karat rating outside [0, 24].
pub fn appraise_portfolio(
    holdings: &[Holding],
    projected_price_per_gram: f64,
    current_price_per_gram: Option<f64>,
) -> Result<PortfolioValuation, Error> {
    if !(projected_price_per_gram > 0.0) {
        return Err(Error::NonPositivePrice {
            price_per_gram: projected_price_per_gram,
        });
    }
    for (index, holding) in holdings.iter().enumerate() {
        if !(holding.mass_g > 0.0) {
            return Err(Error::invalid_holding(
                index,
                format!("mass must be positive (got {} g)", holding.mass_g),
            ));
        }
        if !(holding.karat >= 0.0 && holding.karat <= MAX_KARATS) {
            return Err(Error::invalid_holding(
                index,
                format!("karat must be within [0, 24] (got {})", holding.karat),
            ));
        }
    }

    let fine_gold_g: f64 = holdings.iter().map(Holding::fine_gold_g).sum();
    let projected_value = fine_gold_g * projected_price_per_gram;
    let change_percent = current_price_per_gram
        .filter(|current| *current > 0.0)
        .map(|current| 100.0 * (projected_price_per_gram - current) / current);

    Ok(PortfolioValuation {
        fine_gold_g,
        projected_value,
        change_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn value_needs_both_positive() {
        assert_eq!(project_value(10.0, 95.0), Some(950.0));
        assert_eq!(project_value(10.0, 0.0), None);
        assert_eq!(project_value(10.0, -1.0), None);
        assert_eq!(project_value(0.0, 95.0), None);
        assert_eq!(project_value(-2.0, 95.0), None);
    }

    #[test]
    fn portfolio_aggregates_fine_gold() {
        let holdings = [Holding::new(10.0, 18.0), Holding::new(5.2, 22.0)];
        let v = appraise_portfolio(&holdings, 95.0, None).unwrap();
        assert!(approx_eq(v.fine_gold_g, 12.2666667, 1e-6));
        assert!(approx_eq(v.projected_value, 1165.3333333, 1e-6));
        assert!(v.change_percent.is_none());
    }

    #[test]
    fn portfolio_change_versus_current_price() {
        let holdings = [Holding::new(10.0, 18.0), Holding::new(5.2, 22.0)];
        let v = appraise_portfolio(&holdings, 95.0, Some(88.0)).unwrap();
        assert!(approx_eq(v.change_percent.unwrap(), 7.9545455, 1e-6));
    }

    #[test]
    fn non_positive_current_price_is_ignored() {
        let holdings = [Holding::new(1.0, 24.0)];
        let v = appraise_portfolio(&holdings, 95.0, Some(0.0)).unwrap();
        assert!(v.change_percent.is_none());
    }

    #[test]
    fn empty_portfolio_is_worth_nothing() {
        let v = appraise_portfolio(&[], 95.0, None).unwrap();
        assert_eq!(v.fine_gold_g, 0.0);
        assert_eq!(v.projected_value, 0.0);
    }

    #[test]
    fn rejects_non_positive_projected_price() {
        let holdings = [Holding::new(1.0, 24.0)];
        assert!(matches!(
            appraise_portfolio(&holdings, 0.0, None),
            Err(Error::NonPositivePrice { .. })
        ));
        assert!(matches!(
            appraise_portfolio(&holdings, -3.0, None),
            Err(Error::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn bad_holding_is_named_by_position() {
        let holdings = [Holding::new(10.0, 18.0), Holding::new(0.0, 18.0)];
        match appraise_portfolio(&holdings, 95.0, None) {
            Err(Error::InvalidHolding { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected invalid holding, got {:?}", other),
        }
        let holdings = [Holding::new(10.0, 25.0)];
        assert!(matches!(
            appraise_portfolio(&holdings, 95.0, None),
            Err(Error::InvalidHolding { index: 0, .. })
        ));
    }
}

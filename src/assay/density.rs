use super::error::Error;
use crate::model::metal::Metal;
use crate::model::specimen::Specimen;

/// Derives bulk density from a dry and a submerged scale reading.
///
/// Archimedes' principle with water at 1 g/cm³: the reading difference is the
/// displaced water mass, numerically the specimen volume in cm³, so
///
/// ```text
/// density = weight_in_air / (weight_in_air - weight_in_water)
/// ```
///
/// Both readings must be positive and the dry reading strictly higher;
/// anything else is a rejected measurement, never a NaN or an infinity.
///
/// # Errors
///
/// [`Error::BuoyancyNotPositive`] if either reading is zero or negative,
/// [`Error::BuoyancyInverted`] if the submerged reading is at or above the
/// dry one.
pub fn derive_density(weight_in_air_g: f64, weight_in_water_g: f64) -> Result<f64, Error> {
    if weight_in_air_g <= 0.0 || weight_in_water_g <= 0.0 {
        return Err(Error::BuoyancyNotPositive {
            weight_in_air_g,
            weight_in_water_g,
        });
    }
    if weight_in_water_g >= weight_in_air_g {
        return Err(Error::BuoyancyInverted {
            weight_in_air_g,
            weight_in_water_g,
        });
    }
    Ok(weight_in_air_g / (weight_in_air_g - weight_in_water_g))
}

/// Builds a [`Specimen`] directly from a buoyancy weighing.
///
/// The dry reading doubles as the total metal mass. Readings must already be
/// net of any set stones (see
/// [`stone_carats_to_grams`](crate::model::units::stone_carats_to_grams)).
///
/// # Errors
///
/// Same as [`derive_density`].
pub fn specimen_from_buoyancy(
    weight_in_air_g: f64,
    weight_in_water_g: f64,
    impurity: Metal,
) -> Result<Specimen, Error> {
    let density = derive_density(weight_in_air_g, weight_in_water_g)?;
    Ok(Specimen::new(weight_in_air_g, density, impurity))
}

mod catalog;
mod density;
mod error;
mod purity;
mod recipe;
mod value;

pub use catalog::MetalCatalog;
pub use density::{derive_density, specimen_from_buoyancy};
pub use error::Error;
pub use purity::resolve_purity;
pub use recipe::{alloy_density_g_cm3, raise_karat, synthesize_alloy};
pub use value::{appraise_portfolio, project_value};

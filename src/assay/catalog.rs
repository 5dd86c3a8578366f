use super::error::Error;
use crate::model::metal::Metal;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_CATALOG_TOML: &str = include_str!("../../resources/default.metals.toml");

static DEFAULT_CATALOG: OnceLock<MetalCatalog> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    metals: Vec<MetalRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct MetalRecord {
    name: String,
    density: f64,
}

/// Ordered list of candidate impurity metals. Lookup is by name, ASCII
/// case-insensitive, with later records shadowing earlier ones so a user
/// catalog can override a builtin density.
#[derive(Debug, Clone)]
pub struct MetalCatalog {
    metals: Vec<Metal>,
}

impl MetalCatalog {
    /// The compiled-in catalog of common karat-gold alloying metals.
    pub fn builtin() -> &'static MetalCatalog {
        DEFAULT_CATALOG.get_or_init(|| {
            let file: CatalogFile = toml::from_str(DEFAULT_CATALOG_TOML)
                .expect("Failed to parse embedded default catalog. This is a library bug.");
            let metals = validate_records(file.metals)
                .expect("Embedded default catalog has an invalid record. This is a library bug.");
            MetalCatalog { metals }
        })
    }

    /// Builds the active catalog: the builtin records, extended by the
    /// records of `custom_toml` when one is given.
    ///
    /// # Errors
    ///
    /// [`Error::CatalogParse`] for malformed TOML and
    /// [`Error::InvalidCatalogRecord`] for records violating the metal
    /// invariants (empty name, non-positive density).
    pub fn load(custom_toml: Option<&str>) -> Result<MetalCatalog, Error> {
        let mut catalog = Self::builtin().clone();
        if let Some(toml) = custom_toml {
            let file: CatalogFile = toml::from_str(toml)?;
            catalog.metals.extend(validate_records(file.metals)?);
        }
        Ok(catalog)
    }

    pub fn find(&self, name: &str) -> Option<&Metal> {
        self.metals
            .iter()
            .rev()
            .find(|metal| metal.name.eq_ignore_ascii_case(name))
    }

    /// Like [`find`](Self::find) but failure is an [`Error::UnknownMetal`].
    pub fn resolve(&self, name: &str) -> Result<&Metal, Error> {
        self.find(name).ok_or_else(|| Error::unknown_metal(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metal> {
        self.metals.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.metals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.metals.is_empty()
    }
}

fn validate_records(records: Vec<MetalRecord>) -> Result<Vec<Metal>, Error> {
    records
        .into_iter()
        .map(|record| {
            let name = record.name.trim();
            if name.is_empty() {
                return Err(Error::invalid_catalog_record(
                    &record.name,
                    "name must not be empty",
                ));
            }
            if !(record.density > 0.0) {
                return Err(Error::invalid_catalog_record(
                    name,
                    format!("density must be positive (got {} g/cm³)", record.density),
                ));
            }
            Ok(Metal::new(name, record.density))
        })
        .collect()
}

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Metal {
    pub name: String,
    pub density_g_cm3: f64,
}

impl Metal {
    pub fn new(name: impl Into<String>, density_g_cm3: f64) -> Self {
        Self {
            name: name.into(),
            density_g_cm3,
        }
    }

    #[inline]
    pub fn has_usable_density(&self) -> bool {
        self.density_g_cm3 > 0.0
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} g/cm³)", self.name, self.density_g_cm3)
    }
}

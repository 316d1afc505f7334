//! Coordinate reference system registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The registry is the source of every CRS the viewer can display. It keeps
//! insertion order so selectors list systems in the order they were
//! registered.

#[cfg(test)]
#[path = "crs_test.rs"]
mod crs_test;

pub const WGS84: &str = "EPSG:4326";
pub const WEB_MERCATOR: &str = "EPSG:3857";

/// Axis units of a CRS, used to pick readout precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrsUnits {
    Degrees,
    #[default]
    Meters,
}

impl CrsUnits {
    /// Decimal places used when displaying coordinates in these units.
    pub fn display_decimals(self) -> usize {
        match self {
            Self::Degrees => 4,
            Self::Meters => 0,
        }
    }
}

/// A single registered CRS.
#[derive(Clone, Debug, PartialEq)]
pub struct CrsDef {
    pub code: String,
    pub label: String,
    pub units: CrsUnits,
}

impl CrsDef {
    pub fn new(code: &str, label: &str, units: CrsUnits) -> Self {
        Self { code: code.to_owned(), label: label.to_owned(), units }
    }
}

/// Ordered code → definition registry.
#[derive(Clone, Debug, PartialEq)]
pub struct CrsRegistry {
    defs: Vec<CrsDef>,
}

impl Default for CrsRegistry {
    fn default() -> Self {
        Self::new(vec![
            CrsDef::new(WGS84, "WGS 84", CrsUnits::Degrees),
            CrsDef::new(WEB_MERCATOR, "WGS 84 / Pseudo-Mercator", CrsUnits::Meters),
            CrsDef::new("EPSG:25832", "ETRS89 / UTM zone 32N", CrsUnits::Meters),
            CrsDef::new("EPSG:25833", "ETRS89 / UTM zone 33N", CrsUnits::Meters),
            CrsDef::new("EPSG:2056", "CH1903+ / LV95", CrsUnits::Meters),
            CrsDef::new("EPSG:21781", "CH1903 / LV03", CrsUnits::Meters),
        ])
    }
}

impl CrsRegistry {
    /// Build a registry. Later duplicates replace earlier definitions in place.
    pub fn new(defs: Vec<CrsDef>) -> Self {
        let mut registry = Self { defs: Vec::with_capacity(defs.len()) };
        for def in defs {
            registry.register(def);
        }
        registry
    }

    /// Add a definition, replacing any existing one with the same code.
    pub fn register(&mut self, def: CrsDef) {
        match self.defs.iter_mut().find(|d| d.code == def.code) {
            Some(existing) => *existing = def,
            None => self.defs.push(def),
        }
    }

    pub fn get(&self, code: &str) -> Option<&CrsDef> {
        self.defs.iter().find(|d| d.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrsDef> {
        self.defs.iter()
    }

    /// Units of `code`; unknown codes are treated as metric.
    pub fn units(&self, code: &str) -> CrsUnits {
        self.get(code).map(|d| d.units).unwrap_or_default()
    }
}

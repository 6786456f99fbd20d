//! # Jurisdictions and Airports

use serde::{Deserialize, Serialize};

/// A legal jurisdiction and the aviation authority that governs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Jurisdiction code, e.g. `EU`.
    pub code: String,
    /// Governing aviation authority, e.g. `EASA`.
    pub authority: String,
}

impl Jurisdiction {
    /// A jurisdiction under a named authority.
    pub fn new(code: impl Into<String>, authority: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            authority: authority.into(),
        }
    }

    /// The European Union under EASA.
    pub fn eu() -> Self {
        Self::new("EU", "EASA")
    }
}

/// An airport, located in exactly one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA location code, e.g. `AMS`.
    pub iata: String,
    /// The jurisdiction the airport sits in.
    pub jurisdiction: Jurisdiction,
}

impl Airport {
    /// An airport inside `jurisdiction`.
    pub fn new(iata: impl Into<String>, jurisdiction: Jurisdiction) -> Self {
        Self {
            iata: iata.into(),
            jurisdiction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eu_jurisdiction_is_governed_by_easa() {
        let eu = Jurisdiction::eu();
        assert_eq!(eu.code, "EU");
        assert_eq!(eu.authority, "EASA");
    }

    #[test]
    fn airport_carries_its_jurisdiction() {
        let ams = Airport::new("AMS", Jurisdiction::eu());
        assert_eq!(ams.iata, "AMS");
        assert_eq!(ams.jurisdiction.code, "EU");
    }
}

use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard atomic masses in atomic mass units, keyed by uppercase symbol.
static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "H" => 1.008,
    "C" => 12.011,
    "N" => 14.007,
    "O" => 15.999,
    "P" => 30.974,
    "S" => 32.06,
    "F" => 18.998,
    "CL" => 35.45,
    "BR" => 79.904,
    "I" => 126.904,
    "NA" => 22.990,
    "K" => 39.098,
    "CA" => 40.078,
    "MG" => 24.305,
    "ZN" => 65.38,
    "FE" => 55.845,
    "CU" => 63.546,
    "MN" => 54.938,
    "SE" => 78.971,
};

/// A chemical element carrying the mass used for center-of-mass weighting.
///
/// The set covers the elements commonly found in biomolecular systems
/// (proteins, nucleic acids, common ions). Anything else parses to
/// [`Element::Unknown`], which deliberately has no mass so that downstream
/// aggregation can reject it instead of silently mis-weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Phosphorus,
    Sulfur,
    Fluorine,
    Chlorine,
    Bromine,
    Iodine,
    Sodium,
    Potassium,
    Calcium,
    Magnesium,
    Zinc,
    Iron,
    Copper,
    Manganese,
    Selenium,
    #[default]
    Unknown,
}

impl Element {
    /// Returns the standard atomic mass in atomic mass units, or `None` for
    /// [`Element::Unknown`].
    pub fn mass(&self) -> Option<f64> {
        ATOMIC_MASSES.get(self.symbol()).copied()
    }

    /// Returns the canonical uppercase element symbol (e.g., "C", "MG").
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Phosphorus => "P",
            Element::Sulfur => "S",
            Element::Fluorine => "F",
            Element::Chlorine => "CL",
            Element::Bromine => "BR",
            Element::Iodine => "I",
            Element::Sodium => "NA",
            Element::Potassium => "K",
            Element::Calcium => "CA",
            Element::Magnesium => "MG",
            Element::Zinc => "ZN",
            Element::Iron => "FE",
            Element::Copper => "CU",
            Element::Manganese => "MN",
            Element::Selenium => "SE",
            Element::Unknown => "X",
        }
    }

    /// Infers the element from a PDB-style atom name when the element column
    /// is absent.
    ///
    /// Two-letter symbols (MG, CL, FE, ...) are checked before falling back
    /// to the first alphabetic character, so "MG" resolves to magnesium
    /// rather than a mistyped carbon but "CA" in a protein residue context
    /// still needs the caller to pass the atom name, not the residue name.
    pub fn infer_from_atom_name(name: &str) -> Element {
        let trimmed = name.trim();
        // get() rather than indexing: a multi-byte label must fall through
        // to the one-letter path, not panic on a char boundary.
        if let Some(prefix) = trimmed.get(..2) {
            let prefix = prefix.to_ascii_uppercase();
            match prefix.as_str() {
                "CL" | "BR" | "NA" | "MG" | "ZN" | "FE" | "CU" | "MN" | "SE" => {
                    return prefix.parse().unwrap_or(Element::Unknown);
                }
                _ => {}
            }
        }
        trimmed
            .chars()
            .find(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase().to_string())
            .and_then(|s| s.parse().ok())
            .unwrap_or(Element::Unknown)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unrecognized element symbol: '{0}'")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(Element::Hydrogen),
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            "P" => Ok(Element::Phosphorus),
            "S" => Ok(Element::Sulfur),
            "F" => Ok(Element::Fluorine),
            "CL" => Ok(Element::Chlorine),
            "BR" => Ok(Element::Bromine),
            "I" => Ok(Element::Iodine),
            "NA" => Ok(Element::Sodium),
            "K" => Ok(Element::Potassium),
            "CA" => Ok(Element::Calcium),
            "MG" => Ok(Element::Magnesium),
            "ZN" => Ok(Element::Zinc),
            "FE" => Ok(Element::Iron),
            "CU" => Ok(Element::Copper),
            "MN" => Ok(Element::Manganese),
            "SE" => Ok(Element::Selenium),
            other => Err(ParseElementError(other.to_string())),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

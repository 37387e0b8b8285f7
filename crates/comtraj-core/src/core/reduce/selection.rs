use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use serde::{Deserialize, Serialize};

/// A pluggable predicate over atom attributes, used to pick representative
/// atoms during topology reduction.
///
/// Selection is a small closed set of named strategies rather than a query
/// mini-language; richer queries are out of scope for this tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// Matches atoms whose name equals any of the listed names.
    AtomNames(Vec<String>),
    /// Matches atoms of a single chemical element.
    Element(Element),
    /// Matches every atom.
    Any,
}

impl Selection {
    /// The default representative-atom selection for COM reduction: one of
    /// CA (protein backbone), MG (magnesium ions), or C5 (nucleotides and
    /// nucleotide-like ligands).
    pub fn com_representatives() -> Self {
        Selection::AtomNames(vec!["CA".to_string(), "MG".to_string(), "C5".to_string()])
    }

    /// Tests whether an atom satisfies this selection.
    pub fn matches(&self, atom: &Atom) -> bool {
        match self {
            Selection::AtomNames(names) => names.iter().any(|n| n == &atom.name),
            Selection::Element(element) => atom.element == *element,
            Selection::Any => true,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::com_representatives()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn com_representatives_match_expected_names() {
        let selection = Selection::com_representatives();
        assert!(selection.matches(&Atom::new("CA", Element::Carbon)));
        assert!(selection.matches(&Atom::new("MG", Element::Magnesium)));
        assert!(selection.matches(&Atom::new("C5", Element::Carbon)));
        assert!(!selection.matches(&Atom::new("CB", Element::Carbon)));
        assert!(!selection.matches(&Atom::new("O", Element::Oxygen)));
    }

    #[test]
    fn element_selection_ignores_atom_name() {
        let selection = Selection::Element(Element::Magnesium);
        assert!(selection.matches(&Atom::new("MG2", Element::Magnesium)));
        assert!(!selection.matches(&Atom::new("MG", Element::Carbon)));
    }

    #[test]
    fn any_matches_everything() {
        assert!(Selection::Any.matches(&Atom::new("", Element::Unknown)));
    }

    #[test]
    fn default_is_com_representatives() {
        assert_eq!(Selection::default(), Selection::com_representatives());
    }
}

//! Fluid composition (pure, pseudo-pure, or mixtures).

use crate::error::{FluidError, FluidResult};
use tt_core::numeric::{Tolerances, nearly_equal};

/// Fluid composition defined by normalized mole fractions.
///
/// The composition is always normalized (mole fractions sum to 1.0).
/// A pseudo-pure fluid (air, R410A treated as one component) has a single
/// entry and is flagged so that single-component correlations accept it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Composition {
    /// Component names and their mole fractions (always normalized to sum=1).
    items: Vec<(String, f64)>,
    /// Set for mixtures modelled with a single-component equation of state.
    pseudo_pure: bool,
}

impl Composition {
    /// Create a pure-component composition.
    pub fn pure(name: impl Into<String>) -> Self {
        Self {
            items: vec![(name.into(), 1.0)],
            pseudo_pure: false,
        }
    }

    /// Create a pseudo-pure composition (a mixture with its own single-fluid EOS).
    pub fn pseudo_pure(name: impl Into<String>) -> Self {
        Self {
            items: vec![(name.into(), 1.0)],
            pseudo_pure: true,
        }
    }

    /// Create a composition from mole fractions.
    ///
    /// Validates that all fractions are finite, non-negative, and have a positive sum,
    /// then normalizes to sum=1.
    pub fn new_mole_fractions<S: Into<String>>(fractions: Vec<(S, f64)>) -> FluidResult<Self> {
        if fractions.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "empty composition",
            });
        }

        let mut sum = 0.0;
        for (_, frac) in &fractions {
            if !frac.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if *frac < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        // Normalize
        let normalized: Vec<(String, f64)> = fractions
            .into_iter()
            .map(|(s, f)| (s.into(), f / sum))
            .filter(|(_, f)| *f > 1e-15) // Drop negligible components
            .collect();

        if normalized.is_empty() {
            return Err(FluidError::NonPhysical {
                what: "all mole fractions negligible",
            });
        }

        Ok(Self {
            items: normalized,
            pseudo_pure: false,
        })
    }

    /// Get mole fraction of a component (0.0 if not present).
    pub fn mole_fraction(&self, name: &str) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| s == name)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Check if this is a pure-component composition.
    ///
    /// Returns `Some(name)` if exactly one component has fraction ≈1.0 and it
    /// is not flagged pseudo-pure.
    pub fn is_pure(&self) -> Option<&str> {
        if self.pseudo_pure || self.items.len() != 1 {
            return None;
        }
        let (name, frac) = &self.items[0];
        let tol = Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        };
        nearly_equal(*frac, 1.0, tol).then_some(name.as_str())
    }

    /// True for pure fluids and pseudo-pure fluids alike.
    ///
    /// This is the gate for every single-component transport correlation.
    pub fn is_pure_or_pseudo_pure(&self) -> bool {
        self.pseudo_pure || self.is_pure().is_some()
    }

    /// Number of components with non-zero mole fraction.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all components with non-zero mole fractions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(s, f)| (s.as_str(), *f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_composition() {
        let comp = Composition::pure("Methane");
        assert_eq!(comp.is_pure(), Some("Methane"));
        assert!(comp.is_pure_or_pseudo_pure());
        assert_eq!(comp.mole_fraction("Methane"), 1.0);
        assert_eq!(comp.mole_fraction("Ethane"), 0.0);
    }

    #[test]
    fn pseudo_pure_passes_gate_but_is_not_pure() {
        let comp = Composition::pseudo_pure("Air");
        assert_eq!(comp.is_pure(), None);
        assert!(comp.is_pure_or_pseudo_pure());
    }

    #[test]
    fn mixture_fails_gate() {
        let comp =
            Composition::new_mole_fractions(vec![("Methane", 0.9), ("Ethane", 0.1)]).unwrap();
        assert_eq!(comp.is_pure(), None);
        assert!(!comp.is_pure_or_pseudo_pure());
        assert_eq!(comp.len(), 2);
    }

    #[test]
    fn single_entry_fractions_is_pure() {
        let comp = Composition::new_mole_fractions(vec![("Nitrogen", 3.0)]).unwrap();
        assert_eq!(comp.is_pure(), Some("Nitrogen"));
    }

    #[test]
    fn mixture_normalization_non_unit_sum() {
        let comp =
            Composition::new_mole_fractions(vec![("Oxygen", 2.0), ("Nitrogen", 8.0)]).unwrap();

        let tol = Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        };
        assert!(nearly_equal(comp.mole_fraction("Oxygen"), 0.2, tol));
        assert!(nearly_equal(comp.mole_fraction("Nitrogen"), 0.8, tol));
    }

    #[test]
    fn invalid_negative_fraction() {
        let result = Composition::new_mole_fractions(vec![("Oxygen", -0.5), ("Nitrogen", 1.5)]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_zero_sum() {
        let result = Composition::new_mole_fractions(vec![("Oxygen", 0.0), ("Nitrogen", 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_non_finite() {
        let result = Composition::new_mole_fractions(vec![("Oxygen", f64::NAN)]);
        assert!(result.is_err());
    }
}

//! Pack size catalog

use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while validating a pack catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog contains no pack sizes.
    #[error("pack catalog must contain at least one size")]
    Empty,

    /// A pack size of zero was supplied.
    #[error("pack sizes must be positive")]
    ZeroSize,

    /// The same pack size was supplied more than once.
    #[error("duplicate pack size: {0}")]
    DuplicateSize(u64),

    /// A pack size outside the signed state space was supplied. States are
    /// signed remaining quantities, so such a size could never produce an
    /// edge and no candidate would ever be reached.
    #[error("pack size {0} is too large")]
    SizeTooLarge(u64),
}

/// A fixed, distinct, ascending set of pack sizes.
///
/// The catalog is pure configuration: it is validated once, never mutated, and
/// injected into [`crate::plan::PackPlanner`] so alternate catalogs can be
/// exercised without touching globals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<u64>")]
pub struct PackCatalog {
    sizes: SmallVec<[u64; 8]>,
}

impl PackCatalog {
    /// Create a catalog from the given sizes, sorting them ascending.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the input is empty, contains a zero
    /// size, contains the same size twice, or contains a size too large for
    /// the signed state space.
    pub fn new(sizes: impl IntoIterator<Item = u64>) -> Result<Self, CatalogError> {
        let mut sizes: SmallVec<[u64; 8]> = sizes.into_iter().collect();

        if sizes.is_empty() {
            return Err(CatalogError::Empty);
        }

        if sizes.contains(&0) {
            return Err(CatalogError::ZeroSize);
        }

        if let Some(&oversized) = sizes.iter().find(|&&size| i64::try_from(size).is_err()) {
            return Err(CatalogError::SizeTooLarge(oversized));
        }

        sizes.sort_unstable();

        if let Some(duplicate) = sizes.windows(2).find(|pair| pair.first() == pair.last()) {
            return Err(CatalogError::DuplicateSize(
                duplicate.first().copied().unwrap_or_default(),
            ));
        }

        Ok(Self { sizes })
    }

    /// All pack sizes, ascending.
    #[must_use]
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// The smallest pack size. This is the fallback single-pack answer for
    /// quantities below any catalog size.
    #[must_use]
    pub fn smallest(&self) -> u64 {
        self.sizes.first().copied().unwrap_or_default()
    }

    /// Number of distinct pack sizes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the catalog holds no sizes. Always false for a validated
    /// catalog; present for API completeness alongside [`len()`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl TryFrom<Vec<u64>> for PackCatalog {
    type Error = CatalogError;

    fn try_from(sizes: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(sizes)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sizes_are_sorted_ascending() -> TestResult {
        let catalog = PackCatalog::new([2000, 250, 5000, 500, 1000])?;

        assert_eq!(
            catalog.sizes(),
            &[250, 500, 1000, 2000, 5000],
            "sizes should be ascending regardless of input order"
        );
        assert_eq!(catalog.smallest(), 250, "smallest should be the first size");
        assert_eq!(catalog.len(), 5, "all sizes should be retained");

        Ok(())
    }

    #[test]
    fn rejects_empty_catalog() {
        let result = PackCatalog::new([]);

        assert_eq!(result, Err(CatalogError::Empty), "empty input should fail");
    }

    #[test]
    fn rejects_zero_size() {
        let result = PackCatalog::new([250, 0]);

        assert_eq!(result, Err(CatalogError::ZeroSize), "zero size should fail");
    }

    #[test]
    fn rejects_duplicate_size() {
        let result = PackCatalog::new([250, 500, 250]);

        assert_eq!(
            result,
            Err(CatalogError::DuplicateSize(250)),
            "duplicate size should fail"
        );
    }

    #[test]
    fn rejects_sizes_beyond_the_state_space() {
        let result = PackCatalog::new([250, u64::MAX]);

        assert_eq!(
            result,
            Err(CatalogError::SizeTooLarge(u64::MAX)),
            "a size that can never form an edge should fail validation"
        );
    }

    #[test]
    fn deserializes_from_a_sequence() -> TestResult {
        let catalog: PackCatalog = serde_json::from_str("[500, 250]")?;

        assert_eq!(catalog.sizes(), &[250, 500], "sequence should deserialize");

        Ok(())
    }

    #[test]
    fn deserialization_applies_validation() {
        let result: Result<PackCatalog, _> = serde_json::from_str("[250, 250]");

        assert!(result.is_err(), "invalid catalog should fail to deserialize");
    }
}

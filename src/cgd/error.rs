use thiserror::Error;

use crate::types::{GeneSymbol, GenotypeKey};

/// Failures that abort the mapping of a single row.  Variant notation that
/// can't be parsed is not an error; it is logged and the position feature is
/// omitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("gene symbol \"{symbol}\" of genotype {genotype_key} is not in the gene mapping")]
    UnknownGeneSymbol {
        symbol: GeneSymbol,
        genotype_key: GenotypeKey,
    },
    #[error("genotype {genotype_key} has no transcript gene symbol")]
    MissingGeneSymbol {
        genotype_key: GenotypeKey,
    },
    #[error("expected a row with {expected} fields but found {found}")]
    RowShape {
        expected: &'static str,
        found: usize,
    },
    #[error("required field \"{field}\" is NULL")]
    MissingField {
        field: &'static str,
    },
}

impl MappingError {
    // true for caller contract violations, false for reference data problems
    pub fn is_shape_violation(&self) -> bool {
        matches!(self, MappingError::RowShape { .. } | MappingError::MissingField { .. })
    }
}

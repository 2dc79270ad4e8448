use regex::Regex;

use crate::constants::{MISSENSE_LABEL_MARKER, MISSENSE_VARIANT_TYPE};
use crate::types::{ProteinPosition, ResidueCode};

/// A single residue substitution such as p.V600E
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AminoAcidChange {
    pub reference: ResidueCode,
    pub position: ProteinPosition,
    pub substitution: ResidueCode,
}

lazy_static! {
    static ref AMINO_ACID_CHANGE_RE: Regex =
        Regex::new(r"^(?:p\.)?([A-Za-z]{1,3})(\d+)([A-Za-z]{1,3})$").unwrap();
}

// The label test is a literal, case sensitive substring match.
pub fn is_missense(protein_variant_type: Option<&str>, genotype_label: &str) -> bool {
    protein_variant_type == Some(MISSENSE_VARIANT_TYPE) ||
        genotype_label.contains(MISSENSE_LABEL_MARKER)
}

/// Parse compact protein notation: 1-3 letter residue codes either side of a
/// position, with an optional "p." prefix.
pub fn parse_amino_acid_change(variant: &str) -> Option<AminoAcidChange> {
    let Some(captures) = AMINO_ACID_CHANGE_RE.captures(variant.trim())
    else {
        return None;
    };

    let (Some(reference), Some(pos_match), Some(substitution)) =
        (captures.get(1), captures.get(2), captures.get(3))
    else {
        return None;
    };

    let Ok(position) = pos_match.as_str().parse::<ProteinPosition>()
    else {
        return None;
    };

    Some(AminoAcidChange {
        reference: reference.as_str().into(),
        position,
        substitution: substitution.as_str().into(),
    })
}

/// Only missense rows are parsed, even if the notation of another variant
/// type would match.
pub fn parse_missense_change(variant: &str, is_missense: bool) -> Option<AminoAcidChange> {
    if is_missense {
        parse_amino_acid_change(variant)
    } else {
        None
    }
}

pub mod genotype;
pub mod disease_drug;

pub use genotype::{GenotypeMapper, ProteinVariantSummary, CdnaVariant};
pub use disease_drug::{DiseaseDrugMapper, DiseaseDrugSummary};

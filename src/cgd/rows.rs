use flexstr::SharedStr as FlexStr;

use crate::constants::{CDNA_ROW_FIELD_COUNT, DISEASE_DRUG_ROW_FIELD_COUNT,
                       PROTEIN_ROW_FIELD_COUNT};
use crate::error::MappingError;
use crate::types::*;

/// The protein variant part of a genotype row, the first 11 columns of both
/// genotype queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinVariantRow {
    pub genotype_key: GenotypeKey,
    pub genotype_label: Option<GenotypeLabel>,
    pub amino_acid_variant: Field,
    pub amino_acid_position: Field,
    pub transcript_id: Option<TranscriptId>,
    pub transcript_priority: Field,
    pub protein_variant_type: Field,
    pub functional_impact: Field,
    pub stop_gain_loss: Field,
    pub transcript_gene: Option<GeneSymbol>,
    pub protein_variant_source: Field,
}

/// The cDNA and genomic columns that follow the protein columns in rows of
/// genotypes mapped to a cDNA variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnaVariantRow {
    pub variant_gene: Option<GeneSymbol>,
    pub bp_position: Field,
    pub genotype_cdna: Field,
    pub cosmic_id: Field,
    pub db_snp_id: Field,
    pub genome_pos_start: Field,
    pub genome_pos_end: Field,
    pub ref_base: Field,
    pub variant_base: Field,
    pub primary_transcript_exons: Field,
    pub primary_transcript_variant_sub_types: Field,
    pub variant_type: Field,
    pub chromosome: Field,
    pub genome_build: Field,
    pub build_version: Field,
    pub build_date: Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenotypeRow {
    ProteinOnly(ProteinVariantRow),
    ProteinAndCdna(ProteinVariantRow, CdnaVariantRow),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseDrugGenotypeRow {
    pub genotype_key: GenotypeKey,
    pub genotype_label: Option<GenotypeLabel>,
    pub diagnosis_key: DiagnosisKey,
    pub diagnosis: Field,
    pub specific_diagnosis: Field,
    pub organ: Field,
    pub relationship: FlexStr,
    pub drug_key: DrugKey,
    pub drug: Field,
    pub therapy_status: Field,
    pub citation_id: Option<CitationId>,
}

fn required(field: Field, name: &'static str) -> Result<FlexStr, MappingError> {
    field.ok_or(MappingError::MissingField { field: name })
}

fn next_field(fields: &mut impl Iterator<Item = Field>) -> Field {
    fields.next().flatten()
}

impl ProteinVariantRow {
    fn from_field_iter(fields: &mut impl Iterator<Item = Field>)
                 -> Result<ProteinVariantRow, MappingError>
    {
        Ok(ProteinVariantRow {
            genotype_key: required(next_field(fields), "genotype_key")?,
            genotype_label: next_field(fields),
            amino_acid_variant: next_field(fields),
            amino_acid_position: next_field(fields),
            transcript_id: next_field(fields),
            transcript_priority: next_field(fields),
            protein_variant_type: next_field(fields),
            functional_impact: next_field(fields),
            stop_gain_loss: next_field(fields),
            transcript_gene: next_field(fields),
            protein_variant_source: next_field(fields),
        })
    }
}

impl CdnaVariantRow {
    fn from_field_iter(fields: &mut impl Iterator<Item = Field>) -> CdnaVariantRow {
        CdnaVariantRow {
            variant_gene: next_field(fields),
            bp_position: next_field(fields),
            genotype_cdna: next_field(fields),
            cosmic_id: next_field(fields),
            db_snp_id: next_field(fields),
            genome_pos_start: next_field(fields),
            genome_pos_end: next_field(fields),
            ref_base: next_field(fields),
            variant_base: next_field(fields),
            primary_transcript_exons: next_field(fields),
            primary_transcript_variant_sub_types: next_field(fields),
            variant_type: next_field(fields),
            chromosome: next_field(fields),
            genome_build: next_field(fields),
            build_version: next_field(fields),
            build_date: next_field(fields),
        }
    }
}

impl GenotypeRow {
    /// Dispatch on the field count: 11 fields is a protein only row, 27 is a
    /// protein row followed by cDNA columns.  Anything else is rejected.
    pub fn from_fields(fields: RawRow) -> Result<GenotypeRow, MappingError> {
        let found = fields.len();
        let mut fields_iter = fields.into_iter();

        match found {
            PROTEIN_ROW_FIELD_COUNT => {
                let protein = ProteinVariantRow::from_field_iter(&mut fields_iter)?;
                Ok(GenotypeRow::ProteinOnly(protein))
            },
            CDNA_ROW_FIELD_COUNT => {
                let protein = ProteinVariantRow::from_field_iter(&mut fields_iter)?;
                let cdna = CdnaVariantRow::from_field_iter(&mut fields_iter);
                Ok(GenotypeRow::ProteinAndCdna(protein, cdna))
            },
            _ => Err(MappingError::RowShape {
                expected: "11 or 27",
                found,
            }),
        }
    }

    pub fn protein(&self) -> &ProteinVariantRow {
        match self {
            GenotypeRow::ProteinOnly(protein) => protein,
            GenotypeRow::ProteinAndCdna(protein, _) => protein,
        }
    }

    pub fn cdna(&self) -> Option<&CdnaVariantRow> {
        match self {
            GenotypeRow::ProteinOnly(_) => None,
            GenotypeRow::ProteinAndCdna(_, cdna) => Some(cdna),
        }
    }
}

impl DiseaseDrugGenotypeRow {
    pub fn from_fields(fields: RawRow) -> Result<DiseaseDrugGenotypeRow, MappingError> {
        if fields.len() != DISEASE_DRUG_ROW_FIELD_COUNT {
            return Err(MappingError::RowShape {
                expected: "11",
                found: fields.len(),
            });
        }

        let mut fields = fields.into_iter();

        Ok(DiseaseDrugGenotypeRow {
            genotype_key: required(next_field(&mut fields), "genotype_key")?,
            genotype_label: next_field(&mut fields),
            diagnosis_key: required(next_field(&mut fields), "diagnosis_key")?,
            diagnosis: next_field(&mut fields),
            specific_diagnosis: next_field(&mut fields),
            organ: next_field(&mut fields),
            relationship: required(next_field(&mut fields), "relationship")?,
            drug_key: required(next_field(&mut fields), "drug_key")?,
            drug: next_field(&mut fields),
            therapy_status: next_field(&mut fields),
            citation_id: next_field(&mut fields),
        })
    }
}

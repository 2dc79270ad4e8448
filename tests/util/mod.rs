use flexstr::SharedStr as FlexStr;

use cgd::config::Config;
use cgd::gene_map::GeneSymbolMap;
use cgd::ident::IdGenerator;
use cgd::rows::{CdnaVariantRow, DiseaseDrugGenotypeRow, GenotypeRow, ProteinVariantRow};
use cgd::types::RawRow;

#[allow(dead_code)]
pub fn field(value: &str) -> Option<FlexStr> {
    Some(FlexStr::from(value))
}

#[allow(dead_code)]
pub fn make_test_ids() -> IdGenerator {
    IdGenerator::new("MONARCH")
}

#[allow(dead_code)]
pub fn make_test_gene_map() -> GeneSymbolMap {
    let mut gene_map = GeneSymbolMap::new();
    gene_map.insert("BRAF", "NCBIGene:673");
    gene_map.insert("KRAS", "NCBIGene:3845");
    gene_map.insert("EGFR", "NCBIGene:1956");
    gene_map
}

#[allow(dead_code)]
pub fn make_test_config() -> Config {
    Config::default()
}

#[allow(dead_code)]
pub fn make_protein_row(genotype_key: &str, genotype_label: &str,
                        amino_acid_variant: Option<&str>, transcript_priority: Option<&str>,
                        protein_variant_type: Option<&str>, transcript_gene: Option<&str>)
                        -> ProteinVariantRow {
    ProteinVariantRow {
        genotype_key: genotype_key.into(),
        genotype_label: field(genotype_label),
        amino_acid_variant: amino_acid_variant.map(FlexStr::from),
        amino_acid_position: None,
        transcript_id: field("NM_004333.4"),
        transcript_priority: transcript_priority.map(FlexStr::from),
        protein_variant_type: protein_variant_type.map(FlexStr::from),
        functional_impact: field("gain-of-function"),
        stop_gain_loss: None,
        transcript_gene: transcript_gene.map(FlexStr::from),
        protein_variant_source: None,
    }
}

#[allow(dead_code)]
pub fn make_braf_v600e_row() -> ProteinVariantRow {
    make_protein_row("17", "BRAF V600E", Some("p.V600E"), Some("Primary"),
                     Some("nonsynonymous - missense"), Some("BRAF"))
}

#[allow(dead_code)]
pub fn make_cdna_row() -> CdnaVariantRow {
    CdnaVariantRow {
        variant_gene: field("BRAF"),
        bp_position: field("1799"),
        genotype_cdna: field("c.1799T>A"),
        cosmic_id: field("COSM476"),
        db_snp_id: field("rs113488022"),
        genome_pos_start: field("140453136"),
        genome_pos_end: field("140453136"),
        ref_base: field("A"),
        variant_base: field("T"),
        primary_transcript_exons: field("15"),
        primary_transcript_variant_sub_types: field("missense"),
        variant_type: field("SNV"),
        chromosome: field("7"),
        genome_build: field("GRCh37"),
        build_version: field("37"),
        build_date: field("2009-02-27"),
    }
}

#[allow(dead_code)]
pub fn make_protein_and_cdna_row() -> GenotypeRow {
    GenotypeRow::ProteinAndCdna(make_braf_v600e_row(), make_cdna_row())
}

#[allow(dead_code)]
pub fn make_disease_drug_row(citation_id: Option<&str>) -> DiseaseDrugGenotypeRow {
    DiseaseDrugGenotypeRow {
        genotype_key: "17".into(),
        genotype_label: field("BRAF V600E"),
        diagnosis_key: "3".into(),
        diagnosis: field("melanoma"),
        specific_diagnosis: None,
        organ: field("skin"),
        relationship: "response to".into(),
        drug_key: "8".into(),
        drug: field("vemurafenib"),
        therapy_status: field("FDA approved"),
        citation_id: citation_id.map(FlexStr::from),
    }
}

// the 11 protein fields in query column order
#[allow(dead_code)]
pub fn protein_row_fields(row: &ProteinVariantRow) -> RawRow {
    vec![Some(row.genotype_key.clone()), row.genotype_label.clone(),
         row.amino_acid_variant.clone(), row.amino_acid_position.clone(),
         row.transcript_id.clone(), row.transcript_priority.clone(),
         row.protein_variant_type.clone(), row.functional_impact.clone(),
         row.stop_gain_loss.clone(), row.transcript_gene.clone(),
         row.protein_variant_source.clone()]
}

#[allow(dead_code)]
pub fn disease_drug_row_fields(row: &DiseaseDrugGenotypeRow) -> RawRow {
    vec![Some(row.genotype_key.clone()), row.genotype_label.clone(),
         Some(row.diagnosis_key.clone()), row.diagnosis.clone(),
         row.specific_diagnosis.clone(), row.organ.clone(),
         Some(row.relationship.clone()), Some(row.drug_key.clone()),
         row.drug.clone(), row.therapy_status.clone(),
         row.citation_id.clone()]
}

// a unique file name in the temporary directory
#[allow(dead_code)]
pub fn temp_file_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("cgd-kg-test-{}-{}", std::process::id(), name));
    path
}

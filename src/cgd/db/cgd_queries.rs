extern crate tokio_postgres;

use self::tokio_postgres::{Client, Row};
use flexstr::SharedStr as FlexStr;

use crate::types::RawRow;

// Every column is cast to text so that rows from all queries can be handled
// as lists of nullable strings.

// genotypes with protein variant information but no cDNA variant
const GENOTYPE_PROTEIN_SQL: &str = "
SELECT DISTINCT
  tg.id::text AS therapy_genotype_id,
  tg.comment::text AS genotype_label,
  pv.genotype_amino_acid_onel::text AS aa_var,
  pv.amino_acid_position::text,
  transcript.description::text AS transcript_id,
  transcript_priority.description::text AS transcript_priority,
  protein_variant_type.description::text AS protein_variant_type,
  functional_impact.description::text AS functional_impact,
  stop_gain_loss.description::text AS stop_gain_loss,
  trg.description::text AS transcript_gene,
  pv.pub_med_ids::text AS protein_variant_pubmed_ids
FROM therapy_genotype tg
JOIN therapy_variant tv ON tg.id = tv.therapy_genotype
JOIN protein_variant pv ON tv.protein_variant = pv.id
LEFT OUTER JOIN cdna_variant cdna ON pv.id = cdna.protein_variant
LEFT OUTER JOIN transcript ON pv.transcript = transcript.id
LEFT OUTER JOIN transcript_priority ON transcript.transcript_priority = transcript_priority.id
LEFT OUTER JOIN protein_variant_type ON pv.protein_variant_type = protein_variant_type.id
LEFT OUTER JOIN functional_impact ON pv.functional_impact = functional_impact.id
LEFT OUTER JOIN stop_gain_loss ON pv.stop_gain_loss = stop_gain_loss.id
LEFT OUTER JOIN gene trg ON transcript.gene = trg.id
WHERE cdna.protein_variant IS NULL";

// genotypes mapped to a cDNA variant
const GENOTYPE_CDNA_SQL: &str = "
SELECT DISTINCT
  tg.id::text AS therapy_genotype_id,
  tg.comment::text AS genotype_label,
  pv.genotype_amino_acid_onel::text AS aa_var,
  pv.amino_acid_position::text,
  transcript.description::text AS transcript_id,
  transcript_priority.description::text AS transcript_priority,
  protein_variant_type.description::text AS protein_variant_type,
  functional_impact.description::text AS functional_impact,
  stop_gain_loss.description::text AS stop_gain_loss,
  trg.description::text AS transcript_gene,
  pv.pub_med_ids::text AS protein_variant_pubmed_ids,
  gene.description::text AS variant_gene,
  cdna.base_pair_position::text,
  cdna.genotype_cdna::text,
  genomic_variant.cosmic_id::text,
  genomic_variant.db_snp_id::text,
  genomic_variant.position_start::text,
  genomic_variant.position_end::text,
  genomic_variant.reference_base::text,
  genomic_variant.variant_base::text,
  genomic_variant.primary_transcript_exons::text,
  genomic_variant.primary_transcript_variant_sub_types::text,
  variant_type.description::text AS variant_type,
  chromosome.description::text AS chromosome,
  genome_build.description::text AS genome_build,
  genome_build.build_version::text AS build_version,
  genome_build.build_date::text AS build_date
FROM therapy_genotype tg
JOIN therapy_variant tv ON tg.id = tv.therapy_genotype
JOIN protein_variant pv ON tv.protein_variant = pv.id
JOIN cdna_variant cdna ON pv.id = cdna.protein_variant
LEFT OUTER JOIN transcript ON cdna.transcript = transcript.id
LEFT OUTER JOIN genomic_variant ON cdna.genomic_variant = genomic_variant.id
LEFT OUTER JOIN transcript_priority ON transcript.transcript_priority = transcript_priority.id
LEFT OUTER JOIN protein_variant_type ON pv.protein_variant_type = protein_variant_type.id
LEFT OUTER JOIN functional_impact ON pv.functional_impact = functional_impact.id
LEFT OUTER JOIN stop_gain_loss ON pv.stop_gain_loss = stop_gain_loss.id
LEFT OUTER JOIN variant_type ON genomic_variant.variant_type = variant_type.id
LEFT OUTER JOIN chromosome ON genomic_variant.chromosome = chromosome.id
LEFT OUTER JOIN genome_build ON genomic_variant.genome_build = genome_build.id
LEFT OUTER JOIN gene trg ON transcript.gene = trg.id
LEFT OUTER JOIN gene ON genomic_variant.gene = gene.id";

const DISEASE_DRUG_GENOTYPE_SQL: &str = "
SELECT DISTINCT
  tg.id::text AS genotype_id,
  tg.comment::text AS genotype_label,
  diagnoses.id::text AS diagnoses_id,
  diagnoses.description::text AS diagnoses,
  specific_diagnosis.description::text AS specific_diagnosis,
  organs.description::text AS organ,
  ta.description::text AS relationship,
  tc.id::text AS drug_id,
  tc.description::text AS drug,
  therapy_status.description::text AS therapy_status,
  tgp.pub_med_id::text AS pubmed_id
FROM therapy_genotype tg
JOIN diagnoses ON tg.diagnosis = diagnoses.id
JOIN therapeutic_association AS ta ON tg.therapeutic_association = ta.id
JOIN therapeutic_context tc ON tg.therapeutic_context = tc.id
LEFT OUTER JOIN therapy_status ON tg.therapy_status = therapy_status.id
LEFT OUTER JOIN specific_diagnosis ON tg.specific_diagnosis = specific_diagnosis.id
LEFT OUTER JOIN therapy_genotype_publication AS tgp ON tg.id = tgp.therapy_genotype
LEFT OUTER JOIN organs ON tg.organ = organs.id";

// genotypes with a gene but no protein variant: fusions, copy number
// changes and "any mutation of gene X"
const FUSION_COPY_ANY_MUTATION_SQL: &str = "
SELECT DISTINCT
  tg.id::text AS therapy_genotype_id,
  tg.comment::text AS genotype_label,
  gene.description::text AS ref_gene_for_fusion_or_copy,
  gf.description::text AS gene_fusion,
  cg.description::text AS copy_gene
FROM therapy_genotype tg
JOIN therapy_variant tv ON tg.id = tv.therapy_genotype
JOIN gene ON tv.gene = gene.id
LEFT OUTER JOIN gene gf ON tv.gene_fusion = gf.id
LEFT OUTER JOIN gene cg ON tv.copy_gene = cg.id
WHERE tv.protein_variant IS NULL";

// genotypes with neither a protein variant nor a gene: rearrangements,
// unspecified missense mutations, amplifications and indels
const UNMAPPED_GENOTYPES_SQL: &str = "
SELECT DISTINCT
  tg.id::text AS therapy_genotype_id,
  tg.comment::text AS genotype_label,
  tv.amino_acid_start::text,
  tv.amino_acid_end::text,
  variant_type.description::text,
  transcript.description::text AS transcript_id,
  protein_variant_type.description::text AS protein_variant_type,
  gene.description::text AS gene_fusion,
  g.description::text AS copy_gene,
  cns.description::text AS copy_number_result
FROM therapy_genotype tg
JOIN therapy_variant tv ON tg.id = tv.therapy_genotype
LEFT OUTER JOIN transcript ON tv.transcript = transcript.id
LEFT OUTER JOIN protein_variant_type ON tv.protein_variant_type = protein_variant_type.id
LEFT OUTER JOIN variant_type ON tv.variant_type_aa_coords = variant_type.id
LEFT OUTER JOIN gene ON tv.gene_fusion = gene.id
LEFT OUTER JOIN gene g ON tv.copy_gene = g.id
LEFT OUTER JOIN copy_number_result cns ON tv.copy_number_result = cns.id
WHERE tv.protein_variant IS NULL
  AND tv.gene IS NULL";

const PUBLIC_TABLE_COUNT_SQL: &str =
  "SELECT count(*) FROM information_schema.tables WHERE table_schema = 'public'";

fn raw_row(row: &Row) -> RawRow {
  (0..row.len())
    .map(|idx| {
      let value: Option<String> = row.get(idx);
      value.map(FlexStr::from)
    })
    .collect()
}

async fn fetch_rows(conn: &Client, sql: &str)
  -> Result<Vec<RawRow>, tokio_postgres::Error>
{
  let result = conn.query(sql, &[]).await?;

  Ok(result.iter().map(raw_row).collect())
}

/// The result sets of a run, fetched completely before mapping starts.
#[derive(Clone, Debug, Default)]
pub struct CgdQueries {
  pub genotype_protein_rows: Vec<RawRow>,
  pub genotype_cdna_rows: Vec<RawRow>,
  pub disease_drug_genotype_rows: Vec<RawRow>,
  pub fusion_copy_rows: Vec<RawRow>,
  pub unmapped_genotype_rows: Vec<RawRow>,
}

pub async fn fetch_genotype_protein_info(conn: &Client)
  -> Result<Vec<RawRow>, tokio_postgres::Error>
{
  fetch_rows(conn, GENOTYPE_PROTEIN_SQL).await
}

pub async fn fetch_genotype_cdna_info(conn: &Client)
  -> Result<Vec<RawRow>, tokio_postgres::Error>
{
  fetch_rows(conn, GENOTYPE_CDNA_SQL).await
}

pub async fn fetch_disease_drug_genotype_relationships(conn: &Client)
  -> Result<Vec<RawRow>, tokio_postgres::Error>
{
  fetch_rows(conn, DISEASE_DRUG_GENOTYPE_SQL).await
}

pub async fn fetch_fusion_copy_genotypes(conn: &Client)
  -> Result<Vec<RawRow>, tokio_postgres::Error>
{
  fetch_rows(conn, FUSION_COPY_ANY_MUTATION_SQL).await
}

pub async fn fetch_unmapped_genotypes(conn: &Client)
  -> Result<Vec<RawRow>, tokio_postgres::Error>
{
  fetch_rows(conn, UNMAPPED_GENOTYPES_SQL).await
}

pub async fn database_is_empty(conn: &Client) -> Result<bool, tokio_postgres::Error> {
  let row = conn.query_one(PUBLIC_TABLE_COUNT_SQL, &[]).await?;
  let count: i64 = row.get(0);

  Ok(count == 0)
}

impl CgdQueries {
  pub async fn new(conn: &Client) -> Result<CgdQueries, tokio_postgres::Error> {
    Ok(CgdQueries {
      genotype_protein_rows: fetch_genotype_protein_info(conn).await?,
      genotype_cdna_rows: fetch_genotype_cdna_info(conn).await?,
      disease_drug_genotype_rows: fetch_disease_drug_genotype_relationships(conn).await?,
      fusion_copy_rows: fetch_fusion_copy_genotypes(conn).await?,
      unmapped_genotype_rows: fetch_unmapped_genotypes(conn).await?,
    })
  }
}

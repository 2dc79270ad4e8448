use flexstr::{SharedStr as FlexStr, shared_fmt as flex_fmt};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::constants::*;
use crate::error::MappingError;
use crate::gene_map::GeneSymbolMap;
use crate::graph::{FeatureLocation, GraphSink, PositionFeature};
use crate::ident::IdGenerator;
use crate::rows::{CdnaVariantRow, GenotypeRow, ProteinVariantRow};
use crate::types::{Curie, Field, GeneSymbol, NodeId};
use crate::variant::{is_missense, parse_missense_change};

/// What was made from the protein part of a genotype row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinVariantSummary {
    pub genotype_id: NodeId,
    pub transcript_id: Option<NodeId>,
    pub is_missense: bool,
    pub position_feature_id: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicLocation {
    pub chromosome: Field,
    pub start: Field,
    pub end: Field,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeBuild {
    pub description: Field,
    pub version: Field,
    pub date: Field,
}

/// The cDNA and genomic columns of a genotype row, correlated with the
/// genotype node.  Nothing is added to the graph from these yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnaVariant {
    pub genotype_id: NodeId,
    pub variant_gene: Option<GeneSymbol>,
    pub bp_position: Field,
    pub cdna_notation: Field,
    pub xrefs: Vec<Curie>,
    pub location: GenomicLocation,
    pub ref_base: Field,
    pub variant_base: Field,
    pub primary_transcript_exons: Field,
    pub primary_transcript_variant_sub_types: Field,
    pub variant_type: Field,
    pub genome_build: GenomeBuild,
}

pub struct GenotypeMapper<'a> {
    ids: &'a IdGenerator,
    genes: &'a GeneSymbolMap,
}

impl<'a> GenotypeMapper<'a> {
    pub fn new(ids: &'a IdGenerator, genes: &'a GeneSymbolMap) -> GenotypeMapper<'a> {
        GenotypeMapper {
            ids,
            genes,
        }
    }

    pub fn genotype_id(&self, genotype_key: &str) -> NodeId {
        self.ids.make_id(GENOTYPE_TAG, &[genotype_key])
    }

    pub fn transcript_id(&self, transcript_id: &str) -> NodeId {
        self.ids.make_id(TRANSCRIPT_TAG, &[transcript_id])
    }

    pub fn position_feature_id(&self, genotype_key: &str, amino_acid_variant: &str) -> NodeId {
        self.ids.make_id(AA_POSITION_TAG, &[genotype_key, amino_acid_variant])
    }

    /// Map one genotype row.  Every row gets protein handling; rows with
    /// cDNA columns are also decomposed by `cdna_variant()`.
    pub fn add_genotype_row<S>(&self, sink: &mut S, row: &GenotypeRow)
                               -> Result<ProteinVariantSummary, MappingError>
        where S: GraphSink + ?Sized
    {
        let summary = self.add_protein_variant(sink, row.protein())?;

        if let Some(cdna_row) = row.cdna() {
            let cdna_variant = self.cdna_variant(row.protein(), cdna_row);
            trace!("genotype {} has cDNA variant {:?} xrefs: {}", summary.genotype_id,
                   cdna_variant.cdna_notation, cdna_variant.xrefs.iter().join(", "));
        }

        Ok(summary)
    }

    pub fn add_genotype_rows<S>(&self, sink: &mut S, rows: &[GenotypeRow])
                                -> Result<Vec<ProteinVariantSummary>, MappingError>
        where S: GraphSink + ?Sized
    {
        rows.iter().map(|row| self.add_genotype_row(sink, row)).collect()
    }

    /// Add the genotype, its transcript, gene and (for parseable missense
    /// variants) its position feature.  The gene symbol is resolved before
    /// anything is added so a failed row leaves no partial output.
    pub fn add_protein_variant<S>(&self, sink: &mut S, row: &ProteinVariantRow)
                                  -> Result<ProteinVariantSummary, MappingError>
        where S: GraphSink + ?Sized
    {
        let genotype_key = &row.genotype_key;
        let genotype_label = row.genotype_label.as_deref();

        let Some(ref transcript_gene) = row.transcript_gene
        else {
            return Err(MappingError::MissingGeneSymbol {
                genotype_key: genotype_key.clone(),
            });
        };

        let gene_id = self.genes.resolve(transcript_gene, genotype_key)?;

        let genotype_id = self.genotype_id(genotype_key);
        let transcript_id =
            row.transcript_id.as_ref().map(|transcript| self.transcript_id(transcript));

        sink.add_individual(&genotype_id, genotype_label, SEQUENCE_ALTERATION);

        if let (Some(transcript_curie), Some(transcript_label)) =
            (transcript_id.as_ref(), row.transcript_id.as_ref())
        {
            let transcript_type =
                match row.transcript_priority.as_deref() {
                    Some(PRIMARY_TRANSCRIPT_PRIORITY) => Some(PRIMARY_TRANSCRIPT),
                    Some(SECONDARY_TRANSCRIPT_PRIORITY) => Some(TRANSCRIPT_SECONDARY_STRUCTURE_VARIANT),
                    _ => None,
                };

            if let Some(transcript_type) = transcript_type {
                sink.add_individual(transcript_curie, Some(transcript_label.as_ref()), transcript_type);
                sink.add_triple(&genotype_id, HAS_AFFECTED_LOCUS, transcript_curie);
            }
        }

        let protein_variant_type = row.protein_variant_type.as_deref();
        let is_missense =
            is_missense(protein_variant_type, genotype_label.unwrap_or_default());

        if is_missense {
            sink.add_individual(&genotype_id, genotype_label, MISSENSE_VARIANT);
        }

        sink.add_class(gene_id, Some(transcript_gene.as_ref()));
        sink.add_triple(&genotype_id, IS_ALLELE_OF, gene_id);

        let position_feature_id =
            if is_missense {
                self.add_position_feature(sink, row, &genotype_id, transcript_id.as_ref())
            } else {
                None
            };

        Ok(ProteinVariantSummary {
            genotype_id,
            transcript_id,
            is_missense,
            position_feature_id,
        })
    }

    fn add_position_feature<S>(&self, sink: &mut S, row: &ProteinVariantRow,
                               genotype_id: &NodeId, transcript_id: Option<&NodeId>)
                               -> Option<NodeId>
        where S: GraphSink + ?Sized
    {
        let amino_acid_variant = row.amino_acid_variant.as_deref().unwrap_or_default();

        let Some(change) = parse_missense_change(amino_acid_variant, true)
        else {
            debug!("Could not parse amino acid information from {} genotype: {} type: {}",
                   amino_acid_variant, row.genotype_label.as_deref().unwrap_or("NULL"),
                   row.protein_variant_type.as_deref().unwrap_or("NULL"));
            return None;
        };

        // The notation parsed, but a FALDO position needs a reference
        // sequence, so a row without a transcript id gets no feature.
        let Some(transcript_id) = transcript_id
        else {
            debug!("no transcript to locate {} of genotype {} on",
                   amino_acid_variant, row.genotype_key);
            return None;
        };

        let feature_id = self.position_feature_id(&row.genotype_key, amino_acid_variant);

        sink.add_triple(genotype_id, FALDO_LOCATION, &feature_id);

        let location = FeatureLocation {
            position: change.position,
            reference: transcript_id.clone(),
        };

        sink.add_position_feature(PositionFeature {
            id: feature_id.clone(),
            label: amino_acid_variant.into(),
            feature_type: FALDO_POSITION_TYPE.into(),
            begin: location.clone(),
            end: location,
        });

        Some(feature_id)
    }

    /// Decompose the cDNA columns of a row.  The genotype identifier is
    /// derived again so the result can be matched with the protein
    /// handling's nodes.  No entities or edges are added.
    // TODO: add the genomic variant, its build location and COSMIC/dbSNP
    // cross references to the graph once the target ontology terms are chosen
    pub fn cdna_variant(&self, protein: &ProteinVariantRow, cdna: &CdnaVariantRow)
                        -> CdnaVariant
    {
        let genotype_id = self.genotype_id(&protein.genotype_key);

        let mut xrefs: Vec<Curie> = vec![];
        if let Some(ref cosmic_id) = cdna.cosmic_id {
            xrefs.push(make_xref("COSMIC", cosmic_id));
        }
        if let Some(ref db_snp_id) = cdna.db_snp_id {
            xrefs.push(make_xref("dbSNP", db_snp_id));
        }

        CdnaVariant {
            genotype_id,
            variant_gene: cdna.variant_gene.clone(),
            bp_position: cdna.bp_position.clone(),
            cdna_notation: cdna.genotype_cdna.clone(),
            xrefs,
            location: GenomicLocation {
                chromosome: cdna.chromosome.clone(),
                start: cdna.genome_pos_start.clone(),
                end: cdna.genome_pos_end.clone(),
            },
            ref_base: cdna.ref_base.clone(),
            variant_base: cdna.variant_base.clone(),
            primary_transcript_exons: cdna.primary_transcript_exons.clone(),
            primary_transcript_variant_sub_types: cdna.primary_transcript_variant_sub_types.clone(),
            variant_type: cdna.variant_type.clone(),
            genome_build: GenomeBuild {
                description: cdna.genome_build.clone(),
                version: cdna.build_version.clone(),
                date: cdna.build_date.clone(),
            },
        }
    }
}

// "COSM476" -> "COSMIC:476", "rs113488022" -> "dbSNP:113488022"
fn make_xref(db_name: &str, accession: &FlexStr) -> Curie {
    let accession = accession.trim();
    let accession = accession.strip_prefix("COSM")
        .or_else(|| accession.strip_prefix("rs"))
        .unwrap_or(accession);
    flex_fmt!("{}:{}", db_name, accession)
}

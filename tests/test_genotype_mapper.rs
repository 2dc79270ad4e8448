extern crate cgd;

mod util;

use cgd::constants::*;
use cgd::error::MappingError;
use cgd::gene_map::GeneSymbolMap;
use cgd::graph::{GraphSink, MemoryGraph};
use cgd::mapper::GenotypeMapper;
use cgd::rows::GenotypeRow;

use util::*;

#[test]
fn test_missense_row() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let row = GenotypeRow::ProteinOnly(make_braf_v600e_row());
    let summary = mapper.add_genotype_row(&mut graph, &row).unwrap();

    let genotype_id = mapper.genotype_id("17");
    let transcript_id = mapper.transcript_id("NM_004333.4");
    let feature_id = mapper.position_feature_id("17", "p.V600E");

    assert_eq!(summary.genotype_id, genotype_id);
    assert!(summary.is_missense);
    assert_eq!(summary.position_feature_id.as_ref(), Some(&feature_id));

    let genotype = graph.node(&genotype_id).unwrap();
    assert_eq!(genotype.label.as_ref().unwrap().to_string(), "BRAF V600E");
    assert!(genotype.types.contains(SEQUENCE_ALTERATION));
    assert!(genotype.types.contains(MISSENSE_VARIANT));

    let transcript = graph.node(&transcript_id).unwrap();
    assert!(transcript.types.contains(PRIMARY_TRANSCRIPT));
    assert!(graph.has_triple(&genotype_id, HAS_AFFECTED_LOCUS, &transcript_id));

    assert!(graph.node("NCBIGene:673").is_some());
    assert!(graph.has_triple(&genotype_id, IS_ALLELE_OF, "NCBIGene:673"));

    assert!(graph.has_triple(&genotype_id, FALDO_LOCATION, &feature_id));
    let feature = graph.feature(&feature_id).unwrap();
    assert_eq!(feature.label.to_string(), "p.V600E");
    assert_eq!(feature.begin.position, 600);
    assert_eq!(feature.begin, feature.end);
    assert_eq!(feature.begin.reference, transcript_id);
}

#[test]
fn test_secondary_transcript() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let row = make_protein_row("18", "KRAS G12D", Some("p.G12D"), Some("Secondary"),
                               Some("nonsynonymous - missense"), Some("KRAS"));
    mapper.add_protein_variant(&mut graph, &row).unwrap();

    let transcript = graph.node(&mapper.transcript_id("NM_004333.4")).unwrap();
    assert!(transcript.types.contains(TRANSCRIPT_SECONDARY_STRUCTURE_VARIANT));
    assert!(!transcript.types.contains(PRIMARY_TRANSCRIPT));
}

#[test]
fn test_unknown_priority_links_no_transcript() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let row = make_protein_row("19", "EGFR amplification", None, None,
                               None, Some("EGFR"));
    let summary = mapper.add_protein_variant(&mut graph, &row).unwrap();

    let genotype_id = mapper.genotype_id("19");
    assert!(graph.node(&mapper.transcript_id("NM_004333.4")).is_none());
    assert!(graph.objects_of(&genotype_id, HAS_AFFECTED_LOCUS).is_empty());
    assert!(graph.has_triple(&genotype_id, IS_ALLELE_OF, "NCBIGene:1956"));
    assert!(!summary.is_missense);
    assert_eq!(summary.position_feature_id, None);
}

#[test]
fn test_missense_from_label() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let row = make_protein_row("20", "KRAS missense G12C", Some("p.G12C"), Some("Primary"),
                               Some("unknown"), Some("KRAS"));
    let summary = mapper.add_protein_variant(&mut graph, &row).unwrap();

    assert!(summary.is_missense);
    assert!(summary.position_feature_id.is_some());
    let genotype = graph.node(&mapper.genotype_id("20")).unwrap();
    assert!(genotype.types.contains(MISSENSE_VARIANT));
}

#[test]
fn test_not_missense_no_position() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    // the notation would parse but the row isn't missense
    let row = make_protein_row("21", "BRAF V600E", Some("p.V600E"), Some("Primary"),
                               Some("nonsense"), Some("BRAF"));
    let summary = mapper.add_protein_variant(&mut graph, &row).unwrap();

    assert!(!summary.is_missense);
    assert_eq!(summary.position_feature_id, None);
    assert_eq!(graph.feature_count(), 0);
    let genotype = graph.node(&mapper.genotype_id("21")).unwrap();
    assert!(!genotype.types.contains(MISSENSE_VARIANT));
}

#[test]
fn test_unparseable_missense_variant() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let row = make_protein_row("22", "EGFR exon 19 deletion", Some("p.Alpha12Beta"),
                               Some("Primary"), Some("nonsynonymous - missense"),
                               Some("EGFR"));
    let summary = mapper.add_protein_variant(&mut graph, &row).unwrap();

    assert!(summary.is_missense);
    assert_eq!(summary.position_feature_id, None);
    assert_eq!(graph.feature_count(), 0);
    assert!(graph.objects_of(&mapper.genotype_id("22"), FALDO_LOCATION).is_empty());
    assert!(graph.has_triple(&mapper.genotype_id("22"), IS_ALLELE_OF, "NCBIGene:1956"));
}

#[test]
fn test_reprocessing_is_idempotent() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let rows = vec![GenotypeRow::ProteinOnly(make_braf_v600e_row()),
                    GenotypeRow::ProteinOnly(make_braf_v600e_row())];
    mapper.add_genotype_rows(&mut graph, &rows).unwrap();

    // genotype, transcript and gene
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.feature_count(), 1);
    assert_eq!(graph.triple_count(), 3);
}

#[test]
fn test_unknown_gene_symbol() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let row = make_protein_row("23", "ALK fusion", None, Some("Primary"),
                               None, Some("ALK"));
    let err = mapper.add_protein_variant(&mut graph, &row).unwrap_err();

    assert_eq!(err, MappingError::UnknownGeneSymbol {
        symbol: "ALK".into(),
        genotype_key: "23".into(),
    });
    assert!(!err.is_shape_violation());
    // nothing is added for a failed row
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.triple_count(), 0);
}

#[test]
fn test_missing_gene_symbol() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let row = make_protein_row("24", "BRAF V600E", Some("p.V600E"), Some("Primary"),
                               Some("nonsynonymous - missense"), None);
    let err = mapper.add_protein_variant(&mut graph, &row).unwrap_err();
    assert_eq!(err, MappingError::MissingGeneSymbol { genotype_key: "24".into() });
}

#[test]
fn test_empty_gene_map_always_fails() {
    let ids = make_test_ids();
    let genes = GeneSymbolMap::from_file("/nonexistent/resources/mappings/gene.tsv").unwrap();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let result = mapper.add_protein_variant(&mut graph, &make_braf_v600e_row());
    assert!(matches!(result, Err(MappingError::UnknownGeneSymbol { .. })));
}

#[test]
fn test_cdna_row_adds_nothing_more() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);

    let mut protein_only_graph = MemoryGraph::new();
    mapper.add_genotype_row(&mut protein_only_graph,
                            &GenotypeRow::ProteinOnly(make_braf_v600e_row())).unwrap();

    let mut cdna_graph = MemoryGraph::new();
    mapper.add_genotype_row(&mut cdna_graph, &make_protein_and_cdna_row()).unwrap();

    assert_eq!(cdna_graph.node_count(), protein_only_graph.node_count());
    assert_eq!(cdna_graph.triple_count(), protein_only_graph.triple_count());
    assert_eq!(cdna_graph.feature_count(), protein_only_graph.feature_count());
}

#[test]
fn test_cdna_decomposition() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);

    let cdna_variant = mapper.cdna_variant(&make_braf_v600e_row(), &make_cdna_row());

    assert_eq!(cdna_variant.genotype_id, mapper.genotype_id("17"));
    assert_eq!(cdna_variant.cdna_notation.as_ref().unwrap().to_string(), "c.1799T>A");
    let xrefs: Vec<String> = cdna_variant.xrefs.iter().map(|x| x.to_string()).collect();
    assert_eq!(xrefs, vec!["COSMIC:476".to_owned(), "dbSNP:113488022".to_owned()]);
    assert_eq!(cdna_variant.location.chromosome.as_ref().unwrap().to_string(), "7");
    assert_eq!(cdna_variant.genome_build.version.as_ref().unwrap().to_string(), "37");
}

#[test]
fn test_dispatch_from_fields() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let mut fields = protein_row_fields(&make_braf_v600e_row());
    let protein_only = GenotypeRow::from_fields(fields.clone()).unwrap();
    assert!(matches!(protein_only, GenotypeRow::ProteinOnly(_)));

    fields.extend(vec![field("BRAF"); 16]);
    let with_cdna = GenotypeRow::from_fields(fields.clone()).unwrap();
    assert!(matches!(with_cdna, GenotypeRow::ProteinAndCdna(_, _)));
    mapper.add_genotype_row(&mut graph, &with_cdna).unwrap();
    assert_eq!(graph.feature_count(), 1);

    fields.pop();
    let err = GenotypeRow::from_fields(fields).unwrap_err();
    assert!(err.is_shape_violation());
}

#[test]
fn test_sink_trait_object() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    {
        let sink: &mut dyn GraphSink = &mut graph;
        mapper.add_protein_variant(sink, &make_braf_v600e_row()).unwrap();
    }

    assert_eq!(graph.feature_count(), 1);
}

#[test]
fn test_null_label_not_added() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let mut unlabelled_row = make_braf_v600e_row();
    unlabelled_row.genotype_label = None;
    mapper.add_protein_variant(&mut graph, &unlabelled_row).unwrap();

    let genotype_id = mapper.genotype_id("17");
    assert_eq!(graph.node(&genotype_id).unwrap().label, None);

    // a later row with a label supplies it
    mapper.add_protein_variant(&mut graph, &make_braf_v600e_row()).unwrap();
    let genotype = graph.node(&genotype_id).unwrap();
    assert_eq!(genotype.label.as_ref().unwrap().to_string(), "BRAF V600E");
}

#[test]
fn test_null_label_from_fields() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let mut fields = protein_row_fields(&make_braf_v600e_row());
    fields[1] = None;
    let row = GenotypeRow::from_fields(fields).unwrap();
    let summary = mapper.add_genotype_row(&mut graph, &row).unwrap();

    // still missense from the variant type
    assert!(summary.is_missense);
    assert_eq!(graph.node(&summary.genotype_id).unwrap().label, None);
}

#[test]
fn test_missense_without_transcript() {
    let ids = make_test_ids();
    let genes = make_test_gene_map();
    let mapper = GenotypeMapper::new(&ids, &genes);
    let mut graph = MemoryGraph::new();

    let mut row = make_braf_v600e_row();
    row.transcript_id = None;
    let summary = mapper.add_protein_variant(&mut graph, &row).unwrap();

    assert!(summary.is_missense);
    assert_eq!(summary.transcript_id, None);
    assert_eq!(summary.position_feature_id, None);
    assert_eq!(graph.feature_count(), 0);
    assert!(graph.objects_of(&summary.genotype_id, FALDO_LOCATION).is_empty());
}

// entity tags prepended to natural keys before hashing
pub const GENOTYPE_TAG: &str = "cgd-genotype";
pub const TRANSCRIPT_TAG: &str = "cgd-transcript";
pub const AA_POSITION_TAG: &str = "cgd-aa-pos";
pub const PHENOTYPE_TAG: &str = "cgd-phenotype";
pub const DRUG_TAG: &str = "cgd-drug";
pub const POPULATION_TAG: &str = "cgd";

pub const PROTEIN_ROW_FIELD_COUNT: usize = 11;
pub const CDNA_ROW_FIELD_COUNT: usize = 27;
pub const DISEASE_DRUG_ROW_FIELD_COUNT: usize = 11;

pub const MISSENSE_VARIANT_TYPE: &str = "nonsynonymous - missense";
pub const MISSENSE_LABEL_MARKER: &str = "missense";

pub const PRIMARY_TRANSCRIPT_PRIORITY: &str = "Primary";
pub const SECONDARY_TRANSCRIPT_PRIORITY: &str = "Secondary";

// sequence ontology and GENO types
pub const SEQUENCE_ALTERATION: &str = "SO:0001059";
pub const MISSENSE_VARIANT: &str = "SO:0001583";
pub const PRIMARY_TRANSCRIPT: &str = "SO:0000185";
pub const TRANSCRIPT_SECONDARY_STRUCTURE_VARIANT: &str = "SO:0001596";
pub const POPULATION: &str = "PCO:0000001";

// relations
pub const HAS_GENOTYPE: &str = "GENO:0000222";
pub const HAS_PHENOTYPE: &str = "RO:0002200";
pub const IS_ALLELE_OF: &str = "GENO:0000408";
pub const HAS_AFFECTED_LOCUS: &str = "GENO:0000418";
pub const HAS_EVIDENCE: &str = "RO:0002558";

// FALDO location model
pub const FALDO_LOCATION: &str = "faldo:location";
pub const FALDO_BEGIN: &str = "faldo:begin";
pub const FALDO_END: &str = "faldo:end";
pub const FALDO_POSITION_TYPE: &str = "faldo:Position";
pub const FALDO_EXACT_POSITION: &str = "faldo:ExactPosition";
pub const FALDO_REFERENCE: &str = "faldo:reference";
pub const FALDO_POSITION: &str = "faldo:position";

// OBAN association model
pub const OBAN_ASSOCIATION: &str = "OBAN:association";
pub const OBAN_HAS_SUBJECT: &str = "OBAN:association_has_subject";
pub const OBAN_HAS_PREDICATE: &str = "OBAN:association_has_predicate";
pub const OBAN_HAS_OBJECT: &str = "OBAN:association_has_object";
pub const DC_SOURCE: &str = "dc:source";

pub const RDF_TYPE: &str = "rdf:type";
pub const RDFS_LABEL: &str = "rdfs:label";
pub const OWL_CLASS: &str = "owl:Class";
pub const OWL_NAMED_INDIVIDUAL: &str = "owl:NamedIndividual";
pub const OWL_OBJECT_PROPERTY: &str = "owl:ObjectProperty";

pub const DEFAULT_ID_PREFIX: &str = "MONARCH";
pub const DEFAULT_RELATION_PREFIX: &str = "MONARCH";
pub const DEFAULT_CITATION_PREFIX: &str = "PMID";
// traceable author statement
pub const DEFAULT_EVIDENCE_CODE: &str = "ECO:0000033";
pub const DEFAULT_GENE_MAP_FILE: &str = "resources/mappings/gene.tsv";
pub const DEFAULT_DUMP_FILE: &str = "resources/g2p.sql.gz";

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use flexstr::SharedStr as FlexStr;

use crate::constants::*;

fn default_id_prefix() -> FlexStr {
    DEFAULT_ID_PREFIX.into()
}

fn default_relation_prefix() -> FlexStr {
    DEFAULT_RELATION_PREFIX.into()
}

fn default_citation_prefix() -> FlexStr {
    DEFAULT_CITATION_PREFIX.into()
}

fn default_evidence_code() -> FlexStr {
    DEFAULT_EVIDENCE_CODE.into()
}

fn default_gene_map_file() -> String {
    DEFAULT_GENE_MAP_FILE.to_owned()
}

fn default_dump_file() -> String {
    DEFAULT_DUMP_FILE.to_owned()
}

// prefixes used by the terms in constants.rs
pub fn default_curie_map() -> BTreeMap<FlexStr, FlexStr> {
    [
        ("SO", "http://purl.obolibrary.org/obo/SO_"),
        ("GENO", "http://purl.obolibrary.org/obo/GENO_"),
        ("RO", "http://purl.obolibrary.org/obo/RO_"),
        ("ECO", "http://purl.obolibrary.org/obo/ECO_"),
        ("PCO", "http://purl.obolibrary.org/obo/PCO_"),
        ("OBAN", "http://purl.org/oban/"),
        ("PMID", "http://www.ncbi.nlm.nih.gov/pubmed/"),
        ("NCBIGene", "http://www.ncbi.nlm.nih.gov/gene/"),
        ("MONARCH", "https://monarchinitiative.org/MONARCH_"),
        ("faldo", "http://biohackathon.org/resource/faldo#"),
        ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
        ("owl", "http://www.w3.org/2002/07/owl#"),
        ("dc", "http://purl.org/dc/elements/1.1/"),
    ]
    .iter()
    .map(|&(prefix, base)| (FlexStr::from(prefix), FlexStr::from(base)))
    .collect()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: FlexStr,
    #[serde(default = "default_relation_prefix")]
    pub relation_prefix: FlexStr,
    #[serde(default = "default_citation_prefix")]
    pub citation_prefix: FlexStr,
    #[serde(default = "default_evidence_code")]
    pub evidence_code: FlexStr,
    #[serde(default = "default_gene_map_file")]
    pub gene_map_file: String,
    #[serde(default = "default_dump_file")]
    pub dump_file: String,
    // extra prefixes are merged over the defaults by Config::read()
    #[serde(default = "default_curie_map")]
    pub curie_map: BTreeMap<FlexStr, FlexStr>,
    // log and skip rows that fail to map instead of stopping the run
    #[serde(default)]
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            id_prefix: default_id_prefix(),
            relation_prefix: default_relation_prefix(),
            citation_prefix: default_citation_prefix(),
            evidence_code: default_evidence_code(),
            gene_map_file: default_gene_map_file(),
            dump_file: default_dump_file(),
            curie_map: default_curie_map(),
            keep_going: false,
        }
    }
}

impl Config {
    pub fn read(config_file_name: &str) -> anyhow::Result<Config> {
        let file = File::open(config_file_name)
            .with_context(|| format!("failed to read {}", config_file_name))?;
        let reader = BufReader::new(file);

        Config::from_reader(reader)
            .with_context(|| format!("failed to parse {}", config_file_name))
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> anyhow::Result<Config> {
        let mut config: Config = serde_json::from_reader(reader)?;

        for (prefix, base) in default_curie_map() {
            config.curie_map.entry(prefix).or_insert(base);
        }

        Ok(config)
    }
}

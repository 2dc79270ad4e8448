use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use tracing::warn;

use crate::error::MappingError;
use crate::types::{GeneId, GeneSymbol, GenotypeKey};

/// Gene label to external gene identifier, built once per run and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct GeneSymbolMap {
    map: HashMap<GeneSymbol, GeneId>,
}

impl GeneSymbolMap {
    pub fn new() -> GeneSymbolMap {
        GeneSymbolMap::default()
    }

    /// Read a tab separated mapping file: column 1 is the gene label and
    /// column 2 the identifier, column 0 is ignored.  A missing file gives an
    /// empty map so that failures are reported per lookup instead.
    pub fn from_file(file_name: impl AsRef<Path>) -> anyhow::Result<GeneSymbolMap> {
        let path = file_name.as_ref();

        if !path.exists() {
            warn!("gene mapping file {} doesn't exist, all gene lookups will fail",
                  path.display());
            return Ok(GeneSymbolMap::new());
        }

        let file = File::open(path)
            .with_context(|| format!("failed to open gene mapping file {}", path.display()))?;

        GeneSymbolMap::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to read gene mapping file {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<GeneSymbolMap> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(b'\t')
            .from_reader(reader);

        let mut map = HashMap::new();

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;

            let (Some(gene_label), Some(gene_id)) = (record.get(1), record.get(2))
            else {
                warn!("skipping gene mapping line {} with {} fields",
                      index + 1, record.len());
                continue;
            };

            // later lines win
            map.insert(gene_label.into(), gene_id.into());
        }

        Ok(GeneSymbolMap {
            map,
        })
    }

    pub fn insert(&mut self, gene_label: &str, gene_id: &str) {
        self.map.insert(gene_label.into(), gene_id.into());
    }

    pub fn get(&self, gene_label: &str) -> Option<&GeneId> {
        self.map.get(gene_label)
    }

    /// Resolve the gene of a genotype.  A symbol that isn't in the map is a
    /// mapping failure; there is no fallback identifier.
    pub fn resolve(&self, gene_label: &str, genotype_key: &GenotypeKey)
                   -> Result<&GeneId, MappingError>
    {
        self.map.get(gene_label)
            .ok_or_else(|| MappingError::UnknownGeneSymbol {
                symbol: gene_label.into(),
                genotype_key: genotype_key.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

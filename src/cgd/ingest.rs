use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use anyhow::Context;
use deadpool_postgres::{Manager, Pool};
use tracing::{info, warn};

use crate::config::Config;
use crate::db::CgdQueries;
use crate::db::cgd_queries::database_is_empty;
use crate::db::dump::load_dump_file;
use crate::error::MappingError;
use crate::gene_map::GeneSymbolMap;
use crate::graph::{GraphSink, MemoryGraph};
use crate::ident::IdGenerator;
use crate::mapper::{DiseaseDrugMapper, GenotypeMapper};
use crate::ntriples::NTriplesWriter;
use crate::rows::{DiseaseDrugGenotypeRow, GenotypeRow};
use crate::tsv::read_rows_from_file;
use crate::types::RawRow;

/// Where the rows of a run come from.
#[derive(Debug, Clone)]
pub enum RowSource {
    Postgres {
        connection_string: String,
        // load the dump file first if the database has no tables
        load_dump: bool,
    },
    Tsv {
        genotype_protein_file: Option<String>,
        genotype_cdna_file: Option<String>,
        disease_drug_genotype_file: Option<String>,
    },
}

impl RowSource {
    /// A database source that is loaded from the dump file if it's empty.
    pub fn postgres(connection_string: impl Into<String>) -> RowSource {
        RowSource::Postgres {
            connection_string: connection_string.into(),
            load_dump: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputRows {
    pub genotype_protein_rows: Vec<RawRow>,
    pub genotype_cdna_rows: Vec<RawRow>,
    pub disease_drug_genotype_rows: Vec<RawRow>,
}

impl From<CgdQueries> for InputRows {
    fn from(queries: CgdQueries) -> InputRows {
        InputRows {
            genotype_protein_rows: queries.genotype_protein_rows,
            genotype_cdna_rows: queries.genotype_cdna_rows,
            disease_drug_genotype_rows: queries.disease_drug_genotype_rows,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingSummary {
    pub genotype_rows: usize,
    pub disease_drug_genotype_rows: usize,
    pub skipped_rows: usize,
    pub missense_rows: usize,
    pub position_features: usize,
    pub associations: usize,
}

fn handle_row_error(config: &Config, summary: &mut MappingSummary, row_desc: &str,
                    err: MappingError) -> anyhow::Result<()> {
    if config.keep_going {
        warn!("skipping {}: {}", row_desc, err);
        summary.skipped_rows += 1;
        Ok(())
    } else {
        Err(anyhow::Error::new(err).context(format!("failed to map {}", row_desc)))
    }
}

/// Map all rows into the sink: genotype rows first (protein only then
/// protein and cDNA), then the disease/drug/genotype rows.
pub fn map_rows<S>(sink: &mut S, config: &Config, genes: &GeneSymbolMap, input: InputRows)
                   -> anyhow::Result<MappingSummary>
    where S: GraphSink + ?Sized
{
    let ids = IdGenerator::new(&config.id_prefix);
    let genotype_mapper = GenotypeMapper::new(&ids, genes);
    let disease_drug_mapper = DiseaseDrugMapper::new(&ids, config);

    let mut summary = MappingSummary::default();

    let genotype_rows =
        input.genotype_protein_rows.into_iter()
        .chain(input.genotype_cdna_rows);

    for (idx, raw_row) in genotype_rows.enumerate() {
        let result = GenotypeRow::from_fields(raw_row)
            .and_then(|row| genotype_mapper.add_genotype_row(sink, &row));

        match result {
            Ok(row_summary) => {
                summary.genotype_rows += 1;
                if row_summary.is_missense {
                    summary.missense_rows += 1;
                }
                if row_summary.position_feature_id.is_some() {
                    summary.position_features += 1;
                }
            },
            Err(err) => {
                handle_row_error(config, &mut summary, &format!("genotype row {}", idx + 1), err)?;
            },
        }
    }

    for (idx, raw_row) in input.disease_drug_genotype_rows.into_iter().enumerate() {
        let result = DiseaseDrugGenotypeRow::from_fields(raw_row)
            .and_then(|row| disease_drug_mapper.add_disease_drug_genotype(sink, &row));

        match result {
            Ok(row_summary) => {
                summary.disease_drug_genotype_rows += 1;
                summary.associations += row_summary.association_ids.len();
            },
            Err(err) => {
                handle_row_error(config, &mut summary,
                                 &format!("disease/drug/genotype row {}", idx + 1), err)?;
            },
        }
    }

    Ok(summary)
}

async fn read_postgres_rows(config: &Config, connection_string: &str, load_dump: bool)
                            -> anyhow::Result<InputRows>
{
    let pg_config = tokio_postgres::Config::from_str(connection_string)?;
    let manager = Manager::new(pg_config, tokio_postgres::NoTls);
    let pool = Pool::builder(manager).max_size(4).build()?;

    let client = pool.get().await?;

    if load_dump {
        info!("Checking if database is empty");
        if database_is_empty(&client).await? {
            let dump_file = config.dump_file.clone();
            let connection_string = connection_string.to_owned();
            tokio::task::spawn_blocking(move || load_dump_file(&dump_file, &connection_string))
                .await
                .context("dump loading task failed")??;
        } else {
            info!("Database contains tables, skipping load from dump file");
        }
    }

    let queries = CgdQueries::new(&client).await
        .context("failed to query the CGD database")?;

    info!("{} genotypes with a gene but no protein variant and {} genotypes with \
           neither won't be mapped",
          queries.fusion_copy_rows.len(), queries.unmapped_genotype_rows.len());

    Ok(queries.into())
}

fn read_optional_rows(file_name: &Option<String>) -> anyhow::Result<Vec<RawRow>> {
    match file_name {
        Some(file_name) => read_rows_from_file(file_name),
        None => Ok(vec![]),
    }
}

pub async fn read_input(config: &Config, source: &RowSource) -> anyhow::Result<InputRows> {
    let input =
        match source {
            RowSource::Postgres { connection_string, load_dump } => {
                read_postgres_rows(config, connection_string, *load_dump).await?
            },
            RowSource::Tsv { genotype_protein_file, genotype_cdna_file,
                             disease_drug_genotype_file } => {
                InputRows {
                    genotype_protein_rows: read_optional_rows(genotype_protein_file)?,
                    genotype_cdna_rows: read_optional_rows(genotype_cdna_file)?,
                    disease_drug_genotype_rows: read_optional_rows(disease_drug_genotype_file)?,
                }
            },
        };

    info!("read {} protein, {} cDNA and {} disease/drug/genotype rows",
          input.genotype_protein_rows.len(), input.genotype_cdna_rows.len(),
          input.disease_drug_genotype_rows.len());

    Ok(input)
}

/// Write the graph as JSON if the file name ends in ".json", otherwise as
/// N-Triples.  "-" writes N-Triples to STDOUT.
pub fn write_graph(graph: &MemoryGraph, config: &Config, output_file_name: &str)
                   -> anyhow::Result<()>
{
    if output_file_name == "-" {
        let mut stdout = io::stdout().lock();
        NTriplesWriter::new(&config.curie_map).write(graph, &mut stdout)?;
        return Ok(());
    }

    let file = File::create(output_file_name)
        .with_context(|| format!("failed to create {}", output_file_name))?;
    let mut writer = BufWriter::new(file);

    if output_file_name.ends_with(".json") {
        serde_json::to_writer(&mut writer, graph)?;
    } else {
        NTriplesWriter::new(&config.curie_map).write(graph, &mut writer)?;
    }

    writer.flush()?;

    Ok(())
}

pub async fn run(config: &Config, source: &RowSource, output_file_name: &str)
                 -> anyhow::Result<MappingSummary>
{
    let genes = GeneSymbolMap::from_file(&config.gene_map_file)?;
    info!("read {} gene mappings", genes.len());

    let input = read_input(config, source).await?;

    let mut graph = MemoryGraph::new();
    let summary = map_rows(&mut graph, config, &genes, input)?;

    info!("{} nodes, {} edges, {} position features, {} associations",
          graph.node_count(), graph.triple_count(), graph.feature_count(),
          graph.association_count());

    write_graph(&graph, config, output_file_name)?;

    Ok(summary)
}

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use flexstr::SharedStr as FlexStr;

use crate::types::{Field, RawRow};

// how mysql and psql exports write NULL
const NULL_MARKER: &str = "\\N";

fn to_field(value: &str) -> Field {
    if value.is_empty() || value == NULL_MARKER {
        None
    } else {
        Some(FlexStr::from(value))
    }
}

/// Read header-less, tab separated rows.  An empty value or \N is NULL.
/// Rows may have different lengths; the mappers check the field counts.
pub fn read_rows<R: Read>(reader: R) -> anyhow::Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(b'\t')
        .from_reader(reader);

    let mut rows = vec![];

    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(to_field).collect());
    }

    Ok(rows)
}

pub fn read_rows_from_file(file_name: impl AsRef<Path>) -> anyhow::Result<Vec<RawRow>> {
    let path = file_name.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    read_rows(BufReader::new(file))
        .with_context(|| format!("failed to read rows from {}", path.display()))
}

// src/data/loader.rs — Dataset loading (delimited text → raw rows)
//
// The file is decoded up front so the CSV reader only ever sees UTF-8.
// Column lookup is by header name; extra columns are ignored.

use std::path::Path;

use crate::data::record::{filter_records, RawRow, RecordSet};
use crate::infra::config::{DataConfig, Encoding};
use crate::infra::errors::{DashError, DashResult};

/// Decode raw file bytes into text.
pub fn decode(bytes: &[u8], encoding: Encoding, path: &str) -> DashResult<String> {
    match encoding {
        // ISO-8859-1 maps each byte to the code point of the same value.
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        Encoding::Utf8 => {
            let text = std::str::from_utf8(bytes).map_err(|e| DashError::InvalidUtf8 {
                path: path.to_string(),
                offset: e.valid_up_to(),
            })?;
            Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    year: usize,
    winner: usize,
    runner_up: usize,
}

fn locate_columns(
    headers: &csv::StringRecord,
    data: &DataConfig,
    path: &str,
) -> DashResult<ColumnIndexes> {
    let find = |name: &str| -> DashResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DashError::MissingColumn {
                path: path.to_string(),
                column: name.to_string(),
                found: headers.iter().map(str::trim).collect::<Vec<_>>().join(", "),
            })
    };
    Ok(ColumnIndexes {
        year: find(&data.year_column)?,
        winner: find(&data.winner_column)?,
        runner_up: find(&data.runner_up_column)?,
    })
}

/// Parse decoded text into raw rows. `path` is only used in error messages.
pub fn read_raw_rows(text: &str, data: &DataConfig, path: &str) -> DashResult<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(data.delimiter_byte()?)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|source| DashError::Csv {
            path: path.to_string(),
            source,
        })?
        .clone();
    let cols = locate_columns(&headers, data, path)?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|source| DashError::Csv {
            path: path.to_string(),
            source,
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        rows.push(RawRow {
            line,
            year: record.get(cols.year).map(str::to_string),
            winner: record.get(cols.winner).map(str::to_string),
            runner_up: record.get(cols.runner_up).map(str::to_string),
        });
    }
    Ok(rows)
}

/// Load and clean the dataset described by `data`.
///
/// Fails when the file cannot be read or decoded, when a required column is
/// absent, or when no complete row survives the filter.
pub fn load_records(data: &DataConfig) -> DashResult<RecordSet> {
    let path = data.path.as_str();
    tracing::info!("Loading dataset {} ({})", path, data.encoding);

    let bytes = std::fs::read(Path::new(path)).map_err(|source| DashError::DatasetIo {
        path: path.to_string(),
        source,
    })?;
    let text = decode(&bytes, data.encoding, path)?;
    let rows = read_raw_rows(&text, data, path)?;
    let total = rows.len();

    let set = filter_records(rows);
    if set.is_empty() {
        return Err(DashError::EmptyDataset {
            path: path.to_string(),
            dropped: set.dropped(),
        });
    }
    tracing::info!(
        "Loaded {} records from {} rows ({} incomplete rows dropped)",
        set.len(),
        total,
        set.dropped()
    );
    Ok(set)
}

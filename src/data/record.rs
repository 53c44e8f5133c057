// src/data/record.rs — Records and the incomplete-row filter

use serde::{Deserialize, Serialize};

/// Cell values the dataframe reader this dataset was prepared with treats as
/// "not available". A cell matching one of these (after trimming) is missing.
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One row as read from the file, before cleaning. A `None` field means the
/// row was too short to reach that column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file (header is line 1).
    pub line: u64,
    pub year: Option<String>,
    pub winner: Option<String>,
    pub runner_up: Option<String>,
}

/// One cleaned row. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub winner: String,
    pub runner_up: String,
}

/// Records in file order, with incomplete rows removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
    dropped: usize,
}

impl RecordSet {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of raw rows excluded for missing fields.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// First record for `year`. Later records with the same year are never
    /// returned.
    pub fn first_for_year(&self, year: i32) -> Option<&Record> {
        self.records.iter().find(|r| r.year == year)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        RecordSet {
            records: iter.into_iter().collect(),
            dropped: 0,
        }
    }
}

/// The trimmed cell text, or `None` when the cell counts as missing.
pub fn present(cell: Option<&str>) -> Option<&str> {
    let value = cell?.trim();
    if NA_MARKERS.contains(&value) {
        None
    } else {
        Some(value)
    }
}

/// Parse a year cell. Integral floats (`1998.0`) are accepted since
/// spreadsheet exports often write years that way.
pub fn parse_year(cell: &str) -> Option<i32> {
    if let Ok(y) = cell.parse::<i32>() {
        return Some(y);
    }
    let f = cell.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

/// Clean a single row. `None` when any required field is missing.
pub fn clean_row(row: &RawRow) -> Option<Record> {
    let year = parse_year(present(row.year.as_deref())?)?;
    let winner = present(row.winner.as_deref())?;
    let runner_up = present(row.runner_up.as_deref())?;
    Some(Record {
        year,
        winner: winner.to_string(),
        runner_up: runner_up.to_string(),
    })
}

/// Keep only the rows with all three fields present. Order is preserved and
/// nothing is reported for the rows that are excluded beyond a debug line.
pub fn filter_records<I>(rows: I) -> RecordSet
where
    I: IntoIterator<Item = RawRow>,
{
    let mut records = Vec::new();
    let mut dropped = 0;
    for row in rows {
        match clean_row(&row) {
            Some(record) => records.push(record),
            None => {
                tracing::debug!("Dropping incomplete row at line {}: {:?}", row.line, row);
                dropped += 1;
            }
        }
    }
    RecordSet { records, dropped }
}

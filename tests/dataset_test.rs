// tests/dataset_test.rs — Integration test: loading, cleaning and tallying datasets

use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use cupdash::data::record::clean_row;
use cupdash::data::{filter_records, load_records, RawRow, WinTally};
use cupdash::infra::config::{DataConfig, Encoding};
use cupdash::infra::errors::DashError;

fn sample_config() -> DataConfig {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "data", "scores.csv"]
        .iter()
        .collect();
    DataConfig {
        path: path.display().to_string(),
        ..DataConfig::default()
    }
}

fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(bytes).expect("write temp file");
    f.flush().expect("flush temp file");
    f
}

#[test]
fn test_bundled_dataset_loads() {
    let set = load_records(&sample_config()).unwrap();
    // 1942 and 1946 have no results
    assert_eq!(set.len(), 22);
    assert_eq!(set.dropped(), 2);
    assert_eq!(set.records()[0].winner, "Uruguay");
    assert_eq!(set.records()[21].year, 2022);
}

#[test]
fn test_bundled_dataset_tally() {
    let set = load_records(&sample_config()).unwrap();
    let tally = WinTally::from_records(set.records());
    assert_eq!(tally.wins("Brazil"), 5);
    assert_eq!(tally.wins("Italy"), 4);
    assert_eq!(tally.wins("West Germany"), 3);
    assert_eq!(tally.wins("Germany"), 1);
    assert_eq!(tally.wins("Netherlands"), 0);
    assert_eq!(tally.total(), set.len());

    let ranked = tally.ranked();
    let top: Vec<(&str, usize)> = ranked
        .iter()
        .take(4)
        .map(|e| (e.name.as_str(), e.wins))
        .collect();
    assert_eq!(
        top,
        vec![
            ("Brazil", 5),
            ("Italy", 4),
            ("West Germany", 3),
            ("Argentina", 3)
        ]
    );
}

#[test]
fn test_latin1_names_decoded() {
    // "Côte d'Ivoire" with ô as the single byte 0xF4
    let mut bytes = b"Year,Winners,Runners-up\n2099,C".to_vec();
    bytes.push(0xF4);
    bytes.extend_from_slice(b"te d'Ivoire,Ghana\n");
    let f = write_temp(&bytes);

    let data = DataConfig {
        path: f.path().display().to_string(),
        ..DataConfig::default()
    };
    let set = load_records(&data).unwrap();
    assert_eq!(set.records()[0].winner, "Côte d'Ivoire");
}

#[test]
fn test_utf8_option() {
    let f = write_temp("Year,Winners,Runners-up\n2099,Curaçao,Ghana\n".as_bytes());
    let data = DataConfig {
        path: f.path().display().to_string(),
        encoding: Encoding::Utf8,
        ..DataConfig::default()
    };
    let set = load_records(&data).unwrap();
    assert_eq!(set.records()[0].winner, "Curaçao");
}

#[test]
fn test_all_rows_incomplete_is_fatal() {
    let f = write_temp(b"Year,Winners,Runners-up\n1942,,\n1946,,\n");
    let data = DataConfig {
        path: f.path().display().to_string(),
        ..DataConfig::default()
    };
    let err = load_records(&data).unwrap_err();
    assert!(matches!(err, DashError::EmptyDataset { dropped: 2, .. }));
    assert!(err.is_load_error());
}

#[test]
fn test_missing_required_column_is_fatal() {
    let f = write_temp(b"Year,Champion,Runners-up\n1930,Uruguay,Argentina\n");
    let data = DataConfig {
        path: f.path().display().to_string(),
        ..DataConfig::default()
    };
    assert!(matches!(
        load_records(&data).unwrap_err(),
        DashError::MissingColumn { .. }
    ));
}

/// A row survives the filter exactly when all three fields are present.
#[test]
fn test_filter_completeness() {
    let cells = [None, Some(""), Some("  "), Some("NaN"), Some("x")];
    let years = [None, Some(""), Some("1990"), Some("N/A")];

    let mut rows = Vec::new();
    for (i, y) in years.iter().enumerate() {
        for (j, w) in cells.iter().enumerate() {
            for (k, r) in cells.iter().enumerate() {
                rows.push(RawRow {
                    line: (i * 100 + j * 10 + k) as u64,
                    year: y.map(str::to_string),
                    winner: w.map(str::to_string),
                    runner_up: r.map(str::to_string),
                });
            }
        }
    }

    let expected: Vec<u64> = rows
        .iter()
        .filter(|r| {
            r.year.as_deref() == Some("1990")
                && r.winner.as_deref() == Some("x")
                && r.runner_up.as_deref() == Some("x")
        })
        .map(|r| r.line)
        .collect();
    assert_eq!(expected.len(), 1);

    let kept: Vec<bool> = rows.iter().map(|r| clean_row(r).is_some()).collect();
    assert_eq!(kept.iter().filter(|k| **k).count(), expected.len());

    let total = rows.len();
    let set = filter_records(rows);
    assert_eq!(set.len(), 1);
    assert_eq!(set.dropped(), total - 1);
}

#[test]
fn test_tally_conservation_and_correctness() {
    let rows: Vec<RawRow> = [("2018", "France"), ("2014", "Germany"), ("1998", "France")]
        .iter()
        .enumerate()
        .map(|(i, (y, w))| RawRow {
            line: i as u64 + 2,
            year: Some(y.to_string()),
            winner: Some(w.to_string()),
            runner_up: Some("Someone".into()),
        })
        .collect();
    let set = filter_records(rows);
    let tally = WinTally::from_records(set.records());

    assert_eq!(tally.get("France"), Some(2));
    assert_eq!(tally.get("Germany"), Some(1));
    assert_eq!(tally.len(), 2);
    assert_eq!(tally.iter().map(|(_, n)| n).sum::<usize>(), set.len());
}

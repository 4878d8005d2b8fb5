// File: crates/liftplot/tests/loader_tests.rs
// Purpose: Loading workout logs from CSV: happy path, derived volume, and rejection of bad rows.

use std::io::Write;

use chrono::NaiveDate;
use liftplot::{load_records, parse_records, Error, LoadOptions};
use tempfile::NamedTempFile;

const STRONG_EXPORT: &str = "\
Date,Workout Name,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes
04/03/2021 18:23,Legs,Squat (Barbell),1,100,8,0,0,
04/03/2021 18:23,Legs,Squat (Barbell),2,100,8,0,0,
05/03/2021 07:10,Push,Bench Press (Barbell),1,50,5,0,0,\"felt, ok\"
";

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn loads_records_with_volume() {
    let records = parse_records(STRONG_EXPORT.as_bytes(), &LoadOptions::default()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].date, ymd(2021, 3, 4));
    assert_eq!(records[0].exercise, "Squat (Barbell)");
    assert_eq!(records[0].volume, 800.0);
    assert_eq!(records[2].date, ymd(2021, 3, 5));
    for r in &records {
        assert_eq!(r.volume, r.weight * r.reps as f64);
    }
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(STRONG_EXPORT.as_bytes()).unwrap();
    let records = load_records(file.path(), &LoadOptions::default()).unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn missing_file_is_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(&dir.path().join("absent.csv"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::FileAccess { .. }), "got {err:?}");
}

#[test]
fn missing_column_is_parse_error() {
    let csv = "Date,Exercise Name,Weight\n01/01/2021,Squat,100\n";
    let err = parse_records(csv.as_bytes(), &LoadOptions::default()).unwrap_err();
    match err {
        Error::Parse { line, message } => {
            assert_eq!(line, 1);
            assert!(message.contains("Reps"), "{message}");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn bad_fields_name_their_line() {
    let cases = [
        "Date,Exercise Name,Weight,Reps\n01/01/2021,Squat,100,5\n32/01/2021,Squat,100,5\n",
        "Date,Exercise Name,Weight,Reps\n01/01/2021,Squat,100,5\n02/01/2021,Squat,heavy,5\n",
        "Date,Exercise Name,Weight,Reps\n01/01/2021,Squat,100,5\n02/01/2021,Squat,100,5.5\n",
        "Date,Exercise Name,Weight,Reps\n01/01/2021,Squat,100,5\n02/01/2021,,100,5\n",
        "Date,Exercise Name,Weight,Reps\n01/01/2021,Squat,100,5\n02/01/2021,Squat,100\n",
    ];
    for csv in cases {
        match parse_records(csv.as_bytes(), &LoadOptions::default()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3, "{csv}"),
            other => panic!("expected parse error for {csv:?}, got {other:?}"),
        }
    }
}

#[test]
fn incomplete_rows_rejected_by_default_and_skippable() {
    let csv = "Date,Exercise Name,Weight,Reps\n01/01/2021,Plank,,\n01/01/2021,Squat,100,5\n";
    assert!(matches!(
        parse_records(csv.as_bytes(), &LoadOptions::default()),
        Err(Error::Parse { line: 2, .. })
    ));

    let opts = LoadOptions { skip_incomplete_rows: true, ..LoadOptions::default() };
    let records = parse_records(csv.as_bytes(), &opts).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercise, "Squat");
}

#[test]
fn semicolon_delimiter() {
    let csv = "Date;Exercise Name;Weight;Reps\n01/02/2021;Deadlift;140,5;3\n";
    let opts = LoadOptions { delimiter: b';', ..LoadOptions::default() };
    // Decimal comma is not a number.
    assert!(parse_records(csv.as_bytes(), &opts).is_err());

    let csv = "Date;Exercise Name;Weight;Reps\n01/02/2021;Deadlift;140.5;3\n";
    let records = parse_records(csv.as_bytes(), &opts).unwrap();
    assert_eq!(records[0].date, ymd(2021, 2, 1));
    assert_eq!(records[0].volume, 421.5);
}

#[test]
fn header_only_log_is_empty() {
    let records = parse_records("Date,Exercise Name,Weight,Reps\n".as_bytes(), &LoadOptions::default()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn short_years_do_not_fall_into_first_century() {
    let csv = "Date,Exercise Name,Weight,Reps\n04/03/21,Squat,100,5\n11/03/2021,Squat,105,5\n";
    let records = parse_records(csv.as_bytes(), &LoadOptions::default()).unwrap();
    assert_eq!(records[0].date, ymd(2021, 3, 4));
    assert_eq!(records[1].date, ymd(2021, 3, 11));

    let csv = "Date,Exercise Name,Weight,Reps\n04/03/2021,Squat,100,5\n11/03/021,Squat,105,5\n";
    assert!(matches!(
        parse_records(csv.as_bytes(), &LoadOptions::default()),
        Err(Error::Parse { line: 3, .. })
    ));
}

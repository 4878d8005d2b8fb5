// File: crates/liftplot/src/record.rs
// Summary: Workout log loader; CSV rows -> typed `Record`s with volume precomputed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const COL_DATE: &str = "Date";
pub const COL_EXERCISE: &str = "Exercise Name";
pub const COL_WEIGHT: &str = "Weight";
pub const COL_REPS: &str = "Reps";

/// One logged set.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub exercise: String,
    pub weight: f64,
    pub reps: u32,
    /// `weight * reps`.
    pub volume: f64,
}

impl Record {
    pub fn new(date: NaiveDate, exercise: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self { date, exercise: exercise.into(), weight, reps, volume: weight * reps as f64 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// Skip rows whose Weight or Reps cell is empty instead of failing.
    pub skip_incomplete_rows: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',', skip_incomplete_rows: false }
    }
}

/// Load every record from the log at `path`, in file order.
pub fn load_records(path: &Path, opts: &LoadOptions) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let records = read_csv(file, path, opts)?;
    debug!(path = %path.display(), records = records.len(), "loaded workout log");
    Ok(records)
}

/// Parse records from any reader (e.g. an in-memory log).
pub fn parse_records<R: Read>(reader: R, opts: &LoadOptions) -> Result<Vec<Record>> {
    read_csv(reader, Path::new("<input>"), opts)
}

fn read_csv<R: Read>(reader: R, origin: &Path, opts: &LoadOptions) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::from_csv(origin, e))?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect::<Vec<_>>();

    let idx = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::parse(1, format!("missing required column '{name}'")))
    };
    let i_date = idx(COL_DATE)?;
    let i_exercise = idx(COL_EXERCISE)?;
    let i_weight = idx(COL_WEIGHT)?;
    let i_reps = idx(COL_REPS)?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec.map_err(|e| Error::from_csv(origin, e))?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("");

        let exercise = field(i_exercise);
        if exercise.is_empty() {
            return Err(Error::parse(line, format!("empty '{COL_EXERCISE}'")));
        }
        let (weight_raw, reps_raw) = (field(i_weight), field(i_reps));
        if opts.skip_incomplete_rows && (weight_raw.is_empty() || reps_raw.is_empty()) {
            warn!(line, exercise, "skipping row with missing weight or reps");
            skipped += 1;
            continue;
        }

        let date_raw = field(i_date);
        let date = parse_date(date_raw).ok_or_else(|| Error::parse(line, format!("unrecognised date '{date_raw}'")))?;
        let weight = parse_weight(weight_raw)
            .ok_or_else(|| Error::parse(line, format!("invalid weight '{weight_raw}'")))?;
        let reps = parse_reps(reps_raw)
            .ok_or_else(|| Error::parse(line, format!("invalid reps '{reps_raw}'")))?;

        out.push(Record::new(date, exercise, weight, reps));
    }
    if skipped > 0 {
        warn!(skipped, "rows without weight or reps were ignored");
    }
    Ok(out)
}

const DAY_FIRST_DATES: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
const SHORT_YEAR_DATES: &[&str] = &["%d/%m/%y", "%d-%m-%y", "%d.%m.%y"];
const ISO_DATES: &[&str] = &["%Y-%m-%d"];
const TIME_SUFFIXES: &[&str] = &[" %H:%M", " %H:%M:%S"];

/// Parse a day-first date (`14/03/2021`), optionally followed by a time of
/// day, which is dropped. Unambiguous ISO dates (`2021-03-14`) are accepted too.
///
/// The year must have four digits, or two (`14/03/21` reads as 2021).
/// Other widths are rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = s.split_once(' ').map_or(s, |(d, _)| d);
    let fields: Vec<&str> = date_part.split(|c: char| matches!(c, '/' | '-' | '.')).collect();
    let formats = match fields.as_slice() {
        [y, _, _] if y.len() == 4 => ISO_DATES,
        [_, _, y] if y.len() == 4 => DAY_FIRST_DATES,
        [_, _, y] if y.len() == 2 => SHORT_YEAR_DATES,
        _ => return None,
    };
    for date_fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, date_fmt) {
            return Some(d);
        }
        for suffix in TIME_SUFFIXES {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, &format!("{date_fmt}{suffix}")) {
                return Some(dt.date());
            }
        }
    }
    None
}

fn parse_weight(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|w| w.is_finite() && *w >= 0.0)
}

/// Whole, non-negative rep counts; integral decimals such as `8.0` are accepted.
fn parse_reps(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().or_else(|| {
        let f = s.parse::<f64>().ok()?;
        (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64).then_some(f as u32)
    })
}

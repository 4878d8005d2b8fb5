// File: crates/liftplot-chart/src/dates.rs
// Summary: Calendar axis support; date<->axis value conversion, automatic
// day/month/year tick selection and concise tick labels.

use chrono::{Datelike, Months, NaiveDate};

/// Axis value for a calendar date (days from the common era).
pub fn date_to_x(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

/// Inverse of [`date_to_x`]; fractional values round down to the day.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x < i32::MIN as f64 || x > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.floor() as i32)
}

/// Spacing between calendar ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStep {
    Days(u32),
    Months(u32),
    Years(u32),
}

/// Candidate steps, finest first.
const STEPS: &[DateStep] = &[
    DateStep::Days(1),
    DateStep::Days(2),
    DateStep::Days(3),
    DateStep::Days(7),
    DateStep::Days(14),
    DateStep::Months(1),
    DateStep::Months(2),
    DateStep::Months(3),
    DateStep::Months(4),
    DateStep::Months(6),
    DateStep::Years(1),
    DateStep::Years(2),
    DateStep::Years(5),
    DateStep::Years(10),
    DateStep::Years(20),
    DateStep::Years(50),
    DateStep::Years(100),
];

impl DateStep {
    /// Day steps restart at the first of every month, month steps at January,
    /// year steps at multiples of the step.
    pub fn is_tick(&self, d: NaiveDate) -> bool {
        match *self {
            DateStep::Days(k) => (d.day() - 1) % k == 0,
            DateStep::Months(k) => d.day() == 1 && d.month0() % k == 0,
            DateStep::Years(k) => d.ordinal() == 1 && d.year().rem_euclid(k as i32) == 0,
        }
    }

    /// Tick dates within `[start, end]`, stopping once `limit` is exceeded.
    fn dates_between(&self, start: NaiveDate, end: NaiveDate, limit: usize) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        match *self {
            DateStep::Days(_) => {
                let mut d = start;
                while d <= end && out.len() <= limit {
                    if self.is_tick(d) { out.push(d); }
                    match d.succ_opt() { Some(n) => d = n, None => break }
                }
            }
            DateStep::Months(_) => {
                let Some(mut cursor) = start.with_day(1) else { return out };
                while cursor <= end && out.len() <= limit {
                    if cursor >= start && self.is_tick(cursor) { out.push(cursor); }
                    match cursor.checked_add_months(Months::new(1)) { Some(n) => cursor = n, None => break }
                }
            }
            DateStep::Years(_) => {
                for year in start.year()..=end.year() {
                    if out.len() > limit { break; }
                    if let Some(d) = NaiveDate::from_yo_opt(year, 1) {
                        if d >= start && self.is_tick(d) { out.push(d); }
                    }
                }
            }
        }
        out
    }
}

/// Ticks chosen for a date range together with the step that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct DateTicks {
    pub step: DateStep,
    pub dates: Vec<NaiveDate>,
}

/// Pick the finest calendar step producing at most `max_ticks` ticks inside
/// `[x_min, x_max]`. Ranges too short for `min_ticks` keep what the finest
/// step yields.
pub fn auto_date_ticks(x_min: f64, x_max: f64, min_ticks: usize, max_ticks: usize) -> DateTicks {
    let max_ticks = max_ticks.max(min_ticks).max(1);
    let (lo, hi) = if x_min <= x_max { (x_min, x_max) } else { (x_max, x_min) };
    let (Some(start), Some(end)) = (x_to_date(lo.ceil()), x_to_date(hi.floor())) else {
        return DateTicks { step: DateStep::Days(1), dates: Vec::new() };
    };
    let mut last = DateTicks { step: DateStep::Days(1), dates: Vec::new() };
    for &step in STEPS {
        let dates = step.dates_between(start, end, max_ticks);
        if dates.len() <= max_ticks {
            return DateTicks { step, dates };
        }
        last = DateTicks { step, dates };
    }
    last
}

/// Short label for a tick: the year at year boundaries, the abbreviated month
/// at month boundaries, otherwise the zero-padded day of month.
pub fn concise_label(step: DateStep, d: NaiveDate) -> String {
    let fmt = match step {
        DateStep::Years(_) => "%Y",
        DateStep::Months(_) if d.month() == 1 => "%Y",
        DateStep::Months(_) => "%b",
        DateStep::Days(_) if d.day() == 1 && d.month() == 1 => "%Y",
        DateStep::Days(_) if d.day() == 1 => "%b",
        DateStep::Days(_) => "%d",
    };
    d.format(fmt).to_string()
}

/// Context shown once beside the axis so short labels stay unambiguous.
pub fn concise_offset(ticks: &DateTicks) -> Option<String> {
    let first = ticks.dates.first()?;
    let last = ticks.dates.last()?;
    match ticks.step {
        DateStep::Days(_) => Some(last.format("%Y-%b").to_string()),
        DateStep::Months(_) if first.year() == last.year() => Some(last.format("%Y").to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn x_roundtrips_through_dates() {
        let d = ymd(2021, 3, 14);
        assert_eq!(x_to_date(date_to_x(d)), Some(d));
        assert_eq!(x_to_date(date_to_x(d) + 0.75), Some(d));
        assert_eq!(x_to_date(f64::NAN), None);
    }

    #[test]
    fn one_week_uses_day_ticks() {
        let t = auto_date_ticks(date_to_x(ymd(2021, 3, 1)), date_to_x(ymd(2021, 3, 7)), 3, 7);
        assert_eq!(t.step, DateStep::Days(1));
        assert_eq!(t.dates.len(), 7);
    }

    #[test]
    fn one_year_uses_month_ticks() {
        let t = auto_date_ticks(date_to_x(ymd(2021, 1, 10)), date_to_x(ymd(2021, 12, 20)), 3, 7);
        assert!(matches!(t.step, DateStep::Months(_)));
        assert!(t.dates.len() >= 3 && t.dates.len() <= 7, "got {:?}", t);
        assert!(t.dates.iter().all(|d| d.day() == 1));
    }

    #[test]
    fn decade_uses_year_ticks() {
        let t = auto_date_ticks(date_to_x(ymd(2010, 6, 1)), date_to_x(ymd(2022, 6, 1)), 3, 7);
        assert!(matches!(t.step, DateStep::Years(_)));
        assert!(t.dates.len() >= 3 && t.dates.len() <= 7, "got {:?}", t);
    }

    #[test]
    fn labels_are_concise() {
        assert_eq!(concise_label(DateStep::Days(1), ymd(2021, 3, 5)), "05");
        assert_eq!(concise_label(DateStep::Days(1), ymd(2021, 4, 1)), "Apr");
        assert_eq!(concise_label(DateStep::Months(1), ymd(2022, 1, 1)), "2022");
        assert_eq!(concise_label(DateStep::Months(1), ymd(2022, 7, 1)), "Jul");
        assert_eq!(concise_label(DateStep::Years(1), ymd(2022, 1, 1)), "2022");
    }

    #[test]
    fn offset_names_month_for_day_ticks() {
        let t = DateTicks { step: DateStep::Days(2), dates: vec![ymd(2021, 3, 1), ymd(2021, 3, 3)] };
        assert_eq!(concise_offset(&t).as_deref(), Some("2021-Mar"));
    }
}

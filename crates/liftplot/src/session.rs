// File: crates/liftplot/src/session.rs
// Summary: Per-session aggregates (summed volume, max weight) for one exercise.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::record::Record;

/// All sets of one exercise on one calendar date, reduced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionAggregate {
    pub date: NaiveDate,
    pub volume: f64,
    pub max_weight: f64,
}

/// Sessions of `exercise`, ordered by date.
pub fn sessions_for(records: &[Record], exercise: &str) -> Vec<SessionAggregate> {
    let mut by_date: BTreeMap<NaiveDate, SessionAggregate> = BTreeMap::new();
    for r in records.iter().filter(|r| r.exercise == exercise) {
        by_date
            .entry(r.date)
            .and_modify(|s| {
                s.volume += r.volume;
                s.max_weight = s.max_weight.max(r.weight);
            })
            .or_insert(SessionAggregate { date: r.date, volume: r.volume, max_weight: r.weight });
    }
    by_date.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn rec(day: u32, ex: &str, weight: f64, reps: u32) -> Record {
        Record::new(NaiveDate::from_ymd_opt(2021, 5, day).unwrap(), ex, weight, reps)
    }

    #[test]
    fn groups_by_date_and_reduces() {
        let records = vec![
            rec(3, "Squat", 100.0, 5),
            rec(1, "Squat", 90.0, 5),
            rec(3, "Squat", 110.0, 3),
            rec(3, "Bench", 200.0, 1),
            rec(1, "Squat", 95.0, 5),
        ];
        let s = sessions_for(&records, "Squat");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].date.day0(), 0);
        assert_eq!(s[0].volume, 925.0);
        assert_eq!(s[0].max_weight, 95.0);
        assert_eq!(s[1].volume, 830.0);
        assert_eq!(s[1].max_weight, 110.0);
    }

    #[test]
    fn unknown_exercise_has_no_sessions() {
        assert!(sessions_for(&[rec(1, "Squat", 1.0, 1)], "Deadlift").is_empty());
    }
}

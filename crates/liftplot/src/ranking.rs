// File: crates/liftplot/src/ranking.rs
// Summary: Exercise frequency ranking (sets per exercise name, most frequent first).

use std::collections::HashMap;
use std::io::{self, Write};

use crate::record::Record;

/// How many exercises get their own chart unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedExercise {
    pub name: String,
    /// Number of logged sets.
    pub count: usize,
}

/// Exercise names ordered by set count, descending.
///
/// Equal counts are ordered by when each name reached its final count, i.e.
/// the position of its last set in the log: earlier first. For `A, B, B, A`
/// that gives `[B, A]`. A stable count-sort that keeps first-seen order would
/// give `[A, B]` instead; listings with tied counts can differ from such tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseRanking {
    entries: Vec<RankedExercise>,
}

impl ExerciseRanking {
    pub fn from_records(records: &[Record]) -> Self {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        // (name, count, index of the set that brought the count to its current value)
        let mut tally: Vec<(&str, usize, usize)> = Vec::new();
        for (pos, r) in records.iter().enumerate() {
            let slot = *slots.entry(r.exercise.as_str()).or_insert_with(|| {
                tally.push((r.exercise.as_str(), 0, pos));
                tally.len() - 1
            });
            tally[slot].1 += 1;
            tally[slot].2 = pos;
        }
        tally.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        let entries = tally
            .into_iter()
            .map(|(name, count, _)| RankedExercise { name: name.to_string(), count })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedExercise] {
        &self.entries
    }

    /// Number of distinct exercise names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent exercises, or all of them when fewer exist.
    pub fn top(&self, n: usize) -> &[RankedExercise] {
        &self.entries[..n.min(self.entries.len())]
    }
}

/// Print `Your top N exercises are:` followed by `rank. name (count)` lines.
pub fn write_listing<W: Write>(top: &[RankedExercise], out: &mut W) -> io::Result<()> {
    writeln!(out, "Your top {} exercises are:", top.len())?;
    for (i, e) in top.iter().enumerate() {
        writeln!(out, "{}. {} ({})", i + 1, e.name, e.count)?;
    }
    Ok(())
}

/// Rank `records`, print the listing for the top `n` to `out` and return their names.
pub fn top_exercises<W: Write>(records: &[Record], n: usize, out: &mut W) -> io::Result<Vec<String>> {
    let ranking = ExerciseRanking::from_records(records);
    let top = ranking.top(n);
    write_listing(top, out)?;
    tracing::debug!(distinct = ranking.len(), shown = top.len(), "ranked exercises");
    Ok(top.iter().map(|e| e.name.clone()).collect())
}

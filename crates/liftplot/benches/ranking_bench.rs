use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use liftplot::{sessions_for, ExerciseRanking, Record, RepHistogram};

const EXERCISES: &[&str] = &[
    "Squat (Barbell)",
    "Bench Press (Barbell)",
    "Deadlift (Barbell)",
    "Overhead Press (Barbell)",
    "Bent-over Row (Barbell)",
    "Pull Up",
    "Lat Pulldown (Cable)",
    "Bicep Curl (Dumbbell)",
];

fn build_log(n: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let date = start + chrono::Days::new((i / 20) as u64);
            let ex = EXERCISES[(i * 7 + i / 3) % EXERCISES.len()];
            Record::new(date, ex, 20.0 + (i % 40) as f64 * 2.5, 3 + (i % 13) as u32)
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for &n in &[10_000usize, 100_000usize] {
        let log = build_log(n);
        group.bench_function(format!("rank_{n}"), |b| {
            b.iter(|| black_box(ExerciseRanking::from_records(&log)));
        });
        group.bench_function(format!("sessions_{n}"), |b| {
            b.iter(|| black_box(sessions_for(&log, EXERCISES[0])));
        });
        group.bench_function(format!("rep_hist_{n}"), |b| {
            b.iter(|| black_box(RepHistogram::from_records(&log, 5, 16)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);

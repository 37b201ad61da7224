//! Benchmarks for pool settlement

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lateline::entry::Entry;
use lateline::settlement::{settle, split_pool};
use lateline::wager::{Side, Wager};

fn create_wagers(count: u64) -> Vec<Wager> {
    (0..count)
        .map(|i| {
            let side = if i % 3 == 0 { Side::Under } else { Side::Over };
            Wager::new(format!("bettor{}", i % 500), side, 1 + i % 97).unwrap()
        })
        .collect()
}

fn benchmark_split_pool(c: &mut Criterion) {
    let wagers = create_wagers(10_000);

    c.bench_function("split_pool_10k", |b| {
        b.iter(|| split_pool(black_box(Side::Over), black_box(&wagers)))
    });
}

fn benchmark_settle_entry(c: &mut Criterion) {
    let line = Utc.with_ymd_and_hms(2024, 3, 1, 19, 5, 0).unwrap();
    let mut entry = Entry::new("alice", "", line - Duration::minutes(5), line).unwrap();
    entry.wagers = create_wagers(10_000).iter().map(|w| w.to_string()).collect();
    entry.record_arrival(line + Duration::minutes(1)).unwrap();

    c.bench_function("settle_entry_10k", |b| {
        b.iter(|| {
            let mut fresh = entry.clone();
            settle(black_box(&mut fresh))
        })
    });
}

criterion_group!(benches, benchmark_split_pool, benchmark_settle_entry);
criterion_main!(benches);

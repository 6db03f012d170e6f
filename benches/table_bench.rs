// In benches/table_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;

use tags_leaderboard::classifier::{classify, StandingsEntry};
use tags_leaderboard::leaderboard::standings_columns;
use tags_leaderboard::table::{FilterValue, TableEngine, TableOptions};

const PLAYER_COUNT: usize = 10_000;
const NAMES: [&str; 6] = ["Ben", "Brandon", "Scott", "Alex", "Jordan", "Sam"];

/// Generates a shuffled standings list with random movement and some missing fields.
fn generate_standings(size: usize) -> Vec<StandingsEntry> {
    let mut rng = rand::rng();
    let mut previous: Vec<i64> = (1..=size as i64).collect();
    previous.shuffle(&mut rng);

    let mut entries: Vec<StandingsEntry> = (0..size)
        .map(|i| {
            let name = format!("{} {}", NAMES[i % NAMES.len()], i);
            let mut entry = StandingsEntry::new(format!("p-{}", i), name, i as i64 + 1)
                .with_points(rng.random_range(0..500) as f64);
            // Roughly one in ten players is new this season.
            if rng.random_range(0..10) != 0 {
                entry = entry.with_previous(previous[i]);
            }
            if i < 99 {
                entry = entry.with_tag(i as u32 + 1);
            }
            entry
        })
        .collect();
    entries.shuffle(&mut rng);
    entries
}

// --- Benchmark Suite ---

fn bench_leaderboard(c: &mut Criterion) {
    // --- Setup Data ---
    let standings = generate_standings(PLAYER_COUNT);
    let annotated = classify(&standings, 16).unwrap();

    let mut group = c.benchmark_group("Leaderboard Table");
    group.throughput(criterion::Throughput::Elements(PLAYER_COUNT as u64));

    group.bench_function("Classify", |b| {
        b.iter(|| black_box(classify(black_box(&standings), 16)))
    });

    let mut sorted = TableEngine::new(
        annotated.clone(),
        standings_columns(),
        TableOptions::default(),
    );
    sorted.set_sort("points").unwrap();
    group.bench_function("Visible Rows (Sorted)", |b| {
        b.iter(|| black_box(sorted.visible_rows().len()))
    });

    let mut filtered = TableEngine::new(
        annotated.clone(),
        standings_columns(),
        TableOptions::default(),
    );
    filtered.set_sort("position").unwrap();
    filtered
        .set_filter("name", Some(FilterValue::contains("ben")))
        .unwrap();
    group.bench_function("Visible Rows (Filtered + Sorted)", |b| {
        b.iter(|| black_box(filtered.visible_rows().len()))
    });

    let faceted = TableEngine::new(annotated, standings_columns(), TableOptions::default());
    group.bench_function("Faceted Values (Current Tag)", |b| {
        b.iter(|| black_box(faceted.faceted_values(black_box("currentTag")).len()))
    });

    group.finish();
}

criterion_group!(benches, bench_leaderboard);
criterion_main!(benches);

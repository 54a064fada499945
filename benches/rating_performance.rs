//! Performance benchmarks for resolution and rating calculations

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use season_ratings::directory::TeamDirectory;
use season_ratings::rating::RatingEngine;
use season_ratings::resolver::IdentityResolver;
use season_ratings::types::{GameResult, TeamDirectoryEntry};
use std::sync::Arc;

const TEAMS: usize = 700;

fn bench_directory() -> Arc<TeamDirectory> {
    let entries = (0..TEAMS)
        .map(|i| {
            TeamDirectoryEntry::new(
                format!("School {:04}", i),
                vec![format!("School Number {:04}", i), format!(" SN{:04}", i)],
                format!("S{:05}", i),
            )
        })
        .collect();

    Arc::new(TeamDirectory::new(entries).unwrap())
}

fn bench_season() -> Vec<GameResult> {
    let date = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
    (0..TEAMS * 6)
        .map(|i| {
            let winner = format!("S{:05}", i % TEAMS);
            let loser = format!("S{:05}", (i * 7 + 1) % TEAMS);
            let winner_points = 14 + (i % 50) as u32;
            GameResult::new(winner, loser, winner_points, 10, date).unwrap()
        })
        .collect()
}

fn bench_resolution(c: &mut Criterion) {
    let resolver = IdentityResolver::with_default_matcher(bench_directory());

    c.bench_function("resolve_canonical_name", |b| {
        b.iter(|| black_box(resolver.resolve("School 0650").is_ok()))
    });

    c.bench_function("resolve_last_alias_by_substring", |b| {
        b.iter(|| black_box(resolver.resolve("SN0699").is_ok()))
    });
}

fn bench_rating_calculations(c: &mut Criterion) {
    let engine = RatingEngine::default();
    let games = bench_season();

    c.bench_function("season_ratings_4200_games", |b| {
        b.iter(|| black_box(engine.compute_season_ratings(&games)))
    });

    let prior = engine.compute_season_ratings(&games);
    c.bench_function("season_ratings_with_carryover", |b| {
        b.iter(|| black_box(engine.compute_season_ratings_with_carryover(&games, &prior)))
    });
}

criterion_group!(benches, bench_resolution, bench_rating_calculations);
criterion_main!(benches);

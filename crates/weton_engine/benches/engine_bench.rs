use criterion::{Criterion, black_box, criterion_group, criterion_main};
use weton_base::{Dina, Pasaran, Weton};
use weton_engine::{
    DayPairing, StoredWeton, WetonProfile, compute_jodoh, compute_weton_profile, next_weton,
    weton_occurrences,
};
use weton_time::{BirthDate, DayBoundary};

fn date(s: &str) -> BirthDate {
    s.parse().expect("valid bench date")
}

fn profile_bench(c: &mut Criterion) {
    let d = date("1945-08-17");
    let p = compute_weton_profile(d, None, DayBoundary::Midnight).expect("profile");
    let stored = StoredWeton::from(&p);

    let mut group = c.benchmark_group("profile");
    group.bench_function("compute_weton_profile", |b| {
        b.iter(|| compute_weton_profile(black_box(d), None, DayBoundary::Midnight))
    });
    group.bench_function("rehydrate_stored", |b| {
        b.iter(|| WetonProfile::try_from(black_box(&stored)))
    });
    group.finish();
}

fn jodoh_bench(c: &mut Criterion) {
    let a = compute_weton_profile(date("1990-05-12"), None, DayBoundary::Midnight).expect("a");
    let b = compute_weton_profile(date("1992-11-03"), None, DayBoundary::Midnight).expect("b");

    let mut group = c.benchmark_group("jodoh");
    group.bench_function("compute_jodoh", |bch| {
        bch.iter(|| compute_jodoh(black_box(&a), black_box(&b), DayPairing::Unordered))
    });
    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let start = date("2024-01-01");
    let end = date("2034-01-01");
    let w = Weton::new(Dina::Jumat, Pasaran::Kliwon);

    let mut group = c.benchmark_group("search");
    group.bench_function("next_weton", |b| {
        b.iter(|| next_weton(black_box(start), black_box(w)))
    });
    group.bench_function("weton_occurrences_10y", |b| {
        b.iter(|| weton_occurrences(black_box(start), black_box(end), w))
    });
    group.finish();
}

criterion_group!(benches, profile_bench, jodoh_bench, search_bench);
criterion_main!(benches);

//! Recommendation Benchmarks
//!
//! Run with: cargo bench --bench search
//!
//! Groups:
//! - catalog_build: ingestion, corpus expansion and indexing (small/medium/large)
//! - recommend: query latency (hot_query, uniform, context, miss)
//! - catalog_refresh: rebuild-and-swap through `Curator::refresh`
//!
//! Targets:
//! - recommend/hot_query: < 100µs (1000 templates)
//! - catalog_build/medium: < 20ms

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use curator::{Catalog, Curator, CuratorConfig, MemorySource, RawTables, SearchRequest, Table};
use curator_core::table::{CLIENT_PROFILES, TEMPLATE_DETAILS, TEMPLATE_TAGS};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Constants and Utilities
// ============================================================================

/// Fixed seed for reproducible benchmarks
const BENCH_SEED: u64 = 0xDEADBEEF_CAFEBABE;

const CLIENTS: [(&str, &str, &str); 4] = [
    ("PlayCo", "PlayCo Gaming", "mobile, gaming, arcade, prizes"),
    ("BankCo", "BankCo Finance", "credit, loans, mortgage, rewards"),
    ("ShopCo", "ShopCo Retail", "fashion, apparel, sale, discount"),
    ("TripCo", "TripCo Travel", "flights, hotels, holiday, deals"),
];

const WORDS: [&str; 12] = [
    "spin", "wheel", "quiz", "scratch", "card", "countdown", "launch", "survey", "poll", "memory",
    "match", "reveal",
];

/// Simple LCG for deterministic pseudo-random access patterns
fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state
}

/// Generate `count` templates spread across the bench clients
fn generate_tables(count: usize) -> RawTables {
    let mut details = Table::new(
        TEMPLATE_DETAILS,
        &["template_name", "description", "avg_ctr", "preview_url"],
    );
    let mut tags = Table::new(TEMPLATE_TAGS, &["campaign_name", "client_name", "template_name"]);
    let mut rng_state = BENCH_SEED;

    for i in 0..count {
        let name = format!("template {}", i);
        let a = WORDS[(lcg_next(&mut rng_state) as usize) % WORDS.len()];
        let b = WORDS[(lcg_next(&mut rng_state) as usize) % WORDS.len()];
        let description = format!("{} {} interactive unit {}", a, b, i);
        let ctr = format!("{:.1}%", (lcg_next(&mut rng_state) % 80) as f64 / 10.0);
        let preview = format!("https://preview.example/{}", i);
        details.push(&[name.as_str(), description.as_str(), ctr.as_str(), preview.as_str()]);

        let (client, _, _) = CLIENTS[i % CLIENTS.len()];
        let campaign = format!("{} campaign {}", client, i % 7);
        tags.push(&[campaign.as_str(), client, name.as_str()]);
    }

    let mut profiles = Table::new(CLIENT_PROFILES, &["client_type", "keywords"]);
    for (_, client_type, keywords) in CLIENTS {
        profiles.push(&[client_type, keywords]);
    }

    RawTables {
        template_details: details,
        template_tags: tags,
        client_profiles: profiles,
    }
}

fn curator_for(count: usize) -> Curator {
    Curator::new(
        Arc::new(MemorySource::new(generate_tables(count))),
        CuratorConfig::default(),
    )
    .unwrap()
}

fn pregenerate_queries(count: usize) -> Vec<String> {
    let mut rng_state = BENCH_SEED;
    (0..count)
        .map(|_| {
            let a = WORDS[(lcg_next(&mut rng_state) as usize) % WORDS.len()];
            let b = WORDS[(lcg_next(&mut rng_state) as usize) % WORDS.len()];
            format!("{} {}", a, b)
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn catalog_build_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_build");
    group.measurement_time(Duration::from_secs(5));

    let config = CuratorConfig::default();
    for count in [100, 1000, 10000] {
        let label = match count {
            100 => "small",
            1000 => "medium",
            10000 => "large",
            _ => "custom",
        };
        let tables = generate_tables(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new(label, count), &tables, |b, tables| {
            b.iter(|| Catalog::build(tables, &config, 1).unwrap());
        });
    }

    group.finish();
}

fn recommend_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    group.measurement_time(Duration::from_secs(5));

    let curator = curator_for(1000);

    // --- Benchmark: recommend/hot_query ---
    // Same direct query repeated
    group.bench_function("hot_query", |b| {
        b.iter(|| curator.recommend("spin wheel").unwrap());
    });

    // --- Benchmark: recommend/uniform ---
    // Rotating direct queries
    group.bench_function("uniform", |b| {
        let queries = pregenerate_queries(100);
        let mut rng_state = BENCH_SEED;
        b.iter(|| {
            let idx = (lcg_next(&mut rng_state) as usize) % queries.len();
            curator.recommend(&queries[idx]).unwrap()
        });
    });

    // --- Benchmark: recommend/context ---
    // Query that selects a client profile and hits a quarter of the catalog
    group.bench_function("context", |b| {
        b.iter(|| curator.recommend("mobile gaming launch").unwrap());
    });

    // --- Benchmark: recommend/miss ---
    // Words absent from every template
    group.bench_function("miss", |b| {
        b.iter(|| curator.recommend("xyzzy nonexistent").unwrap());
    });

    group.finish();

    let mut group = c.benchmark_group("recommend_top_k");
    for k in [1, 10, 100] {
        let request = SearchRequest::new("quiz card reveal").with_top_k(k);
        group.bench_with_input(BenchmarkId::from_parameter(k), &request, |b, request| {
            b.iter(|| curator.search(request).unwrap());
        });
    }
    group.finish();
}

fn catalog_refresh_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_refresh");
    group.sample_size(20);

    let curator = curator_for(1000);
    group.bench_function("medium", |b| {
        b.iter(|| curator.refresh().unwrap());
    });

    group.finish();
}

criterion_group!(build_benches, catalog_build_benchmarks,);

criterion_group!(recommend_benches, recommend_benchmarks,);

criterion_group!(refresh_benches, catalog_refresh_benchmarks,);

criterion_main!(build_benches, recommend_benches, refresh_benches);

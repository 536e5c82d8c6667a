// benches/combinations.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use glaze_scrape::{combo::ComboKey, specs::combinations, store::Store};

const PAGE_URL: &str = "https://amaco.com/resources/layering?top=obsidian&page=1";

fn load_sample() -> String {
    std::fs::read_to_string("tests/fixtures/top_obsidian_p1.html")
        .expect("read tests/fixtures/top_obsidian_p1.html")
}

/// The fixture page repeated so a parse does real work.
fn big_page(sample: &str, copies: usize) -> String {
    let mut doc = String::with_capacity(sample.len() * copies);
    for _ in 0..copies {
        doc.push_str(sample);
    }
    doc
}

fn bench_combinations(c: &mut Criterion) {
    let doc = big_page(&load_sample(), 40);

    c.bench_function("combinations_parse", |b| {
        b.iter(|| {
            let page = combinations::parse(black_box(&doc), PAGE_URL, 1).unwrap();
            black_box(page.combos.len())
        })
    });

    let page = combinations::parse(&doc, PAGE_URL, 1).unwrap();
    c.bench_function("store_merge_clean", |b| {
        b.iter(|| {
            let mut store: Store = page
                .combos
                .iter()
                .filter_map(|c| ComboKey::from_url(&c.url).ok().map(|k| (k, c.clone())))
                .collect();
            black_box(store.clean().dropped)
        })
    });
}

criterion_group!(benches, bench_combinations);
criterion_main!(benches);

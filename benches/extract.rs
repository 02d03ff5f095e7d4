// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wstg_browser::{markup, specs::reference::extract};

const PAGE: &str = include_str!("../tests/fixtures/wstg_info_01.html");

/// The fixture repeated inside one #main, roughly the size of a long guide page.
fn long_page() -> String {
    let body = PAGE
        .split_once("<div id=\"main\">")
        .and_then(|(_, rest)| rest.split_once("</div>"))
        .map(|(inner, _)| inner)
        .unwrap_or("");
    format!("<html><body><div id=\"main\">{}</div></body></html>", body.repeat(40))
}

fn bench_extract(c: &mut Criterion) {
    let long = long_page();

    c.bench_function("extract_fixture", |b| {
        b.iter(|| extract(black_box(PAGE)).map(|s| s.len()))
    });

    c.bench_function("extract_long_page", |b| {
        b.iter(|| extract(black_box(&long)).map(|s| s.len()))
    });

    let out = extract(&long).unwrap_or_default();
    c.bench_function("markup_parse_long_page", |b| {
        b.iter(|| markup::parse(black_box(&out)).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

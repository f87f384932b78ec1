// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use revscope::config::options::{ExtractMode, ExtractOptions};
use revscope::specs::reviews;

fn load_sample() -> String {
    // ten copies of the three-review fixture inside one listing
    let page = include_str!("../tests/fixtures/reviews.html");
    let start = page.find("<div id=\"R1A2B3C4\"").unwrap_or(0);
    let end = page.rfind("</div>\n</body>").unwrap_or(page.len());
    let block = &page[start..end];
    let mut html = String::from("<html><body><div id=\"cm_cr-review_list\">");
    for _ in 0..10 {
        html.push_str(block);
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = load_sample();

    let flat = ExtractOptions { mode: ExtractMode::Flat, ..ExtractOptions::default() };
    c.bench_function("extract_flat", |b| {
        b.iter(|| {
            let out = reviews::extract(black_box(&doc), &flat);
            black_box(out.records.len())
        })
    });

    let grouped = ExtractOptions { mode: ExtractMode::Grouped, ..ExtractOptions::default() };
    c.bench_function("extract_grouped", |b| {
        b.iter(|| {
            let out = reviews::extract(black_box(&doc), &grouped);
            black_box(out.records.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

use contentfmt_engine::{Dialect, convert, parse_lines, render};
use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(20);

    let markdown = common::generate_markdown_post(100);
    let plain = common::generate_plain_post(100);

    group.bench_function("markdown", |b| {
        b.iter(|| convert(std::hint::black_box(markdown.as_str()), Dialect::Markdown).unwrap());
    });

    group.bench_function("plain", |b| {
        b.iter(|| convert(std::hint::black_box(plain.as_str()), Dialect::Plain).unwrap());
    });

    group.bench_function("classify_only", |b| {
        b.iter(|| parse_lines(std::hint::black_box(&markdown), Dialect::Markdown));
    });

    let doc = convert(markdown.as_str(), Dialect::Markdown).unwrap().document;
    group.bench_function("render_only", |b| {
        b.iter(|| render(std::hint::black_box(&doc)));
    });

    group.finish();
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    group.sample_size(20);

    let markdown = common::generate_markdown_post(100);
    group.bench_function("pulldown_cmark_html", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&markdown));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_pulldown_cmark_baseline);
criterion_main!(benches);

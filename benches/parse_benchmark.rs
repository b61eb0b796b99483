//! Benchmarks for unosf parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic OSF documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const STYLES: [&str; 6] = [
    "Scene Heading",
    "Action",
    "Character",
    "Parenthetical",
    "Dialogue",
    "Transition",
];

/// Creates a synthetic OSF document with the given number of paragraphs.
fn create_test_osf(paragraph_count: usize) -> Vec<u8> {
    let mut content = String::new();
    content.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>"#);
    content.push('\n');
    content.push_str(r#"<document type="Open Screenplay Format document" version="20">"#);
    content.push_str(r#"<info title="Benchmark" written_by="unosf"/>"#);
    content.push_str("<paragraphs>");

    for i in 0..paragraph_count {
        let style = STYLES[i % STYLES.len()];
        content.push_str(&format!(
            r#"<para><style basestylename="{}"/><text>Line {} of the benchmark </text><text bold="1" italic="1">screenplay</text><text>.</text></para>"#,
            style, i
        ));
    }

    content.push_str("</paragraphs>");
    content.push_str(r#"<titlepage><para><text allcaps="1">benchmark</text></para></titlepage>"#);
    content.push_str("</document>");
    content.into_bytes()
}

/// Benchmark container detection.
fn bench_format_detection(c: &mut Criterion) {
    c.bench_function("detect_package", |b| {
        b.iter(|| unosf::detect_format_from_path(black_box("draft.fadein")));
    });

    c.bench_function("detect_flat_xml", |b| {
        b.iter(|| unosf::detect_format_from_path(black_box("draft.osf")));
    });
}

/// Benchmark OSF parsing at various sizes.
fn bench_osf_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("osf_parsing");

    for paragraph_count in [10, 100, 1000].iter() {
        let data = create_test_osf(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| unosf::parse_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark text and XML rendering.
fn bench_rendering(c: &mut Criterion) {
    let doc = unosf::parse_bytes(&create_test_osf(1000)).unwrap();

    c.bench_function("render_text", |b| {
        b.iter(|| black_box(&doc).render());
    });

    c.bench_function("render_xml", |b| {
        b.iter(|| unosf::render::to_xml(black_box(&doc)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_osf_parsing,
    bench_rendering,
);
criterion_main!(benches);

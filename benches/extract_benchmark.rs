//! Benchmarks for unform reading and cleaning performance.
//!
//! Run with: cargo bench
//!
//! Inputs are synthetic form tables of increasing height.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unform::extract::{clean_table, extract_tables};
use unform::parser::WML_NS;

const LABELS: &[&str] = &[
    "姓名", "性别", "出生年月", "政治面貌", "所在分院", "班级", "学号", "第一志愿",
];

fn cell(text: &str) -> String {
    format!("<w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc>", text)
}

/// Creates document markup with one table of `rows` label/value rows.
fn create_form_xml(rows: usize) -> String {
    let mut body = String::from("<w:tbl>");
    for i in 0..rows {
        let label = LABELS[i % LABELS.len()];
        body.push_str("<w:tr>");
        body.push_str(&cell(label));
        body.push_str(&cell(&format!("值{}", i)));
        body.push_str(&cell(""));
        body.push_str(&cell("服从分配 ☑是 □否"));
        body.push_str("</w:tr>");
    }
    body.push_str("</w:tbl>");

    format!(
        r#"<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        WML_NS, body
    )
}

/// Benchmark the structural reader at various sizes.
fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");

    for rows in [8, 64, 512].iter() {
        let xml = create_form_xml(*rows);

        group.bench_function(format!("{}_rows", rows), |b| {
            b.iter(|| unform::parse_xml(black_box(&xml)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the field cleaner on normalized tables.
fn bench_cleaner(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleaner");

    for rows in [8, 64, 512].iter() {
        let doc = unform::parse_xml(&create_form_xml(*rows)).unwrap();
        let tables = extract_tables(&doc);

        group.bench_function(format!("{}_rows", rows), |b| {
            b.iter(|| clean_table(black_box(&tables[0])));
        });
    }

    group.finish();
}

/// Benchmark checkbox interpretation.
fn bench_checkbox(c: &mut Criterion) {
    c.bench_function("interpret_checkbox", |b| {
        b.iter(|| unform::extract::interpret_checkbox(black_box("是否服从分配 □是 ☑否")));
    });
}

criterion_group!(benches, bench_reader, bench_cleaner, bench_checkbox);
criterion_main!(benches);

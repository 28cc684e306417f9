//! Benchmarks for font shorthand parsing.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use font_shorthand::{FontShorthand, ToCss, parse};

const SAMPLES: &[&str] = &[
    "12px serif",
    "italic small-caps bold 12px/30px Georgia, serif",
    r#"oblique 20deg 1000 ultra-condensed 1.2em/1.5 "Times\" New Roman", 'Comic Sans MS', Lucida    Grande, sans-serif"#,
    r#"12px "Lucida" Grande"#,
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (i, sample) in SAMPLES.iter().enumerate() {
        group.bench_function(format!("sample_{i}"), |b| {
            b.iter(|| parse(black_box(sample)))
        });
    }

    group.finish();
}

fn bench_to_css(c: &mut Criterion) {
    let font = FontShorthand::parse(SAMPLES[2]).unwrap();
    c.bench_function("to_css", |b| b.iter(|| black_box(&font).to_css_string()));
}

criterion_group!(benches, bench_parse, bench_to_css);
criterion_main!(benches);

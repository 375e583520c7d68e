// Benchmarks for the root index, pattern store and generation path.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sarf_engine::MorphologicalEngine;

/// Synthetic triliteral roots: all pairs of a letter set with a fixed
/// final radical.
fn synthetic_roots() -> Vec<String> {
    let letters = [
        'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ',
    ];
    let mut roots = Vec::new();
    for a in letters {
        for b in letters {
            roots.push(format!("{a}{b}م"));
        }
    }
    roots
}

fn pattern_catalog() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("فاعل", "1ا23", "اسم الفاعل"),
        ("مفعول", "م12و3", "اسم المفعول"),
        ("فعال", "12ا3", "صيغة مبالغة"),
        ("مفعل", "م123", "اسم المكان"),
        ("فعيل", "12ي3", "صفة مشبهة"),
    ]
}

fn bench_load_roots(c: &mut Criterion) {
    let roots = synthetic_roots();
    c.bench_function("load_roots_256", |b| {
        b.iter(|| {
            let mut engine = MorphologicalEngine::new();
            black_box(engine.load_roots(black_box(&roots)))
        })
    });
}

fn bench_pattern_lookup(c: &mut Criterion) {
    let mut engine = MorphologicalEngine::new();
    engine.load_patterns(pattern_catalog());
    c.bench_function("pattern_lookup", |b| {
        b.iter(|| black_box(engine.pattern(black_box("مفعول"))))
    });
}

fn bench_generate_word(c: &mut Criterion) {
    let mut engine = MorphologicalEngine::new();
    engine.load_roots(synthetic_roots());
    engine.load_patterns(pattern_catalog());
    c.bench_function("generate_word", |b| {
        b.iter(|| black_box(engine.generate_word(black_box("بتم"), "مفعول")))
    });
}

criterion_group!(
    benches,
    bench_load_roots,
    bench_pattern_lookup,
    bench_generate_word
);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use code128::{encode, EncodingRequest, Variant};

fn bench_encode_short(c: &mut Criterion) {
    c.bench_function("encode_general_12", |b| {
        b.iter(|| encode(black_box("Hello, World"), black_box(Variant::General)))
    });
}

fn bench_encode_long(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog ".repeat(20);
    c.bench_function("encode_general_880", |b| {
        b.iter(|| encode(black_box(&text), black_box(Variant::General)))
    });
}

fn bench_encode_folded(c: &mut Criterion) {
    let text = "folded to upper case ".repeat(20);
    c.bench_function("encode_uppercase_420", |b| {
        b.iter(|| encode(black_box(&text), black_box(Variant::UppercaseOnly)))
    });
}

fn bench_fill_bits(c: &mut Criterion) {
    let barcode = EncodingRequest::new("0123456789").set_thickness(80).encode().unwrap();
    let render = barcode.render();
    let mut storage = vec![false; render.len()];
    c.bench_function("fill_bits_10_x80", |b| {
        b.iter(|| render.fill_bits(black_box(&mut storage)))
    });
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_long,
    bench_encode_folded,
    bench_fill_bits
);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use halo_space::{Arg, array, interpolate, list};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let query = "SELECT * FROM users WHERE id = $1 AND name = $2 AND active = $3";
    let args = vec![Arg::from(123_i64), Arg::from("John"), Arg::from(true)];
    c.bench_function("interpolate 3 args", |b| {
        b.iter(|| interpolate(black_box(query), black_box(&args)))
    });

    let query = "INSERT INTO t (tags, ids, data) VALUES (?, ?, ?)";
    let args = vec![
        array(["a", "b", "it's"]),
        list(0..64_i64),
        Arg::from(vec![0xab_u8; 256]),
    ];
    c.bench_function("interpolate collections", |b| {
        b.iter(|| interpolate(black_box(query), black_box(&args)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

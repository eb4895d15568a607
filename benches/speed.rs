use cipher::{Iv, Key};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use snow1::cipher::{KeyIvInit, StreamCipher};
use snow1::{Snow1, Snow1_128Cipher, Snow1_256Cipher, STANDARD_MODE};

// A generic function to benchmark any cipher that implements the required traits.
fn bench_cipher<C>(c: &mut Criterion, name: &str)
where
    C: KeyIvInit + StreamCipher,
{
    let mut group = c.benchmark_group(name);

    // Benchmark throughput for different buffer sizes.
    for size in [1024, 4096, 16384, 65536].iter() {
        let mut buffer = vec![0u8; *size];
        let key = Key::<C>::default();
        let iv = Iv::<C>::default();
        let mut cipher = C::new(&key, &iv);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| cipher.apply_keystream(&mut buffer));
        });
    }
    group.finish();
}

// Word-at-a-time emission through the raw state machine.
fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("SNOW-1.0-words");
    let key = [0u8; 16];
    let mut snow = Snow1::new(&key, 128, STANDARD_MODE, 0, 0).unwrap();

    group.throughput(Throughput::Bytes(4 * 1024));
    group.bench_function("keystream-1024", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for _ in 0..1024 {
                acc ^= snow.keystream();
            }
            acc
        });
    });
    group.finish();
}

// Main benchmark function that sets up and runs all benchmarks.
fn benchmarks(c: &mut Criterion) {
    bench_cipher::<Snow1_128Cipher>(c, "SNOW-1.0-128");
    bench_cipher::<Snow1_256Cipher>(c, "SNOW-1.0-256");
    bench_words(c);
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);

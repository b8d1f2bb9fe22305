use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qoif::{decode, encode, Bitmap, Pixel, SurfaceMut};
use std::hint::black_box;

fn gradient(size: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(size, size);
    for y in 0..size {
        for x in 0..size {
            bitmap.set_pixel(x, y, Pixel::new(x as u8, y as u8, (x ^ y) as u8, 255));
        }
    }

    bitmap
}

fn noise(size: u32) -> Bitmap {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let raw = (0..size * size * 4)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect();

    Bitmap::from_raw(size, size, raw).expect("buffer matches dimensions")
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (name, bitmap) in [("gradient", gradient(512)), ("noise", noise(512))] {
        group.throughput(Throughput::Bytes(bitmap.as_raw().len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), &bitmap, |b, bitmap| {
            b.iter(|| encode(black_box(bitmap)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, bitmap) in [("gradient", gradient(512)), ("noise", noise(512))] {
        let encoded = encode(&bitmap);

        group.throughput(Throughput::Bytes(bitmap.as_raw().len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", name), &encoded, |b, data| {
            b.iter(|| {
                let result = decode(black_box(data));
                assert!(result.is_ok());
                result
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);

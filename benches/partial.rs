// benches/partial.rs
//! Seek-path cost: decrypting a fixed window must not get slower as the
//! window moves deeper into the ciphertext.

use ctrcrypt_rs::{decrypt_blocks, encrypt_stream, Aes128Key, Iv};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

const MB: usize = 1024 * 1024;
const WINDOW_BLOCKS: u64 = 256; // 4 KiB window

fn bench_partial(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_decrypt");

    let key = Aes128Key::new([0x2Bu8; 16]);
    let iv = Iv::new([0xF0u8; 16]);

    let plaintext = vec![0x41u8; 16 * MB];
    let mut ciphertext = Vec::with_capacity(plaintext.len());
    encrypt_stream(&key, &iv, Cursor::new(&plaintext), &mut ciphertext).unwrap();

    // Same window size at increasing depth — flat timings demonstrate
    // O(block_count) rather than O(block_index).
    let depths: [u64; 4] = [0, 1 << 10, 1 << 16, 1 << 19];

    group.throughput(Throughput::Bytes(WINDOW_BLOCKS * 16));
    for &depth in &depths {
        group.bench_with_input(BenchmarkId::new("block_index", depth), &depth, |b, &d| {
            b.iter(|| {
                let window = decrypt_blocks(
                    black_box(&key),
                    black_box(&iv),
                    Cursor::new(&ciphertext),
                    d,
                    WINDOW_BLOCKS,
                )
                .unwrap();
                black_box(window)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_partial);
criterion_main!(benches);

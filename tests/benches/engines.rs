use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cryptkit::prelude::*;

fn bench_file_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("file hashing");
    let data = vec![0x5au8; 4 * 1024 * 1024];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    group.throughput(Throughput::Bytes(data.len() as u64));
    for chunk_size in [4096, 65536] {
        let engine = HashEngine::new(HashConfig::new(DigestKind::Sha256).with_chunk_size(chunk_size)).unwrap();
        group.bench_with_input(BenchmarkId::new("SHA-256", chunk_size), &chunk_size, |b, _| {
            b.iter(|| {
                let request = HashRequest::from_path(file.path(), DigestKind::Sha256, None);
                black_box(engine.digest(&request).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_cipher_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("cipher engine");

    for size in [16usize, 1024, 16384] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for kind in [CipherKind::Aes, CipherKind::TripleDes, CipherKind::Blowfish] {
            let engine = SymmetricCipher::for_kind(kind);
            let key = cryptkit_tests::native_key(kind);
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &data, |b, data| {
                b.iter(|| black_box(engine.encrypt(data, &key, None).unwrap()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_file_hashing, bench_cipher_engine);
criterion_main!(benches);

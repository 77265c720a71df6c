//! Property-based tests for chunked hashing

use std::io::Write;

use cryptkit_api::DigestKind;
use cryptkit_hash::{HashConfig, HashEngine, HashRequest};
use cryptkit_tests::ChunkedReader;
use proptest::prelude::*;

fn digest_kind() -> impl Strategy<Value = DigestKind> {
    prop::sample::select(DigestKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn chunked_reader_matches_whole_buffer(
        kind in digest_kind(),
        data in prop::collection::vec(any::<u8>(), 0..5000),
        read_size in 1usize..600,
        chunk_size in 1usize..9000,
        key in prop::option::of(prop::collection::vec(any::<u8>(), 0..200)),
    ) {
        let engine = HashEngine::new(HashConfig::new(kind).with_chunk_size(chunk_size)).unwrap();
        let key = key.as_deref();

        let whole = engine.digest_bytes(&data, kind, key).unwrap();
        let streamed = engine
            .digest_reader(ChunkedReader::new(&data, read_size), kind, key)
            .unwrap();

        prop_assert_eq!(whole.len(), kind.output_size());
        prop_assert_eq!(streamed, whole);
    }

    #[test]
    fn file_matches_whole_buffer(
        kind in digest_kind(),
        data in prop::collection::vec(any::<u8>(), 0..20000),
        keyed in any::<bool>(),
    ) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        file.flush().unwrap();

        let engine: HashEngine = HashEngine::default();
        let key: Option<&[u8]> = if keyed { Some(&b"property key"[..]) } else { None };

        let from_file = engine.digest(&HashRequest::from_path(file.path(), kind, key)).unwrap();
        let from_data = engine.digest(&HashRequest::from_data(&data, kind, key)).unwrap();
        prop_assert_eq!(from_file, from_data);
    }
}

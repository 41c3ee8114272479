#![no_main]
use libfuzzer_sys::fuzz_target;
use pixlz::{compress, decompress, max_compressed_len};

fuzz_target!(|data: &[u8]| {
    // Window scanning is quadratic; keep fuzz inputs small enough to stay fast.
    if data.len() > 4096 {
        return;
    }

    let mut stream = vec![0u8; max_compressed_len(data.len())];
    let used = compress(data, &mut stream).unwrap();

    let mut out = vec![0u8; data.len()];
    let produced = decompress(&stream[..used], &mut out).unwrap();
    assert_eq!(produced, data.len());
    assert_eq!(out, data);
});

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the decoder with arbitrary bytes.
    // The decoder must never panic — only return errors.
    if data.is_empty() {
        return;
    }

    // First byte picks the output capacity so overflow paths get exercised.
    let cap = data[0] as usize * 16;
    let mut out = vec![0u8; cap];
    let _ = pixlz::decompress(&data[1..], &mut out);
});

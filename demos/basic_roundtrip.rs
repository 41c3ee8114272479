use pixlz::{compress, decompress, max_compressed_len};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = b"pixel row pixel row pixel row pixel row";

    let mut stream = vec![0u8; max_compressed_len(raw.len())];
    let used = compress(raw, &mut stream)?;
    stream.truncate(used);

    let mut restored = vec![0u8; raw.len()];
    let produced = decompress(&stream, &mut restored)?;
    assert_eq!(&restored[..produced], raw);

    println!(
        "compressed {} bytes -> {} bytes -> restored {} bytes",
        raw.len(),
        stream.len(),
        produced
    );
    Ok(())
}

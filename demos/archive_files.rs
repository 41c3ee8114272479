use pixlz::io::{compress_file, decompress_file};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir();
    let raw_path = dir.join("pixlz_demo_raw.bin");
    let archive_path = dir.join("pixlz_demo.pxlz");
    let restored_path = dir.join("pixlz_demo_restored.bin");

    let payload: Vec<u8> = (0u32..4096).map(|i| (i % 97) as u8).collect();
    std::fs::write(&raw_path, &payload)?;

    let stats = compress_file(&raw_path, &archive_path)?;
    println!(
        "{} -> {} bytes ({:.2}%)",
        stats.raw_size,
        stats.archive_size,
        stats.ratio()
    );

    decompress_file(&archive_path, &restored_path)?;
    assert_eq!(std::fs::read(&restored_path)?, payload);
    println!("restored OK");
    Ok(())
}

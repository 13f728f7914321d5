//! `otakit embed` command implementation

use anyhow::Result;
use otakit_core::embed;
use std::path::Path;

pub fn run(input: &Path, output: &Path) -> Result<()> {
    println!("Embedding binary into C header...");
    println!("  Input:  {}", input.display());
    println!("  Output: {}", output.display());

    let idents = embed::header_idents(output);
    let embedded = embed::convert(input, output)?;

    println!(
        "  Array:  {}[{}] ({} bytes + terminator)",
        idents.array,
        embedded + 1,
        embedded
    );
    println!("Embedding complete!");

    Ok(())
}

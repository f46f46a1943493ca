// Generates matcher types from patterns.json into $OUT_DIR/patterns.rs.

use std::path::PathBuf;

use typed_regex_codegen::{Builder, PatternSpec, RegexOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=patterns.json");

    let out = PathBuf::from(std::env::var("OUT_DIR")?).join("patterns.rs");

    Builder::from_manifest_file("patterns.json")?
        .pattern(
            PatternSpec::new("KeyValue", r"(?m)^\s*(?<key>[a-z_]+)\s*=\s*(?<value>.*?)\s*$")
                .with_options(RegexOptions::new().ignore_case(true)),
        )
        .write_to(&out)?;

    Ok(())
}

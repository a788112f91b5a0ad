//! Basic YAML-to-properties conversion.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use yaml2props::{from_str, to_string};

fn main() -> Result<(), Box<dyn Error>> {
    let yaml = "\
server:
  host: localhost
  port: 8080
database:
  pool:
    min: 1
    max: 10
debug: true
";

    let doc = from_str(yaml)?;
    let properties = to_string(&doc);
    println!("Properties output:\n{}", properties);

    assert!(properties.contains("database.pool.max=10"));
    println!("✓ Conversion successful");

    Ok(())
}

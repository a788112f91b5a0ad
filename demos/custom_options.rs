//! Customizing the output with FlattenOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use yaml2props::{from_str, to_string_with_options, FlattenOptions};

fn main() -> Result<(), Box<dyn Error>> {
    let yaml = "\
zebra: 1
apple: 2
mango:
  ripe: true
  count: 3
";

    let doc = from_str(yaml)?;

    // Default format (dot separator, document order)
    println!("Default:");
    println!("{}", yaml2props::to_string(&doc));

    // Sorted keys, independent of source layout
    println!("Sorted:");
    let sorted = FlattenOptions::sorted();
    println!("{}", to_string_with_options(&doc, &sorted));

    // Underscore separator (useful for environment variables)
    println!("Underscore separator:");
    let underscore = FlattenOptions::new().with_separator('_');
    println!("{}", to_string_with_options(&doc, &underscore));

    Ok(())
}

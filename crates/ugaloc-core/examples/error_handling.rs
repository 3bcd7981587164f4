//! Error handling example for ugaloc-core
//!
//! This example demonstrates proper error handling and edge cases

use ugaloc_core::prelude::*;

fn main() -> Result<()> {
    println!("=== ugaloc-core Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading the dataset with error handling ---");
    match DefaultLocationDb::load() {
        Ok(db) => {
            println!("✓ Dataset loaded successfully");
            println!("  Districts: {}", db.districts().len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    }
    println!();

    let db = DefaultLocationDb::load()?;

    // Example 2: The selector refuses lookups before init()
    println!("--- Example 2: Sequencing errors ---");
    let selector = Selector::with_default_dataset();
    match selector.districts() {
        Ok(_) => println!("  unexpected: selector answered before init()"),
        Err(e) => println!("  before init(): {e}"),
    }
    println!();

    // Example 3: Unmatched codes degrade to empty listings, not errors
    println!("--- Example 3: Permissive lookups ---");
    for code in ["", "999", "no-such-district"] {
        let listing = db.constituencies(code);
        println!("  constituencies({code:?}) -> {} entries", listing.len());
    }
    println!();

    // Example 4: The resolver is strict where the listings are permissive
    println!("--- Example 4: Strict resolution ---");
    match db.resolve("027", "01", "01", "99") {
        Some(path) => println!("  resolved: {}", path.electoral_area.name()),
        None => println!("  chain with one bad link does not resolve"),
    }
    println!();

    // Example 5: Geocoding input validation happens before any I/O
    println!("--- Example 5: Geocoding input validation ---");
    let client = GeocodeClient::new()?;
    match client.coordinates("") {
        Ok(_) => println!("  unexpected: empty query geocoded"),
        Err(e) => println!("  empty query: {e}"),
    }

    Ok(())
}

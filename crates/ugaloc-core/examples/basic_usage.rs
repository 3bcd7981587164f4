//! Basic usage example for ugaloc-core
//!
//! This example demonstrates how to:
//! - Load the bundled electoral dataset
//! - Walk the hierarchy level by level
//! - Resolve a full code chain
//! - Search by name and read dataset statistics

use ugaloc_core::prelude::*;

fn main() -> Result<()> {
    println!("=== ugaloc-core Basic Usage Example ===\n");

    // Load the database
    println!("Loading electoral dataset...");
    let db = DefaultLocationDb::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: List all districts
    println!("--- Example 1: List all districts ---");
    let districts = db.districts();
    println!("Total districts: {}", districts.len());
    for (i, district) in districts.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, district.name(), district.code());
    }
    println!();

    // Example 2: Descend into one district
    println!("--- Example 2: Walk the hierarchy ---");
    if let Some(district) = db.district("027") {
        println!("District: {}", district.name());
        for constituency in db.constituencies(district.code()) {
            println!("  Constituency: {}", constituency.name());
            for sub_county in db.sub_counties(district.code(), constituency.code()) {
                println!("    Sub-county: {}", sub_county.name());
                let areas =
                    db.electoral_areas(district.code(), constituency.code(), sub_county.code());
                println!("      Electoral areas: {}", areas.len());
            }
        }
    }
    println!();

    // Example 3: Resolve a full chain
    println!("--- Example 3: Resolve a four-code chain ---");
    match db.resolve("027", "01", "01", "02") {
        Some(path) => println!(
            "{} > {} > {} > {}",
            path.district.name(),
            path.constituency.name(),
            path.sub_county.name(),
            path.electoral_area.name()
        ),
        None => println!("Chain did not resolve"),
    }
    println!();

    // Example 4: Search by name
    println!("--- Example 4: Search across all levels ---");
    let hits = db.search("kisenyi", SearchLevel::All);
    println!("Hits for \"kisenyi\": {}", hits.len());
    for hit in &hits {
        println!("- {} (in {})", hit.name(), hit.district().name());
    }
    println!();

    // Example 5: Dataset statistics
    println!("--- Example 5: Dataset statistics ---");
    let stats = db.stats();
    println!("Districts: {}", stats.districts);
    println!("Constituencies: {}", stats.constituencies);
    println!("Sub-counties: {}", stats.sub_counties);
    println!("Electoral areas: {}", stats.electoral_areas);
    println!();

    // Example 6: Geocode a resolved place (network; opt in via env var)
    println!("--- Example 6: Geocoding ---");
    if std::env::var_os("UGALOC_GEOCODE").is_some() {
        let client = GeocodeClient::new()?;
        let coords = client.coordinates("Mbarara, Uganda")?;
        println!("Mbarara: lat {}, lon {}", coords.lat, coords.lon);
        println!("Display name: {}", coords.display_name);
    } else {
        println!("Set UGALOC_GEOCODE=1 to query Nominatim for \"Mbarara, Uganda\"");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! ugaloc — Command-line interface for ugaloc-core
//!
//! This binary provides a simple way to inspect the Uganda administrative
//! hierarchy dataset from your terminal. It supports printing basic
//! statistics, listing the nodes at every level, resolving a full code
//! chain, searching names by substring, and geocoding a place description.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ ugaloc stats
//!
//! - List all districts
//!   $ ugaloc districts
//!
//! - Descend the hierarchy one level at a time
//!   $ ugaloc constituencies 027
//!   $ ugaloc subcounties 027 01
//!   $ ugaloc areas 027 01 01
//!
//! - Resolve a full chain to its named path
//!   $ ugaloc resolve 027 01 01 02
//!
//! - Search names across the tree
//!   $ ugaloc search mbarara
//!   $ ugaloc search kisenyi --level electoral_area
//!
//! - Geocode a place via Nominatim
//!   $ ugaloc geocode "Mbarara, Uganda"
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the dataset bundled with the `ugaloc-core`
//! crate. Use `--input <path>` to point at a custom dataset document in the
//! same JSON shape.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ugaloc_core::{DefaultLocationDb, LocationDb, SearchLevel, StandardBackend};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    // Geocoding needs no dataset; handle it before touching the loader.
    #[cfg(feature = "fetch")]
    if let Commands::Geocode { query } = &args.command {
        let client = ugaloc_core::GeocodeClient::new()?;
        let coords = client.coordinates(query)?;
        println!("{}", coords.display_name);
        println!("lat: {}", coords.lat);
        println!("lon: {}", coords.lon);
        return Ok(());
    }

    // Determine input file (default: the dataset bundled with ugaloc-core)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = LocationDb::<StandardBackend>::default_data_dir();
        let filename = LocationDb::<StandardBackend>::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });

    let db = DefaultLocationDb::load_from_path(&input_path)?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Districts: {}", stats.districts);
            println!("  Constituencies: {}", stats.constituencies);
            println!("  Sub-counties: {}", stats.sub_counties);
            println!("  Electoral areas: {}", stats.electoral_areas);
        }

        Commands::Districts => {
            for d in db.districts() {
                println!("{} ({})", d.name(), d.code());
            }
        }

        Commands::Constituencies { district } => {
            let listing = db.constituencies(&district);
            if listing.is_empty() {
                eprintln!("No constituencies found for district {district}");
            } else {
                for c in listing {
                    println!("{} ({})", c.name(), c.code());
                }
            }
        }

        Commands::Subcounties {
            district,
            constituency,
        } => {
            let listing = db.sub_counties(&district, &constituency);
            if listing.is_empty() {
                eprintln!("No sub-counties found for {district}/{constituency}");
            } else {
                for s in listing {
                    println!("{} ({})", s.name(), s.code());
                }
            }
        }

        Commands::Areas {
            district,
            constituency,
            subcounty,
        } => {
            let listing = db.electoral_areas(&district, &constituency, &subcounty);
            if listing.is_empty() {
                eprintln!("No electoral areas found for {district}/{constituency}/{subcounty}");
            } else {
                for a in listing {
                    println!("{} ({})", a.name(), a.code());
                }
            }
        }

        Commands::Resolve {
            district,
            constituency,
            subcounty,
            area,
        } => match db.resolve(&district, &constituency, &subcounty, &area) {
            Some(path) => {
                println!("District: {} ({})", path.district.name(), path.district.code());
                println!(
                    "Constituency: {} ({})",
                    path.constituency.name(),
                    path.constituency.code()
                );
                println!(
                    "Sub-county: {} ({})",
                    path.sub_county.name(),
                    path.sub_county.code()
                );
                println!(
                    "Electoral area: {} ({})",
                    path.electoral_area.name(),
                    path.electoral_area.code()
                );
            }
            None => {
                eprintln!("Chain {district}/{constituency}/{subcounty}/{area} does not resolve");
            }
        },

        Commands::Search { term, level } => {
            let level: SearchLevel = level.parse()?;
            let hits = db.search(&term, level);
            if hits.is_empty() {
                println!("No matches for: {term}");
            } else {
                for hit in hits {
                    let mut path = vec![hit.district().name().to_string()];
                    if let Some(c) = hit.constituency() {
                        path.push(c.name().to_string());
                    }
                    if let Some(s) = hit.sub_county() {
                        path.push(s.name().to_string());
                    }
                    if let Some(a) = hit.electoral_area() {
                        path.push(a.name().to_string());
                    }
                    println!("{:?} — {}", hit.level(), path.join(" > "));
                }
            }
        }

        #[cfg(feature = "fetch")]
        Commands::Geocode { .. } => unreachable!("handled before dataset load"),
    }

    Ok(())
}

use clap::{Parser, Subcommand};

/// CLI arguments for ugaloc
#[derive(Debug, Parser)]
#[command(
    name = "ugaloc",
    version,
    about = "CLI for querying the Uganda administrative hierarchy dataset"
)]
pub struct CliArgs {
    /// Path to the dataset JSON file (default: the bundled dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List all districts
    Districts,

    /// List the constituencies of a district
    Constituencies {
        /// District code (e.g. 027)
        district: String,
    },

    /// List the sub-counties of a constituency
    Subcounties {
        /// District code
        district: String,
        /// Constituency code within the district
        constituency: String,
    },

    /// List the electoral areas of a sub-county
    Areas {
        /// District code
        district: String,
        /// Constituency code within the district
        constituency: String,
        /// Sub-county code within the constituency
        subcounty: String,
    },

    /// Resolve a full four-code chain to its named path
    Resolve {
        district: String,
        constituency: String,
        subcounty: String,
        area: String,
    },

    /// Search node names by substring (case-insensitive)
    Search {
        /// Substring to search
        term: String,

        /// Level to search: district, constituency, subcounty, electoral_area or all
        #[arg(short = 'l', long = "level", default_value = "all")]
        level: String,
    },

    /// Geocode a free-text place description via Nominatim
    #[cfg(feature = "fetch")]
    Geocode {
        /// Location text, e.g. "Mbarara, Uganda"
        query: String,
    },
}

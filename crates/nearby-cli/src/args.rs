use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for nearby
#[derive(Debug, Parser)]
#[command(
    name = "nearby",
    version,
    about = "Resolve a latitude/longitude to the nearest suburb and its content"
)]
pub struct CliArgs {
    /// Path to the store file
    #[arg(long = "db", env = "NEARBY_DB", default_value = "news_nearby.db", global = true)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// A query point. Negative values are accepted as-is (e.g. `--lat -33.88`).
#[derive(Debug, Clone, Copy, Args)]
pub struct Point {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
}

/// Datasets to ingest before doing anything else.
#[derive(Debug, Clone, Args)]
pub struct Sources {
    /// Headerless `name,lat,lon` CSV (may be gzipped)
    #[arg(long, env = "NEARBY_COORDS")]
    pub coords: Option<PathBuf>,

    /// Directory of per-suburb JSON records
    #[arg(long, env = "NEARBY_RECORDS")]
    pub records: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load coordinates and/or content records into the store
    Load(Sources),

    /// Show the nearest stored suburbs to a point
    Nearest {
        #[command(flatten)]
        point: Point,

        /// How many candidates to list
        #[arg(long, default_value_t = 1)]
        limit: usize,
    },

    /// Print the content record for the suburb nearest to a point
    Lookup {
        #[command(flatten)]
        point: Point,
    },

    /// Show a summary of the store contents
    Stats,

    /// Serve lookups over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,

        #[command(flatten)]
        sources: Sources,
    },

    /// Fetch assets and write a suburb record file
    #[cfg(feature = "builder")]
    Generate {
        /// Directory to write the record into
        #[arg(long, default_value = "/tmp")]
        path: PathBuf,

        /// Content API asset endpoint
        #[arg(long, default_value = nearby_core::loader::builder::CONTENT_API_ENDPOINT)]
        endpoint: String,

        /// Suburb, e.g. Pyrmont, Bondi
        #[arg(long)]
        suburb: String,

        /// State, e.g. NSW, VIC
        #[arg(long, default_value = "")]
        state: String,

        /// Postcode, e.g. 2009
        #[arg(long, default_value = "")]
        postcode: String,

        #[command(flatten)]
        point: Point,

        /// Comma-separated asset ids
        #[arg(long = "asset-ids", default_value = "")]
        asset_ids: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_negative_coordinates() {
        let args = CliArgs::try_parse_from([
            "nearby", "--db", "x.db", "lookup", "--lat", "-33.88", "--lon", "151.26",
        ])
        .unwrap();
        match args.command {
            Commands::Lookup { point } => {
                assert_eq!(point.lat, -33.88);
                assert_eq!(point.lon, 151.26);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn nearest_defaults_to_one_candidate() {
        let args =
            CliArgs::try_parse_from(["nearby", "nearest", "--lat", "0", "--lon", "-0.5"]).unwrap();
        assert!(matches!(args.command, Commands::Nearest { limit: 1, .. }));
    }
}

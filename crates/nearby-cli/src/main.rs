//! nearby — resolve a point to its nearest suburb's content
//!
//! Usage examples
//! --------------
//!
//! - Load the datasets into the store
//!   $ nearby load --coords lat_lon.csv --records records/
//!
//! - Show the closest suburbs to a point
//!   $ nearby nearest --lat -33.88 --lon 151.26 --limit 3
//!
//! - Print the content record for the nearest suburb
//!   $ nearby lookup --lat -33.88 --lon 151.26
//!
//! - Serve lookups over HTTP (loads first if sources are given)
//!   $ PORT=8080 nearby serve --coords lat_lon.csv --records records/
//!
//! The store lives in `news_nearby.db` unless `--db` / `NEARBY_DB` says
//! otherwise. Logging goes to stderr and follows `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands, Sources};
use anyhow::Context;
use clap::Parser;
use nearby_core::{loader, ContentLookup, GeoStore, LinearScan};
use nearby_cli::{logging, server};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> anyhow::Result<ExitCode> {
    logging::init();
    run(CliArgs::parse())
}

fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    match args.command {
        Commands::Load(sources) => {
            let store = open_store(&args.db)?;
            load_sources(&store, &sources)?;
        }

        Commands::Nearest { point, limit } => {
            let store = open_store(&args.db)?;
            let ranked = LinearScan::new(&store).ranked(point.lat, point.lon, limit.max(1))?;
            if ranked.is_empty() {
                eprintln!("No coordinates loaded");
                return Ok(ExitCode::FAILURE);
            }
            for candidate in ranked {
                println!("{:>10.0} m  {}", candidate.distance, candidate.key);
            }
        }

        Commands::Lookup { point } => {
            let store = open_store(&args.db)?;
            match ContentLookup::new(&store).resolve(point.lat, point.lon) {
                Ok(resolution) => {
                    tracing::info!(
                        suburb = %resolution.nearest.coordinate.name,
                        key = %resolution.key,
                        distance = resolution.nearest.distance,
                        "resolved"
                    );
                    println!("{}", serde_json::to_string_pretty(&resolution.record)?);
                }
                Err(e) if e.is_not_found() => {
                    eprintln!("No content: {e}");
                    return Ok(ExitCode::from(2));
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Stats => {
            let store = open_store(&args.db)?;
            let stats = store.stats()?;
            println!("Store statistics ({}):", store.path().display());
            println!("  Coordinates: {}", stats.coordinates);
            println!("  Content records: {}", stats.content_records);
        }

        Commands::Serve { port, sources } => {
            let store = open_store(&args.db)?;
            // Load completes before the listener binds.
            load_sources(&store, &sources)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(Arc::new(store), port))?;
        }

        #[cfg(feature = "builder")]
        Commands::Generate {
            path,
            endpoint,
            suburb,
            state,
            postcode,
            point,
            asset_ids,
        } => {
            use nearby_core::loader::builder::RecordBuilder;
            use nearby_core::ContentRecord;

            let record = ContentRecord {
                name: suburb,
                state,
                postcode,
                lat: point.lat,
                lon: point.lon,
                assets: Vec::new(),
            };
            let written =
                RecordBuilder::new(endpoint)?.build(&path, record, asset_ids.split(','))?;
            println!("Record created at {}", written.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Failing to open the store is unrecoverable.
fn open_store(db: &Path) -> anyhow::Result<GeoStore> {
    GeoStore::open(db).with_context(|| format!("opening store {}", db.display()))
}

fn load_sources(store: &GeoStore, sources: &Sources) -> anyhow::Result<()> {
    if let Some(coords) = &sources.coords {
        loader::load_coordinates(store, coords)
            .with_context(|| format!("loading coordinates from {}", coords.display()))?;
    }
    if let Some(records) = &sources.records {
        loader::load_content_dir(store, records)
            .with_context(|| format!("loading records from {}", records.display()))?;
    }
    Ok(())
}

// crates/nearby-core/src/loader/coordinates.rs
use super::common_io;
use crate::common::LoadReport;
use crate::error::Result;
use crate::model::Coordinate;
use crate::store::GeoStore;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// Parses `name,lat,lon` rows. No header is expected; a header row fails to
/// parse like any other bad row and is skipped.
///
/// Returns the parsed coordinates and the number of skipped rows. Only an
/// I/O failure aborts the read.
pub fn read_coordinates<R: Read>(reader: R) -> Result<(Vec<Coordinate>, usize)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut coords = Vec::new();
    let mut skipped = 0;

    for (idx, result) in rdr.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                tracing::warn!(row = idx + 1, error = %e, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        match parse_row(&row) {
            Some(coord) => coords.push(coord),
            None => {
                tracing::warn!(row = idx + 1, record = ?row, "skipping row without numeric coordinates");
                skipped += 1;
            }
        }
    }

    Ok((coords, skipped))
}

fn parse_row(row: &StringRecord) -> Option<Coordinate> {
    let name = row.get(0)?;
    let lat = row.get(1)?.parse().ok()?;
    let lon = row.get(2)?.parse().ok()?;
    Some(Coordinate::new(name, lat, lon))
}

/// Reads a coordinate CSV (optionally gzipped) into the coordinate partition.
///
/// Rows that fail to parse and records the store rejects are logged and
/// counted; they never abort the pass.
pub fn load_coordinates(store: &GeoStore, path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let (coords, skipped) = read_coordinates(common_io::open_stream(path)?)?;

    let mut report = LoadReport {
        skipped,
        ..LoadReport::default()
    };
    store_coordinates(&coords, &mut report, |coord| store.put(&coord.name, coord));

    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        failed = report.failed,
        "loaded coordinates"
    );
    Ok(report)
}

/// Hands each coordinate to `put`. A rejected coordinate is logged and
/// counted as failed; the rest are still written.
fn store_coordinates<F>(coords: &[Coordinate], report: &mut LoadReport, mut put: F)
where
    F: FnMut(&Coordinate) -> Result<()>,
{
    for coord in coords {
        match put(coord) {
            Ok(()) => report.loaded += 1,
            Err(e) => {
                tracing::warn!(name = %coord.name, error = %e, "failed to store coordinate");
                report.failed += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NearbyError;
    use crate::store::Partition;

    #[test]
    fn parses_name_lat_lon_rows() {
        let input = "Bondi NSW,-33.89,151.27\nManly NSW, -33.80 , 151.29\n";
        let (coords, skipped) = read_coordinates(input.as_bytes()).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(
            coords,
            vec![
                Coordinate::new("Bondi NSW", -33.89, 151.27),
                Coordinate::new("Manly NSW", -33.80, 151.29),
            ]
        );
    }

    #[test]
    fn longitude_comes_from_the_third_column() {
        let (coords, _) = read_coordinates("Hobart TAS,-42.88,147.33\n".as_bytes()).unwrap();
        assert_eq!(coords[0].lat, -42.88);
        assert_eq!(coords[0].lon, 147.33);
    }

    #[test]
    fn bad_rows_are_skipped_not_fatal() {
        let input = "\
suburb,lat,lon
Bondi NSW,-33.89,151.27
Nowhere NSW,north,south
Short NSW,-33.0
Manly NSW,-33.80,151.29
";
        let (coords, skipped) = read_coordinates(input.as_bytes()).unwrap();
        assert_eq!(skipped, 3);
        let names: Vec<_> = coords.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Bondi NSW", "Manly NSW"]);
    }

    #[test]
    fn quoted_names_with_commas_survive() {
        let (coords, _) =
            read_coordinates("\"Bondi, North NSW\",-33.88,151.28\n".as_bytes()).unwrap();
        assert_eq!(coords[0].name, "Bondi, North NSW");
    }

    #[test]
    fn load_writes_every_parsed_row() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("lat_lon.csv");
        std::fs::write(
            &csv_path,
            "Bondi NSW,-33.89,151.27\nbad,row,here\nManly NSW,-33.80,151.29\nBondi NSW,-33.891,151.274\n",
        )
        .unwrap();
        let store = GeoStore::open(dir.path().join("load.redb")).unwrap();

        let report = load_coordinates(&store, &csv_path).unwrap();
        assert_eq!(
            report,
            LoadReport {
                loaded: 3,
                skipped: 1,
                failed: 0
            }
        );
        // Duplicate names collapse to the last row.
        assert_eq!(store.stats().unwrap().coordinates, 2);
        assert_eq!(store.get::<Coordinate>("Bondi NSW").unwrap().lat, -33.891);
    }

    #[test]
    fn rejected_coordinate_is_counted_and_the_pass_continues() {
        let dir = tempfile::tempdir().unwrap();
        let store = GeoStore::open(dir.path().join("partial.redb")).unwrap();
        let coords = [
            Coordinate::new("Bondi NSW", -33.89, 151.27),
            Coordinate::new("Manly NSW", -33.80, 151.29),
            Coordinate::new("Coogee NSW", -33.92, 151.26),
        ];

        let mut report = LoadReport::default();
        store_coordinates(&coords, &mut report, |coord| {
            if coord.name == "Manly NSW" {
                return Err(NearbyError::write_failed(Partition::Coordinates, &coord.name, "disk full"));
            }
            store.put(&coord.name, coord)
        });

        assert_eq!(
            report,
            LoadReport {
                loaded: 2,
                skipped: 0,
                failed: 1
            }
        );
        assert!(store.get::<Coordinate>("Manly NSW").unwrap_err().is_not_found());
        assert_eq!(store.get::<Coordinate>("Coogee NSW").unwrap().lat, -33.92);
    }
}

//! SQLite sink. Tables mirror the entity graph: regions own peaks and
//! passes by row id, peaks own routes. List-valued fields (aka,
//! elevations) are stored as JSON text.

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

use crate::models::Region;

pub fn connect(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS regions (
            id            INTEGER PRIMARY KEY,
            region_id     TEXT NOT NULL,
            created       TEXT NOT NULL,
            last_modified TEXT NOT NULL,
            name          TEXT,
            slug          TEXT
        );

        CREATE TABLE IF NOT EXISTS peaks (
            id                   INTEGER PRIMARY KEY,
            peak_id              TEXT NOT NULL,
            created              TEXT NOT NULL,
            last_modified        TEXT NOT NULL,
            name                 TEXT,
            aka                  TEXT,
            elevations           TEXT,
            description          TEXT,
            location_description TEXT,
            gps_coordinates      TEXT,
            utm_coordinates      TEXT,
            slug                 TEXT,
            region               TEXT,
            region_slug          TEXT,
            region_row           INTEGER REFERENCES regions(id)
        );
        CREATE INDEX IF NOT EXISTS idx_peaks_region ON peaks(region_row);

        CREATE TABLE IF NOT EXISTS routes (
            id            INTEGER PRIMARY KEY,
            route_id      TEXT NOT NULL,
            created       TEXT NOT NULL,
            last_modified TEXT NOT NULL,
            name          TEXT,
            aka           TEXT,
            class_rating  TEXT,
            description   TEXT,
            slug          TEXT,
            peak_id       TEXT,
            peak_row      INTEGER REFERENCES peaks(id)
        );
        CREATE INDEX IF NOT EXISTS idx_routes_peak ON routes(peak_row);

        CREATE TABLE IF NOT EXISTS passes (
            id                   INTEGER PRIMARY KEY,
            pass_id              TEXT NOT NULL,
            created              TEXT NOT NULL,
            last_modified        TEXT NOT NULL,
            name                 TEXT,
            aka                  TEXT,
            class_rating         TEXT,
            elevations           TEXT,
            description          TEXT,
            location_description TEXT,
            slug                 TEXT,
            region               TEXT,
            region_slug          TEXT,
            region_row           INTEGER REFERENCES regions(id)
        );
        CREATE INDEX IF NOT EXISTS idx_passes_region ON passes(region_row);
        ",
    )?;
    Ok(())
}

/// Write the region graphs in one transaction per call.
pub fn save_regions(conn: &Connection, regions: &[Region]) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut region_stmt = tx.prepare(
            "INSERT INTO regions (region_id, created, last_modified, name, slug)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        let mut peak_stmt = tx.prepare(
            "INSERT INTO peaks
             (peak_id, created, last_modified, name, aka, elevations, description,
              location_description, gps_coordinates, utm_coordinates, slug,
              region, region_slug, region_row)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14)",
        )?;
        let mut route_stmt = tx.prepare(
            "INSERT INTO routes
             (route_id, created, last_modified, name, aka, class_rating,
              description, slug, peak_id, peak_row)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10)",
        )?;
        let mut pass_stmt = tx.prepare(
            "INSERT INTO passes
             (pass_id, created, last_modified, name, aka, class_rating, elevations,
              description, location_description, slug, region, region_slug, region_row)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13)",
        )?;

        for region in regions {
            region_stmt.execute(rusqlite::params![
                region.region_id,
                region.created.to_rfc3339(),
                region.last_modified.to_rfc3339(),
                region.name,
                region.slug,
            ])?;
            let region_row = tx.last_insert_rowid();

            for peak in &region.peaks {
                peak_stmt.execute(rusqlite::params![
                    peak.peak_id,
                    peak.created.to_rfc3339(),
                    peak.last_modified.to_rfc3339(),
                    peak.name,
                    serde_json::to_string(&peak.aka)?,
                    serde_json::to_string(&peak.elevations)?,
                    peak.description,
                    peak.location_description,
                    peak.gps_coordinates,
                    peak.utm_coordinates,
                    peak.slug,
                    peak.region,
                    peak.region_slug,
                    region_row,
                ])?;
                let peak_row = tx.last_insert_rowid();

                for route in &peak.routes {
                    route_stmt.execute(rusqlite::params![
                        route.route_id,
                        route.created.to_rfc3339(),
                        route.last_modified.to_rfc3339(),
                        route.name,
                        serde_json::to_string(&route.aka)?,
                        route.class_rating,
                        route.description,
                        route.slug,
                        route.peak_id,
                        peak_row,
                    ])?;
                }
            }

            for pass in &region.passes {
                pass_stmt.execute(rusqlite::params![
                    pass.pass_id,
                    pass.created.to_rfc3339(),
                    pass.last_modified.to_rfc3339(),
                    pass.name,
                    serde_json::to_string(&pass.aka)?,
                    pass.class_rating,
                    serde_json::to_string(&pass.elevations)?,
                    pass.description,
                    pass.location_description,
                    pass.slug,
                    pass.region,
                    pass.region_slug,
                    region_row,
                ])?;
            }
        }
    }
    tx.commit()?;
    Ok(())
}

pub struct Stats {
    pub regions: usize,
    pub peaks: usize,
    pub routes: usize,
    pub passes: usize,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let regions: usize = conn.query_row("SELECT COUNT(*) FROM regions", [], |r| r.get(0))?;
    let peaks: usize = conn.query_row("SELECT COUNT(*) FROM peaks", [], |r| r.get(0))?;
    let routes: usize = conn.query_row("SELECT COUNT(*) FROM routes", [], |r| r.get(0))?;
    let passes: usize = conn.query_row("SELECT COUNT(*) FROM passes", [], |r| r.get(0))?;
    Ok(Stats {
        regions,
        peaks,
        routes,
        passes,
    })
}

// ── Tests ──

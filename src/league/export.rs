//! CSV export of the league table.
//!
//! The file has a `Team,Points` header followed by one row per team in
//! ranked order. No index column, UTF-8, `\n` line endings.

use std::io::Write;

use super::standings::Standings;
use crate::error::{LeagueError, Result};


/// Download name of the exported table
pub const EXPORT_FILE_NAME: &str = "Table.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

const HEADER: [&str; 2] = ["Team", "Points"];

/// Write the standings as CSV to `out`.
pub fn write_standings_csv<W: Write>(standings: &Standings, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    // Header goes out even when the table is empty
    writer.write_record(HEADER)?;
    for (team, points) in standings.rows() {
        writer.write_record([team, points.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Standings rendered as CSV bytes.
pub fn standings_csv_bytes(standings: &Standings) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_standings_csv(standings, &mut buf)?;
    Ok(buf)
}

/// Parse an exported table back into `(team, points)` rows.
pub fn read_standings_csv(data: &[u8]) -> Result<Vec<(String, u32)>> {
    let mut reader = csv::Reader::from_reader(data);

    let headers = reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(LeagueError::InvalidExport {
            message: format!("unexpected CSV header: {:?}", headers),
        });
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: (String, u32) = record?;
        rows.push(row);
    }
    Ok(rows)
}

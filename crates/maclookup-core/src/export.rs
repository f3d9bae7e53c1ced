// ── CSV export ──
//
// Header comes from the first row's field names; then one line per row.
// The target file is truncated and overwritten, never merged.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::report::ReportRow;

#[derive(Debug, Error)]
pub enum ExportError {
    /// There is no first row to take a header from.
    #[error("no rows to write")]
    Empty,

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write CSV to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Write `rows` to `path` as CSV.
///
/// Rejects an empty slice before touching the filesystem.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }

    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.into(),
        source,
    })?;
    write_rows(file, rows).map_err(|source| ExportError::Write {
        path: path.into(),
        source,
    })?;

    info!(path = %path.display(), rows = rows.len(), "device information written");
    Ok(())
}

/// Serialize rows to any writer.
pub fn write_rows<W: io::Write>(writer: W, rows: &[ReportRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use maclookup_api::NetworkClient;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mac::MacAddress;
    use crate::report::flatten;

    fn row(mac: &str, description: &str) -> ReportRow {
        let client = NetworkClient {
            description: Some(description.into()),
            ..NetworkClient::default()
        };
        flatten(&MacAddress::parse(mac).unwrap(), &client, None)
    }

    #[test]
    fn header_matches_column_order() {
        let mut out = Vec::new();
        write_rows(&mut out, &[row("AA:BB:CC:DD:EE:FF", "desk1")]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, ReportRow::HEADERS.join(","));
    }

    #[test]
    fn rows_follow_input_order_and_quote_commas() {
        let mut out = Vec::new();
        write_rows(
            &mut out,
            &[
                row("00:00:00:00:00:02", "second, really"),
                row("00:00:00:00:00:01", "first"),
            ],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("00:00:00:00:00:02,\"second, really\",Wired,"));
        assert!(lines[2].starts_with("00:00:00:00:00:01,first,Wired,"));
    }

    #[test]
    fn mac_column_is_written_in_canonical_form() {
        let mut out = Vec::new();
        write_rows(&mut out, &[row("0a-1b-2c-3d-4e-5f", "desk1")]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("0A:1B:2C:3D:4E:5F,desk1,"));
    }

    #[test]
    fn empty_rows_are_rejected_without_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let err = write_report(&path, &[]).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert!(!path.exists());
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale,content\n1,2\n3,4\n5,6\n").unwrap();

        write_report(&path, &[row("AA:BB:CC:DD:EE:FF", "desk1")]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("stale"));
    }

    #[test]
    fn missing_directory_is_a_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.csv");

        let err = write_report(&path, &[row("AA:BB:CC:DD:EE:FF", "desk1")]).unwrap_err();
        assert!(matches!(err, ExportError::Create { .. }));
    }
}

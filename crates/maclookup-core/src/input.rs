// ── Input reader ──
//
// Loads MAC addresses from a single value or a newline-delimited file.
// Read failures degrade to an empty list plus one logged error; they never
// abort the run on their own.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::mac::MacAddress;

/// Where the batch of MAC addresses comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// One address given on the command line.
    Single(String),
    /// A file with one address per line.
    File(PathBuf),
}

/// A line that was not blank but failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number (always 1 for a single value).
    pub line: usize,
    pub text: String,
}

/// Valid addresses in input order, plus whatever was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacList {
    pub addresses: Vec<MacAddress>,
    pub rejected: Vec<RejectedLine>,
}

impl MacList {
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolve an input source into a list of valid MAC addresses.
///
/// Never fails: a missing or unreadable file yields an empty list after
/// logging the cause, and an invalid single value is logged as an error.
pub fn read_input(source: &InputSource) -> MacList {
    match source {
        InputSource::Single(raw) => read_single(raw),
        InputSource::File(path) => try_read_mac_file(path).unwrap_or_else(|err| {
            error!("{err}");
            MacList::default()
        }),
    }
}

fn read_single(raw: &str) -> MacList {
    let raw = raw.trim();
    match MacAddress::parse(raw) {
        Ok(mac) => MacList {
            addresses: vec![mac],
            rejected: Vec::new(),
        },
        Err(err) => {
            error!("{err}");
            MacList {
                addresses: Vec::new(),
                rejected: vec![RejectedLine {
                    line: 1,
                    text: raw.to_owned(),
                }],
            }
        }
    }
}

/// Read and validate a newline-delimited MAC file.
///
/// Blank lines are skipped silently; invalid lines are logged at `warn`
/// and collected in [`MacList::rejected`]. Order and duplicates are kept.
pub fn try_read_mac_file(path: &Path) -> Result<MacList, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            InputError::NotFound { path: path.into() }
        } else {
            InputError::Unreadable {
                path: path.into(),
                source,
            }
        }
    })?;

    let list = parse_lines(&contents);
    debug!(
        path = %path.display(),
        valid = list.addresses.len(),
        rejected = list.rejected.len(),
        "read MAC file"
    );
    Ok(list)
}

fn parse_lines(contents: &str) -> MacList {
    let mut list = MacList::default();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match MacAddress::parse(line) {
            Ok(mac) => list.addresses.push(mac),
            Err(err) => {
                warn!(line = idx + 1, "skipping {err}");
                list.rejected.push(RejectedLine {
                    line: idx + 1,
                    text: line.to_owned(),
                });
            }
        }
    }
    list
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn mac(raw: &str) -> MacAddress {
        MacAddress::parse(raw).unwrap()
    }

    #[test]
    fn single_valid_value() {
        let list = read_input(&InputSource::Single("aa:bb:cc:dd:ee:ff".into()));
        assert_eq!(list.addresses, vec![mac("AA:BB:CC:DD:EE:FF")]);
        assert!(list.rejected.is_empty());
    }

    #[test]
    fn single_invalid_value_is_rejected() {
        let list = read_input(&InputSource::Single("ZZ:ZZ:ZZ:ZZ:ZZ:ZZ".into()));
        assert!(list.is_empty());
        assert_eq!(
            list.rejected,
            vec![RejectedLine {
                line: 1,
                text: "ZZ:ZZ:ZZ:ZZ:ZZ:ZZ".into()
            }]
        );
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = try_read_mac_file(&path).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));

        let list = read_input(&InputSource::File(path));
        assert!(list.is_empty());
        assert!(list.rejected.is_empty());
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = try_read_mac_file(dir.path()).unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
    }

    #[test]
    fn file_keeps_valid_lines_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "11:22:33:44:55:66").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "not-a-mac").unwrap();
        writeln!(file, "  aa-bb-cc-dd-ee-ff  ").unwrap();
        writeln!(file, "AA:BB-CC:DD:EE:FF").unwrap();
        writeln!(file, "11:22:33:44:55:66").unwrap();

        let list = read_input(&InputSource::File(file.path().into()));

        assert_eq!(
            list.addresses,
            vec![
                mac("11:22:33:44:55:66"),
                mac("AA:BB:CC:DD:EE:FF"),
                mac("11:22:33:44:55:66"),
            ]
        );
        let lines: Vec<usize> = list.rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 5]);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let list = parse_lines("AA:BB:CC:DD:EE:FF\r\n\r\n00:11:22:33:44:55\r\n");
        assert_eq!(list.len(), 2);
        assert!(list.rejected.is_empty());
    }
}

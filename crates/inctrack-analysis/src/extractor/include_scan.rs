//! Lazy include extraction over a single file.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::line_matcher::match_include_line;

/// Outcome of opening a file for include extraction.
///
/// `Unreadable` is kept apart from a readable file with zero includes so
/// callers can count it, even though both contribute nothing to the BFS.
#[derive(Debug)]
pub enum IncludeScan {
    Lines(IncludeIter),
    Unreadable { path: PathBuf, kind: io::ErrorKind },
}

impl IncludeScan {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, IncludeScan::Unreadable { .. })
    }
}

impl IntoIterator for IncludeScan {
    type Item = String;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<IncludeIter>>;

    /// Unreadable files iterate as empty.
    fn into_iter(self) -> Self::IntoIter {
        match self {
            IncludeScan::Lines(iter) => Some(iter),
            IncludeScan::Unreadable { .. } => None,
        }
        .into_iter()
        .flatten()
    }
}

/// Open `path` and prepare a lazy scan of its quoted includes.
pub fn extract_includes(path: &Path) -> IncludeScan {
    match File::open(path) {
        Ok(file) => IncludeScan::Lines(IncludeIter::from_reader(path, BufReader::new(file))),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "header unreadable");
            IncludeScan::Unreadable {
                path: path.to_path_buf(),
                kind: err.kind(),
            }
        }
    }
}

/// Yields the bare filename of every quoted include in a file, in line
/// order. Finite and not restartable.
pub struct IncludeIter {
    path: PathBuf,
    reader: Option<Box<dyn BufRead + Send>>,
    buf: Vec<u8>,
}

impl IncludeIter {
    /// Scan any line source; `path` is only used in log messages.
    pub fn from_reader<R>(path: &Path, reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self {
            path: path.to_path_buf(),
            reader: Some(Box::new(reader)),
            buf: Vec::new(),
        }
    }

    /// Next raw line, decoded lossily. Closes the file at EOF or on error.
    fn next_line(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;
        self.buf.clear();
        match reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => Some(String::from_utf8_lossy(&self.buf).into_owned()),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), error = %err, "read aborted");
                self.reader = None;
                None
            }
        }
    }
}

impl fmt::Debug for IncludeIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncludeIter")
            .field("path", &self.path)
            .field("open", &self.reader.is_some())
            .finish()
    }
}

impl Iterator for IncludeIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(line) = self.next_line() {
            if let Some(name) = match_include_line(&line) {
                return Some(name);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_extracts_in_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "A.h",
            "#pragma once\n#include \"B.h\"\n#include <string>\n// #include \"C.h\"\n  #include \"x/y/D.inl\"\nint a;\n",
        );
        let names: Vec<String> = extract_includes(&path).into_iter().collect();
        assert_eq!(names, vec!["B.h".to_string(), "D.inl".to_string()]);
    }

    #[test]
    fn test_unreadable_is_distinct_from_empty() {
        let dir = tempfile::tempdir().unwrap();
        let empty = write(dir.path(), "Empty.h", "");

        let scan = extract_includes(&empty);
        assert!(!scan.is_unreadable());
        assert_eq!(scan.into_iter().count(), 0);

        let missing = dir.path().join("Missing.h");
        let scan = extract_includes(&missing);
        match &scan {
            IncludeScan::Unreadable { path, kind } => {
                assert_eq!(path, &missing);
                assert_eq!(*kind, io::ErrorKind::NotFound);
            }
            IncludeScan::Lines(_) => panic!("missing file should be unreadable"),
        }
        assert_eq!(scan.into_iter().count(), 0);
    }

    #[test]
    fn test_invalid_utf8_does_not_stop_scan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bin.h");
        let mut body = b"#include \"One.h\"\n\xff\xfe garbage\n".to_vec();
        body.extend_from_slice(b"#include \"Two.h\"");
        fs::write(&path, body).unwrap();

        let names: Vec<String> = extract_includes(&path).into_iter().collect();
        assert_eq!(names, vec!["One.h".to_string(), "Two.h".to_string()]);
    }

    #[test]
    fn test_in_memory_reader() {
        let text = "#include \"Mem.h\"\n// #include \"No.h\"\n";
        let iter = IncludeIter::from_reader(Path::new("mem"), io::Cursor::new(text.to_string()));
        assert_eq!(iter.collect::<Vec<_>>(), vec!["Mem.h".to_string()]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "Win.h", "#include \"A.h\"\r\n#include \"B.h\"\r\n");
        let names: Vec<String> = extract_includes(&path).into_iter().collect();
        assert_eq!(names, vec!["A.h".to_string(), "B.h".to_string()]);
    }
}

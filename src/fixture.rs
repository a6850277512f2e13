use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// Expected output of the program used when no fixture file is given.
pub const BASELINE: &str = "\
Hello World
(6/2)(1+2) = 9
6/(2(1+2)) = 1
2
6
1 0
0
1
1
0
equal!
nested conditionals work
not same
 0 1 2 3 4 5 6 7 8 9
";

#[derive(Debug, Error)]
#[error("cannot read fixture {}", path.display())]
pub struct FixtureError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Where the expected text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpectedSource {
    Literal(String),
    File(PathBuf),
}

impl ExpectedSource {
    pub fn baseline() -> Self {
        ExpectedSource::Literal(BASELINE.to_owned())
    }

    /// Reads the expected text. File contents are taken verbatim.
    pub fn resolve(&self) -> Result<String, FixtureError> {
        match self {
            ExpectedSource::Literal(text) => Ok(text.clone()),
            ExpectedSource::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| FixtureError {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = text.len(), "loaded fixture");
                Ok(text)
            }
        }
    }
}

impl From<Option<PathBuf>> for ExpectedSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ExpectedSource::File(path),
            None => ExpectedSource::baseline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_baseline_shape() {
        assert_eq!(BASELINE.lines().count(), 14);
        assert!(BASELINE.starts_with("Hello World\n"));
        assert!(BASELINE.ends_with("\n 0 1 2 3 4 5 6 7 8 9\n"));
    }

    #[test]
    fn test_resolve_literal() {
        let source = ExpectedSource::Literal("a\nb".to_owned());
        assert_eq!(source.resolve().unwrap(), "a\nb");
    }

    #[test]
    fn test_resolve_file_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"  spaced\r\n\ttab\n\n").unwrap();
        let source = ExpectedSource::File(file.path().to_owned());
        assert_eq!(source.resolve().unwrap(), "  spaced\r\n\ttab\n\n");
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.out");
        let err = ExpectedSource::File(path.clone()).resolve().unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_from_optional_path() {
        assert_eq!(ExpectedSource::from(None), ExpectedSource::baseline());
        assert_eq!(
            ExpectedSource::from(Some(PathBuf::from("x.out"))),
            ExpectedSource::File(PathBuf::from("x.out"))
        );
    }
}

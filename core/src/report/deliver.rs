use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Where a rendered report ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    StdoutOnly,
    Mirrored(PathBuf),
}

/// Write `rendered` to `stdout` and, when given, to `destination`.
///
/// A destination that cannot be created or written is logged and the
/// report falls back to stdout only. Only a failing `stdout` is an error.
pub fn deliver<W: Write>(
    rendered: &str,
    stdout: &mut W,
    destination: Option<&Path>,
) -> Result<Delivery, ReportError> {
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    let Some(path) = destination else {
        return Ok(Delivery::StdoutOnly);
    };

    match write_file(path, rendered) {
        Ok(()) => {
            tracing::info!("Report written to {}", path.display());
            Ok(Delivery::Mirrored(path.to_path_buf()))
        }
        Err(e) => {
            tracing::error!("Error creating file {}: {}", path.display(), e);
            Ok(Delivery::StdoutOnly)
        }
    }
}

fn write_file(path: &Path, rendered: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(rendered.as_bytes())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_only() {
        let mut out = Vec::new();
        let delivery = deliver("a,b\n", &mut out, None).unwrap();
        assert_eq!(delivery, Delivery::StdoutOnly);
        assert_eq!(out, b"a,b\n");
    }

    #[test]
    fn test_mirrors_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let mut out = Vec::new();
        let delivery = deliver("a,b\n", &mut out, Some(&path)).unwrap();

        assert_eq!(delivery, Delivery::Mirrored(path.clone()));
        assert_eq!(out, b"a,b\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");
    }

    #[test]
    fn test_unwritable_destination_degrades_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.csv");

        let mut out = Vec::new();
        let delivery = deliver("a,b\n", &mut out, Some(&path)).unwrap();

        assert_eq!(delivery, Delivery::StdoutOnly);
        assert_eq!(out, b"a,b\n");
        assert!(!path.exists());
    }
}

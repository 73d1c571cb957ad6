use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::errors::{BudgetError, Result};

const TMP_SUFFIX: &str = "tmp";

/// Writes a rendered report to `path`, staging through a temporary file so a failed write never
/// leaves a truncated report behind. The parent directory must already exist.
pub fn write_report(path: &Path, contents: &str) -> Result<PathBuf> {
    let tmp = tmp_path(path);
    let outcome = write_staged(&tmp, contents).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = outcome {
        let _ = fs::remove_file(&tmp);
        warn!(path = %path.display(), error = %source, "report export failed");
        return Err(BudgetError::Export {
            path: path.to_path_buf(),
            source,
        });
    }
    info!(path = %path.display(), bytes = contents.len(), "report exported");
    Ok(path.to_path_buf())
}

/// Writes `data` to `path` through a sibling temporary file.
pub(crate) fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let tmp = tmp_path(path);
    write_staged(&tmp, data)?;
    fs::rename(&tmp, path)
}

fn write_staged(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_report_and_removes_staging_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.txt");
        let written = write_report(&path, "Expense Analysis:\n").unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Expense Analysis:\n");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn missing_parent_is_reported_as_export_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("analysis.txt");
        let err = write_report(&path, "data").unwrap_err();
        assert!(matches!(err, BudgetError::Export { .. }));
        assert!(err.to_string().contains("analysis.txt"));
    }

    #[test]
    fn tmp_path_keeps_original_extension() {
        assert_eq!(
            tmp_path(Path::new("out/report.txt")),
            PathBuf::from("out/report.txt.tmp")
        );
        assert_eq!(tmp_path(Path::new("report")), PathBuf::from("report.tmp"));
    }
}

// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::csv::to_csv_string;
use crate::error::{Error, Result};
use crate::specs::cars::Record;

/// Write the whole CSV in one go. The file is only created once every row has
/// been serialized, so a failed run never leaves a half-written file.
pub fn write_records(path: &Path, records: &[Record]) -> Result<PathBuf> {
    let contents = to_csv_string(records)?;
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), rows = records.len(), "wrote output");
    Ok(path.to_path_buf())
}

/// Create the parent directory of `path` if it has one and it is missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(Error::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("auto_scrape_file_{}", name));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tmp_dir("parents");
        let path = dir.join("a").join("b").join("cars.csv");
        let written = write_records(&path, &[]).unwrap();
        assert_eq!(written, path);
        assert!(fs::read_to_string(&path).unwrap().starts_with("name,mpg,"));
    }

    #[test]
    fn parent_that_is_a_file_is_rejected() {
        let dir = tmp_dir("notadir");
        let blocker = dir.join("blocker");
        fs::write(&blocker, "x").unwrap();
        let err = write_records(&blocker.join("cars.csv"), &[]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}

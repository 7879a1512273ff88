use crate::core::masses::parse_mass_lines;
use crate::core::{ConfigProvider, Mass, MassSource};
use crate::utils::error::{FuelError, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileMassSource {
    path: PathBuf,
}

impl FileMassSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.input_path())
    }
}

impl MassSource for FileMassSource {
    fn masses(&self) -> Result<Vec<Mass>> {
        tracing::debug!("Reading masses from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|source| FuelError::FileUnreadable {
            path: self.path.clone(),
            source,
        })?;
        parse_mass_lines(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_masses_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "12").unwrap();
        writeln!(file, "1969").unwrap();

        let source = FileMassSource::new(file.path());
        assert_eq!(source.masses().unwrap(), vec![12, 1969]);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = FileMassSource::new(&path).masses().unwrap_err();
        match err {
            FuelError::FileUnreadable { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

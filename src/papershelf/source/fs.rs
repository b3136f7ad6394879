use super::CorpusSource;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PAPERS_PATH: &str = "papers/papers.json";

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for FileSource {
    fn fetch(&self) -> Result<String> {
        if !self.path.is_file() {
            return Err(ShelfError::NotFound(self.path.display().to_string()));
        }
        fs::read_to_string(&self.path).map_err(ShelfError::Io)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_reads_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("papers.json");
        fs::write(&path, r#"{"papers": []}"#).unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch().unwrap(), r#"{"papers": []}"#);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let source = FileSource::new(temp.path().join(DEFAULT_PAPERS_PATH));

        let err = source.fetch().unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        let source = FileSource::new(temp.path());
        assert!(matches!(source.fetch(), Err(ShelfError::NotFound(_))));
    }
}

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OracleError>;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Card drawn twice: {0}")]
    DuplicateCard(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Reads a text file, rejecting files with nothing but whitespace.
pub fn load_text_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(OracleError::EmptyFile(path.to_path_buf()));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_empty_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        File::create(&path).unwrap();

        match load_text_file(&path) {
            Err(OracleError::EmptyFile(p)) => assert_eq!(p, path),
            other => panic!("Expected EmptyFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_text_file(Path::new("nonexistent_file_12345.txt"));
        assert!(matches!(result, Err(OracleError::Io(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"the void calls").unwrap();

        assert_eq!(load_text_file(&path).unwrap(), "the void calls");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OracleError::UnknownCard("The Cat".to_string()).to_string(),
            "Unknown card: The Cat"
        );
    }
}

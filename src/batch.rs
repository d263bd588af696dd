//! Batches
//!
//! Lists of order descriptors processed one after another. A failing item is
//! reported in its outcome; it never stops the rest of the batch.

use std::{fs, path::Path};

use thiserror::Error;

use crate::orders::{Order, OrderError};

/// Errors raised while loading a batch file.
#[derive(Debug, Error)]
pub enum BatchError {
    /// IO error reading the batch file
    #[error("Failed to read orders from file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Outcome of one batch item.
#[derive(Debug)]
pub struct BatchOutcome<'a> {
    /// Descriptor as it appeared in the batch
    pub input: String,

    /// The priced order, `None` when the client was not found, or the error
    /// that aborted this item
    pub result: Result<Option<Order<'a>>, OrderError>,
}

impl BatchOutcome<'_> {
    /// Whether this item produced an order.
    pub fn is_priced(&self) -> bool {
        matches!(self.result, Ok(Some(_)))
    }
}

/// Load order descriptors from a file.
///
/// Files ending in `.yml` or `.yaml` are read as a YAML sequence of strings;
/// anything else as a JSON array of strings.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_descriptors(path: impl AsRef<Path>) -> Result<Vec<String>, BatchError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| matches!(extension, "yml" | "yaml"));

    let descriptors = if is_yaml {
        serde_norway::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn loads_json_arrays() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("orders.json");

        fs::write(&path, r#"["1,1=100,2=50", "5,3=20000"]"#)?;

        assert_eq!(load_descriptors(&path)?, vec!["1,1=100,2=50", "5,3=20000"]);

        Ok(())
    }

    #[test]
    fn loads_yaml_sequences() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("orders.yml");

        fs::write(&path, "- \"1,1=100\"\n- \"2,4=5\"\n")?;

        assert_eq!(load_descriptors(&path)?, vec!["1,1=100", "2,4=5"]);

        Ok(())
    }

    #[test]
    fn rejects_malformed_json() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("orders.json");

        fs::write(&path, r#"{"orders": []}"#)?;

        assert!(matches!(load_descriptors(&path), Err(BatchError::Json(_))));

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_descriptors("does/not/exist.json"),
            Err(BatchError::Io(_))
        ));
    }
}

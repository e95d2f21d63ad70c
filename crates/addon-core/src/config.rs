use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{AddOnError, AddOnResult};

/// Read and parse a YAML config file.
pub fn from_yaml_file<T: DeserializeOwned>(path: &Path) -> AddOnResult<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AddOnError::Config(format!("Cannot read {}: {e}", path.display())))?;
    from_yaml_str(&content)
}

pub fn from_yaml_str<T: DeserializeOwned>(content: &str) -> AddOnResult<T> {
    // An empty document means "no overrides".
    let content = if content.trim().is_empty() { "{}" } else { content };
    serde_yaml::from_str(content).map_err(|e| AddOnError::Config(format!("Invalid YAML: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: bundle").unwrap();
        let sample: Sample = from_yaml_file(file.path()).unwrap();
        assert_eq!(sample.name.as_deref(), Some("bundle"));
    }

    #[test]
    fn test_empty_document_is_default() {
        let sample: Sample = from_yaml_str("\n").unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = from_yaml_file::<Sample>(Path::new("/nonexistent/addon.yaml")).unwrap_err();
        assert!(matches!(err, AddOnError::Config(_)));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = from_yaml_str::<Sample>("name: [unclosed").unwrap_err();
        assert!(matches!(err, AddOnError::Config(msg) if msg.starts_with("Invalid YAML")));
    }
}

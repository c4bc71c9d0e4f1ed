//! Deck configuration.
//!
//! Every field is optional in the YAML file; missing fields keep their
//! defaults. Command-line flags are applied on top with the `with_*` methods.
//!
//! ```yaml
//! output: out/Ghost_Protocol.pptx
//! title: Ghost Protocol
//! author: Ghost Protocol
//! ```
use crate::common::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name used when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "Ghost_Protocol_Envoy_Ortus_Presentation.pptx";

/// Settings for one deck build.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Where the `.pptx` file is written
    pub output: PathBuf,
    /// Document title in the core properties
    pub title: String,
    /// Document author in the core properties
    pub author: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: "Ghost Protocol".to_string(),
            author: "Ghost Protocol".to_string(),
        }
    }
}

impl DeckConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Load a configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Builder method: set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_output_in_working_directory() {
        let config = DeckConfig::default();
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.output.parent().is_none_or(|p| p.as_os_str().is_empty()));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DeckConfig::from_yaml_str("output: decks/client.pptx\n").unwrap();
        assert_eq!(config.output, PathBuf::from("decks/client.pptx"));
        assert_eq!(config.title, "Ghost Protocol");
    }

    #[test]
    fn test_cli_override() {
        let config = DeckConfig::from_yaml_str("output: a.pptx\nauthor: Sales\n")
            .unwrap()
            .with_output("b.pptx");
        assert_eq!(config.output, PathBuf::from("b.pptx"));
        assert_eq!(config.author, "Sales");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = DeckConfig::from_yaml_str("output: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: Envoy Ortus Briefing").unwrap();

        let config = DeckConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.title, "Envoy Ortus Briefing");
        assert!(DeckConfig::from_yaml_file("/nonexistent/deck.yaml").is_err());
    }
}

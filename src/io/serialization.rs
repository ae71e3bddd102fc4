// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration document serialization and deserialization.
//!
//! This module handles encoding documents as JSON or YAML and handing the
//! result to an export sink, plus reading previously exported files back.

use crate::models::document::ConfigurationDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name stem used for every export.
pub const EXPORT_FILE_STEM: &str = "kindledash_config";

/// Textual encodings an export can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    /// Fixed file name for exports in this format.
    pub fn file_name(&self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Pick the format from a file's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(ExportFormat::Json),
            Some("yaml") | Some("yml") => Some(ExportFormat::Yaml),
            _ => None,
        }
    }

    /// Encode `doc`. Key order follows field declaration order.
    pub fn encode(&self, doc: &ConfigurationDocument) -> Result<String> {
        let text = match self {
            ExportFormat::Json => serde_json::to_string_pretty(doc)?,
            ExportFormat::Yaml => serde_yaml::to_string(doc)?,
        };
        Ok(text)
    }

    pub fn decode(&self, text: &str) -> Result<ConfigurationDocument> {
        let doc = match self {
            ExportFormat::Json => serde_json::from_str(text)?,
            ExportFormat::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(doc)
    }
}

/// Receives a named text payload and makes it available to the user.
pub trait ExportSink {
    /// Deliver `payload`. Returns where it ended up, or `None` if the user
    /// declined.
    fn deliver(&mut self, file_name: &str, payload: &str) -> Result<Option<PathBuf>>;
}

/// Asks the user where to save via a native dialog.
#[derive(Debug, Clone, Copy)]
pub struct FileDialogSink {
    pub format: ExportFormat,
}

impl ExportSink for FileDialogSink {
    fn deliver(&mut self, file_name: &str, payload: &str) -> Result<Option<PathBuf>> {
        let (filter, extensions): (&str, &[&str]) = match self.format {
            ExportFormat::Json => ("JSON", &["json"]),
            ExportFormat::Yaml => ("YAML", &["yaml", "yml"]),
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter(filter, extensions)
            .set_file_name(file_name)
            .save_file()
        else {
            return Ok(None);
        };

        std::fs::write(&path, payload)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(Some(path))
    }
}

/// Read a previously exported document, choosing the format by extension.
pub fn import_document(path: &Path) -> Result<ConfigurationDocument> {
    let format = ExportFormat::from_path(path).with_context(|| {
        format!("Unsupported file extension: {}", path.display())
    })?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    format
        .decode(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::document::SlideConfig;

    /// Writes exports into a fixed directory.
    #[derive(Debug, Clone)]
    pub(crate) struct DirectorySink {
        dir: PathBuf,
    }

    impl DirectorySink {
        pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }
    }

    impl ExportSink for DirectorySink {
        fn deliver(&mut self, file_name: &str, payload: &str) -> Result<Option<PathBuf>> {
            let path = self.dir.join(file_name);
            std::fs::write(&path, payload)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(Some(path))
        }
    }

    fn sample() -> ConfigurationDocument {
        ConfigurationDocument {
            slides: vec![
                SlideConfig {
                    url: "https://a.test".to_string(),
                    invert: false,
                    interval: 10,
                },
                SlideConfig::default(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_json_is_indented_and_ordered() {
        let json = ExportFormat::Json.encode(&sample()).unwrap();
        assert!(json.starts_with("{\n  \"global\": {\n    \"invert\": false,"));

        let global = json.find("\"global\"").unwrap();
        let overlay = json.find("\"overlay\"").unwrap();
        let slides = json.find("\"slides\"").unwrap();
        assert!(global < overlay && overlay < slides);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let doc = sample();
        for format in [ExportFormat::Json, ExportFormat::Yaml] {
            assert_eq!(format.encode(&doc).unwrap(), format.encode(&doc).unwrap());
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.json")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path(Path::new("a.yml")), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(ExportFormat::Json.file_name(), "kindledash_config.json");
        assert_eq!(ExportFormat::Yaml.file_name(), "kindledash_config.yaml");
    }

    #[test]
    fn test_directory_sink_and_import() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        let doc = sample();

        for format in [ExportFormat::Json, ExportFormat::Yaml] {
            let payload = format.encode(&doc).unwrap();
            let path = sink.deliver(&format.file_name(), &payload).unwrap().unwrap();
            assert_eq!(import_document(&path).unwrap(), doc);
        }
    }

    #[test]
    fn test_import_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        std::fs::write(&path, "{}").unwrap();
        assert!(import_document(&path).is_err());
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration snapshots and export.
//!
//! Every snapshot is built fresh from the live form state; nothing is
//! cached between calls.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::Editor;
use crate::io::serialization::{ExportFormat, ExportSink};
use crate::models::document::{ConfigurationDocument, SlideConfig};

impl Editor {
    /// Read the current form into a document. Never mutates the editor.
    pub fn gather_configuration(&self) -> ConfigurationDocument {
        ConfigurationDocument {
            global: self.global.read(),
            overlay: self.overlay.read(),
            slides: self
                .slides
                .get_entries()
                .into_iter()
                .map(SlideConfig::from)
                .collect(),
        }
    }

    /// Take a snapshot and report it to the log.
    pub fn save(&self) -> ConfigurationDocument {
        let doc = self.gather_configuration();
        match ExportFormat::Json.encode(&doc) {
            Ok(json) => log::info!("Saved configuration:\n{}", json),
            Err(_) => log::info!("Saved configuration: {:?}", doc),
        }
        doc
    }

    /// Take a snapshot, encode it, and hand it to `sink` under the fixed
    /// export file name.
    pub fn export_to(
        &self,
        sink: &mut dyn ExportSink,
        format: ExportFormat,
    ) -> Result<Option<PathBuf>> {
        let doc = self.gather_configuration();
        let payload = format
            .encode(&doc)
            .context("Failed to serialize configuration")?;
        let delivered = sink.deliver(&format.file_name(), &payload)?;

        match &delivered {
            Some(path) => log::info!(
                "Exported configuration with {} slides to {}",
                doc.slides.len(),
                path.display()
            ),
            None => log::info!("Export cancelled"),
        }
        Ok(delivered)
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The exported configuration document.
//!
//! Field names and nesting here are read by the dashboard renderer, so
//! they must not change.

use serde::{Deserialize, Serialize};

use super::settings::{GlobalSettings, OverlaySettings, DEFAULT_INTERVAL_MINUTES};
use super::slide::SlideFields;

/// A slide as it appears in the exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    pub url: String,
    pub invert: bool,
    /// Refresh interval in minutes.
    pub interval: u32,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            invert: false,
            interval: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

impl From<SlideFields> for SlideConfig {
    fn from(fields: SlideFields) -> Self {
        Self {
            url: fields.url,
            invert: fields.invert,
            interval: fields.interval_minutes,
        }
    }
}

/// Complete snapshot of the editor, ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationDocument {
    pub global: GlobalSettings,
    pub overlay: OverlaySettings,
    pub slides: Vec<SlideConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::OverlayPosition;

    #[test]
    fn test_field_names() {
        let doc = ConfigurationDocument {
            slides: vec![SlideConfig::default()],
            ..Default::default()
        };
        let value = serde_json::to_value(&doc).unwrap();

        let global = value["global"].as_object().unwrap();
        let mut keys: Vec<_> = global.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["cacheDuration", "defaultInterval", "invert", "maxRetries"]);

        let overlay = value["overlay"].as_object().unwrap();
        let mut keys: Vec<_> = overlay.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["align", "fontFamily", "fontSize", "position", "showDate", "showTime"]
        );

        assert_eq!(value["overlay"]["position"], "none");
        assert_eq!(value["overlay"]["align"], "center");
        assert_eq!(value["overlay"]["fontSize"], "medium");
        assert_eq!(
            value["slides"][0],
            serde_json::json!({"url": "", "invert": false, "interval": 5})
        );
    }

    #[test]
    fn test_partial_document_parses() {
        let doc: ConfigurationDocument = serde_json::from_str(
            r#"{"overlay": {"position": "bottomRight"}, "slides": [{"url": "https://a.test"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.global, GlobalSettings::default());
        assert_eq!(doc.overlay.position, OverlayPosition::BottomRight);
        assert_eq!(doc.slides.len(), 1);
        assert_eq!(doc.slides[0].interval, DEFAULT_INTERVAL_MINUTES);
    }
}

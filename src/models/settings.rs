// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Global and overlay settings.
//!
//! These are the resolved, fully-typed values that end up in an exported
//! document. Raw form input lives in `editor::form` and is coerced into
//! these types when a snapshot is gathered.

use serde::{Deserialize, Serialize};

/// Default refresh interval for slides, in minutes.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 5;
/// Default number of scrape retries before a slide is skipped.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default lifetime of cached slide images, in minutes.
pub const DEFAULT_CACHE_DURATION_MINUTES: u32 = 30;
/// Font family used when none is given.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Settings that apply to every slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub invert: bool,
    /// Minutes between refreshes for slides without their own interval.
    pub default_interval: u32,
    pub max_retries: u32,
    /// Minutes a cached slide image stays valid.
    pub cache_duration: u32,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            invert: false,
            default_interval: DEFAULT_INTERVAL_MINUTES,
            max_retries: DEFAULT_MAX_RETRIES,
            cache_duration: DEFAULT_CACHE_DURATION_MINUTES,
        }
    }
}

/// Where the time/date overlay is drawn on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayPosition {
    #[default]
    None,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl OverlayPosition {
    /// Every selectable position, in button order.
    pub const ALL: [OverlayPosition; 7] = [
        OverlayPosition::None,
        OverlayPosition::Top,
        OverlayPosition::Bottom,
        OverlayPosition::TopLeft,
        OverlayPosition::TopRight,
        OverlayPosition::BottomLeft,
        OverlayPosition::BottomRight,
    ];

    /// Name as written in the exported document.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayPosition::None => "none",
            OverlayPosition::Top => "top",
            OverlayPosition::Bottom => "bottom",
            OverlayPosition::TopLeft => "topLeft",
            OverlayPosition::TopRight => "topRight",
            OverlayPosition::BottomLeft => "bottomLeft",
            OverlayPosition::BottomRight => "bottomRight",
        }
    }

    /// Short label for the position button.
    pub fn label(&self) -> &'static str {
        match self {
            OverlayPosition::None => "None",
            OverlayPosition::Top => "Top",
            OverlayPosition::Bottom => "Bottom",
            OverlayPosition::TopLeft => "↖ Top Left",
            OverlayPosition::TopRight => "↗ Top Right",
            OverlayPosition::BottomLeft => "↙ Bottom Left",
            OverlayPosition::BottomRight => "↘ Bottom Right",
        }
    }
}

/// Horizontal text alignment inside the overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl OverlayAlign {
    pub const ALL: [OverlayAlign; 3] = [OverlayAlign::Left, OverlayAlign::Center, OverlayAlign::Right];

    pub fn label(&self) -> &'static str {
        match self {
            OverlayAlign::Left => "Left",
            OverlayAlign::Center => "Center",
            OverlayAlign::Right => "Right",
        }
    }
}

/// Overlay text size, relative to the slide width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }
}

/// Time/date overlay composited over every slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlaySettings {
    pub show_time: bool,
    pub show_date: bool,
    pub position: OverlayPosition,
    pub align: OverlayAlign,
    pub font_family: String,
    pub font_size: FontSize,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            show_time: false,
            show_date: false,
            position: OverlayPosition::None,
            align: OverlayAlign::Center,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: FontSize::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_names_match_serde() {
        for position in OverlayPosition::ALL {
            let json = serde_json::to_string(&position).unwrap();
            assert_eq!(json, format!("\"{}\"", position.as_str()));
        }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let global: GlobalSettings = serde_json::from_str(r#"{"invert": true}"#).unwrap();
        assert!(global.invert);
        assert_eq!(global.default_interval, DEFAULT_INTERVAL_MINUTES);
        assert_eq!(global.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(global.cache_duration, DEFAULT_CACHE_DURATION_MINUTES);

        let overlay: OverlaySettings = serde_json::from_str(r#"{"position": "topLeft"}"#).unwrap();
        assert_eq!(overlay.position, OverlayPosition::TopLeft);
        assert_eq!(overlay.align, OverlayAlign::Center);
        assert_eq!(overlay.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(overlay.font_size, FontSize::Medium);
    }
}

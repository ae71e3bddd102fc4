// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Form state for global and overlay settings.
//!
//! Numeric inputs are stored as the text the user typed. Each one is
//! described by an [`IntField`] entry in the default table below, which
//! resolves raw text to a value or falls back to the field's default.

use crate::models::settings::{
    FontSize, GlobalSettings, OverlayAlign, OverlayPosition, OverlaySettings,
    DEFAULT_CACHE_DURATION_MINUTES, DEFAULT_FONT_FAMILY, DEFAULT_INTERVAL_MINUTES,
    DEFAULT_MAX_RETRIES,
};
use crate::util::parse::leading_integer;

/// A numeric form field and its fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntField {
    pub key: &'static str,
    pub default: u32,
    pub min: u32,
}

impl IntField {
    /// Resolve `raw` to a value, substituting the default when it is
    /// unparsable or below the minimum.
    pub fn resolve(&self, raw: &str) -> u32 {
        match leading_integer(raw).and_then(|n| u32::try_from(n).ok()) {
            Some(value) if value >= self.min => value,
            _ => {
                log::debug!(
                    "Field {} has malformed input {:?}, using default {}",
                    self.key,
                    raw,
                    self.default
                );
                self.default
            }
        }
    }

    /// Text the form shows before the user edits the field.
    pub fn initial_input(&self) -> String {
        self.default.to_string()
    }
}

pub const DEFAULT_INTERVAL: IntField = IntField {
    key: "defaultInterval",
    default: DEFAULT_INTERVAL_MINUTES,
    min: 1,
};

pub const MAX_RETRIES: IntField = IntField {
    key: "maxRetries",
    default: DEFAULT_MAX_RETRIES,
    min: 0,
};

pub const CACHE_DURATION: IntField = IntField {
    key: "cacheDuration",
    default: DEFAULT_CACHE_DURATION_MINUTES,
    min: 0,
};

pub const SLIDE_INTERVAL: IntField = IntField {
    key: "interval",
    default: DEFAULT_INTERVAL_MINUTES,
    min: 1,
};

/// Raw inputs of the global settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalForm {
    pub invert: bool,
    pub default_interval: String,
    pub max_retries: String,
    pub cache_duration: String,
}

impl Default for GlobalForm {
    fn default() -> Self {
        Self {
            invert: false,
            default_interval: DEFAULT_INTERVAL.initial_input(),
            max_retries: MAX_RETRIES.initial_input(),
            cache_duration: CACHE_DURATION.initial_input(),
        }
    }
}

impl GlobalForm {
    /// Coerce the current inputs into settings.
    pub fn read(&self) -> GlobalSettings {
        GlobalSettings {
            invert: self.invert,
            default_interval: DEFAULT_INTERVAL.resolve(&self.default_interval),
            max_retries: MAX_RETRIES.resolve(&self.max_retries),
            cache_duration: CACHE_DURATION.resolve(&self.cache_duration),
        }
    }

    /// Overwrite the inputs with resolved settings.
    pub fn load(&mut self, settings: &GlobalSettings) {
        self.invert = settings.invert;
        self.default_interval = settings.default_interval.to_string();
        self.max_retries = settings.max_retries.to_string();
        self.cache_duration = settings.cache_duration.to_string();
    }
}

/// Mutually exclusive overlay position buttons.
///
/// Starts unselected; any selection replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionSelector {
    active: Option<OverlayPosition>,
}

impl PositionSelector {
    pub fn select(&mut self, position: OverlayPosition) {
        self.active = Some(position);
    }

    /// The active button, if any has been pressed.
    pub fn active(&self) -> Option<OverlayPosition> {
        self.active
    }

    pub fn is_active(&self, position: OverlayPosition) -> bool {
        self.active == Some(position)
    }

    /// Position to export; `none` before the first selection.
    pub fn resolved(&self) -> OverlayPosition {
        self.active.unwrap_or(OverlayPosition::None)
    }
}

/// Raw inputs of the overlay panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayForm {
    pub show_time: bool,
    pub show_date: bool,
    pub position: PositionSelector,
    pub align: OverlayAlign,
    pub font_family: String,
    pub font_size: FontSize,
}

impl Default for OverlayForm {
    fn default() -> Self {
        Self {
            show_time: false,
            show_date: false,
            position: PositionSelector::default(),
            align: OverlayAlign::Center,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: FontSize::Medium,
        }
    }
}

impl OverlayForm {
    pub fn read(&self) -> OverlaySettings {
        let family = self.font_family.trim();
        OverlaySettings {
            show_time: self.show_time,
            show_date: self.show_date,
            position: self.position.resolved(),
            align: self.align,
            font_family: if family.is_empty() {
                DEFAULT_FONT_FAMILY.to_string()
            } else {
                family.to_string()
            },
            font_size: self.font_size,
        }
    }

    pub fn load(&mut self, settings: &OverlaySettings) {
        self.show_time = settings.show_time;
        self.show_date = settings.show_date;
        self.position = match settings.position {
            OverlayPosition::None => PositionSelector::default(),
            position => PositionSelector { active: Some(position) },
        };
        self.align = settings.align;
        self.font_family = settings.font_family.clone();
        self.font_size = settings.font_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_field_fallbacks() {
        assert_eq!(MAX_RETRIES.resolve("abc"), 3);
        assert_eq!(MAX_RETRIES.resolve(""), 3);
        assert_eq!(MAX_RETRIES.resolve("0"), 0);
        assert_eq!(MAX_RETRIES.resolve("-2"), 3);
        assert_eq!(DEFAULT_INTERVAL.resolve("0"), 5);
        assert_eq!(DEFAULT_INTERVAL.resolve("12 min"), 12);
        assert_eq!(CACHE_DURATION.resolve("x"), DEFAULT_CACHE_DURATION_MINUTES);
    }

    #[test]
    fn test_global_form_defaults() {
        assert_eq!(GlobalForm::default().read(), GlobalSettings::default());
    }

    #[test]
    fn test_global_form_fields_default_independently() {
        let form = GlobalForm {
            invert: true,
            default_interval: "10".to_string(),
            max_retries: "abc".to_string(),
            cache_duration: "".to_string(),
        };
        let settings = form.read();
        assert!(settings.invert);
        assert_eq!(settings.default_interval, 10);
        assert_eq!(settings.max_retries, 3);
        assert_eq!(settings.cache_duration, DEFAULT_CACHE_DURATION_MINUTES);
    }

    #[test]
    fn test_position_selector_is_exclusive() {
        let mut selector = PositionSelector::default();
        assert_eq!(selector.active(), None);
        assert_eq!(selector.resolved(), OverlayPosition::None);

        selector.select(OverlayPosition::BottomRight);
        selector.select(OverlayPosition::TopLeft);
        let active: Vec<_> = OverlayPosition::ALL
            .iter()
            .filter(|p| selector.is_active(**p))
            .collect();
        assert_eq!(active, [&OverlayPosition::TopLeft]);
        assert_eq!(selector.resolved(), OverlayPosition::TopLeft);
    }

    #[test]
    fn test_load_none_position_leaves_unselected() {
        let mut form = OverlayForm::default();
        form.position.select(OverlayPosition::Top);
        form.load(&OverlaySettings::default());
        assert_eq!(form.position.active(), None);
        assert_eq!(form.read().position, OverlayPosition::None);

        form.load(&OverlaySettings {
            position: OverlayPosition::BottomLeft,
            ..Default::default()
        });
        assert_eq!(form.position.active(), Some(OverlayPosition::BottomLeft));
    }

    #[test]
    fn test_blank_font_family_falls_back() {
        let form = OverlayForm {
            font_family: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.read().font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_overlay_load_round_trip() {
        let settings = OverlaySettings {
            show_time: true,
            show_date: true,
            position: OverlayPosition::Bottom,
            align: OverlayAlign::Right,
            font_family: "Georgia".to_string(),
            font_size: FontSize::Large,
        };
        let mut form = OverlayForm::default();
        form.load(&settings);
        assert_eq!(form.read(), settings);
    }
}

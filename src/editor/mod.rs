// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor state: form inputs plus the slide list.
//!
//! The egui panels bind directly to the fields here; snapshots are taken
//! through the aggregator methods in [`aggregator`].

pub mod aggregator;
pub mod form;
pub mod slide_list;

use crate::models::document::ConfigurationDocument;
use form::{GlobalForm, OverlayForm};
use slide_list::SlideListManager;

/// Slides shown when the editor opens.
pub const INITIAL_SLIDE_COUNT: usize = 1;

/// Everything the user can edit.
pub struct Editor {
    pub global: GlobalForm,
    pub overlay: OverlayForm,
    pub slides: SlideListManager,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with default settings and one slide.
    pub fn new() -> Self {
        let mut slides = SlideListManager::new();
        slides.set_slide_count(INITIAL_SLIDE_COUNT);
        Self {
            global: GlobalForm::default(),
            overlay: OverlayForm::default(),
            slides,
        }
    }

    /// Replace the whole form with the contents of `doc`.
    pub fn apply_document(&mut self, doc: &ConfigurationDocument) {
        self.global.load(&doc.global);
        self.overlay.load(&doc.overlay);

        self.slides.set_slide_count(doc.slides.len());
        for (slot, slide) in doc.slides.iter().enumerate() {
            let Some(entry) = self.slides.entry_mut(slot) else {
                continue;
            };
            entry.url = slide.url.clone();
            entry.invert = slide.invert;
            entry.interval_input = slide.interval.to_string();
        }

        log::info!("Loaded document with {} slides", doc.slides.len());
    }
}

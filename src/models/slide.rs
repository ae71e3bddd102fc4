// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide entry data structures.
//!
//! A slide entry is one rotating display unit. Its fields are edited in
//! place by the form; the interval is kept as the raw text the user typed
//! and only coerced to a number when the entry is read.

use std::sync::Arc;

use crate::models::settings::DEFAULT_INTERVAL_MINUTES;

/// Decoded preview pixels plus the reference they were fetched from.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub reference: String,
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, row-major.
    pub pixels: Vec<u8>,
}

/// Progress of the preview for a single slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PreviewState {
    #[default]
    NotFetched,
    Fetching,
    Ready(Arc<PreviewImage>),
    Failed(String),
}

impl PreviewState {
    pub fn is_fetching(&self) -> bool {
        matches!(self, PreviewState::Fetching)
    }
}

/// One slide in the rotation, as currently shown in the form.
#[derive(Debug, Clone)]
pub struct SlideEntry {
    index: usize,
    pub url: String,
    pub invert: bool,
    /// Refresh interval in minutes, as typed.
    pub interval_input: String,
    pub preview: PreviewState,
    /// Number of the most recent preview request, zero if none was made.
    pub(crate) preview_request: u64,
}

impl SlideEntry {
    /// Create an entry with default field values at the given position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            url: String::new(),
            invert: false,
            interval_input: DEFAULT_INTERVAL_MINUTES.to_string(),
            preview: PreviewState::NotFetched,
            preview_request: 0,
        }
    }

    /// Zero-based position, fixed at creation.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of the most recent preview request, zero if none was made.
    pub fn preview_request(&self) -> u64 {
        self.preview_request
    }

    /// Heading shown above the entry's fields.
    pub fn label(&self) -> String {
        format!("Slide {}", self.index + 1)
    }
}

/// Resolved field values of a slide at the moment it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFields {
    pub index: usize,
    pub url: String,
    pub invert: bool,
    pub interval_minutes: u32,
}

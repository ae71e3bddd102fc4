// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide list management.
//!
//! The slide list is rebuilt wholesale whenever the requested count
//! changes: entries carry no identity worth keeping, so the arena is
//! cleared and repopulated with fresh defaults. A generation counter is
//! bumped on every rebuild and stamped into preview requests, which lets
//! late completions for discarded entries be dropped.

use std::sync::Arc;

use crate::editor::form::SLIDE_INTERVAL;
use crate::io::preview::{PreviewCompletion, PreviewService, PreviewToken};
use crate::models::slide::{PreviewState, SlideEntry, SlideFields};

/// Slide counts offered by the form.
pub const SLIDE_COUNT_CHOICES: std::ops::RangeInclusive<usize> = 1..=6;

/// Owns the dynamic collection of slide entries.
pub struct SlideListManager {
    entries: Vec<SlideEntry>,
    generation: u64,
    previews: PreviewService,
}

impl Default for SlideListManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideListManager {
    /// Create an empty list backed by the placeholder preview fetcher.
    pub fn new() -> Self {
        Self::with_previews(PreviewService::default())
    }

    /// Create an empty list that fetches previews with `fetcher`.
    #[cfg(test)]
    pub(crate) fn with_fetcher(fetcher: Arc<dyn crate::io::preview::PreviewFetcher>) -> Self {
        Self::with_previews(PreviewService::new(fetcher))
    }

    fn with_previews(previews: PreviewService) -> Self {
        Self {
            entries: Vec::new(),
            generation: 0,
            previews,
        }
    }

    /// Discard every entry and create `count` fresh ones.
    ///
    /// Pending previews for the discarded entries become no-ops.
    pub fn set_slide_count(&mut self, count: usize) {
        self.generation += 1;
        self.entries = (0..count).map(SlideEntry::new).collect();
        log::info!("Slide count set to {} (generation {})", count, self.generation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current list generation. Changes on every `set_slide_count`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live entries, for binding to the form.
    pub fn entries(&self) -> &[SlideEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [SlideEntry] {
        &mut self.entries
    }

    pub fn entry_mut(&mut self, slot: usize) -> Option<&mut SlideEntry> {
        self.entries.get_mut(slot)
    }

    /// Read every entry's current field values, coercing the interval.
    pub fn get_entries(&self) -> Vec<SlideFields> {
        self.entries
            .iter()
            .map(|entry| SlideFields {
                index: entry.index(),
                url: entry.url.clone(),
                invert: entry.invert,
                interval_minutes: SLIDE_INTERVAL.resolve(&entry.interval_input),
            })
            .collect()
    }

    /// Start fetching a preview for the entry at `slot`.
    ///
    /// A request made while another is in flight supersedes it; only the
    /// newest request may write its result. Returns false if `slot` is out
    /// of range.
    pub fn trigger_preview(&mut self, slot: usize) -> bool {
        let generation = self.generation;
        let Some(entry) = self.entries.get_mut(slot) else {
            log::warn!("Preview requested for missing slot {}", slot);
            return false;
        };

        entry.preview_request += 1;
        entry.preview = PreviewState::Fetching;
        self.previews.request(
            PreviewToken {
                generation,
                slot,
                request: entry.preview_request,
            },
            entry.url.clone(),
        );
        true
    }

    /// Apply a finished preview. Returns false if the completion is stale.
    pub fn apply_preview(&mut self, completion: PreviewCompletion) -> bool {
        let token = completion.token;
        if token.generation != self.generation {
            log::debug!(
                "Dropping preview for slot {} from discarded generation {}",
                token.slot,
                token.generation
            );
            return false;
        }

        let Some(entry) = self.entries.get_mut(token.slot) else {
            return false;
        };
        if entry.preview_request != token.request {
            log::debug!(
                "Dropping superseded preview request {} for slot {}",
                token.request,
                token.slot
            );
            return false;
        }

        entry.preview = match completion.result {
            Ok(image) => PreviewState::Ready(Arc::new(image)),
            Err(e) => {
                log::warn!("Preview for {} failed: {}", entry.label(), e);
                PreviewState::Failed(e.to_string())
            }
        };
        true
    }

    /// Apply every completion that has arrived. Returns how many were applied.
    pub fn poll_previews(&mut self) -> usize {
        let mut applied = 0;
        for completion in self.previews.drain() {
            if self.apply_preview(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// True while any entry is waiting on a preview.
    pub fn has_pending_previews(&self) -> bool {
        self.entries.iter().any(|entry| entry.preview.is_fetching())
    }

    #[cfg(test)]
    pub(crate) fn previews(&self) -> &PreviewService {
        &self.previews
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide list panel.
//!
//! Shows the slide count selector and one card per slide with its URL,
//! invert flag, interval, and preview. Structural changes (count,
//! preview requests) are returned as actions for the app to apply.

use std::collections::HashMap;

use crate::editor::slide_list::{SlideListManager, SLIDE_COUNT_CHOICES};
use crate::models::slide::{PreviewState, SlideEntry};

/// Identifies the texture uploaded for one preview result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewKey {
    pub generation: u64,
    pub slot: usize,
    pub request: u64,
}

impl PreviewKey {
    pub fn for_entry(generation: u64, entry: &SlideEntry) -> Self {
        Self {
            generation,
            slot: entry.index(),
            request: entry.preview_request(),
        }
    }
}

/// Result of slide panel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidesAction {
    None,
    SetCount(usize),
    Preview(usize),
}

const PREVIEW_MAX_WIDTH: f32 = 320.0;

/// Display the slide count selector and every slide card.
pub fn show(
    ui: &mut egui::Ui,
    slides: &mut SlideListManager,
    textures: &HashMap<PreviewKey, egui::TextureHandle>,
) -> SlidesAction {
    let mut action = SlidesAction::None;

    ui.horizontal(|ui| {
        ui.label("Number of slides:");
        let current = slides.len();
        for count in SLIDE_COUNT_CHOICES {
            if ui.radio(current == count, count.to_string()).clicked() && current != count {
                action = SlidesAction::SetCount(count);
            }
        }
    });

    ui.separator();

    if slides.is_empty() {
        ui.label(egui::RichText::new("No slides configured.").weak());
        return action;
    }

    let generation = slides.generation();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in slides.entries_mut() {
            ui.push_id(("slide", generation, entry.index()), |ui| {
                ui.group(|ui| {
                    if slide_card(ui, entry, generation, textures) {
                        action = SlidesAction::Preview(entry.index());
                    }
                });
            });
            ui.add_space(8.0);
        }
    });

    action
}

/// Draw one slide's inputs. Returns true if its test button was clicked.
fn slide_card(
    ui: &mut egui::Ui,
    entry: &mut SlideEntry,
    generation: u64,
    textures: &HashMap<PreviewKey, egui::TextureHandle>,
) -> bool {
    ui.label(egui::RichText::new(entry.label()).strong().size(16.0));

    ui.horizontal(|ui| {
        ui.label("URL")
            .on_hover_text("The webpage or dashboard you want to display on this slide.");
        ui.add(
            egui::TextEdit::singleline(&mut entry.url)
                .hint_text("https://example.com")
                .desired_width(f32::INFINITY),
        );
    });

    ui.checkbox(&mut entry.invert, "Invert")
        .on_hover_text("Invert colors for better e-ink visibility");

    ui.horizontal(|ui| {
        ui.label("Scrape interval (minutes)")
            .on_hover_text("How often this slide refreshes content from the URL.");
        ui.add(egui::TextEdit::singleline(&mut entry.interval_input).desired_width(60.0));
    });

    let clicked = ui.button(format!("Test {}", entry.label())).clicked();

    match &entry.preview {
        PreviewState::NotFetched => {
            ui.label(egui::RichText::new("No preview yet.").weak());
        }
        PreviewState::Fetching => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Fetching preview...");
            });
        }
        PreviewState::Ready(image) => {
            let key = PreviewKey::for_entry(generation, entry);
            if let Some(texture) = textures.get(&key) {
                let scale = (PREVIEW_MAX_WIDTH / image.width as f32).min(1.0);
                let size = egui::vec2(image.width as f32 * scale, image.height as f32 * scale);
                ui.add(egui::Image::new((texture.id(), size)))
                    .on_hover_text(&image.reference);
            } else {
                ui.label(&image.reference);
            }
        }
        PreviewState::Failed(reason) => {
            ui.colored_label(egui::Color32::RED, format!("Preview failed: {}", reason));
        }
    }

    clicked
}

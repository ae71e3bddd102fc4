// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app owns the editor, forwards panel actions to it, and pumps
//! preview completions once per frame.

use std::collections::HashMap;
use std::time::Duration;

use crate::editor::Editor;
use crate::io::serialization::{import_document, ExportFormat, FileDialogSink};
use crate::models::document::ConfigurationDocument;
use crate::models::slide::PreviewState;
use crate::ui::{global_settings, header, overlay, slides};

/// How often to repaint while a preview is pending.
const PREVIEW_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Message shown in the status bar.
struct StatusMessage {
    text: String,
    is_error: bool,
}

/// Main application state.
pub struct ConfiguratorApp {
    /// Form state and slide list
    editor: Editor,

    /// Snapshot from the most recent save
    saved: Option<ConfigurationDocument>,

    /// Whether the global settings panel is shown
    settings_visible: bool,

    /// Uploaded preview textures
    preview_textures: HashMap<slides::PreviewKey, egui::TextureHandle>,

    status: Option<StatusMessage>,
}

impl Default for ConfiguratorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfiguratorApp {
    /// Create a new configurator instance.
    pub fn new() -> Self {
        Self {
            editor: Editor::new(),
            saved: None,
            settings_visible: true,
            preview_textures: HashMap::new(),
            status: None,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    fn set_slide_count(&mut self, count: usize) {
        self.editor.slides.set_slide_count(count);
        self.preview_textures.clear();
    }

    fn save(&mut self) {
        let doc = self.editor.save();
        self.set_status(
            format!("Configuration saved to memory ({} slides)", doc.slides.len()),
            false,
        );
        self.saved = Some(doc);
    }

    fn export(&mut self, format: ExportFormat) {
        let mut sink = FileDialogSink { format };
        match self.editor.export_to(&mut sink, format) {
            Ok(Some(path)) => self.set_status(format!("Exported to {}", path.display()), false),
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to export configuration: {:#}", e);
                self.set_status(format!("Export failed: {}", e), true);
            }
        }
    }

    fn import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Configuration", &["json", "yaml", "yml"])
            .pick_file()
        else {
            return;
        };

        match import_document(&path) {
            Ok(doc) => {
                self.editor.apply_document(&doc);
                self.preview_textures.clear();
                self.set_status(format!("Imported {}", path.display()), false);
            }
            Err(e) => {
                log::error!("Failed to import configuration: {:#}", e);
                self.set_status(format!("Import failed: {}", e), true);
            }
        }
    }

    /// Apply finished previews and upload textures for new results.
    fn pump_previews(&mut self, ctx: &egui::Context) {
        if self.editor.slides.poll_previews() == 0 {
            return;
        }

        let generation = self.editor.slides.generation();
        for entry in self.editor.slides.entries() {
            let PreviewState::Ready(image) = &entry.preview else {
                continue;
            };
            let key = slides::PreviewKey::for_entry(generation, entry);
            if self.preview_textures.contains_key(&key) {
                continue;
            }

            let size = [image.width as usize, image.height as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
            let texture = ctx.load_texture(
                format!("preview_{}_{}", generation, entry.index()),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            self.preview_textures.insert(key, texture);
        }

        // Drop textures for superseded requests
        let entries = self.editor.slides.entries();
        self.preview_textures.retain(|key, _| {
            key.generation == generation
                && entries
                    .get(key.slot)
                    .is_some_and(|entry| entry.preview_request() == key.request)
        });
    }
}

impl eframe::App for ConfiguratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_previews(ctx);

        if self.editor.slides.has_pending_previews() {
            ctx.request_repaint_after(PREVIEW_POLL_INTERVAL);
        }

        // Top menu bar
        let header_action = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| header::show(ui, self.settings_visible))
            .inner;

        match header_action {
            header::HeaderAction::Import => self.import(),
            header::HeaderAction::Save => self.save(),
            header::HeaderAction::Export(format) => self.export(format),
            header::HeaderAction::ToggleSettings => {
                self.settings_visible = !self.settings_visible;
            }
            header::HeaderAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            header::HeaderAction::None => {}
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| match &self.status {
                Some(status) if status.is_error => {
                    ui.colored_label(egui::Color32::RED, &status.text);
                }
                Some(status) => {
                    ui.label(&status.text);
                }
                None => {
                    ui.label(egui::RichText::new("Ready").weak());
                }
            });
            if let Some(saved) = &self.saved {
                ui.label(
                    egui::RichText::new(format!("Last save: {} slides", saved.slides.len())).weak(),
                );
            }
        });

        // Settings panel (left side)
        if self.settings_visible {
            egui::SidePanel::left("settings")
                .default_width(280.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        global_settings::show(ui, &mut self.editor.global);
                        ui.separator();
                        overlay::show(ui, &mut self.editor.overlay);
                    });
                });
        }

        // Slide list (center)
        let slides_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                slides::show(ui, &mut self.editor.slides, &self.preview_textures)
            })
            .inner;

        match slides_action {
            slides::SlidesAction::SetCount(count) => self.set_slide_count(count),
            slides::SlidesAction::Preview(slot) => {
                self.editor.slides.trigger_preview(slot);
                ctx.request_repaint();
            }
            slides::SlidesAction::None => {}
        }
    }
}

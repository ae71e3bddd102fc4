// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Menu bar and header controls.
//!
//! The header only reports what the user asked for; the app decides what
//! to do with it.

use crate::io::serialization::ExportFormat;

/// Result of header interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    Import,
    Save,
    Export(ExportFormat),
    ToggleSettings,
    Quit,
}

/// Display the menu bar.
pub fn show(ui: &mut egui::Ui, settings_visible: bool) -> HeaderAction {
    let mut action = HeaderAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Import Configuration...").clicked() {
                action = HeaderAction::Import;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Save").clicked() {
                action = HeaderAction::Save;
                ui.close_menu();
            }
            ui.menu_button("Export Configuration", |ui| {
                if ui.button("Export as JSON...").clicked() {
                    action = HeaderAction::Export(ExportFormat::Json);
                    ui.close_menu();
                }
                if ui.button("Export as YAML...").clicked() {
                    action = HeaderAction::Export(ExportFormat::Yaml);
                    ui.close_menu();
                }
            });
            ui.separator();
            if ui.button("Quit").clicked() {
                action = HeaderAction::Quit;
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(settings_visible, "⚙ Global Settings")
            .clicked()
        {
            action = HeaderAction::ToggleSettings;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Export").clicked() {
                action = HeaderAction::Export(ExportFormat::Json);
            }
            if ui.button("Save").clicked() {
                action = HeaderAction::Save;
            }
        });
    });

    action
}

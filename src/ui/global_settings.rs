// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Global settings panel.

use crate::editor::form::GlobalForm;

/// Display the global settings inputs.
pub fn show(ui: &mut egui::Ui, form: &mut GlobalForm) {
    ui.heading("Global Settings");
    ui.add_space(4.0);

    ui.checkbox(&mut form.invert, "Invert all slides")
        .on_hover_text("Invert colors for better e-ink visibility");

    egui::Grid::new("global_settings_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            number_row(ui, "Default interval (min)", &mut form.default_interval);
            number_row(ui, "Max retries", &mut form.max_retries);
            number_row(ui, "Cache duration (min)", &mut form.cache_duration);
        });
}

fn number_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(60.0));
    ui.end_row();
}

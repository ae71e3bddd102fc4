// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay settings panel.
//!
//! Time/date toggles, the position button group, and font options.

use crate::editor::form::OverlayForm;
use crate::models::settings::{FontSize, OverlayAlign, OverlayPosition};

/// Display the overlay inputs.
pub fn show(ui: &mut egui::Ui, form: &mut OverlayForm) {
    ui.heading("Overlay");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        toggle_button(ui, &mut form.show_time, "🕒 Time");
        toggle_button(ui, &mut form.show_date, "📅 Date");
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Position:");
        if form.position.active().is_none() {
            ui.label(egui::RichText::new("not set").weak());
        }
    });
    ui.horizontal_wrapped(|ui| {
        for position in OverlayPosition::ALL {
            if ui
                .selectable_label(form.position.is_active(position), position.label())
                .clicked()
            {
                form.position.select(position);
                log::info!("Selected overlay position: {}", position.as_str());
            }
        }
    });

    ui.add_space(6.0);
    egui::Grid::new("overlay_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Align");
            egui::ComboBox::from_id_source("overlay_align")
                .selected_text(form.align.label())
                .show_ui(ui, |ui| {
                    for align in OverlayAlign::ALL {
                        ui.selectable_value(&mut form.align, align, align.label());
                    }
                });
            ui.end_row();

            ui.label("Font");
            ui.add(
                egui::TextEdit::singleline(&mut form.font_family)
                    .hint_text("sans-serif")
                    .desired_width(120.0),
            );
            ui.end_row();

            ui.label("Font size");
            egui::ComboBox::from_id_source("overlay_font_size")
                .selected_text(form.font_size.label())
                .show_ui(ui, |ui| {
                    for size in FontSize::ALL {
                        ui.selectable_value(&mut form.font_size, size, size.label());
                    }
                });
            ui.end_row();
        });
}

fn toggle_button(ui: &mut egui::Ui, value: &mut bool, text: &str) {
    if ui.selectable_label(*value, text).clicked() {
        *value = !*value;
    }
}

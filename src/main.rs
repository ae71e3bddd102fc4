// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! KindleDash Configurator
//!
//! A desktop editor for composing the slide rotation and overlay settings
//! of an e-ink dashboard, and exporting them as a configuration document.

mod app;
mod editor;
mod io;
mod models;
mod ui;
mod util;

use app::ConfiguratorApp;
use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("KindleDash Configurator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "KindleDash Configurator",
        options,
        Box::new(|_cc| Ok(Box::new(ConfiguratorApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

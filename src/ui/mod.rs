// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the configurator.

pub mod global_settings;
pub mod header;
pub mod overlay;
pub mod slides;

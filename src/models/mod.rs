// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for slides, settings, and the exported document.

pub mod document;
pub mod settings;
pub mod slide;

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O boundaries: document files and slide previews.

pub mod preview;
pub mod serialization;

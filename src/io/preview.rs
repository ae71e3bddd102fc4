// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide preview fetching.
//!
//! Previews are resolved on background threads after a fixed latency and
//! handed back through a channel. Each request carries a token so the slide
//! list can tell whether the slot it was issued for still exists.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::models::slide::PreviewImage;

/// Delay before a placeholder preview resolves.
pub const PREVIEW_LATENCY: Duration = Duration::from_millis(1000);

const PLACEHOLDER_WIDTH: u32 = 400;
const PLACEHOLDER_HEIGHT: u32 = 300;

/// Why a preview could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("source unreachable: {0}")]
    Unreachable(String),
}

/// Something that can turn a slide into a displayable image.
pub trait PreviewFetcher: Send + Sync {
    /// How long to wait before fetching.
    fn latency(&self) -> Duration;

    /// Produce the preview for the slide at `index` showing `url`.
    fn fetch(&self, index: usize, url: &str) -> Result<PreviewImage, PreviewError>;
}

/// Renders a flat placeholder image labelled with the slide number.
///
/// A slide without a source address has nothing to preview and fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFetcher;

impl PreviewFetcher for PlaceholderFetcher {
    fn latency(&self) -> Duration {
        PREVIEW_LATENCY
    }

    fn fetch(&self, index: usize, url: &str) -> Result<PreviewImage, PreviewError> {
        if url.trim().is_empty() {
            return Err(PreviewError::Unreachable("no URL set".to_string()));
        }
        Ok(placeholder_image(index))
    }
}

/// Reference for the placeholder preview of the slide at `index`.
pub fn placeholder_reference(index: usize) -> String {
    format!(
        "https://placehold.co/{}x{}?text=Slide+{}+Preview",
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT,
        index + 1
    )
}

/// Draw a gray placeholder with a border, shaded by slide index so
/// neighbouring previews are distinguishable.
fn placeholder_image(index: usize) -> PreviewImage {
    let shade = 200u8.saturating_sub((index as u8 % 6) * 16);
    let img = image::RgbaImage::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |x, y| {
        let border = x < 4 || y < 4 || x >= PLACEHOLDER_WIDTH - 4 || y >= PLACEHOLDER_HEIGHT - 4;
        if border {
            image::Rgba([90, 90, 90, 255])
        } else {
            image::Rgba([shade, shade, shade, 255])
        }
    });

    PreviewImage {
        reference: placeholder_reference(index),
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    }
}

/// Identifies one preview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewToken {
    /// Slide list generation the request was made in.
    pub generation: u64,
    pub slot: usize,
    /// Per-entry request number.
    pub request: u64,
}

/// Outcome of a preview request, delivered on the completion channel.
#[derive(Debug)]
pub struct PreviewCompletion {
    pub token: PreviewToken,
    pub result: Result<PreviewImage, PreviewError>,
}

/// Dispatches preview requests to background threads.
pub struct PreviewService {
    fetcher: Arc<dyn PreviewFetcher>,
    sender: Sender<PreviewCompletion>,
    receiver: Receiver<PreviewCompletion>,
}

impl Default for PreviewService {
    fn default() -> Self {
        Self::new(Arc::new(PlaceholderFetcher))
    }
}

impl PreviewService {
    pub fn new(fetcher: Arc<dyn PreviewFetcher>) -> Self {
        let (sender, receiver) = channel();
        Self {
            fetcher,
            sender,
            receiver,
        }
    }

    /// Schedule a preview of `url` for `token.slot`. Returns immediately.
    pub fn request(&self, token: PreviewToken, url: String) {
        let fetcher = Arc::clone(&self.fetcher);
        let sender = self.sender.clone();

        log::debug!(
            "Scheduling preview for slot {} (generation {}, request {})",
            token.slot,
            token.generation,
            token.request
        );

        // Spawn background thread for fetching
        std::thread::spawn(move || {
            std::thread::sleep(fetcher.latency());
            let result = fetcher.fetch(token.slot, &url);
            // The receiver only disappears when the editor is gone.
            let _ = sender.send(PreviewCompletion { token, result });
        });
    }

    /// Collect every completion that has arrived so far.
    pub fn drain(&self) -> Vec<PreviewCompletion> {
        self.receiver.try_iter().collect()
    }

    /// Block until one completion arrives or `timeout` elapses.
    #[cfg(test)]
    pub(crate) fn wait(&self, timeout: Duration) -> Option<PreviewCompletion> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Resolves immediately, failing for the listed slots.
    pub(crate) struct InstantFetcher {
        pub failing: Vec<usize>,
    }

    impl PreviewFetcher for InstantFetcher {
        fn latency(&self) -> Duration {
            Duration::ZERO
        }

        fn fetch(&self, index: usize, _url: &str) -> Result<PreviewImage, PreviewError> {
            if self.failing.contains(&index) {
                Err(PreviewError::Unreachable(format!("slide {}", index)))
            } else {
                Ok(placeholder_image(index))
            }
        }
    }

    #[test]
    fn test_placeholder_reference() {
        assert_eq!(
            placeholder_reference(0),
            "https://placehold.co/400x300?text=Slide+1+Preview"
        );
    }

    #[test]
    fn test_placeholder_image_dimensions() {
        let img = placeholder_image(2);
        assert_eq!(img.width, 400);
        assert_eq!(img.height, 300);
        assert_eq!(img.pixels.len(), 400 * 300 * 4);
        assert_eq!(img.reference, placeholder_reference(2));
    }

    #[test]
    fn test_placeholder_requires_url() {
        let fetcher = PlaceholderFetcher;
        assert_eq!(
            fetcher.fetch(0, "  "),
            Err(PreviewError::Unreachable("no URL set".to_string()))
        );
        let image = fetcher.fetch(1, "https://a.test").unwrap();
        assert_eq!(image.reference, placeholder_reference(1));
    }

    #[test]
    fn test_request_delivers_completion() {
        let service = PreviewService::new(Arc::new(InstantFetcher { failing: vec![1] }));
        let ok = PreviewToken { generation: 1, slot: 0, request: 1 };
        let failing = PreviewToken { generation: 1, slot: 1, request: 1 };
        service.request(ok, String::new());
        service.request(failing, String::new());

        let mut completions = Vec::new();
        while completions.len() < 2 {
            let completion = service
                .wait(Duration::from_secs(5))
                .expect("preview worker did not report back");
            completions.push(completion);
        }
        completions.sort_by_key(|c| c.token.slot);

        assert_eq!(completions[0].token, ok);
        assert!(completions[0].result.is_ok());
        assert_eq!(completions[1].token, failing);
        assert!(matches!(
            completions[1].result,
            Err(PreviewError::Unreachable(_))
        ));
    }
}

//! Background image loader for certificate artwork.
//!
//! Each requested URL is fetched and decoded on its own thread and
//! polled from the frame loop. The overlay needs three outcomes, not
//! two: still pending (spinner), decoded (show it), failed (leave the
//! frame blank). Failures are remembered so a broken URL is not
//! re-fetched every frame.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;
use std::time::Duration;

/// Largest edge kept after decode; gallery artwork does not need more.
const MAX_WIDTH: u32 = 1024;

/// Decoded RGBA pixels.
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Loading outcome for one URL.
pub enum ImageStatus<'a> {
    /// Never requested (or request not yet issued).
    Unknown,
    /// Fetch/decode still in flight — show a spinner.
    Pending,
    /// Ready to upload as a texture.
    Ready(&'a ImageData),
    /// Fetch or decode failed — render nothing.
    Failed,
}

/// Background fetch/decode pool, polled once per frame.
#[derive(Default)]
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Option<ImageData>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start fetching `url` unless it is already known.
    pub fn request(&mut self, url: &str) {
        if self.loaded.contains_key(url)
            || self.pending.contains_key(url)
            || self.failed.contains(url)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let url_owned = url.to_string();
        std::thread::spawn(move || {
            let _ = tx.send(fetch_and_decode(&url_owned));
        });
        self.pending.insert(url.to_string(), rx);
    }

    /// Poll in-flight downloads. Call every frame; returns true if any
    /// download finished (so the caller can repaint).
    pub fn poll(&mut self) -> bool {
        let mut completed = Vec::new();
        for (url, rx) in &self.pending {
            if let Ok(result) = rx.try_recv() {
                match result {
                    Some(data) => {
                        self.loaded.insert(url.clone(), data);
                    }
                    None => {
                        self.failed.insert(url.clone());
                    }
                }
                completed.push(url.clone());
            }
        }
        let any = !completed.is_empty();
        for url in completed {
            self.pending.remove(&url);
        }
        any
    }

    pub fn status(&self, url: &str) -> ImageStatus<'_> {
        if let Some(data) = self.loaded.get(url) {
            ImageStatus::Ready(data)
        } else if self.pending.contains_key(url) {
            ImageStatus::Pending
        } else if self.failed.contains(url) {
            ImageStatus::Failed
        } else {
            ImageStatus::Unknown
        }
    }
}

fn fetch_and_decode(url: &str) -> Option<ImageData> {
    let bytes = if url.starts_with("http://") || url.starts_with("https://") {
        let resp = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .ok()?
            .get(url)
            .send()
            .ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.bytes().ok()?.to_vec()
    } else {
        std::fs::read(url).ok()?
    };

    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_WIDTH {
        let ratio = MAX_WIDTH as f32 / w as f32;
        let new_h = (h as f32 * ratio) as u32;
        let resized = image::imageops::resize(
            &rgba,
            MAX_WIDTH,
            new_h.max(1),
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(ImageData { width: w, height: h, rgba: pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_requests_are_deduplicated() {
        let mut loader = ImageLoader::new();
        loader.request("https://example.com/img.png");
        loader.request("https://example.com/img.png");
        assert_eq!(loader.pending.len(), 1);
        assert!(matches!(
            loader.status("https://example.com/img.png"),
            ImageStatus::Pending
        ));
    }

    #[test]
    fn unrequested_urls_are_unknown() {
        let loader = ImageLoader::new();
        assert!(matches!(loader.status("https://nowhere"), ImageStatus::Unknown));
    }

    #[test]
    fn failed_urls_are_remembered_and_not_refetched() {
        let mut loader = ImageLoader::new();
        loader.failed.insert("bad.png".into());
        loader.request("bad.png");
        assert!(loader.pending.is_empty());
        assert!(matches!(loader.status("bad.png"), ImageStatus::Failed));
    }

    #[test]
    fn local_file_fetch_decodes() {
        let dir = std::env::temp_dir().join(format!("folio-img-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("px.png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let data = fetch_and_decode(path.to_str().unwrap()).unwrap();
        assert_eq!((data.width, data.height), (2, 3));
        assert_eq!(data.rgba.len(), 2 * 3 * 4);
        assert_eq!(&data.rgba[..4], &[10, 20, 30, 255]);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn unreadable_file_reports_failure() {
        assert!(fetch_and_decode("/nonexistent/image.png").is_none());
    }
}

//! Certificate gallery state machine.
//!
//! Records are loaded once from the external data file and are read-only
//! afterwards. The gallery moves Unloaded → Loaded on a successful
//! fetch, and Loaded ⇄ Detail-Open as the user expands and dismisses a
//! record. Opening an unknown id, or anything before loading finishes,
//! is an explicit error the UI chooses to swallow.

use serde::Deserialize;

/// One credential, as it appears in the data file (camelCase keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub year: String,
    pub icon: String,
    #[serde(default)]
    pub verify_link: Option<String>,
    pub image: String,
    #[serde(default)]
    pub list_items: Vec<String>,
    #[serde(default)]
    pub verification_details: Vec<String>,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub list_title: Option<String>,
}

impl Certificate {
    /// Actionable verification URL, if the record carries a real one.
    /// Empty strings and the `"#"` placeholder yield `None`.
    pub fn verify_url(&self) -> Option<&str> {
        match self.verify_link.as_deref() {
            Some("") | Some("#") | None => None,
            Some(url) => Some(url),
        }
    }

    /// Heading shown above the highlight list.
    pub fn highlights_title(&self) -> &str {
        self.list_title.as_deref().unwrap_or("Highlights")
    }

    /// Verification detail lines joined with forced line breaks.
    pub fn verification_block(&self) -> String {
        self.verification_details.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    NotLoaded,
    UnknownId(String),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::NotLoaded => write!(f, "gallery data not loaded yet"),
            GalleryError::UnknownId(id) => write!(f, "no certificate with id {id:?}"),
        }
    }
}

impl std::error::Error for GalleryError {}

/// Gallery lifecycle: records plus which detail overlay, if any, is open.
#[derive(Default)]
pub struct Gallery {
    loaded: bool,
    records: Vec<(String, Certificate)>,
    open: Option<usize>,
}

impl Gallery {
    /// Install the fetched records. Called at most once per run; a
    /// failed fetch never calls this and the gallery stays empty.
    pub fn load(&mut self, records: Vec<(String, Certificate)>) {
        self.records = records;
        self.loaded = true;
        self.open = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Records in data-file order.
    pub fn records(&self) -> &[(String, Certificate)] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Certificate> {
        self.records.iter().find(|(k, _)| k == id).map(|(_, c)| c)
    }

    /// Open the detail overlay for `id`.
    pub fn open_detail(&mut self, id: &str) -> Result<&Certificate, GalleryError> {
        if !self.loaded {
            return Err(GalleryError::NotLoaded);
        }
        let idx = self
            .records
            .iter()
            .position(|(k, _)| k == id)
            .ok_or_else(|| GalleryError::UnknownId(id.to_string()))?;
        self.open = Some(idx);
        Ok(&self.records[idx].1)
    }

    pub fn close_detail(&mut self) {
        self.open = None;
    }

    /// The record whose detail overlay is open, if any.
    pub fn open_record(&self) -> Option<(&str, &Certificate)> {
        self.open
            .and_then(|i| self.records.get(i))
            .map(|(k, c)| (k.as_str(), c))
    }

    pub fn detail_open(&self) -> bool {
        self.open.is_some()
    }

    /// Escape closes an open overlay; while closed it is a no-op.
    /// Returns whether anything changed.
    pub fn handle_escape(&mut self) -> bool {
        if self.open.is_some() {
            self.open = None;
            true
        } else {
            false
        }
    }

    /// Background scrolling is locked while a detail overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(title: &str, items: &[&str]) -> Certificate {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "description": "desc",
            "category": "cloud",
            "year": "2024",
            "icon": "award",
            "image": "https://example.com/c.png",
            "listItems": items,
            "verificationDetails": ["ID: 1", "Issued: 2024"],
            "quote": "q",
        }))
        .unwrap()
    }

    fn loaded_gallery() -> Gallery {
        let mut g = Gallery::default();
        g.load(vec![
            ("x".into(), cert("Cert X", &["a", "b", "c"])),
            ("y".into(), cert("Cert Y", &[])),
        ]);
        g
    }

    #[test]
    fn open_detail_exposes_the_record() {
        let mut g = loaded_gallery();
        let c = g.open_detail("x").unwrap();
        assert_eq!(c.title, "Cert X");
        assert_eq!(c.list_items.len(), 3);
        assert_eq!(c.list_items, vec!["a", "b", "c"]);
        assert!(g.detail_open());
        assert!(g.scroll_locked());
    }

    #[test]
    fn open_unknown_id_is_a_rejected_noop() {
        let mut g = loaded_gallery();
        let err = g.open_detail("missing").unwrap_err();
        assert_eq!(err, GalleryError::UnknownId("missing".into()));
        assert!(!g.detail_open());
    }

    #[test]
    fn open_before_load_is_rejected() {
        let mut g = Gallery::default();
        assert_eq!(g.open_detail("x").unwrap_err(), GalleryError::NotLoaded);
    }

    #[test]
    fn close_restores_scrolling() {
        let mut g = loaded_gallery();
        g.open_detail("y").unwrap();
        g.close_detail();
        assert!(!g.detail_open());
        assert!(!g.scroll_locked());
    }

    #[test]
    fn escape_closes_only_while_open() {
        let mut g = loaded_gallery();
        assert!(!g.handle_escape());
        g.open_detail("x").unwrap();
        assert!(g.handle_escape());
        assert!(!g.scroll_locked());
        assert!(!g.handle_escape());
    }

    #[test]
    fn placeholder_verify_links_are_not_actionable() {
        let mut c = cert("t", &[]);
        assert_eq!(c.verify_url(), None);
        c.verify_link = Some("#".into());
        assert_eq!(c.verify_url(), None);
        c.verify_link = Some("".into());
        assert_eq!(c.verify_url(), None);
        c.verify_link = Some("https://verify.example.com/1".into());
        assert_eq!(c.verify_url(), Some("https://verify.example.com/1"));
    }

    #[test]
    fn detail_text_helpers() {
        let c = cert("t", &[]);
        assert_eq!(c.highlights_title(), "Highlights");
        assert_eq!(c.verification_block(), "ID: 1\nIssued: 2024");
    }
}

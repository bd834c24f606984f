//! One-shot fetch of the certificate data file.
//!
//! The source is either an http(s) URL or a local path; either way the
//! document is a JSON object keyed by certificate id. Order in the file
//! is preserved so the gallery renders cards the way the author arranged
//! them. There is no retry: a failure is logged by the caller and the
//! gallery simply stays empty.

use std::time::Duration;

use url::Url;

use crate::gallery::Certificate;

/// Error while fetching or decoding the data file.
pub struct FetchError {
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FetchError({})", self.message)
    }
}

fn err(message: impl Into<String>) -> FetchError {
    FetchError { message: message.into() }
}

/// Fetch and decode the certificate map (blocking).
pub fn fetch_certificates(source: &str) -> Result<Vec<(String, Certificate)>, FetchError> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source)?
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| err(format!("cannot read {source}: {e}")))?
    };
    parse_certificates(&body)
}

fn fetch_remote(source: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(source).map_err(|e| err(format!("invalid URL: {e}")))?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| err(format!("client error: {e}")))?;

    let response = client
        .get(parsed.as_str())
        .header("Accept", "application/json")
        .send()
        .map_err(|e| err(format!("request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(err(format!("HTTP {}", response.status().as_u16())));
    }

    response
        .text()
        .map_err(|e| err(format!("failed to read body: {e}")))
}

/// Decode the id → record object, keeping file order.
pub fn parse_certificates(body: &str) -> Result<Vec<(String, Certificate)>, FetchError> {
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| err(format!("malformed data file: {e}")))?;

    let mut records = Vec::with_capacity(map.len());
    for (id, value) in map {
        let cert: Certificate = serde_json::from_value(value)
            .map_err(|e| err(format!("bad record {id:?}: {e}")))?;
        records.push((id, cert));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_in_file_order() {
        let body = r#"{
            "zeta": {
                "title": "Zeta Cert", "description": "d", "category": "cloud",
                "year": "2023", "icon": "award", "image": "z.png",
                "listItems": ["one"], "verificationDetails": [], "quote": ""
            },
            "alpha": {
                "title": "Alpha Cert", "description": "d", "category": "web",
                "year": "2024", "icon": "code", "image": "a.png",
                "verifyLink": "https://verify.example.com/a"
            }
        }"#;
        let records = parse_certificates(body).unwrap();
        let ids: Vec<_> = records.iter().map(|(id, _)| id.as_str()).collect();
        // file order, not alphabetical
        assert_eq!(ids, vec!["zeta", "alpha"]);
        assert_eq!(records[0].1.title, "Zeta Cert");
        assert_eq!(records[1].1.verify_url(), Some("https://verify.example.com/a"));
    }

    #[test]
    fn optional_fields_default() {
        let body = r#"{
            "min": {
                "title": "t", "description": "d", "category": "c",
                "year": "2020", "icon": "i", "image": "m.png"
            }
        }"#;
        let records = parse_certificates(body).unwrap();
        let cert = &records[0].1;
        assert!(cert.list_items.is_empty());
        assert!(cert.verification_details.is_empty());
        assert_eq!(cert.verify_url(), None);
        assert_eq!(cert.list_title, None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_certificates("not json").is_err());
        assert!(parse_certificates(r#"{"x": {"title": "only"}}"#).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(fetch_certificates("/nonexistent/certs.json").is_err());
    }
}

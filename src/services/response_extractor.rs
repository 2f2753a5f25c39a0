//! Pulls the JSON object out of free-form model text.
//!
//! Extraction runs in two stages so each failure is distinguishable:
//! [`locate_json_span`] finds the candidate span, [`parse_json_span`] decodes it.
//!
//! The span runs from the first `{` to the last `}` in the whole text. When the model writes more
//! than one brace-delimited block (an example and then the answer, say) the span covers both and
//! decoding fails with [`AppError::MalformedJson`]. That failure is reported as-is.
//!
//! A reply that opens a brace and never closes it was cut off; its span runs to the end of the text
//! and fails as malformed rather than as missing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

static JSON_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON_SPAN is a valid regex pattern"));

/// Longest `{ ... }` span of `raw`, braces included.
pub fn locate_json_span(raw: &str) -> AppResult<&str> {
    if let Some(m) = JSON_SPAN.find(raw) {
        return Ok(m.as_str());
    }

    raw.find('{')
        .map(|start| &raw[start..])
        .ok_or(AppError::NoJsonFound)
}

pub fn parse_json_span<T: DeserializeOwned>(span: &str) -> AppResult<T> {
    serde_json::from_str(span).map_err(|e| AppError::MalformedJson(e.to_string()))
}

pub fn extract<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    let span = locate_json_span(raw)?;
    parse_json_span(span)
}

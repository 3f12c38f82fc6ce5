//! Timestamped rendering of inbound frames
//!
//! Frames are opportunistically parsed as JSON for indented display. A frame
//! that fails to parse is printed verbatim; decode failure is a formatting
//! fallback, never an error of the run.

use chrono::Utc;
use serde_json::Value;

/// Current UTC time as ISO-8601 with sub-second precision, suffixed `Z`.
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Render one inbound text frame: pretty-printed JSON when it parses,
/// the raw text otherwise. Non-ASCII characters pass through unescaped.
pub fn render_frame(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// One console line for an inbound frame: `<timestamp> <rendered payload>`.
pub fn format_line(raw: &str) -> String {
    format!("{} {}", utc_timestamp(), render_frame(raw))
}

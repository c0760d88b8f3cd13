use serde::Deserialize;
use web_sys::window;

use crate::console;
use crate::notice::DEFAULT_TIMEOUT_MS;

pub const CONFIG_ELEMENT_ID: &str = "roster-config";

/// Runtime settings, embedded in the page as
/// `<script id="roster-config" type="application/json">`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RosterConfig {
    /// Prefix for the `/activities` routes. Empty means same origin.
    pub api_base: String,
    pub notice_timeout_ms: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl RosterConfig {
    pub fn parse(json: &str) -> Result<Self, String> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| format!("invalid {CONFIG_ELEMENT_ID} JSON: {e}"))
    }

    /// Falls back to defaults (with a console warning) when the block is absent or broken.
    pub fn from_document() -> Self {
        match config_json_from_dom().and_then(|json| Self::parse(&json)) {
            Ok(cfg) => cfg,
            Err(e) => {
                console::warn("Using default roster config:", &e);
                Self::default()
            }
        }
    }
}

fn config_json_from_dom() -> Result<String, String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    let el = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or("missing <script id=\"roster-config\" type=\"application/json\">")?;
    Ok(el.text_content().unwrap_or_default())
}

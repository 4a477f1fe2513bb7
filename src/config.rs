/// Endpoint configuration shared by both surfaces

use serde::Deserialize;
use url::Url;
use wasm_bindgen::prelude::*;

// The host page supplies the two collaborator endpoints through a
// plain JS module; nothing works until both are filled in.
#[wasm_bindgen(module = "/config.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn getConfig() -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Where captured articles are POSTed and read back from
    pub sheet_url: String,
    /// Base URL of the summarization backend
    pub backend_url: String,
}

impl AppConfig {
    /// Both endpoints must be present and at least parse as URLs.
    pub fn validate(&self) -> Result<(), String> {
        check_endpoint("sheet_url", &self.sheet_url)?;
        check_endpoint("backend_url", &self.backend_url)?;
        Ok(())
    }
}

fn check_endpoint(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is not configured", name));
    }

    Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", name, e))?;
    Ok(())
}

/// Read and validate the host page's config.
pub fn load() -> Result<AppConfig, String> {
    let raw = getConfig().map_err(|e| format!("Failed to read config: {:?}", e))?;

    let config: AppConfig = serde_wasm_bindgen::from_value(raw)
        .map_err(|e| format!("Failed to parse config: {:?}", e))?;

    config.validate()?;
    Ok(config)
}

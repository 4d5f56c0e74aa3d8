use folio_core::ConfigError;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("window unavailable")]
    MissingWindow,
    #[error("document unavailable")]
    MissingDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("request for {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("request for {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("manifest {url} is invalid: {source}")]
    Manifest {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("dom error: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(error: JsValue) -> Self {
        SiteError::Dom(js_err(error))
    }
}

impl From<SiteError> for JsValue {
    fn from(error: SiteError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

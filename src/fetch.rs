use folio_core::ImageManifest;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dom;
use crate::error::{js_err, SiteError};

/// Fetches `url` and returns the body as text. Non-success statuses are errors.
pub(crate) async fn fetch_text(url: &str) -> Result<String, SiteError> {
    let request_err = |error: JsValue| SiteError::Request {
        url: url.to_string(),
        message: js_err(error),
    };
    let window = dom::window()?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(request_err)?;
    let response: Response = value.dyn_into().map_err(request_err)?;
    if !response.ok() {
        return Err(SiteError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let body = JsFuture::from(response.text().map_err(request_err)?)
        .await
        .map_err(request_err)?;
    body.as_string().ok_or_else(|| SiteError::Request {
        url: url.to_string(),
        message: "response body is not text".to_string(),
    })
}

pub(crate) async fn fetch_manifest(url: &str) -> Result<ImageManifest, SiteError> {
    let body = fetch_text(url).await?;
    ImageManifest::parse(&body).map_err(|source| SiteError::Manifest {
        url: url.to_string(),
        source,
    })
}

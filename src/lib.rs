mod components;
mod dom;
mod error;
mod fetch;
mod gallery;
mod resize;

use wasm_bindgen::prelude::*;

pub use components::{current_page, load_component_map, load_components, mark_active_links};
pub use error::SiteError;
pub use gallery::{render_desktop, render_mobile, GalleryManager, FALLBACK_HTML};
pub use resize::ResizeSubscription;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    load_components();
}

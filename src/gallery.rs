use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{
    layout_desktop, GalleryConfig, LayoutArea, PlacementStrategy, Rect, ResizeTracker,
    SearchOutcome, SeededRandom,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::error::SiteError;
use crate::fetch;
use crate::resize::ResizeSubscription;

pub const FALLBACK_HTML: &str = "<p>Failed to load gallery images.</p>";
pub const SQUARE_CLASS: &str = "square";
pub const IMAGE_ALT: &str = "Image";

struct GalleryState {
    config: Rc<GalleryConfig>,
    container: Element,
    images: Vec<String>,
    tracker: ResizeTracker,
}

type SharedState = Rc<RefCell<GalleryState>>;

/// Scattered image gallery bound to one container element.
#[wasm_bindgen]
pub struct GalleryManager {
    state: SharedState,
    resize: Option<ResizeSubscription>,
}

#[wasm_bindgen]
impl GalleryManager {
    /// Accepts a partial options object; `undefined` or `null` keeps every
    /// default. Throws when the options are invalid or the container is
    /// missing.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<GalleryManager, JsValue> {
        let config = config_from_js(&options)?;
        Ok(Self::with_config(config)?)
    }

    pub fn rebuild(&self) {
        rebuild(&self.state);
    }

    /// Stops reacting to resize events. The rendered gallery stays in place.
    pub fn dispose(&mut self) {
        self.resize.take();
    }

    #[wasm_bindgen(getter, js_name = isMobile)]
    pub fn is_mobile(&self) -> bool {
        self.state.borrow().tracker.is_mobile()
    }

    #[wasm_bindgen(getter, js_name = imageCount)]
    pub fn image_count(&self) -> usize {
        self.state.borrow().images.len()
    }
}

impl GalleryManager {
    pub fn with_config(config: GalleryConfig) -> Result<Self, SiteError> {
        config.validate()?;
        let window = dom::window()?;
        let document = dom::document()?;
        let container = dom::element_by_id(&document, &config.container_id)?;
        let width = dom::viewport_width()?;
        let tracker = ResizeTracker::new(config.mobile_breakpoint, width);
        let resize_delay_ms = config.resize_delay_ms;
        let state = Rc::new(RefCell::new(GalleryState {
            config: Rc::new(config),
            container,
            images: Vec::new(),
            tracker,
        }));
        let resize = ResizeSubscription::new(
            &window,
            resize_delay_ms,
            Rc::new(settled_resize_handler(Rc::downgrade(&state))),
        );
        load(state.clone());
        Ok(Self {
            state,
            resize: Some(resize),
        })
    }

    pub fn config(&self) -> Rc<GalleryConfig> {
        self.state.borrow().config.clone()
    }
}

fn config_from_js(options: &JsValue) -> Result<GalleryConfig, SiteError> {
    if options.is_undefined() || options.is_null() {
        return Ok(GalleryConfig::default());
    }
    let raw = js_sys::JSON::stringify(options)?;
    let raw = raw.as_string().unwrap_or_default();
    Ok(GalleryConfig::from_json(&raw)?)
}

fn settled_resize_handler(state: Weak<RefCell<GalleryState>>) -> impl Fn() {
    move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        let width = match dom::viewport_width() {
            Ok(width) => width,
            Err(err) => {
                gloo::console::warn!("gallery resize: viewport width unavailable", err.to_string());
                return;
            }
        };
        let should_rebuild = state.borrow_mut().tracker.observe(width);
        if should_rebuild {
            gloo::console::debug!("gallery resize: rebuilding", width);
            rebuild(&state);
        }
    }
}

fn load(state: SharedState) {
    spawn_local(async move {
        let url = state.borrow().config.manifest_url.clone();
        match fetch::fetch_manifest(&url).await {
            Ok(manifest) => {
                state.borrow_mut().images = manifest.images;
                render_logged(&state.borrow());
            }
            Err(err) => {
                gloo::console::error!("failed to load gallery manifest", url, err.to_string());
                state.borrow().container.set_inner_html(FALLBACK_HTML);
            }
        }
    });
}

fn rebuild(state: &SharedState) {
    let has_images = {
        let state = state.borrow();
        dom::clear_children(&state.container);
        !state.images.is_empty()
    };
    if has_images {
        render_logged(&state.borrow());
    } else {
        load(state.clone());
    }
}

fn render_logged(state: &GalleryState) {
    let result = if state.tracker.is_mobile() {
        render_mobile(&state.container, &state.images)
    } else {
        render_desktop(&state.container, &state.images, &state.config)
    };
    if let Err(err) = result {
        gloo::console::error!("failed to render gallery", err.to_string());
    }
}

/// Appends one grid item per image, in order, without positioning.
pub fn render_mobile(container: &Element, images: &[String]) -> Result<usize, SiteError> {
    let document = dom::document()?;
    for (index, src) in images.iter().enumerate() {
        let square = create_square(&document, index, src)?;
        container.append_child(&square)?;
    }
    Ok(images.len())
}

/// Scatters images over `container` and returns how many were placed.
pub fn render_desktop(
    container: &Element,
    images: &[String],
    config: &GalleryConfig,
) -> Result<usize, SiteError> {
    let document = dom::document()?;
    let container_rect = dom::dom_rect(&container.get_bounding_client_rect());
    let avoid = avoidance_rects(&document, config, &container_rect);
    let area = LayoutArea::for_container(
        container_rect.width(),
        container_rect.height(),
        config.max_square_size,
    );
    let params = config.placement_params();
    let layout = match config.seed {
        Some(seed) => {
            let mut rng = SeededRandom::new(seed);
            layout_desktop(images.len(), area, &avoid, params, PlacementStrategy::Anchored, &mut rng)
        }
        None => {
            let mut rng = js_sys::Math::random;
            layout_desktop(images.len(), area, &avoid, params, PlacementStrategy::Uniform, &mut rng)
        }
    };

    let mut placed = 0;
    for (index, (src, outcome)) in images.iter().zip(&layout.outcomes).enumerate() {
        match outcome {
            SearchOutcome::Found(point) => {
                let square = create_square(&document, index, src)?;
                let style = square.style();
                style.set_property("left", &format!("{}px", point.x))?;
                style.set_property("top", &format!("{}px", point.y))?;
                container.append_child(&square)?;
                placed += 1;
            }
            SearchOutcome::Exhausted { attempts } => {
                gloo::console::debug!("gallery: no free spot, skipping image", src.clone(), *attempts);
            }
        }
    }
    Ok(placed)
}

/// Padded bounding boxes of the configured elements, relative to the
/// container's top-left corner. Selectors that match nothing are ignored.
fn avoidance_rects(document: &Document, config: &GalleryConfig, container: &Rect) -> Vec<Rect> {
    config
        .avoid_selectors
        .iter()
        .filter_map(|selector| match document.query_selector(selector) {
            Ok(found) => found,
            Err(_) => {
                gloo::console::warn!("gallery: invalid avoid selector", selector.clone());
                None
            }
        })
        .map(|element| {
            dom::dom_rect(&element.get_bounding_client_rect())
                .inflate(config.element_padding)
                .translate(-container.left, -container.top)
        })
        .collect()
}

fn create_square(document: &Document, index: usize, src: &str) -> Result<HtmlElement, SiteError> {
    let square = dom::create_html_element(document, "div")?;
    square
        .class_list()
        .add_2(SQUARE_CLASS, &format!("{SQUARE_CLASS}{}", index + 1))?;
    let img = document.create_element("img")?;
    img.set_attribute("src", src)?;
    img.set_attribute("alt", IMAGE_ALT)?;
    square.append_child(&img)?;
    Ok(square)
}

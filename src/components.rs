use folio_core::page::is_current_link;
use folio_core::{
    current_page_from_path, ComponentEntry, ComponentMap, ACTIVE_CLASS, NAV_LINKS_SELECTOR,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::SiteError;
use crate::fetch;

/// Filename of the page currently shown, `index.html` for directory URLs.
#[wasm_bindgen(js_name = currentPage)]
pub fn current_page() -> String {
    current_page_from_path(&dom::current_pathname())
}

/// Loads the default navigation, info and commissions fragments.
#[wasm_bindgen(js_name = loadComponents)]
pub fn load_components() {
    load_component_map(&ComponentMap::default());
}

/// Loads fragments from a `{ elementId: "path/to/fragment.html" }` object.
#[wasm_bindgen(js_name = loadComponentsWith)]
pub fn load_components_with(map: JsValue) -> Result<(), JsValue> {
    let map = component_map_from_js(&map)?;
    load_component_map(&map);
    Ok(())
}

pub fn load_component_map(map: &ComponentMap) {
    let current_page = current_page();
    for entry in map.entries().iter().cloned() {
        let current_page = current_page.clone();
        spawn_local(async move {
            match load_component(&entry, &current_page).await {
                Ok(()) => {}
                Err(SiteError::MissingElement(id)) => {
                    gloo::console::warn!("component target missing, skipping", id);
                }
                Err(err) => {
                    gloo::console::error!(
                        "failed to load component",
                        entry.target_id.clone(),
                        entry.fragment_url.clone(),
                        err.to_string()
                    );
                }
            }
        });
    }
}

pub(crate) async fn load_component(entry: &ComponentEntry, current_page: &str) -> Result<(), SiteError> {
    let document = dom::document()?;
    let target = dom::element_by_id(&document, &entry.target_id)?;
    let mut html = fetch::fetch_text(&entry.fragment_url).await?;
    if entry.is_navigation() {
        html = mark_active_links(&document, &html, current_page)?;
    }
    target.set_inner_html(&html);
    Ok(())
}

/// Adds the active class to every nav link pointing at `current_page` and
/// returns the rewritten markup.
pub fn mark_active_links(document: &Document, html: &str, current_page: &str) -> Result<String, SiteError> {
    let scratch = document.create_element("div")?;
    scratch.set_inner_html(html);
    let links = scratch.query_selector_all(NAV_LINKS_SELECTOR)?;
    for index in 0..links.length() {
        let Some(link) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if is_current_link(link.get_attribute("href").as_deref(), current_page) {
            link.class_list().add_1(ACTIVE_CLASS)?;
        }
    }
    Ok(scratch.inner_html())
}

fn component_map_from_js(value: &JsValue) -> Result<ComponentMap, SiteError> {
    let Some(object) = value.dyn_ref::<js_sys::Object>() else {
        return Err(SiteError::Dom("component map must be an object".to_string()));
    };
    let mut pairs = Vec::new();
    for pair in js_sys::Object::entries(object).iter() {
        let pair = js_sys::Array::from(&pair);
        let (Some(id), Some(path)) = (pair.get(0).as_string(), pair.get(1).as_string()) else {
            return Err(SiteError::Dom("component paths must be strings".to_string()));
        };
        pairs.push((id, path));
    }
    Ok(ComponentMap::from_pairs(pairs))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const NAV_HTML: &str = r#"<nav class="navbar"><div class="nav-options"><a href="index.html">Home</a><a href="gallery.html">Gallery</a><a href="commissions.html">Commissions</a></div><a href="gallery.html" class="logo">Logo</a></nav>"#;

    fn parse(document: &Document, html: &str) -> Element {
        let holder = document.create_element("div").unwrap();
        holder.set_inner_html(html);
        holder
    }

    #[wasm_bindgen_test]
    fn marks_only_link_for_current_page() {
        let document = dom::document().unwrap();
        let html = mark_active_links(&document, NAV_HTML, "gallery.html").unwrap();
        let holder = parse(&document, &html);
        let active = holder.query_selector_all(".active").unwrap();
        assert_eq!(active.length(), 1);
        let link = active.item(0).unwrap().dyn_into::<Element>().unwrap();
        assert_eq!(link.get_attribute("href").as_deref(), Some("gallery.html"));
        assert_eq!(link.text_content().as_deref(), Some("Gallery"));
    }

    #[wasm_bindgen_test]
    fn links_outside_nav_options_stay_unmarked() {
        let document = dom::document().unwrap();
        let html = mark_active_links(&document, NAV_HTML, "gallery.html").unwrap();
        let holder = parse(&document, &html);
        let logo = holder.query_selector(".logo").unwrap().unwrap();
        assert!(!logo.class_list().contains(ACTIVE_CLASS));
    }

    #[wasm_bindgen_test]
    fn unknown_page_marks_nothing() {
        let document = dom::document().unwrap();
        let html = mark_active_links(&document, NAV_HTML, "about.html").unwrap();
        let holder = parse(&document, &html);
        assert_eq!(holder.query_selector_all(".active").unwrap().length(), 0);
    }

    #[wasm_bindgen_test]
    fn component_map_keeps_object_order() {
        let object = js_sys::Object::new();
        js_sys::Reflect::set(&object, &"footer".into(), &"components/footer.html".into()).unwrap();
        js_sys::Reflect::set(&object, &"navigation".into(), &"components/nav.html".into()).unwrap();
        let map = component_map_from_js(&object.into()).unwrap();
        let ids: Vec<&str> = map.entries().iter().map(|entry| entry.target_id.as_str()).collect();
        assert_eq!(ids, vec!["footer", "navigation"]);
    }

    #[wasm_bindgen_test]
    fn component_map_rejects_non_string_paths() {
        let object = js_sys::Object::new();
        js_sys::Reflect::set(&object, &"navigation".into(), &JsValue::from_f64(3.0)).unwrap();
        assert!(component_map_from_js(&object.into()).is_err());
    }

    #[wasm_bindgen_test(async)]
    async fn missing_target_is_reported_before_fetching() {
        let entry = ComponentEntry {
            target_id: "no-such-placeholder".to_string(),
            fragment_url: "components/does-not-exist.html".to_string(),
        };
        let result = load_component(&entry, "index.html").await;
        assert!(matches!(result, Err(SiteError::MissingElement(id)) if id == "no-such-placeholder"));
    }

    #[wasm_bindgen_test(async)]
    async fn fragment_is_injected_into_target() {
        let document = dom::document().unwrap();
        let body = document.body().unwrap();
        let target = document.create_element("div").unwrap();
        target.set_id("test-info-fragment");
        body.append_child(&target).unwrap();

        let entry = ComponentEntry {
            target_id: "test-info-fragment".to_string(),
            fragment_url: "data:text/html,%3Cp%3Einfo%3C%2Fp%3E".to_string(),
        };
        load_component(&entry, "index.html").await.unwrap();
        assert_eq!(target.inner_html(), "<p>info</p>");
        target.remove();
    }
}

use folio_core::page::is_current_link;
use folio_core::{current_page_from_path, ComponentMap, HOME_PAGE, NAVIGATION_ID};

#[test]
fn default_map_lists_three_fragments_in_order() {
    let map = ComponentMap::default();
    let ids: Vec<&str> = map
        .entries()
        .iter()
        .map(|entry| entry.target_id.as_str())
        .collect();
    assert_eq!(ids, vec!["navigation", "infoDisplayText", "commissionsDisplayText"]);
    assert_eq!(
        map.get("infoDisplayText").map(|entry| entry.fragment_url.as_str()),
        Some("components/info-component.html")
    );
}

#[test]
fn only_navigation_entry_is_marked_navigation() {
    let map = ComponentMap::default();
    let navigation: Vec<&str> = map
        .entries()
        .iter()
        .filter(|entry| entry.is_navigation())
        .map(|entry| entry.target_id.as_str())
        .collect();
    assert_eq!(navigation, vec![NAVIGATION_ID]);
}

#[test]
fn duplicate_ids_keep_position_and_take_last_path() {
    let map = ComponentMap::from_pairs([
        ("navigation", "a.html"),
        ("footer", "footer.html"),
        ("navigation", "b.html"),
    ]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.entries()[0].fragment_url, "b.html");
    assert_eq!(map.entries()[1].target_id, "footer");
}

#[test]
fn current_page_uses_last_path_segment() {
    assert_eq!(current_page_from_path("/gallery.html"), "gallery.html");
    assert_eq!(current_page_from_path("/site/pages/about.html"), "about.html");
}

#[test]
fn empty_path_segment_defaults_to_home() {
    assert_eq!(current_page_from_path(""), HOME_PAGE);
    assert_eq!(current_page_from_path("/"), HOME_PAGE);
    assert_eq!(current_page_from_path("/portfolio/"), HOME_PAGE);
}

#[test]
fn link_match_is_exact_text() {
    assert!(is_current_link(Some("about.html"), "about.html"));
    assert!(!is_current_link(Some("./about.html"), "about.html"));
    assert!(!is_current_link(None, "about.html"));
}

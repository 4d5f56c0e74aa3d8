use folio_core::ImageManifest;

#[test]
fn images_keep_manifest_order() {
    let manifest = ImageManifest::parse(r#"{"images": ["a.png", "b.png", "c.png"]}"#)
        .expect("valid manifest");
    assert_eq!(manifest.images, vec!["a.png", "b.png", "c.png"]);
}

#[test]
fn missing_images_field_is_empty_list() {
    let manifest = ImageManifest::parse(r#"{"title": "gallery"}"#).expect("valid manifest");
    assert!(manifest.is_empty());
}

#[test]
fn malformed_manifest_is_an_error() {
    assert!(ImageManifest::parse("<html>not found</html>").is_err());
    assert!(ImageManifest::parse(r#"{"images": "a.png"}"#).is_err());
}

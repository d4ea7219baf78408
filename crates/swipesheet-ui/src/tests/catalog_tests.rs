use super::*;

fn item(id: i64, title: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        artist: "Various".to_string(),
        artwork: None,
    }
}

fn catalog() -> StaticCatalog {
    StaticCatalog::new(vec![item(1, "Intro"), item(2, "Bridge"), item(7, "Coda")]).unwrap()
}

#[test]
fn route_parsing_accepts_base_ten_integers_only() {
    assert_eq!(ItemId::from_route(Some("7")), ItemId(7));
    assert_eq!(ItemId::from_route(Some(" 12 ")), ItemId(12));
    assert_eq!(ItemId::from_route(Some("-3")), ItemId(-3));
    assert_eq!(ItemId::from_route(Some("abc")), ItemId(0));
    assert_eq!(ItemId::from_route(Some("7abc")), ItemId(0));
    assert_eq!(ItemId::from_route(Some("")), ItemId(0));
    assert_eq!(ItemId::from_route(None), ItemId(0));
}

#[test]
fn list_parameters_use_the_first_value() {
    assert_eq!(ItemId::from_route_values(&["2", "7"][..]), ItemId(2));
    assert_eq!(ItemId::from_route_values::<&str>(&[]), ItemId(0));
    assert_eq!(ItemId::from_route_values(&[String::from("x")][..]), ItemId(0));
}

#[test]
fn unknown_ids_fall_back_to_first_entry() {
    let catalog = catalog();
    assert_eq!(resolve_item(&catalog, ItemId(7)).title, "Coda");
    assert_eq!(resolve_item(&catalog, ItemId(0)).title, "Intro");
    assert_eq!(resolve_item(&catalog, ItemId::from_route(Some("abc"))).id, 1);
}

#[test]
fn empty_catalog_is_rejected() {
    assert_eq!(
        StaticCatalog::new(Vec::new()).unwrap_err(),
        OverlayError::EmptyCatalog
    );
}

#[test]
fn json_catalog_loads_songs() {
    let catalog = StaticCatalog::from_json(
        r#"{ "songs": [
            { "id": 3, "title": "Night Drive", "artist": "Kavinsky", "artwork": "night.png", "duration": 241 },
            { "id": 4, "title": "Odd Look", "artist": "Kavinsky" }
        ] }"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.first().artwork.as_deref(), Some("night.png"));
    assert_eq!(catalog.find_by_id(4).map(|item| item.artwork.clone()), Some(None));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = StaticCatalog::from_json("{ \"songs\": 3 }").unwrap_err();
    assert!(matches!(err, OverlayError::CatalogParse { .. }));
    assert_eq!(
        StaticCatalog::from_json(r#"{ "songs": [] }"#).unwrap_err(),
        OverlayError::EmptyCatalog
    );
}

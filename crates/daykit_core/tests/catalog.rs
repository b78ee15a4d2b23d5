use daykit_core::Catalog;

#[test]
fn demo_catalog_is_nonempty_and_ordered() {
    let catalog = Catalog::demo();
    assert!(!catalog.products().is_empty());
    assert_eq!(catalog.products()[0].id, "laptop-1");
}

#[test]
fn find_looks_up_by_id() {
    let catalog = Catalog::demo();
    let product = catalog.find("headphones-1").unwrap();
    assert_eq!(product.name, "Sony WH-1000XM5");
    assert!(catalog.find("no-such-product").is_none());
}

#[test]
fn by_category_keeps_catalog_order() {
    let catalog = Catalog::demo();
    let accessories = catalog.by_category("Accessories");
    let ids: Vec<&str> = accessories.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["keyboard-1", "mouse-1", "charger-1"]);
    assert!(catalog.by_category("Furniture").is_empty());
}

#[test]
fn categories_are_sorted_and_distinct() {
    let catalog = Catalog::demo();
    let categories = catalog.categories();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);

    let mut deduped = categories.clone();
    deduped.dedup();
    assert_eq!(categories, deduped);
    assert!(categories.contains(&"Electronics".to_string()));
}

#[test]
fn stocks_and_prices_are_sane() {
    let catalog = Catalog::demo();
    for product in catalog.products() {
        assert!(product.price > 0, "{} has a non-positive price", product.id);
        assert!((0.0..=5.0).contains(&product.rating));
    }
}

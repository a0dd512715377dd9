use shared::domain::CheckoutPayload;

use crate::{Catalog, Selection};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

#[test]
fn selecting_a_product_yields_it_with_no_duration() {
    let catalog = catalog();
    for index in 0..catalog.len() {
        let mut selection = Selection::new();
        selection.select_product(&catalog, index);
        let current = selection.current(&catalog);
        assert_eq!(
            current.product.map(|p| p.name()),
            catalog.product(index).map(|p| p.name())
        );
        assert!(current.tier.is_none());
    }
}

#[test]
fn selecting_a_duration_resolves_the_tier_pair() {
    let catalog = catalog();
    for (product_index, product) in catalog.products().iter().enumerate() {
        for (tier_index, tier) in product.tiers().iter().enumerate() {
            let mut selection = Selection::new();
            selection.select_product(&catalog, product_index);
            selection.select_duration(&catalog, tier_index);
            let current = selection.current(&catalog);
            assert_eq!(current.product.map(|p| p.name()), Some(product.name()));
            assert_eq!(current.tier, Some(tier));
        }
    }
}

#[test]
fn reselecting_a_product_always_clears_the_duration() {
    let catalog = catalog();
    let mut selection = Selection::new();
    selection.select_product(&catalog, 0);
    selection.select_duration(&catalog, 2);
    assert!(selection.duration_index().is_some());

    selection.select_product(&catalog, 1);
    assert_eq!(selection.duration_index(), None);

    // Re-clicking the already selected product resets the duration too.
    selection.select_duration(&catalog, 1);
    selection.select_product(&catalog, 1);
    assert_eq!(selection.duration_index(), None);
}

#[test]
fn out_of_range_product_selection_is_a_no_op() {
    let catalog = catalog();
    let mut selection = Selection::new();
    selection.select_product(&catalog, catalog.len());
    assert_eq!(selection, Selection::new());

    selection.select_product(&catalog, 0);
    selection.select_duration(&catalog, 1);
    let before = selection.clone();
    selection.select_product(&catalog, 99);
    assert_eq!(selection, before);
}

#[test]
fn duration_selection_without_a_product_is_a_no_op() {
    let catalog = catalog();
    let mut selection = Selection::new();
    selection.select_duration(&catalog, 0);
    assert_eq!(selection, Selection::new());
}

#[test]
fn out_of_range_duration_selection_is_a_no_op() {
    let catalog = catalog();
    let mut selection = Selection::new();
    selection.select_product(&catalog, 0);
    let before = selection.clone();
    selection.select_duration(&catalog, 99);
    assert_eq!(selection, before);
}

#[test]
fn buy_requires_a_complete_selection() {
    let catalog = catalog();
    let mut selection = Selection::new();
    assert!(!selection.can_buy(&catalog));
    assert!(selection.buy(&catalog).is_none());

    selection.select_product(&catalog, 0);
    assert!(!selection.can_buy(&catalog));
    assert!(selection.buy(&catalog).is_none());

    selection.select_duration(&catalog, 0);
    assert!(selection.can_buy(&catalog));
    assert!(selection.buy(&catalog).is_some());
}

#[test]
fn buy_freezes_the_published_tool_tier() {
    let catalog = catalog();
    let mut selection = Selection::new();
    selection.select_product(&catalog, 0);
    selection.select_duration(&catalog, 2);
    assert_eq!(
        selection.buy(&catalog),
        Some(CheckoutPayload {
            product_name: "Vexor Software Tool".to_string(),
            duration_label: "1 maand".to_string(),
            price: 14.99,
        })
    );
}

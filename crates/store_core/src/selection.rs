//! Transient product/duration selection inside the catalog view.

use shared::domain::{CheckoutPayload, Product, Tier};
use tracing::warn;

use crate::catalog::Catalog;

/// Resolved view of the current selection indices.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSelection<'a> {
    pub product: Option<&'a Product>,
    pub tier: Option<&'a Tier>,
}

/// Two optional indices into the catalog. The duration index is only
/// meaningful while a product is selected; every product selection resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    product: Option<usize>,
    duration: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a product and unconditionally clears any chosen duration.
    /// Out-of-range indices are ignored rather than allowed to corrupt the
    /// selection; the view only hands out indices from the catalog itself.
    pub fn select_product(&mut self, catalog: &Catalog, index: usize) {
        if index >= catalog.len() {
            warn!(
                index,
                products = catalog.len(),
                "ignoring out-of-range product selection"
            );
            return;
        }
        self.product = Some(index);
        self.duration = None;
    }

    /// Picks a duration tier for the currently selected product.
    pub fn select_duration(&mut self, catalog: &Catalog, index: usize) {
        let Some(product) = self.product.and_then(|i| catalog.product(i)) else {
            warn!(index, "ignoring duration selection without a product");
            return;
        };
        if index >= product.tiers().len() {
            warn!(
                index,
                product = product.name(),
                tiers = product.tiers().len(),
                "ignoring out-of-range duration selection"
            );
            return;
        }
        self.duration = Some(index);
    }

    pub fn product_index(&self) -> Option<usize> {
        self.product
    }

    pub fn duration_index(&self) -> Option<usize> {
        self.duration
    }

    /// Pure projection of the indices onto the catalog.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> CurrentSelection<'a> {
        let product = self.product.and_then(|i| catalog.product(i));
        let tier = product.and_then(|p| self.duration.and_then(|j| p.tiers().get(j)));
        CurrentSelection { product, tier }
    }

    /// Derived, never stored: a purchase needs both a product and a duration.
    pub fn can_buy(&self, catalog: &Catalog) -> bool {
        self.current(catalog).tier.is_some()
    }

    /// Freezes the current selection into a checkout payload, or nothing when
    /// the selection is incomplete.
    pub fn buy(&self, catalog: &Catalog) -> Option<CheckoutPayload> {
        let CurrentSelection { product, tier } = self.current(catalog);
        let (product, tier) = (product?, tier?);
        Some(CheckoutPayload {
            product_name: product.name().to_string(),
            duration_label: tier.label.clone(),
            price: tier.price,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

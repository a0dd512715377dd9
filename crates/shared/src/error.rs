use thiserror::Error;

/// Rejects invalid compiled-in catalog data at startup. Nothing else in the
/// storefront can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("product '{product}' has no duration tiers")]
    EmptyTiers { product: String },
    #[error("product '{product}' tier '{label}' has invalid price {price}")]
    InvalidPrice {
        product: String,
        label: String,
        price: f64,
    },
}

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::links;

/// A purchasable duration option with its price in euros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub label: String,
    pub price: f64,
}

impl Tier {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// A catalog entry. Tier order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    image_ref: String,
    tiers: Vec<Tier>,
}

impl Product {
    /// Builds a product, rejecting data that would leave the storefront with
    /// nothing to sell or a nonsense price.
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        tiers: Vec<Tier>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if tiers.is_empty() {
            return Err(CatalogError::EmptyTiers { product: name });
        }
        // `!(price >= 0)` also rejects NaN.
        if let Some(tier) = tiers.iter().find(|tier| !(tier.price >= 0.0)) {
            return Err(CatalogError::InvalidPrice {
                product: name,
                label: tier.label.clone(),
                price: tier.price,
            });
        }
        Ok(Self {
            name,
            image_ref: image_ref.into(),
            tiers,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque asset identifier, resolved by the presentation layer.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }
}

/// Frozen snapshot of a completed selection, carried onto the checkout page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPayload {
    pub product_name: String,
    pub duration_label: String,
    pub price: f64,
}

/// The six storefront pages. Closed enumeration so every consumer handles
/// all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Products,
    Checkout,
    Team,
    About,
    Support,
}

impl Page {
    /// Pages with a navbar button. Checkout is reachable only through a buy.
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::Products,
        Page::Team,
        Page::About,
        Page::Support,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Products => "Products",
            Page::Checkout => "Checkout",
            Page::Team => "Our Team",
            Page::About => "About Us",
            Page::Support => "Support",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::Checkout => "checkout",
            Page::Team => "team",
            Page::About => "about",
            Page::Support => "support",
        }
    }

    pub fn from_slug(raw: &str) -> Option<Page> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Page::Home),
            "products" => Some(Page::Products),
            "checkout" => Some(Page::Checkout),
            "team" => Some(Page::Team),
            "about" => Some(Page::About),
            "support" => Some(Page::Support),
            _ => None,
        }
    }
}

/// Payment hand-off options on the checkout page. Each method carries its own
/// outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[serde(rename = "paypal")]
    PayPal,
    Litecoin,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::PayPal, PaymentMethod::Litecoin];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Litecoin => "Litecoin",
        }
    }

    pub fn payment_url(self) -> &'static str {
        match self {
            PaymentMethod::PayPal => links::PAYPAL_PAYMENT_URL,
            PaymentMethod::Litecoin => links::LITECOIN_PAYMENT_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, PaymentMethod, Product, Tier};
    use crate::error::CatalogError;

    #[test]
    fn page_slugs_round_trip() {
        for page in [
            Page::Home,
            Page::Products,
            Page::Checkout,
            Page::Team,
            Page::About,
            Page::Support,
        ] {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("  Products "), Some(Page::Products));
        assert_eq!(Page::from_slug("shop"), None);
    }

    #[test]
    fn page_serializes_as_its_slug() {
        let json = serde_json::to_string(&Page::Products).expect("serialize page");
        assert_eq!(json, "\"products\"");
    }

    #[test]
    fn payment_methods_keep_site_identifiers() {
        let paypal = serde_json::to_string(&PaymentMethod::PayPal).expect("serialize method");
        let litecoin = serde_json::to_string(&PaymentMethod::Litecoin).expect("serialize method");
        assert_eq!(paypal, "\"paypal\"");
        assert_eq!(litecoin, "\"litecoin\"");
    }

    #[test]
    fn product_requires_at_least_one_tier() {
        let err = Product::new("Empty", "/empty.png", Vec::new()).expect_err("empty tiers");
        assert_eq!(
            err,
            CatalogError::EmptyTiers {
                product: "Empty".to_string()
            }
        );
    }

    #[test]
    fn product_rejects_negative_prices() {
        let err = Product::new("Broken", "/broken.png", vec![Tier::new("1 dag", -1.0)])
            .expect_err("negative price");
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
    }
}

//! Read-only product catalog with the compiled-in storefront data.

use shared::domain::{Product, Tier};
use shared::error::CatalogError;

/// Ordered, immutable sequence of products. Constructed once at startup and
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's compiled-in catalog. Validation only exists to catch
    /// bad edits to this data before the window opens.
    pub fn builtin() -> Result<Self, CatalogError> {
        let products = vec![
            Product::new(
                "Vexor Software Tool",
                "/product1.png",
                vec![
                    Tier::new("1 dag", 4.99),
                    Tier::new("1 week", 9.99),
                    Tier::new("1 maand", 14.99),
                    Tier::new("Lifetime", 29.99),
                ],
            )?,
            Product::new(
                "Vexor Software Spoofer",
                "/product2.png",
                vec![
                    Tier::new("1 dag", 5.99),
                    Tier::new("1 week", 11.99),
                    Tier::new("1 maand", 19.99),
                    Tier::new("Lifetime", 39.99),
                ],
            )?,
        ];
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

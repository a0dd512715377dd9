//! Pure state layer for the storefront: the read-only catalog, the transient
//! product/duration selection, and the page navigation machine. No I/O and no
//! rendering; the GUI crate drives these through explicit operations.

pub mod catalog;
pub mod navigation;
pub mod selection;

pub use catalog::Catalog;
pub use navigation::Navigation;
pub use selection::{CurrentSelection, Selection};

#[cfg(test)]
mod tests;

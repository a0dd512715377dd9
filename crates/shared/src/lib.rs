//! Shared storefront domain: catalog entities, pages, payment methods, and
//! the external links the site points at.

pub mod domain;
pub mod error;
pub mod links;

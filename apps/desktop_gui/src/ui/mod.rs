//! UI layer for the storefront: app shell, page renderers, and theme.

pub mod app;
pub mod pages;
pub mod theme;

//! Flat page navigation with the checkout hand-off.

use shared::domain::{CheckoutPayload, Page};

/// Process-lifetime navigation state: the active page, the optional checkout
/// payload, and a one-shot scroll notification for the catalog section.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    active: Page,
    checkout: Option<CheckoutPayload>,
    scroll_to_catalog: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            active: Page::Home,
            checkout: None,
            scroll_to_catalog: false,
        }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    /// Switches pages. Entering the products page from anywhere else queues a
    /// one-shot scroll to the catalog section. The checkout payload is left in
    /// place when navigating away, so returning to checkout directly re-shows
    /// the last hand-off.
    pub fn go_to(&mut self, page: Page) {
        if page == Page::Products && self.active != Page::Products {
            self.scroll_to_catalog = true;
        }
        self.active = page;
    }

    /// The only way a checkout payload is populated: freeze the payload and
    /// land on the checkout page in one step.
    pub fn go_to_checkout(&mut self, payload: CheckoutPayload) {
        self.checkout = Some(payload);
        self.active = Page::Checkout;
    }

    /// Raw payload, regardless of the active page.
    pub fn checkout_payload(&self) -> Option<&CheckoutPayload> {
        self.checkout.as_ref()
    }

    /// Guarded payload for rendering: present only while checkout is active.
    /// Absence means the main content slot renders empty.
    pub fn checkout_view(&self) -> Option<&CheckoutPayload> {
        if self.active == Page::Checkout {
            self.checkout.as_ref()
        } else {
            None
        }
    }

    /// Consumes the pending scroll notification. Returns true exactly once
    /// per transition into the products page.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_catalog)
    }
}

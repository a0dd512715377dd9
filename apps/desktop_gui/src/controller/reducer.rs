//! Reducer: applies UI actions to the store state and returns the side
//! effects to run. All transitions are synchronous; nothing here blocks,
//! suspends, or fails.

use shared::domain::{Page, PaymentMethod};
use shared::links;
use store_core::{Catalog, Navigation, Selection};
use tracing::debug;

use super::actions::{UiAction, UiEffect};

/// Ephemeral checkout form drafts. Never persisted, discarded on leaving the
/// checkout page.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub method: PaymentMethod,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            method: PaymentMethod::PayPal,
        }
    }
}

impl CheckoutForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Everything the storefront mutates at runtime. Owned exclusively by the
/// rendering cycle; only `apply` transitions it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub catalog: Catalog,
    pub navigation: Navigation,
    pub selection: Selection,
    pub checkout_form: CheckoutForm,
}

impl StoreState {
    pub fn new(catalog: Catalog, start_page: Page) -> Self {
        let mut navigation = Navigation::new();
        if start_page != Page::Home {
            navigation.go_to(start_page);
        }
        Self {
            catalog,
            navigation,
            selection: Selection::new(),
            checkout_form: CheckoutForm::default(),
        }
    }
}

pub fn apply(state: &mut StoreState, action: UiAction) -> Vec<UiEffect> {
    debug!(action = action.name(), "applying ui action");
    match action {
        UiAction::Navigate(page) => {
            let previous = state.navigation.active();
            state.navigation.go_to(page);
            // The catalog view owns the selection and the checkout page owns
            // the form drafts; leaving either discards its scoped state.
            if previous == Page::Products && page != Page::Products {
                state.selection.reset();
            }
            if previous == Page::Checkout && page != Page::Checkout {
                state.checkout_form.clear();
            }
            Vec::new()
        }
        UiAction::SelectProduct(index) => {
            state.selection.select_product(&state.catalog, index);
            Vec::new()
        }
        UiAction::SelectDuration(index) => {
            state.selection.select_duration(&state.catalog, index);
            Vec::new()
        }
        UiAction::Buy => {
            match state.selection.buy(&state.catalog) {
                Some(payload) => {
                    state.selection.reset();
                    state.checkout_form.clear();
                    state.navigation.go_to_checkout(payload);
                }
                // The buy button is disabled without a duration; an action
                // that slips through anyway stays a no-op.
                None => debug!("ignoring buy without a complete selection"),
            }
            Vec::new()
        }
        UiAction::Pay(method) => vec![UiEffect::OpenUrl(method.payment_url().to_string())],
        UiAction::CopyPaymentLink(method) => {
            vec![UiEffect::CopyToClipboard(method.payment_url().to_string())]
        }
        UiAction::OpenCommunityInvite => {
            vec![UiEffect::OpenUrl(links::DISCORD_INVITE_URL.to_string())]
        }
        UiAction::OpenSupportEmail => vec![UiEffect::OpenUrl(links::support_mailto_url())],
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{CheckoutPayload, Page, PaymentMethod};
    use shared::links;
    use store_core::{Catalog, Selection};

    use super::{apply, CheckoutForm, StoreState};
    use crate::controller::actions::{UiAction, UiEffect};

    fn fresh_state() -> StoreState {
        StoreState::new(Catalog::builtin().expect("builtin catalog"), Page::Home)
    }

    #[test]
    fn starts_on_the_requested_page() {
        let state = StoreState::new(Catalog::builtin().expect("builtin catalog"), Page::Team);
        assert_eq!(state.navigation.active(), Page::Team);
    }

    #[test]
    fn buy_without_a_duration_changes_nothing() {
        let mut state = fresh_state();
        apply(&mut state, UiAction::Navigate(Page::Products));
        apply(&mut state, UiAction::SelectProduct(0));
        let effects = apply(&mut state, UiAction::Buy);
        assert!(effects.is_empty());
        assert_eq!(state.navigation.active(), Page::Products);
        assert!(state.navigation.checkout_payload().is_none());
    }

    #[test]
    fn buy_freezes_the_selection_and_lands_on_checkout() {
        let mut state = fresh_state();
        apply(&mut state, UiAction::Navigate(Page::Products));
        apply(&mut state, UiAction::SelectProduct(0));
        apply(&mut state, UiAction::SelectDuration(2));
        apply(&mut state, UiAction::Buy);
        assert_eq!(state.navigation.active(), Page::Checkout);
        assert_eq!(
            state.navigation.checkout_view(),
            Some(&CheckoutPayload {
                product_name: "Vexor Software Tool".to_string(),
                duration_label: "1 maand".to_string(),
                price: 14.99,
            })
        );
        assert_eq!(state.selection, Selection::new());
    }

    #[test]
    fn direct_checkout_navigation_shows_an_empty_slot() {
        let mut state = fresh_state();
        apply(&mut state, UiAction::Navigate(Page::Checkout));
        assert_eq!(state.navigation.active(), Page::Checkout);
        assert!(state.navigation.checkout_view().is_none());
    }

    #[test]
    fn leaving_the_catalog_discards_the_selection() {
        let mut state = fresh_state();
        apply(&mut state, UiAction::Navigate(Page::Products));
        apply(&mut state, UiAction::SelectProduct(1));
        apply(&mut state, UiAction::SelectDuration(3));
        apply(&mut state, UiAction::Navigate(Page::Home));
        assert_eq!(state.selection, Selection::new());
    }

    #[test]
    fn leaving_checkout_clears_drafts_but_keeps_the_payload() {
        let mut state = fresh_state();
        apply(&mut state, UiAction::Navigate(Page::Products));
        apply(&mut state, UiAction::SelectProduct(0));
        apply(&mut state, UiAction::SelectDuration(1));
        apply(&mut state, UiAction::Buy);

        state.checkout_form.name = "Alice".to_string();
        state.checkout_form.method = PaymentMethod::Litecoin;
        apply(&mut state, UiAction::Navigate(Page::Home));
        assert_eq!(state.checkout_form, CheckoutForm::default());
        assert!(state.navigation.checkout_payload().is_some());

        // Direct navigation back re-shows the retained payload.
        apply(&mut state, UiAction::Navigate(Page::Checkout));
        assert!(state.navigation.checkout_view().is_some());
    }

    #[test]
    fn payment_actions_target_the_chosen_method() {
        let mut state = fresh_state();
        assert_eq!(
            apply(&mut state, UiAction::Pay(PaymentMethod::PayPal)),
            vec![UiEffect::OpenUrl(links::PAYPAL_PAYMENT_URL.to_string())]
        );
        assert_eq!(
            apply(&mut state, UiAction::CopyPaymentLink(PaymentMethod::Litecoin)),
            vec![UiEffect::CopyToClipboard(
                links::LITECOIN_PAYMENT_URL.to_string()
            )]
        );
    }

    #[test]
    fn community_and_support_links_open_externally() {
        let mut state = fresh_state();
        assert_eq!(
            apply(&mut state, UiAction::OpenCommunityInvite),
            vec![UiEffect::OpenUrl(links::DISCORD_INVITE_URL.to_string())]
        );
        assert_eq!(
            apply(&mut state, UiAction::OpenSupportEmail),
            vec![UiEffect::OpenUrl(links::support_mailto_url())]
        );
    }
}

//! Actions emitted by the view layer and the side effects they produce.

use shared::domain::{Page, PaymentMethod};

/// A discrete user-initiated action. Every state mutation flows through one
/// of these, in the order the user triggered them.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(Page),
    SelectProduct(usize),
    SelectDuration(usize),
    Buy,
    Pay(PaymentMethod),
    CopyPaymentLink(PaymentMethod),
    OpenCommunityInvite,
    OpenSupportEmail,
}

impl UiAction {
    /// Stable name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Navigate(_) => "navigate",
            UiAction::SelectProduct(_) => "select_product",
            UiAction::SelectDuration(_) => "select_duration",
            UiAction::Buy => "buy",
            UiAction::Pay(_) => "pay",
            UiAction::CopyPaymentLink(_) => "copy_payment_link",
            UiAction::OpenCommunityInvite => "open_community_invite",
            UiAction::OpenSupportEmail => "open_support_email",
        }
    }
}

/// Outward side effects requested by the reducer and executed by the app
/// shell against the windowing context.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    OpenUrl(String),
    CopyToClipboard(String),
}

//! External collaborators: community invite, payment providers, support
//! contact. All opaque URLs as far as the state layer is concerned.

/// Community invite shown on the home and support pages.
pub const DISCORD_INVITE_URL: &str = "https://discord.gg/vexorgg";

/// PayPal.me checkout link.
pub const PAYPAL_PAYMENT_URL: &str = "https://paypal.me/vexorsoftwares";

/// Litecoin checkout link. The site publishes the PayPal link for this method
/// as well; kept verbatim until a real Litecoin address exists.
pub const LITECOIN_PAYMENT_URL: &str = "https://paypal.me/vexorsoftwares";

pub const SUPPORT_EMAIL: &str = "vexorsoftwares@gmail.com";

pub fn support_mailto_url() -> String {
    format!("mailto:{SUPPORT_EMAIL}")
}

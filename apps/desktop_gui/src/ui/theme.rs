//! Storefront palette and egui visual tuning.

use eframe::egui;
use eframe::egui::{Color32, Stroke};

pub const APP_BACKGROUND: Color32 = Color32::from_rgb(0x07, 0x06, 0x0a);
pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(0x0f, 0x0f, 0x1f);
pub const ACCENT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8);
pub const ACCENT_TEXT: Color32 = Color32::BLACK;
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf7);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0xb0, 0xb0, 0xbc);
pub const CARD_STROKE: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x3a);

/// Applies the dark storefront look. Called once before the first frame.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = APP_BACKGROUND;
    visuals.window_fill = PANEL_BACKGROUND;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, CARD_STROKE);
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT_TEXT);
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}

/// Frame for content cards, mirroring the site's rounded dark panels.
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(PANEL_BACKGROUND)
        .corner_radius(14.0)
        .stroke(Stroke::new(1.0, CARD_STROKE))
        .inner_margin(egui::Margin::symmetric(20, 18))
}

/// Primary call-to-action button: accent fill, dark text.
pub fn accent_button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.into())
            .strong()
            .color(ACCENT_TEXT),
    )
    .fill(ACCENT)
    .corner_radius(8.0)
}

/// Picker row: quiet fill that lights up for the selected entry.
pub fn picker_button(label: &str, selected: bool) -> egui::Button<'static> {
    let fill = if selected {
        PANEL_BACKGROUND
    } else {
        Color32::TRANSPARENT
    };
    let stroke = if selected {
        Stroke::new(1.0, ACCENT)
    } else {
        Stroke::new(1.0, CARD_STROKE)
    };
    egui::Button::new(egui::RichText::new(label.to_string()).color(TEXT_PRIMARY))
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
}

/// Secondary button: transparent fill with a thin outline.
pub fn outline_button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, CARD_STROKE))
        .corner_radius(8.0)
}

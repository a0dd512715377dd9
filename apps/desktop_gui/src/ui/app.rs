//! Application shell: persistent navbar and footer, the page switch, and
//! execution of the side effects the reducer requests.

use std::path::PathBuf;

use arboard::Clipboard;
use eframe::egui;
use shared::domain::Page;
use store_core::Catalog;
use tracing::debug;

use crate::controller::actions::{UiAction, UiEffect};
use crate::controller::reducer::{self, StoreState};
use crate::media::ImageCache;
use crate::ui::{pages, theme};

pub struct StorefrontApp {
    state: StoreState,
    images: ImageCache,
    status: String,
    theme_applied: bool,
}

impl StorefrontApp {
    pub fn new(catalog: Catalog, start_page: Page, assets_dir: PathBuf) -> Self {
        Self {
            state: StoreState::new(catalog, start_page),
            images: ImageCache::new(assets_dir),
            status: String::new(),
            theme_applied: false,
        }
    }

    fn show_navbar(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("storefront_navbar")
            .frame(
                egui::Frame::NONE
                    .fill(theme::APP_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some((texture, _)) = self.images.texture(ctx, "/vexorgg.png") {
                        ui.add(
                            egui::Image::new(&texture).fit_to_exact_size(egui::vec2(36.0, 36.0)),
                        );
                    }
                    ui.label(egui::RichText::new("Vexor").size(22.0).strong());
                    ui.label(
                        egui::RichText::new("Softwares")
                            .size(22.0)
                            .strong()
                            .color(theme::ACCENT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Right-to-left layout places the last page first, so
                        // iterate reversed to keep the visual order.
                        for page in Page::NAV.iter().rev() {
                            let active = self.state.navigation.active() == *page;
                            if ui.selectable_label(active, page.title()).clicked() {
                                actions.push(UiAction::Navigate(*page));
                            }
                        }
                    });
                });
            });
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("storefront_footer")
            .frame(
                egui::Frame::NONE
                    .fill(theme::APP_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.small(
                        egui::RichText::new("Vexor.gg – quality software, smart choice.")
                            .color(theme::TEXT_DIM),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !self.status.is_empty() {
                            ui.small(egui::RichText::new(&self.status).weak());
                        }
                    });
                });
            });
    }

    fn show_page(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Self { state, images, .. } = self;
        let StoreState {
            catalog,
            navigation,
            selection,
            checkout_form,
        } = state;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::APP_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(24, 18)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("storefront_page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| match navigation.active() {
                        Page::Home => pages::home(ui, actions),
                        Page::Products => {
                            let scroll_to_catalog = navigation.take_scroll_request();
                            pages::products(
                                ui,
                                catalog,
                                selection,
                                images,
                                scroll_to_catalog,
                                actions,
                            );
                        }
                        Page::Checkout => {
                            // Defensive guard: direct navigation without a buy
                            // leaves the main slot empty.
                            if let Some(payload) = navigation.checkout_view() {
                                pages::checkout(ui, payload, checkout_form, actions);
                            }
                        }
                        Page::Team => pages::team(ui, images),
                        Page::About => pages::about(ui),
                        Page::Support => pages::support(ui, actions),
                    });
            });
    }

    fn run_effects(&mut self, ctx: &egui::Context, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::OpenUrl(url) => {
                    debug!(%url, "opening external link");
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
                UiEffect::CopyToClipboard(text) => {
                    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
                        Ok(()) => self.status = "Payment link copied to clipboard".to_string(),
                        Err(err) => self.status = format!("Clipboard unavailable: {err}"),
                    }
                }
            }
        }
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        let mut actions = Vec::new();
        self.show_navbar(ctx, &mut actions);
        self.show_footer(ctx);
        self.show_page(ctx, &mut actions);

        let mut effects = Vec::new();
        for action in actions {
            effects.extend(reducer::apply(&mut self.state, action));
        }
        self.run_effects(ctx, effects);
    }
}

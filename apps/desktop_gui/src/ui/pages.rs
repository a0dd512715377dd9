//! Page renderers. Each function draws one page's content and pushes the
//! actions the user triggered; no page mutates store state directly.

use eframe::egui;
use shared::domain::{CheckoutPayload, Page, PaymentMethod};
use shared::links;
use store_core::{Catalog, Selection};

use crate::controller::actions::UiAction;
use crate::controller::reducer::CheckoutForm;
use crate::media::ImageCache;
use crate::ui::theme;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image_ref: &'static str,
    duties: [&'static str; 3],
}

const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Patron",
        role: "Owner",
        image_ref: "/patron.png",
        duties: ["Spoofer creator", "Designer", "Website creator"],
    },
    TeamMember {
        name: "Slome",
        role: "Owner",
        image_ref: "/slome.png",
        duties: ["Cheat creator", "Designer", "Website creator"],
    },
];

fn page_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(30.0)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(12.0);
}

pub fn home(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    ui.add_space(28.0);
    ui.label(
        egui::RichText::new("RULE THE GAME")
            .size(44.0)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(10.0);
    ui.label(
        egui::RichText::new(
            "High-quality digital products with secure access, dedicated support, \
             and a creative team powering everything.",
        )
        .size(16.0)
        .color(theme::TEXT_DIM),
    );
    ui.add_space(18.0);
    ui.horizontal(|ui| {
        if ui
            .add(theme::accent_button("View Products").min_size(egui::vec2(150.0, 40.0)))
            .clicked()
        {
            actions.push(UiAction::Navigate(Page::Products));
        }
        if ui
            .add(theme::outline_button("Join Discord").min_size(egui::vec2(130.0, 40.0)))
            .clicked()
        {
            actions.push(UiAction::OpenCommunityInvite);
        }
    });
}

pub fn products(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    selection: &Selection,
    images: &mut ImageCache,
    scroll_to_catalog: bool,
    actions: &mut Vec<UiAction>,
) {
    let heading = ui.label(
        egui::RichText::new("Our Products Bundle")
            .size(30.0)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    if scroll_to_catalog {
        heading.scroll_to_me(Some(egui::Align::Min));
    }
    ui.add_space(12.0);

    ui.horizontal_top(|ui| {
        // Product picker column.
        ui.vertical(|ui| {
            ui.set_width(220.0);
            for (index, product) in catalog.products().iter().enumerate() {
                let selected = selection.product_index() == Some(index);
                let response = ui.add_sized(
                    [ui.available_width(), 44.0],
                    theme::picker_button(product.name(), selected),
                );
                if response.clicked() {
                    actions.push(UiAction::SelectProduct(index));
                }
                ui.add_space(6.0);
            }
        });
        ui.add_space(14.0);

        let current = selection.current(catalog);
        match current.product {
            Some(product) => {
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_top(|ui| {
                        match images.texture(ui.ctx(), product.image_ref()) {
                            Some((texture, size)) => {
                                ui.add(
                                    egui::Image::new(&texture)
                                        .fit_to_exact_size(fit_within(size, egui::vec2(192.0, 192.0))),
                                );
                            }
                            None => placeholder_image(ui, product.name(), egui::vec2(192.0, 160.0)),
                        }
                        ui.add_space(14.0);

                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(product.name())
                                    .size(22.0)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            );
                            ui.add_space(8.0);

                            ui.horizontal_wrapped(|ui| {
                                for (index, tier) in product.tiers().iter().enumerate() {
                                    let chosen = selection.duration_index() == Some(index);
                                    let text = format!("{} (€{:.2})", tier.label, tier.price);
                                    if ui.selectable_label(chosen, text).clicked() {
                                        actions.push(UiAction::SelectDuration(index));
                                    }
                                }
                            });
                            ui.add_space(8.0);

                            let summary = match current.tier {
                                Some(tier) => {
                                    format!("Check it: {} (€{:.2})", tier.label, tier.price)
                                }
                                None => "Select a duration".to_string(),
                            };
                            ui.label(egui::RichText::new(summary).color(theme::TEXT_DIM));
                            ui.add_space(10.0);

                            let can_buy = current.tier.is_some();
                            let buy = ui.add_enabled(
                                can_buy,
                                theme::accent_button("Buy Now").min_size(egui::vec2(130.0, 38.0)),
                            );
                            if buy.clicked() {
                                actions.push(UiAction::Buy);
                            }
                        });
                    });
                });
            }
            None => {
                ui.label(
                    egui::RichText::new("Pick a product to see durations and pricing.")
                        .color(theme::TEXT_DIM),
                );
            }
        }
    });
}

pub fn checkout(
    ui: &mut egui::Ui,
    payload: &CheckoutPayload,
    form: &mut CheckoutForm,
    actions: &mut Vec<UiAction>,
) {
    page_heading(ui, "Checkout");

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width().min(560.0));
        ui.label(
            egui::RichText::new(&payload.product_name)
                .size(22.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(format!(
                "Selected: {} (€{:.2})",
                payload.duration_label, payload.price
            ))
            .color(theme::TEXT_DIM),
        );
        ui.add_space(12.0);

        ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("Your Name")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("Your Email")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Payment method:").color(theme::TEXT_DIM));
            for method in PaymentMethod::ALL {
                ui.selectable_value(&mut form.method, method, method.label());
            }
        });
        ui.add_space(12.0);

        let pay_label = format!("Pay with {}", form.method.label());
        if ui
            .add(theme::accent_button(pay_label).min_size(egui::vec2(180.0, 40.0)))
            .clicked()
        {
            actions.push(UiAction::Pay(form.method));
        }
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.add(theme::outline_button("Copy payment link")).clicked() {
                actions.push(UiAction::CopyPaymentLink(form.method));
            }
            if ui.add(theme::outline_button("Cancel")).clicked() {
                actions.push(UiAction::Navigate(Page::Products));
            }
        });
    });
}

pub fn team(ui: &mut egui::Ui, images: &mut ImageCache) {
    page_heading(ui, "Our Team");

    ui.horizontal_top(|ui| {
        for member in &TEAM {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(260.0);
                ui.vertical_centered(|ui| {
                    match images.texture(ui.ctx(), member.image_ref) {
                        Some((texture, size)) => {
                            ui.add(
                                egui::Image::new(&texture)
                                    .fit_to_exact_size(fit_within(size, egui::vec2(96.0, 96.0))),
                            );
                        }
                        None => placeholder_image(ui, member.name, egui::vec2(96.0, 96.0)),
                    }
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(member.name)
                            .size(18.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(egui::RichText::new(member.role).color(theme::TEXT_DIM));
                    ui.add_space(6.0);
                    for duty in member.duties {
                        ui.label(
                            egui::RichText::new(format!("• {duty}"))
                                .small()
                                .color(theme::TEXT_DIM),
                        );
                    }
                });
            });
            ui.add_space(14.0);
        }
    });
}

pub fn about(ui: &mut egui::Ui) {
    page_heading(ui, "About Us");

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.spacing_mut().item_spacing.y = 10.0;
        for paragraph in [
            "At Vexor.gg, we believe everyone should have access to high-quality software \
             without paying a fortune. We specialize in providing external software that is \
             reliable, effective, and easy to use.",
            "Our mission is simple: deliver quality at a fair price. We carefully select our \
             products to ensure our customers get only the best, with no hidden costs or hassle.",
            "At Vexor.gg, trust and customer satisfaction are at the heart of everything we do. \
             Whether you're a gamer, professional, or software enthusiast, we provide the tools \
             that help you RULE THE GAME.",
            "Vexor.gg – quality software, smart choice.",
        ] {
            ui.label(egui::RichText::new(paragraph).color(theme::TEXT_DIM));
        }
    });
}

pub fn support(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    page_heading(ui, "Support");

    ui.horizontal_top(|ui| {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(280.0);
            ui.label(
                egui::RichText::new("Email Support")
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Send us a message:").color(theme::TEXT_DIM));
            if ui
                .link(egui::RichText::new(links::SUPPORT_EMAIL).color(theme::ACCENT))
                .clicked()
            {
                actions.push(UiAction::OpenSupportEmail);
            }
        });
        ui.add_space(14.0);
        theme::card_frame().show(ui, |ui| {
            ui.set_width(280.0);
            ui.label(
                egui::RichText::new("Discord")
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Join our Discord server for fast help:")
                    .color(theme::TEXT_DIM),
            );
            if ui
                .add(theme::accent_button("discord.gg/vexorgg"))
                .clicked()
            {
                actions.push(UiAction::OpenCommunityInvite);
            }
        });
    });
}

fn fit_within(size: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    let scale = (bounds.x / size.x).min(bounds.y / size.y).min(1.0);
    size * scale
}

fn placeholder_image(ui: &mut egui::Ui, name: &str, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, 8.0, theme::APP_BACKGROUND);
    ui.painter().rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, theme::CARD_STROKE),
        egui::StrokeKind::Inside,
    );
    let initial = name.chars().next().unwrap_or('?');
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(28.0),
        theme::TEXT_DIM,
    );
}

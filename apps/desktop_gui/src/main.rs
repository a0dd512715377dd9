//! Desktop storefront for the Vexor digital products catalog.

mod controller;
mod media;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use shared::domain::Page;
use store_core::Catalog;

use crate::ui::app::StorefrontApp;

#[derive(Debug, Parser)]
#[command(
    name = "vexor-storefront",
    about = "Desktop storefront for Vexor digital products"
)]
struct Cli {
    /// Page to open at startup (home, products, checkout, team, about,
    /// support).
    #[arg(long, default_value = "home", value_parser = parse_page)]
    page: Page,

    /// Directory holding product and team images. Falls back to
    /// VEXOR_ASSETS_DIR, then ./assets.
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

fn parse_page(raw: &str) -> Result<Page, String> {
    Page::from_slug(raw).ok_or_else(|| {
        format!("unknown page '{raw}' (expected one of: home, products, checkout, team, about, support)")
    })
}

fn resolve_assets_dir(cli_override: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli_override {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("VEXOR_ASSETS_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let cwd = std::env::current_dir().context("could not resolve current directory for assets")?;
    Ok(cwd.join("assets"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin().context("invalid built-in catalog data")?;
    let assets_dir = resolve_assets_dir(cli.assets_dir)?;
    tracing::info!(
        assets_dir = %assets_dir.display(),
        start_page = cli.page.slug(),
        "starting storefront"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Vexor Softwares")
            .with_inner_size([1160.0, 780.0])
            .with_min_inner_size([880.0, 600.0]),
        ..Default::default()
    };
    let start_page = cli.page;
    eframe::run_native(
        "Vexor Storefront",
        options,
        Box::new(move |_cc| Ok(Box::new(StorefrontApp::new(catalog, start_page, assets_dir)))),
    )
    .map_err(|err| anyhow!("storefront ui exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{parse_page, Cli};
    use clap::Parser;
    use shared::domain::Page;

    #[test]
    fn parses_known_page_slugs() {
        assert_eq!(parse_page("products"), Ok(Page::Products));
        assert_eq!(parse_page("Team"), Ok(Page::Team));
        // Checkout is accepted too; the view guard renders an empty slot
        // since no payload exists yet.
        assert_eq!(parse_page("checkout"), Ok(Page::Checkout));
        assert!(parse_page("shop").is_err());
    }

    #[test]
    fn cli_defaults_to_the_home_page() {
        let cli = Cli::try_parse_from(["vexor-storefront"]).expect("parse");
        assert_eq!(cli.page, Page::Home);
        assert!(cli.assets_dir.is_none());
    }

    #[test]
    fn cli_accepts_page_and_assets_overrides() {
        let cli = Cli::try_parse_from(["vexor-storefront", "--page", "team", "--assets-dir", "art"])
            .expect("parse");
        assert_eq!(cli.page, Page::Team);
        assert_eq!(cli.assets_dir.as_deref(), Some(std::path::Path::new("art")));
    }
}

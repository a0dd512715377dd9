//! Product and team imagery: a disk-backed texture cache. Missing or
//! undecodable assets fall back to a placeholder drawn by the caller.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use eframe::egui;
use egui::TextureHandle;
use image::GenericImageView;
use tracing::warn;

// The layout never shows imagery larger than this.
const MAX_DIMENSION: f32 = 360.0;

enum ImageState {
    Ready {
        texture: TextureHandle,
        size: egui::Vec2,
    },
    Failed,
}

pub struct ImageCache {
    root: PathBuf,
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: HashMap::new(),
        }
    }

    /// Returns the texture for an image ref, decoding and caching it on first
    /// use. `None` means the caller should draw its placeholder.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        image_ref: &str,
    ) -> Option<(TextureHandle, egui::Vec2)> {
        if !self.entries.contains_key(image_ref) {
            let state = load_image(ctx, &self.root, image_ref);
            self.entries.insert(image_ref.to_string(), state);
        }
        match self.entries.get(image_ref) {
            Some(ImageState::Ready { texture, size }) => Some((texture.clone(), *size)),
            _ => None,
        }
    }
}

fn load_image(ctx: &egui::Context, root: &Path, image_ref: &str) -> ImageState {
    let path = resolve_asset_path(root, image_ref);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(image_ref, path = %path.display(), %err, "missing image asset");
            return ImageState::Failed;
        }
    };
    let decoded = match image::load_from_memory(&bytes) {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!(image_ref, path = %path.display(), %err, "undecodable image asset");
            return ImageState::Failed;
        }
    };

    let (orig_w, orig_h) = decoded.dimensions();
    let scale = (MAX_DIMENSION / (orig_w.max(orig_h).max(1) as f32)).min(1.0);
    let resized = if scale < 1.0 {
        decoded.resize(
            (orig_w as f32 * scale).max(1.0) as u32,
            (orig_h as f32 * scale).max(1.0) as u32,
            image::imageops::FilterType::Triangle,
        )
    } else {
        decoded
    };
    let rgba = resized.to_rgba8();
    let [w, h] = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
    let texture = ctx.load_texture(
        format!("asset:{image_ref}"),
        color_image,
        egui::TextureOptions::LINEAR,
    );
    ImageState::Ready {
        texture,
        size: egui::vec2(w as f32, h as f32),
    }
}

/// Image refs come out of the catalog as site-absolute paths ("/product1.png")
/// and resolve relative to the assets root.
fn resolve_asset_path(root: &Path, image_ref: &str) -> PathBuf {
    root.join(image_ref.trim_start_matches(['/', '\\']))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::resolve_asset_path;

    #[test]
    fn strips_leading_slashes_from_image_refs() {
        assert_eq!(
            resolve_asset_path(Path::new("assets"), "/product1.png"),
            Path::new("assets").join("product1.png")
        );
    }

    #[test]
    fn keeps_plain_relative_refs() {
        assert_eq!(
            resolve_asset_path(Path::new("assets"), "team/patron.png"),
            Path::new("assets").join("team").join("patron.png")
        );
    }
}

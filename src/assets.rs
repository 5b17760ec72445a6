//! Stylesheet and images read once at startup.
//!
//! Every asset is optional: a missing file is logged and the page renders
//! without it (text badges replace missing avatars).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::config::settings::UiSettings;
use crate::core::config::AppPaths;

pub const LOGO: &str = "logo";
pub const BOT_AVATAR: &str = "bot-avatar";
pub const USER_AVATAR: &str = "user-avatar";

#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct AssetBundle {
    stylesheet: Option<String>,
    images: HashMap<&'static str, ImageAsset>,
}

impl AssetBundle {
    pub fn load(paths: &AppPaths, ui: &UiSettings) -> Self {
        let stylesheet_path = paths.resolve(&ui.stylesheet);
        let stylesheet = match fs::read_to_string(&stylesheet_path) {
            Ok(css) => Some(css),
            Err(err) => {
                tracing::warn!(
                    "CSS file not found at {} ({}). Skipping custom styles.",
                    stylesheet_path.display(),
                    err
                );
                None
            }
        };

        let mut images = HashMap::new();
        for (name, raw_path) in [
            (LOGO, &ui.logo),
            (BOT_AVATAR, &ui.bot_avatar),
            (USER_AVATAR, &ui.user_avatar),
        ] {
            let path = paths.resolve(raw_path);
            match load_image(&path) {
                Some(image) => {
                    images.insert(name, image);
                }
                None => tracing::warn!(
                    "Image '{}' not available at {}; rendering without it",
                    name,
                    path.display()
                ),
            }
        }

        Self { stylesheet, images }
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    pub fn image(&self, name: &str) -> Option<&ImageAsset> {
        self.images.get(name)
    }

    pub fn has_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }
}

fn load_image(path: &Path) -> Option<ImageAsset> {
    let content_type = content_type_for(path)?;
    let bytes = fs::read(path).ok()?;
    Some(ImageAsset {
        content_type,
        bytes,
    })
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

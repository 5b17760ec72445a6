use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use minijinja::{context, Environment};

use crate::assets::{AssetBundle, BOT_AVATAR, LOGO, USER_AVATAR};
use crate::core::config::settings::UiSettings;
use crate::core::errors::ApiError;
use crate::state::AppState;

const PAGE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!("../../../assets/index.html");

pub async fn index(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let page = render_page(&state.settings.ui, &state.assets).map_err(ApiError::internal)?;
    Ok(Html(page))
}

pub async fn stylesheet(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let css = state
        .assets
        .stylesheet()
        .ok_or_else(|| ApiError::NotFound("Stylesheet not loaded".to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css.to_string()))
}

pub async fn image(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let image = state
        .assets
        .image(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Image not found: {}", name)))?;
    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes.clone()))
}

/// Renders the chat page. `.html` templates are auto-escaped, so configured
/// text is inserted as plain text.
pub fn render_page(ui: &UiSettings, assets: &AssetBundle) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(PAGE_NAME, PAGE_TEMPLATE)?;
    env.get_template(PAGE_NAME)?.render(context! {
        title => ui.title,
        tagline => ui.tagline,
        input_placeholder => ui.input_placeholder,
        stylesheet_loaded => assets.stylesheet().is_some(),
        logo_url => image_url(assets, LOGO),
        bot_avatar_url => image_url(assets, BOT_AVATAR),
        user_avatar_url => image_url(assets, USER_AVATAR),
    })
}

fn image_url(assets: &AssetBundle, name: &str) -> String {
    if assets.has_image(name) {
        format!("/static/images/{}", name)
    } else {
        String::new()
    }
}

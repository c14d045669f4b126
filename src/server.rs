use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;
use serde_json::json;

use crate::{
    collector::Preset,
    composer::PromptComposer,
    error::PromptError,
    gallery,
    models::PromptRequest,
    storage::FavoritesManager,
};

pub struct AppState {
    pub composer: PromptComposer,
    pub favorites: FavoritesManager,
}

impl AppState {
    pub fn new(composer: PromptComposer, favorites: FavoritesManager) -> Self {
        Self {
            composer,
            favorites,
        }
    }
}

impl ResponseError for PromptError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.summary(),
            "details": self.details(),
        }))
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteBody {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .route("/generate-prompt", web::post().to(generate_prompt))
                .route("/favorites", web::get().to(list_favorites))
                .route("/favorites", web::post().to(add_favorite))
                .route("/favorites", web::delete().to(remove_favorite))
                .route("/presets", web::get().to(presets))
                .route("/gallery", web::get().to(gallery_items)),
        );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn generate_prompt(
    state: web::Data<AppState>,
    request: web::Json<PromptRequest>,
) -> HttpResponse {
    let response = state.composer.respond(&request).await;
    if response.is_success() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::InternalServerError().json(response)
    }
}

async fn list_favorites(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.favorites.list().await)
}

async fn add_favorite(
    state: web::Data<AppState>,
    body: web::Json<FavoriteBody>,
) -> Result<HttpResponse, PromptError> {
    let favorites = state.favorites.add(&body.prompt).await?;
    Ok(HttpResponse::Ok().json(favorites))
}

async fn remove_favorite(
    state: web::Data<AppState>,
    body: web::Json<FavoriteBody>,
) -> Result<HttpResponse, PromptError> {
    let favorites = state.favorites.remove(&body.prompt).await?;
    Ok(HttpResponse::Ok().json(favorites))
}

async fn presets() -> HttpResponse {
    HttpResponse::Ok().json(Preset::builtin())
}

async fn gallery_items(query: web::Query<GalleryQuery>) -> HttpResponse {
    match query.category.as_deref() {
        Some(category) => HttpResponse::Ok().json(gallery::by_category(category)),
        None => HttpResponse::Ok().json(gallery::items()),
    }
}

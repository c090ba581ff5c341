//! Axum request handlers for the HTTP API.
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};
use crate::prompt::constructor::GENERAL_STYLE;

pub async fn root() -> &'static str {
    "Ghibli Art Proxy"
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

struct Upload {
    bytes: Vec<u8>,
    file_name: Option<String>,
}

/// `multipart/form-data` with an `image` file and optional `prompt`.
pub async fn generate_from_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let request_id = Uuid::new_v4();
    let mut upload: Option<Upload> = None;
    let mut prompt: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                upload = Some(Upload { bytes: bytes.to_vec(), file_name });
            }
            Some("prompt") => {
                prompt = Some(field.text().await.map_err(bad_multipart)?);
            }
            other => {
                tracing::debug!(%request_id, field = ?other, "Ignoring multipart field");
            }
        }
    }

    let upload = match upload {
        Some(u) if !u.bytes.is_empty() => u,
        _ => return Err(AppError::InvalidRequest("Missing 'image' file".to_string())),
    };
    tracing::info!(
        %request_id,
        engine = state.service.engine_id(),
        file_name = ?upload.file_name,
        bytes = upload.bytes.len(),
        has_prompt = prompt.is_some(),
        "Generating Ghibli art from image"
    );

    let png = state.service
        .create_ghibli_art(upload.bytes, upload.file_name.as_deref(), prompt.as_deref())
        .await?;
    Ok(image_response(png))
}

#[derive(Debug, Deserialize)]
pub struct TextToImageForm {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// `application/x-www-form-urlencoded` with optional `prompt` and `style`.
pub async fn generate_from_text(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TextToImageForm>,
) -> AppResult<Response> {
    let request_id = Uuid::new_v4();
    let style = form.style.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or(GENERAL_STYLE);
    tracing::info!(
        %request_id,
        engine = state.service.engine_id(),
        style,
        has_prompt = form.prompt.is_some(),
        "Generating Ghibli art from text"
    );

    let png = state.service
        .create_ghibli_art_from_text(form.prompt.as_deref(), style)
        .await?;
    Ok(image_response(png))
}

fn image_response(bytes: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "image/png")], bytes).into_response()
}

fn bad_multipart(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.to_string())
    } else {
        AppError::InvalidRequest(format!("Malformed multipart body: {}", e))
    }
}

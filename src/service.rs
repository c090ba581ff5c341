//! Glue between request preparation and the Stability client.
use std::path::Path;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::prompt::constructor::{PromptConstructor, IMAGE_STYLE_PRESET};
use crate::stability::client::StabilityClient;
use crate::stability::request::{ImageToImageRequest, TextToImageRequest};
use crate::utils::image_ops;

/// File name sent for the init image when the upload had none.
pub const DEFAULT_UPLOAD_NAME: &str = "image.jpg";

#[derive(Clone)]
pub struct GhibliArtService {
    client: StabilityClient,
    engine_id: String,
    prompts: PromptConstructor,
}

impl GhibliArtService {
    pub fn new(client: StabilityClient, engine_id: String) -> Self {
        GhibliArtService { client, engine_id, prompts: PromptConstructor::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = StabilityClient::new(config.stability_url.clone(), config.stability_api_key.clone());
        Self::new(client, config.engine_id.clone())
    }

    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }

    /// Ghibli-style art from an uploaded image and optional prompt.
    pub async fn create_ghibli_art(
        &self,
        image: Vec<u8>,
        file_name: Option<&str>,
        prompt: Option<&str>,
    ) -> AppResult<Vec<u8>> {
        let init_image = tokio::task::spawn_blocking(move || image_ops::prepare_init_image(&image))
            .await
            .map_err(|e| AppError::Internal(format!("image preparation task failed: {}", e)))??;

        let request = ImageToImageRequest {
            init_image,
            file_name: jpeg_file_name(file_name),
            prompt: self.prompts.image_prompt(prompt),
            style_preset: IMAGE_STYLE_PRESET.to_string(),
        };
        self.client.generate_image_from_image(&self.engine_id, request).await
    }

    /// Ghibli-style art from a text prompt and style keyword.
    pub async fn create_ghibli_art_from_text(&self, prompt: Option<&str>, style: &str) -> AppResult<Vec<u8>> {
        let request = TextToImageRequest::new(self.prompts.text_prompt(prompt), self.prompts.style_preset(style));
        self.client.generate_image_from_text(&self.engine_id, &request).await
    }
}

/// Upload name with its extension swapped for `.jpg`, matching the re-encoded bytes.
pub fn jpeg_file_name(file_name: Option<&str>) -> String {
    file_name
        .and_then(|n| Path::new(n).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(|stem| format!("{}.jpg", stem))
        .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string())
}

//! Thin HTTP client for the Stability AI generation endpoints.
//!
//! - `generate_image_from_image` posts multipart to `.../image-to-image`.
//! - `generate_image_from_text` posts JSON to `.../text-to-image`.
//!
//! Both authenticate with a bearer token and return the PNG bytes unchanged.
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};

use crate::error::{AppError, AppResult};
use crate::stability::request::{ImageToImageRequest, TextToImageRequest};

#[derive(Clone)]
pub struct StabilityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StabilityClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        StabilityClient { client: Client::new(), base_url: base, api_key }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, engine_id: &str, operation: &str) -> String {
        format!("{}/v1/generation/{}/{}", self.base_url, engine_id, operation)
    }

    /// Generate an image from an init image plus prompt.
    pub async fn generate_image_from_image(
        &self,
        engine_id: &str,
        request: ImageToImageRequest,
    ) -> AppResult<Vec<u8>> {
        let url = self.endpoint(engine_id, "image-to-image");
        tracing::info!("Sending image-to-image request to {}", url);
        tracing::debug!(
            prompt = %request.prompt,
            style_preset = %request.style_preset,
            init_image_bytes = request.init_image.len(),
            "Image-to-image payload"
        );

        let form = request.into_form()?;
        let response = self.client.post(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "image/png")
            .multipart(form)
            .send()
            .await?;

        Self::read_image(response, "image-to-image").await
    }

    /// Generate an image from a text prompt.
    pub async fn generate_image_from_text(
        &self,
        engine_id: &str,
        request: &TextToImageRequest,
    ) -> AppResult<Vec<u8>> {
        let url = self.endpoint(engine_id, "text-to-image");
        tracing::info!("Sending text-to-image request to {}", url);
        tracing::debug!("Text-to-image payload: {:?}", request);

        let response = self.client.post(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "image/png")
            .json(request)
            .send()
            .await?;

        Self::read_image(response, "text-to-image").await
    }

    async fn read_image(response: Response, operation: &str) -> AppResult<Vec<u8>> {
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await?;
            tracing::info!("{} succeeded ({} bytes)", operation, bytes.len());
            Ok(bytes.to_vec())
        } else {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("{} failed. Status: {}, Body: {}", operation, status, body);
            Err(AppError::Stability { status: status.as_u16(), body })
        }
    }
}

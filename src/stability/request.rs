//! Request payloads for the Stability AI v1 generation endpoints.
use reqwest::multipart::{Form, Part};
use serde::Serialize;

pub const DEFAULT_CFG_SCALE: f64 = 7.0;
pub const DEFAULT_DIMENSION: u32 = 1024;
pub const DEFAULT_SAMPLES: u32 = 1;
pub const DEFAULT_STEPS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPrompt {
    pub text: String,
}

/// JSON body for `text-to-image`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextToImageRequest {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: f64,
    pub height: u32,
    pub width: u32,
    pub samples: u32,
    pub steps: u32,
    pub style_preset: String,
}

impl TextToImageRequest {
    pub fn new(text: impl Into<String>, style_preset: impl Into<String>) -> Self {
        TextToImageRequest {
            text_prompts: vec![TextPrompt { text: text.into() }],
            cfg_scale: DEFAULT_CFG_SCALE,
            height: DEFAULT_DIMENSION,
            width: DEFAULT_DIMENSION,
            samples: DEFAULT_SAMPLES,
            steps: DEFAULT_STEPS,
            style_preset: style_preset.into(),
        }
    }
}

/// Multipart body for `image-to-image`. `init_image` must already be JPEG.
#[derive(Debug, Clone)]
pub struct ImageToImageRequest {
    pub init_image: Vec<u8>,
    pub file_name: String,
    pub prompt: String,
    pub style_preset: String,
}

impl ImageToImageRequest {
    pub fn into_form(self) -> reqwest::Result<Form> {
        let part = Part::bytes(self.init_image)
            .file_name(self.file_name)
            .mime_str("image/jpeg")?;
        Ok(Form::new()
            .part("init_image", part)
            .text("text_prompts[0][text]", self.prompt)
            .text("style_preset", self.style_preset))
    }
}

//! Prompt and style preset construction for both generation paths.
//!
//! The image path forwards a user prompt untouched and falls back to a sketch
//! style default. The text path appends a fixed Ghibli style suffix to user
//! prompts and maps the caller's style keyword onto a provider preset.

pub const DEFAULT_IMAGE_PROMPT: &str = "cinematic style with pencil stroke image seems like a sketch ";
pub const DEFAULT_TEXT_PROMPT: &str =
    "A cute, naturalistic Studio Ghibli-style illustration, bright, magical, detailed, soft colors, charming scene";
pub const TEXT_PROMPT_SUFFIX: &str =
    ", in the beautiful, detailed Studio Ghibli anime style, soft colors, magical atmosphere";

/// Preset always used for image-to-image requests.
pub const IMAGE_STYLE_PRESET: &str = "cinematic";
/// Caller-facing style keyword that maps to [`IMAGE_STYLE_PRESET`].
pub const GENERAL_STYLE: &str = "general";

/// Presets the provider accepts for `style_preset`.
pub const KNOWN_STYLE_PRESETS: &[&str] = &[
    "analog-film",
    "anime",
    "cinematic",
    "comic-book",
    "digital-art",
    "enhance",
    "fantasy-art",
    "isometric",
    "line-art",
    "low-poly",
    "modeling-compound",
    "neon-punk",
    "origami",
    "photographic",
    "pixel-art",
    "3d-model",
    "tile-texture",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConstructor;

impl PromptConstructor {
    pub fn new() -> Self {
        PromptConstructor
    }

    /// Prompt for the image-to-image path.
    pub fn image_prompt(&self, prompt: Option<&str>) -> String {
        match non_blank(prompt) {
            Some(p) => p.to_string(),
            None => DEFAULT_IMAGE_PROMPT.to_string(),
        }
    }

    /// Prompt for the text-to-image path.
    pub fn text_prompt(&self, prompt: Option<&str>) -> String {
        match non_blank(prompt) {
            Some(p) => format!("{}{}", p, TEXT_PROMPT_SUFFIX),
            None => DEFAULT_TEXT_PROMPT.to_string(),
        }
    }

    /// Map a caller style keyword to a provider preset.
    ///
    /// Unknown presets are passed through; the provider is the authority.
    pub fn style_preset(&self, style: &str) -> String {
        let preset = if style == GENERAL_STYLE {
            IMAGE_STYLE_PRESET.to_string()
        } else {
            style.replace('_', "-")
        };
        if !is_known_style_preset(&preset) {
            tracing::warn!(style = %style, preset = %preset, "Style preset is not a known provider preset");
        }
        preset
    }
}

pub fn is_known_style_preset(preset: &str) -> bool {
    KNOWN_STYLE_PRESETS.contains(&preset)
}

/// No-break spaces and NEL count as prompt content; the information
/// separators U+001C..U+001F count as blank.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

fn non_blank(prompt: Option<&str>) -> Option<&str> {
    prompt.filter(|p| !p.chars().all(is_blank_char))
}

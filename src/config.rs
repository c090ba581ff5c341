//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Everything except the API key has a development default.
use std::env;

pub const DEFAULT_STABILITY_URL: &str = "https://api.stability.ai";
pub const DEFAULT_ENGINE_ID: &str = "stable-diffusion-xl-1024-v1-0";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct Config {
    pub stability_url: String,
    pub stability_api_key: String,
    pub engine_id: String,
    pub api_host: String,
    pub api_port: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    /// Fails only when `STABILITY_API_KEY` is unset or not unicode.
    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            stability_url: env::var("STABILITY_API_URL").unwrap_or_else(|_| DEFAULT_STABILITY_URL.to_string()),
            stability_api_key: env::var("STABILITY_API_KEY")?,
            engine_id: env::var("STABILITY_ENGINE_ID").unwrap_or_else(|_| DEFAULT_ENGINE_ID.to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8080".to_string()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }

    pub fn print_env_vars() {
        let key_state = match env::var("STABILITY_API_KEY") {
            Ok(k) => mask_secret(&k),
            Err(_) => "<unset>".to_string(),
        };
        tracing::info!("STABILITY_API_KEY: {}", key_state);
        for name in ["STABILITY_API_URL", "STABILITY_ENGINE_ID", "API_HOST", "API_PORT", "MAX_UPLOAD_BYTES"] {
            tracing::info!("{}: {}", name, env::var(name).unwrap_or_else(|_| "<unset>".to_string()));
        }
    }
}

fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 8 {
        return "****".to_string();
    }
    let tail: String = secret.chars().skip(len - 4).collect();
    format!("****{}", tail)
}

//! Runtime configuration for backend endpoints and animation timing.
//!
//! On the web the page is served by the prediction backend itself, so every
//! endpoint is a same-origin relative path. Desktop builds have no origin and
//! read the backend location from the environment instead:
//!
//! - `ECOMETER_API_BASE` (default `http://127.0.0.1:8000`)
//! - `ECOMETER_ANIMATION_MS` (default `500`, ignored unless positive)

use once_cell::sync::Lazy;

pub const PREDICT_PATH: &str = "/predict_json";
pub const INSIGHTS_PATH: &str = "/emission_insights";
pub const QR_CODE_PATH: &str = "/qr-code";

pub const DEFAULT_ANIMATION_MS: f64 = 500.0;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix joined in front of every endpoint path. Empty means same-origin.
    pub api_base: String,
    /// Duration of one animated number transition.
    pub animation_ms: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            animation_ms: DEFAULT_ANIMATION_MS,
        }
    }
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>, animation_ms: f64) -> Self {
        let api_base = api_base.into().trim().trim_end_matches('/').to_string();
        let animation_ms = if animation_ms.is_finite() && animation_ms > 0.0 {
            animation_ms
        } else {
            DEFAULT_ANIMATION_MS
        };
        Self {
            api_base,
            animation_ms,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn from_env() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_env() -> Self {
        let api_base =
            std::env::var("ECOMETER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let animation_ms = std::env::var("ECOMETER_ANIMATION_MS")
            .ok()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(DEFAULT_ANIMATION_MS);
        Self::new(api_base, animation_ms)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::from_env();
    tracing::debug!(api_base = %config.api_base, animation_ms = config.animation_ms, "config loaded");
    config
});

/// Process-wide configuration, resolved on first use.
pub fn get() -> &'static AppConfig {
    &CONFIG
}

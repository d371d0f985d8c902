//! HTTP client for the prediction backend.

use std::future::Future;

use crate::core::config::{self, AppConfig};
use crate::core::error::AppError;
use crate::insights::InsightsPayload;

use super::form::VehicleForm;
use super::result::MetricResult;

/// The two backend calls the page depends on. Tests substitute a fake.
pub trait PredictionBackend {
    fn predict(&self, form: &VehicleForm) -> impl Future<Output = Result<MetricResult, AppError>>;

    fn emission_insights(&self) -> impl Future<Output = Result<InsightsPayload, AppError>>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    predict_url: String,
    insights_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            predict_url: config.endpoint(config::PREDICT_PATH),
            insights_url: config.endpoint(config::INSIGHTS_PATH),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get())
    }
}

#[cfg(target_arch = "wasm32")]
impl PredictionBackend for HttpBackend {
    async fn predict(&self, form: &VehicleForm) -> Result<MetricResult, AppError> {
        use gloo_net::http::Request;

        let body = web_sys::FormData::new().map_err(js_error)?;
        for (name, value) in form.fields() {
            body.append_with_str(name, value).map_err(js_error)?;
        }

        let response = Request::post(&self.predict_url)
            .body(body)
            .map_err(|err| AppError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| AppError::Network(err.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                context: "Prediction",
                status: response.status(),
                body,
            });
        }

        response
            .json::<MetricResult>()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))
    }

    async fn emission_insights(&self) -> Result<InsightsPayload, AppError> {
        use gloo_net::http::Request;

        let response = Request::get(&self.insights_url)
            .send()
            .await
            .map_err(|err| AppError::Network(err.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                context: "Fetching emission insights",
                status: response.status(),
                body,
            });
        }

        response
            .json::<InsightsPayload>()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> AppError {
    AppError::Network(format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
impl PredictionBackend for HttpBackend {
    async fn predict(&self, form: &VehicleForm) -> Result<MetricResult, AppError> {
        let response = self
            .client
            .post(&self.predict_url)
            .form(&form.fields())
            .send()
            .await
            .map_err(|err| AppError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                context: "Prediction",
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<MetricResult>()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))
    }

    async fn emission_insights(&self) -> Result<InsightsPayload, AppError> {
        let response = self
            .client
            .get(&self.insights_url)
            .send()
            .await
            .map_err(|err| AppError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                context: "Fetching emission insights",
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<InsightsPayload>()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_config() {
        let backend = HttpBackend::new(&AppConfig::new("http://backend:8000/", 500.0));
        assert_eq!(backend.predict_url, "http://backend:8000/predict_json");
        assert_eq!(backend.insights_url, "http://backend:8000/emission_insights");
    }
}

//! HTTP client for the inventory REST collections.
//!
//! Every collection lives under a fixed base URL:
//! `GET {base}`, `POST {base}/save`, `PUT {base}/{id}`, `DELETE {base}/{id}`.
//! One attempt per call; the caller decides how to present a failure.

use crate::shared::config::base_url;
use contracts::domain::common::EntityKind;
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionClient {
    base: String,
}

impl CollectionClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn for_entity(kind: EntityKind) -> Self {
        Self::new(base_url(kind))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Вся коллекция целиком
    pub async fn list<R: DeserializeOwned>(&self) -> Result<Vec<R>, ApiError> {
        let response = Request::get(&self.base)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;
        let response = ensure_ok(response)?;
        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn create(&self, payload: &Value) -> Result<(), ApiError> {
        let request = Request::post(&format!("{}/save", self.base))
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;
        ensure_ok(response).map(|_| ())
    }

    pub async fn update(&self, id: &str, payload: &Value) -> Result<(), ApiError> {
        let request = Request::put(&format!("{}/{}", self.base, id))
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;
        ensure_ok(response).map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&format!("{}/{}", self.base, id))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;
        ensure_ok(response).map(|_| ())
    }
}

/// GET returning the raw body, used for report files
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;
    let response = ensure_ok(response)?;
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Http {
            status: response.status(),
        })
    }
}

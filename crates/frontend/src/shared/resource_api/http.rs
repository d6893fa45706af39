use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ResourceApi};
use crate::shared::api_utils::api_url;

/// `ResourceApi` over the browser fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpResourceApi;

fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::from_status(response.status()))
    }
}

#[async_trait(?Send)]
impl ResourceApi for HttpResourceApi {
    async fn create(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        let response = Request::post(&api_url(path))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(response)?;
        Ok(())
    }

    async fn update(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        let response = Request::patch(&api_url(path))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(response)?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::delete(&api_url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(response)?;
        Ok(())
    }
}

/// GET a JSON document
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    check_status(response)?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

//! Thin JSON client over `gloo-net` with a bounded timeout per request.

use super::api_error::{ApiError, ApiOperation};
use super::api_utils::api_url;
use super::config::AppConfig;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Put,
}

/// Race the request against the configured timeout
async fn with_timeout<F>(request: F, url: &str, operation: ApiOperation) -> Result<Response, ApiError>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    let timeout_ms = AppConfig::global().request_timeout_ms;
    match select(Box::pin(request), Box::pin(TimeoutFuture::new(timeout_ms))).await {
        Either::Left((Ok(response), _)) => ensure_ok(response, operation).await,
        Either::Left((Err(e), _)) => {
            log::warn!("request to {} failed: {}", url, e);
            Err(ApiError::transport(operation))
        }
        Either::Right(_) => {
            log::warn!("request to {} timed out after {} ms", url, timeout_ms);
            Err(ApiError::transport(operation))
        }
    }
}

async fn ensure_ok(response: Response, operation: ApiOperation) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} answered HTTP {}", response.url(), status);
    Err(ApiError::from_response(status, &body, operation))
}

/// `GET {base}{path}` decoded as JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let request = Request::get(&url).header("Accept", "application/json").send();
    let response = with_timeout(request, &url, ApiOperation::Load).await?;
    let text = response
        .text()
        .await
        .map_err(|_| ApiError::transport(ApiOperation::Load))?;
    serde_json::from_str(&text).map_err(|e| {
        log::warn!("unexpected payload from {}: {}", url, e);
        ApiError::transport(ApiOperation::Load)
    })
}

/// `POST`/`PUT` a JSON body; the response body is ignored
pub async fn write_json<B: Serialize>(
    method: WriteMethod,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let url = api_url(path);
    let builder = match method {
        WriteMethod::Post => Request::post(&url),
        WriteMethod::Put => Request::put(&url),
    };
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| {
            log::error!("failed to encode request body for {}: {}", url, e);
            ApiError::transport(ApiOperation::Save)
        })?;
    with_timeout(request.send(), &url, ApiOperation::Save)
        .await
        .map(|_| ())
}

/// `DELETE {base}{path}`
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    let request = Request::delete(&url).header("Accept", "application/json").send();
    with_timeout(request, &url, ApiOperation::Delete)
        .await
        .map(|_| ())
}

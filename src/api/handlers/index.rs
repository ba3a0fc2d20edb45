use crate::AppState;
use crate::api::error::AppError;
use crate::models::{IndexRequest, IndexResponse};
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Serve any request path as an index request.
///
/// This is the trigger boundary: the URI path becomes the event, and the
/// trigger-shaped result is lowered onto HTTP. Headers are copied over
/// and base64 bodies decoded back to raw bytes. The method is
/// deliberately not consulted; only the path routes.
pub async fn serve(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let request = IndexRequest::new(uri.path());
    let index_response = state.index.handle(&request).await?;

    let headers = build_headers(&index_response)?;

    let body = if index_response.is_base64_encoded {
        let bytes = BASE64
            .decode(index_response.body.as_bytes())
            .map_err(|e| AppError::Storage(e.into()))?;
        Body::from(bytes)
    } else {
        Body::from(index_response.body)
    };

    Ok((StatusCode::OK, headers, body).into_response())
}

fn build_headers(response: &IndexResponse) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    for (key, value) in &response.headers {
        headers.insert(
            HeaderName::try_from(key.as_str()).map_err(|e| AppError::Storage(e.into()))?,
            HeaderValue::try_from(value.as_str()).map_err(|e| AppError::Storage(e.into()))?,
        );
    }
    Ok(headers)
}

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::{
    request_id::RequestId,
    requests::{DecodeError, DeleteUrl},
    responses::Response,
    service::{DeleteError, UrlDeleter},
    validation::{Validate, ValidationErrors},
    Services,
};

pub const OP: &str = "handlers::url::delete";

#[derive(Debug, thiserror::Error)]
pub enum DeleteUrlError {
    #[error("request body is empty")]
    EmptyBody,
    #[error("failed to decode request body: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error("invalid request: {0}")]
    ValidationFailed(#[from] ValidationErrors),
    #[error("failed to delete url: {0}")]
    ExecutionFailed(#[from] DeleteError),
}

impl From<DecodeError> for DeleteUrlError {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::Empty => Self::EmptyBody,
            DecodeError::Malformed(error) => Self::MalformedBody(error),
        }
    }
}

/// Logs the real cause and renders what the caller gets to see. Only
/// validation failures are disclosed as-is.
impl From<DeleteUrlError> for Response {
    fn from(value: DeleteUrlError) -> Self {
        match value {
            DeleteUrlError::EmptyBody => {
                tracing::error!("request body is empty");
                Response::error("empty request")
            }
            DeleteUrlError::MalformedBody(error) => {
                tracing::error!(%error, "failed to decode request body");
                Response::error("failed to decode request")
            }
            DeleteUrlError::ValidationFailed(errors) => {
                tracing::error!(error = %errors, "invalid request");
                Response::error(errors.to_string())
            }
            DeleteUrlError::ExecutionFailed(error) => {
                tracing::error!(%error, "failed to delete url");
                Response::error("failed to delete url")
            }
        }
    }
}

/// Decodes, validates and deletes. Returns the deleted record id and the
/// alias from the request.
pub async fn execute(
    urls: &dyn UrlDeleter,
    body: &[u8],
) -> Result<(i64, String), DeleteUrlError> {
    let request = DeleteUrl::decode(body)?;
    request.validate()?;

    let id = urls.delete_url(&request.url, &request.alias).await?;

    Ok((id, request.alias))
}

/// `DELETE /url`
///
/// Always answers 200; the outcome is carried by the envelope.
#[tracing::instrument(name = "delete_url", skip_all, fields(op = OP, request_id = %request_id))]
pub async fn delete_url(
    State(services): State<Arc<Services>>,
    request_id: RequestId,
    body: Bytes,
) -> Json<Response> {
    let response = match execute(services.urls.as_ref(), &body).await {
        Ok((id, alias)) => {
            tracing::info!(id, "url deleted");
            Response::ok(alias)
        }
        Err(error) => error.into(),
    };

    Json(response)
}

use std::sync::{Arc, Mutex};

use axum::{
    async_trait,
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use sea_orm::DbErr;
use tower::ServiceExt;
use url_delete::{
    router,
    service::{DeleteError, UrlDeleter},
    Services,
};

pub type Calls = Arc<Mutex<Vec<(String, String)>>>;

/// In-memory stand-in for the storage layer that records every call.
pub struct StubDeleter {
    id: i64,
    failure: Option<fn() -> DeleteError>,
    calls: Calls,
}

impl StubDeleter {
    pub fn returning(id: i64) -> Self {
        Self {
            id,
            failure: None,
            calls: Calls::default(),
        }
    }

    pub fn failing(failure: fn() -> DeleteError) -> Self {
        Self {
            id: 0,
            failure: Some(failure),
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

#[async_trait]
impl UrlDeleter for StubDeleter {
    async fn delete_url(&self, url: &str, alias: &str) -> Result<i64, DeleteError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), alias.to_string()));

        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(self.id),
        }
    }
}

pub fn storage_down() -> DeleteError {
    DeleteError::Database(DbErr::Custom("pq: connection refused".to_string()))
}

pub fn app(deleter: StubDeleter) -> (Router, Calls) {
    let calls = deleter.calls();
    (router(Arc::new(Services::new(deleter))), calls)
}

pub struct Reply {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: String,
}

pub async fn send(app: Router, body: &str, request_id: Option<&str>) -> Reply {
    let mut request = Request::builder().method(Method::DELETE).uri("/url");
    if let Some(id) = request_id {
        request = request.header("x-request-id", id);
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .map(|value| value.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    Reply {
        status,
        request_id,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

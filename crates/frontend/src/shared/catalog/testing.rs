//! In-memory doubles for the catalog seams, used by unit tests

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use contracts::domain::a001_product::submission::MultipartPayload;
use futures::future::{self, LocalBoxFuture};
use serde_json::Value;

use super::{CatalogApi, CatalogError, Timer};
use crate::shared::navigation::Navigator;

/// Canned responses keyed by path; unknown paths fail like an unreachable host
#[derive(Default)]
pub struct FakeApi {
    responses: HashMap<String, Result<Value, CatalogError>>,
    submit_result: Option<Result<Value, CatalogError>>,
    requests: RefCell<Vec<String>>,
    submissions: RefCell<Vec<MultipartPayload<String>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), Ok(body));
        self
    }

    pub fn with_error(mut self, path: &str, error: CatalogError) -> Self {
        self.responses.insert(path.to_string(), Err(error));
        self
    }

    pub fn with_submit_result(mut self, result: Result<Value, CatalogError>) -> Self {
        self.submit_result = Some(result);
        self
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn submissions(&self) -> Vec<MultipartPayload<String>> {
        self.submissions.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CatalogApi for FakeApi {
    type Attachment = String;

    async fn get_json(&self, path: &str) -> Result<Value, CatalogError> {
        self.requests.borrow_mut().push(path.to_string());
        self.responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(CatalogError::FetchFailed("connection refused".into())))
    }

    async fn send_multipart(
        &self,
        payload: &MultipartPayload<String>,
    ) -> Result<Value, CatalogError> {
        self.submissions.borrow_mut().push(payload.clone());
        self.submit_result
            .clone()
            .unwrap_or_else(|| Ok(serde_json::json!({"data": {}})))
    }
}

/// Deadline that never fires
pub struct NeverTimer;

impl Timer for NeverTimer {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(future::pending())
    }
}

/// Deadline that has already passed
pub struct ExpiredTimer;

impl Timer for ExpiredTimer {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(future::ready(()))
    }
}

/// Records every navigation
#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

//! Transport seam between the catalog layer and the backend
//!
//! [`CatalogApi`] exposes raw JSON so that decoding into typed envelopes stays in
//! shared code ([`fetch_entity`], [`decode_envelope`]).

use async_trait::async_trait;
use contracts::domain::a001_product::submission::{MultipartPayload, SubmitMethod, IMAGE_PART};
use contracts::domain::common::envelope::ApiErrorBody;
use contracts::domain::common::{CatalogEntity, DataEnvelope};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::CatalogError;

#[async_trait(?Send)]
pub trait CatalogApi {
    /// Binary asset type attached to submissions
    type Attachment: Clone;

    /// GET `path`, returning the raw JSON body
    async fn get_json(&self, path: &str) -> Result<Value, CatalogError>;

    /// Issue one multipart POST/PUT
    async fn send_multipart(
        &self,
        payload: &MultipartPayload<Self::Attachment>,
    ) -> Result<Value, CatalogError>;
}

/// Unwrap `{ data: T }`; a body that does not match is a fetch failure
pub fn decode_envelope<T: DeserializeOwned>(body: Value) -> Result<T, CatalogError> {
    serde_json::from_value::<DataEnvelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| CatalogError::FetchFailed(format!("Failed to parse response: {}", e)))
}

/// Fetch one entity by identifier
pub async fn fetch_entity<E, A>(api: &A, id: &str) -> Result<E, CatalogError>
where
    E: CatalogEntity,
    A: CatalogApi + ?Sized,
{
    let body = api.get_json(&E::resource_path(id)).await?;
    decode_envelope(body)
}

// ============================================================================
// Browser implementation
// ============================================================================

/// gloo-net client; the bearer token is captured once when the client is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogApi {
    base_url: String,
    access_token: Option<String>,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn auth_header(&self) -> Result<String, CatalogError> {
        self.access_token
            .as_deref()
            .map(|token| format!("Bearer {}", token))
            .ok_or(CatalogError::NotAuthenticated)
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    type Attachment = web_sys::File;

    async fn get_json(&self, path: &str) -> Result<Value, CatalogError> {
        let auth_header = self.auth_header()?;

        let response = Request::get(&self.url(path))
            .header("Authorization", &auth_header)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::FetchFailed(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(CatalogError::FetchFailed(format!("HTTP {}", response.status())));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CatalogError::FetchFailed(format!("Failed to parse response: {}", e)))
    }

    async fn send_multipart(
        &self,
        payload: &MultipartPayload<web_sys::File>,
    ) -> Result<Value, CatalogError> {
        let auth_header = self.auth_header()?;
        let to_err = |e: wasm_bindgen::JsValue| CatalogError::SubmissionFailed(format!("{e:?}"));

        let form_data = web_sys::FormData::new().map_err(to_err)?;
        for (name, value) in &payload.fields {
            form_data.append_with_str(name, value).map_err(to_err)?;
        }
        if let Some(file) = &payload.image {
            form_data
                .append_with_blob_and_filename(IMAGE_PART, file, &file.name())
                .map_err(to_err)?;
        }

        let url = self.url(&payload.path);
        let builder: RequestBuilder = match payload.method {
            SubmitMethod::Post => Request::post(&url),
            SubmitMethod::Put => Request::put(&url),
        };
        let response = builder
            .header("Authorization", &auth_header)
            .body(form_data)
            .map_err(|e| CatalogError::SubmissionFailed(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| CatalogError::SubmissionFailed(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(CatalogError::SubmissionFailed(message));
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }
}

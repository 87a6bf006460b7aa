//! API gateway: typed, authenticated HTTP access to the remote service.
//!
//! [`FileApi`] is the seam between the engine and the network: the mutation
//! manager is generic over it, so orchestration logic is exercised in tests
//! against a scripted double while production wiring uses [`HttpGateway`].
//!
//! Every gateway call attaches the bearer credential and normalizes
//! failures into [`ApiError`] — callers never inspect raw transport errors.

use api::{ApiError, FileRecord, Visibility};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

/// Operations the remote file service exposes.
///
/// Download streams are fetched by direct navigation to the URL returned by
/// [`FileApi::download_url`], never through the JSON gateway.
#[async_trait]
pub trait FileApi: Send + Sync {
    /// Fetch the complete listing of the user's files.
    async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError>;

    /// Upload a file. The server always persists new files as private,
    /// whatever the caller intends to do with them afterwards.
    async fn upload(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<FileRecord, ApiError>;

    /// Set the visibility of an existing file.
    async fn set_visibility(&self, id: &str, visibility: Visibility) -> Result<(), ApiError>;

    /// Delete a single file.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// Build the direct-download URL for a file.
    fn download_url(&self, id: &str) -> String;
}

/// Error body shape the server uses for non-success responses.
///
/// A body that fails to parse is treated as an empty object, which falls
/// through to the synthesized `HTTP <status>` message.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Normalize a non-success response into an [`ApiError`].
fn status_error(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.error.unwrap_or_else(|| format!("HTTP {status}"));
    ApiError::Status { status, message }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// reqwest-backed implementation of [`FileApi`].
///
/// No request timeout is configured: operations are single-attempt and wait
/// as long as the server does.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    /// Create a gateway against `base_url`, authenticating every request
    /// with `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &body))
    }
}

#[async_trait]
impl FileApi for HttpGateway {
    async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        tracing::debug!("GET /api/files");
        let resp = self
            .http
            .get(self.url("/api/files"))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(transport)?;
        let resp = Self::ensure_success(resp).await?;

        let body = resp.text().await.map_err(transport)?;
        let records: Vec<FileRecord> = serde_json::from_str(&body)?;
        tracing::debug!("Listing fetched: {} records", records.len());
        Ok(records)
    }

    async fn upload(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<FileRecord, ApiError> {
        tracing::debug!("POST /api/files/upload ({}, {} bytes)", file_name, bytes.len());
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| ApiError::Transport(format!("invalid content type {mime_type}: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(self.url("/api/files/upload"))
            .header(AUTHORIZATION, self.bearer())
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        let resp = Self::ensure_success(resp).await?;

        let body = resp.text().await.map_err(transport)?;
        let record: FileRecord = serde_json::from_str(&body)?;
        Ok(record)
    }

    async fn set_visibility(&self, id: &str, visibility: Visibility) -> Result<(), ApiError> {
        tracing::debug!("PATCH /api/files/{}/visibility -> {}", id, visibility);
        let resp = self
            .http
            .patch(self.url(&format!("/api/files/{id}/visibility")))
            .header(AUTHORIZATION, self.bearer())
            .json(&serde_json::json!({ "visibility": visibility }))
            .send()
            .await
            .map_err(transport)?;
        Self::ensure_success(resp).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!("DELETE /api/files/{}", id);
        let resp = self
            .http
            .delete(self.url(&format!("/api/files/{id}")))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(transport)?;
        Self::ensure_success(resp).await?;
        Ok(())
    }

    fn download_url(&self, id: &str) -> String {
        self.url(&format!("/api/files/{id}/download"))
    }
}

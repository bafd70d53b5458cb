//! Route handlers and their request/response types.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis;
use crate::document::chat::revise_document;
use crate::document::merge::merge_suggestions;
use crate::document::templates::Customization;
use crate::document::{parse_clause_blocks, split_sections, ClauseSet, DocumentType};
use crate::error::DraftError;
use crate::export;

use super::AppState;

/// JSON error payload with the HTTP status it maps to.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        let status = match &err {
            DraftError::UnsupportedDocumentType(_) | DraftError::UnsupportedFormat(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            DraftError::Generation(_) => StatusCode::BAD_GATEWAY,
            DraftError::Extraction(_) | DraftError::Export(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = self.status.as_u16(), "request failed: {}", self.message);
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// One of: nda, service_agreement, employment_contract, rental_agreement.
    pub document_type: String,
    /// Header fields by template field name (e.g. EFFECTIVE_DATE, PARTY_A).
    #[serde(default)]
    pub details: HashMap<String, String>,
    /// Base text per fixed clause title; missing titles are generated from
    /// scratch.
    #[serde(default)]
    pub clauses: HashMap<String, String>,
    /// Free-text additional clauses in `Title: [content]` block form.
    #[serde(default)]
    pub other_clauses: String,
    #[serde(default)]
    pub customization: Customization,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub document_id: Uuid,
    pub document: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub document: String,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequest {
    pub document: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub file_name: String,
    pub content_base64: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub document: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub file_name: String,
    pub content_base64: String,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Assemble a new document from structured input.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let doc_type: DocumentType = request.document_type.parse()?;

    let other_clauses = if request.other_clauses.trim().is_empty() {
        ClauseSet::new()
    } else {
        parse_clause_blocks(&request.other_clauses)
    };

    let document = state
        .assembler
        .assemble(
            doc_type,
            &request.details,
            &request.clauses,
            &other_clauses,
            &request.customization,
        )
        .await?;

    Ok(Json(DocumentResponse {
        document_id: Uuid::new_v4(),
        document,
    }))
}

/// Revise the supplied document according to a chat message.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let document = revise_document(state.llm.as_ref(), &request.document, &request.message).await?;

    Ok(Json(DocumentResponse {
        document_id: Uuid::new_v4(),
        document,
    }))
}

/// Fold the document's suggestions block into its main content.
pub async fn merge(
    State(state): State<AppState>,
    Json(request): Json<MergeRequest>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let (main, suggestions) = split_sections(&request.document);
    let document = merge_suggestions(state.llm.as_ref(), &main, &suggestions).await?;

    Ok(Json(DocumentResponse {
        document_id: Uuid::new_v4(),
        document,
    }))
}

/// Analyze an uploaded PDF or DOCX.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let format = analysis::detect_format(&request.file_name)?;

    let bytes = BASE64
        .decode(request.content_base64.as_bytes())
        .map_err(|e| ApiError::bad_request(format!("invalid base64 payload: {}", e)))?;

    let text = analysis::extract_text(format, &bytes)?;
    let analysis = analysis::summarize_and_analyze(state.llm.as_ref(), &text).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// Export a document as DOCX, suggestions stripped.
pub async fn export(
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, ApiError> {
    let bytes = export::export_docx(&request.document)?;

    Ok(Json(ExportResponse {
        file_name: export::export_file_name(),
        content_base64: BASE64.encode(bytes),
    }))
}

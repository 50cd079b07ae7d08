//! Text extraction from uploaded resume files.
//!
//! PDF and DOCX parsing are CPU-bound and run on the blocking pool. Plain
//! text is decoded in place.

mod docx;

#[cfg(test)]
pub use docx::docx_fixture;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";

/// Types accepted at upload time. `extract_text` also reads plain text.
pub const UPLOAD_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOCX];

/// 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported format '{0}'")]
    UnsupportedFormat(String),

    #[error("file is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("failed to extract text from DOCX: {0}")]
    Docx(String),

    #[error("extraction task failed: {0}")]
    Task(String),
}

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// The MIME type without parameters, lowercased (`text/plain; charset=utf-8` → `text/plain`).
    pub fn mime(&self) -> String {
        self.content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }
}

/// Upload-time gate: PDF or DOCX only, at most `max_bytes`.
pub fn validate_upload(file: &UploadedFile, max_bytes: usize) -> Result<(), ExtractionError> {
    let mime = file.mime();
    if !UPLOAD_MIME_TYPES.contains(&mime.as_str()) {
        return Err(ExtractionError::UnsupportedFormat(mime));
    }
    if file.size() > max_bytes {
        return Err(ExtractionError::TooLarge {
            size: file.size(),
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Extracts readable text according to the file's MIME type.
pub async fn extract_text(file: &UploadedFile) -> Result<String, ExtractionError> {
    let mime = file.mime();
    debug!(
        "Extracting text from '{}' ({mime}, {} bytes)",
        file.name,
        file.size()
    );

    match mime.as_str() {
        MIME_PDF => extract_pdf(file.bytes.clone()).await,
        MIME_DOCX => extract_docx(file.bytes.clone()).await,
        MIME_TEXT => Ok(String::from_utf8_lossy(&file.bytes).into_owned()),
        _ => Err(ExtractionError::UnsupportedFormat(mime)),
    }
}

async fn extract_pdf(bytes: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))
}

async fn extract_docx(bytes: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || docx::extract_docx_text(&bytes))
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
}

//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::catalog::SELECTABLE_ROLES;
use crate::analysis::report::{render_report, REPORT_FILENAME};
use crate::analysis::scoring::score_label;
use crate::errors::AppError;
use crate::extraction::{extract_text, validate_upload, UploadedFile};
use crate::models::analysis::{AnalysisRequest, AnalysisResult, AnalyzeResponse};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub name: String,
    /// False for roles that borrow the default role's criteria.
    pub has_criteria: bool,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub default_role: String,
    pub roles: Vec<RoleSummary>,
}

/// Fields collected from the multipart upload form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    job_role: String,
    job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    let catalog = state.analyzer.catalog();
    let roles = SELECTABLE_ROLES
        .iter()
        .map(|name| {
            let criteria = catalog.criteria_for(name);
            RoleSummary {
                name: name.to_string(),
                has_criteria: catalog.find_role(name).is_some(),
                required_skills: criteria.required_skills.clone(),
            }
        })
        .collect();

    Json(RolesResponse {
        default_role: catalog.default_role().to_string(),
        roles,
    })
}

/// POST /api/v1/analyze
///
/// Analyzes resume text already in hand.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    run_analysis(&state, request).await.map(Json)
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `file` (PDF or DOCX), `job_role`, `job_description`.
/// Rejects before extraction when the file or both role and description are missing.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let blank_target = form.job_role.trim().is_empty()
        && form
            .job_description
            .as_deref()
            .map_or(true, |d| d.trim().is_empty());
    let file = match form.file {
        Some(file) if !blank_target => file,
        _ => return Err(AppError::MissingInput),
    };

    validate_upload(&file, state.config.max_upload_bytes)?;

    info!(
        "Extracting text from upload '{}' ({} bytes)",
        file.name,
        file.size()
    );
    let resume_text = extract_text(&file).await?;
    info!("Extracted text length: {}", resume_text.chars().count());

    let request = AnalysisRequest {
        resume_text,
        job_role: form.job_role,
        job_description: form.job_description,
    };
    run_analysis(&state, request).await.map(Json)
}

/// POST /api/v1/report
///
/// Renders an analysis as a downloadable plain-text report.
pub async fn handle_report(Json(result): Json<AnalysisResult>) -> impl IntoResponse {
    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{REPORT_FILENAME}\""),
        ),
    ];
    (headers, render_report(&result))
}

async fn run_analysis(
    state: &AppState,
    request: AnalysisRequest,
) -> Result<AnalyzeResponse, AppError> {
    let analysis_id = Uuid::new_v4();
    info!("Starting analysis {analysis_id} (role: '{}')", request.job_role);

    let result = state.analyzer.analyze(&request).await?;

    Ok(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        score_label: score_label(result.score),
        result,
    })
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                form.file = Some(UploadedFile {
                    name: file_name,
                    content_type,
                    bytes,
                });
            }
            "job_role" | "jobRole" => {
                form.job_role = field.text().await?;
            }
            "job_description" | "jobDescription" => {
                form.job_description = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

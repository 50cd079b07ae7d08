//! Analysis orchestrator — picks the required-skill set, makes the optional
//! inference call, and runs matcher → scorer → narrative.
//!
//! All-or-nothing: either a complete `AnalysisResult` or an `AppError`.
//! Inference failures are absorbed here and never reach the caller.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::matcher::{extract_skills_from_description, partition_skills, MatchMode};
use crate::analysis::narrative::{analyze_grammar, generate_suggestions, job_fit_narrative};
use crate::analysis::normalize::normalize;
use crate::analysis::scoring::{compute_score, skill_match_pct};
use crate::errors::AppError;
use crate::inference::prompts::build_analysis_prompt;
use crate::inference::InsightProvider;
use crate::models::analysis::{AnalysisRequest, AnalysisResult};

/// Resumes shorter than this (in characters) are rejected.
pub const MIN_RESUME_CHARS: usize = 50;

/// Cap on reported missing keywords. Found skills are never capped.
pub const MAX_MISSING_KEYWORDS: usize = 7;

/// Where the required-skill set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    /// Skills found in the job description.
    Description,
    /// No usable description; the role's criteria.
    Role,
    /// A description was given but named no known skill; the role's criteria.
    RoleFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequiredSkills {
    pub skills: Vec<String>,
    pub source: SkillSource,
}

/// A non-blank description takes priority over the role. Unknown roles use
/// the catalog's default role.
pub fn select_required_skills(
    catalog: &SkillCatalog,
    request: &AnalysisRequest,
    mode: MatchMode,
) -> RequiredSkills {
    let role_skills = || catalog.criteria_for(&request.job_role).required_skills.clone();

    match request.description() {
        Some(description) => {
            let extracted = extract_skills_from_description(catalog, description, mode);
            if extracted.is_empty() {
                RequiredSkills {
                    skills: role_skills(),
                    source: SkillSource::RoleFallback,
                }
            } else {
                RequiredSkills {
                    skills: extracted,
                    source: SkillSource::Description,
                }
            }
        }
        None => RequiredSkills {
            skills: role_skills(),
            source: SkillSource::Role,
        },
    }
}

/// The deterministic local engine. No input validation; callers gate on
/// `MIN_RESUME_CHARS` themselves.
pub fn run_local_analysis(
    catalog: &SkillCatalog,
    resume_text: &str,
    required: &[String],
    job_role: &str,
    mode: MatchMode,
) -> AnalysisResult {
    let normalized = normalize(resume_text);
    let partition = partition_skills(catalog, &normalized, required, mode);

    let match_pct = skill_match_pct(partition.found.len(), required.len());
    let score = compute_score(partition.found.len(), required.len(), resume_text);

    let missing_keywords: Vec<String> = partition
        .missing
        .into_iter()
        .take(MAX_MISSING_KEYWORDS)
        .collect();

    AnalysisResult {
        job_fit: job_fit_narrative(match_pct, job_role, &partition.found),
        grammar_issues: analyze_grammar(resume_text),
        suggestions: generate_suggestions(job_role, &missing_keywords, resume_text),
        missing_keywords,
        score,
        found_skills: partition.found,
    }
}

/// Shared, cheaply cloneable analyzer carried in `AppState`.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    catalog: Arc<SkillCatalog>,
    insight: Arc<dyn InsightProvider>,
    mode: MatchMode,
}

impl ResumeAnalyzer {
    pub fn new(
        catalog: Arc<SkillCatalog>,
        insight: Arc<dyn InsightProvider>,
        mode: MatchMode,
    ) -> Self {
        Self {
            catalog,
            insight,
            mode,
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Runs one full analysis.
    ///
    /// Errors: `MissingInput` when the resume is blank or neither role nor
    /// description is given; `InsufficientText` when the resume is shorter
    /// than `MIN_RESUME_CHARS`.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AppError> {
        validate_request(request)?;

        let required = select_required_skills(&self.catalog, request, self.mode);
        debug!(
            "Required skills ({:?}): {}",
            required.source,
            required.skills.join(", ")
        );

        // best effort only; the reply is not folded into the result
        let prompt = build_analysis_prompt(&request.resume_text, &request.job_role);
        match self.insight.insight(&prompt).await {
            Ok(text) => debug!("Inference insight received ({} chars), not used", text.len()),
            Err(e) => warn!("Inference unavailable, using local analysis: {e}"),
        }

        let result = run_local_analysis(
            &self.catalog,
            &request.resume_text,
            &required.skills,
            &request.job_role,
            self.mode,
        );

        info!(
            "Analysis complete: source={:?} found={}/{} score={}",
            required.source,
            result.found_skills.len(),
            required.skills.len(),
            result.score
        );

        Ok(result)
    }
}

fn validate_request(request: &AnalysisRequest) -> Result<(), AppError> {
    if request.resume_text.is_empty()
        || (request.job_role.trim().is_empty() && request.description().is_none())
    {
        return Err(AppError::MissingInput);
    }

    let length = request.resume_text.chars().count();
    if length < MIN_RESUME_CHARS {
        return Err(AppError::InsufficientText {
            length,
            minimum: MIN_RESUME_CHARS,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::inference::{InferenceError, NoopInsight};

    fn catalog() -> Arc<SkillCatalog> {
        Arc::new(SkillCatalog::builtin().unwrap())
    }

    fn analyzer() -> ResumeAnalyzer {
        ResumeAnalyzer::new(catalog(), Arc::new(NoopInsight), MatchMode::Substring)
    }

    fn request(resume: &str, role: &str, description: Option<&str>) -> AnalysisRequest {
        AnalysisRequest {
            resume_text: resume.to_string(),
            job_role: role.to_string(),
            job_description: description.map(str::to_string),
        }
    }

    const BACKEND_RESUME: &str = "Jane Doe. Backend engineer.\n\
        Experience: Developed REST APIs in Python and Node.js. Managed PostgreSQL databases.\n\
        Implemented Docker based deployments on AWS and improved latency by 30%.\n\
        Projects: payment ledger service.";

    /// Records calls and answers with a fixed reply or failure.
    struct CountingInsight {
        calls: AtomicUsize,
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl InsightProvider for CountingInsight {
        async fn insight(&self, _prompt: &str) -> Result<String, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(InferenceError::Api {
                    status: 503,
                    message: "model loading".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_frontend_scenario_scores_17() {
        let catalog = catalog();
        let required = catalog.criteria_for("Frontend Developer").required_skills.clone();
        let result = run_local_analysis(
            &catalog,
            "I used React and CSS.",
            &required,
            "Frontend Developer",
            MatchMode::Substring,
        );

        assert_eq!(result.found_skills, vec!["React", "CSS"]);
        assert_eq!(result.missing_keywords.len(), 7);
        assert_eq!(
            result.missing_keywords,
            vec!["JavaScript", "HTML", "TypeScript", "Vue", "Angular", "Responsive Design", "Git"]
        );
        assert_eq!(result.score, 17);
        assert!(result.job_fit.starts_with("Limited alignment with Frontend Developer"));
        assert_eq!(
            result.grammar_issues,
            "Resume appears too short; Needs more complete sentences"
        );
    }

    #[test]
    fn test_empty_required_set_is_safe() {
        let catalog = catalog();
        let result = run_local_analysis(
            &catalog,
            "Some resume text",
            &[],
            "Anything",
            MatchMode::Substring,
        );
        assert!(result.found_skills.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert!(result.score <= 100);
        assert!(result.job_fit.starts_with("Limited alignment"));
        assert!(!result.suggestions.contains("Add experience with key"));
    }

    #[test]
    fn test_found_skills_are_not_capped() {
        let catalog = catalog();
        let required = catalog.criteria_for("Frontend Developer").required_skills.clone();
        let resume = "React JavaScript HTML CSS TypeScript Vue Angular responsive Git Webpack";
        let result = run_local_analysis(
            &catalog,
            resume,
            &required,
            "Frontend Developer",
            MatchMode::Substring,
        );
        assert_eq!(result.found_skills.len(), 10);
        assert!(result.missing_keywords.is_empty());
        assert!(result.job_fit.contains("10 key skills including React, JavaScript, HTML"));
    }

    #[test]
    fn test_description_takes_priority_over_role() {
        let req = request(BACKEND_RESUME, "UI/UX Designer", Some("Docker and Terraform on Linux"));
        let required = select_required_skills(&catalog(), &req, MatchMode::Substring);
        assert_eq!(required.source, SkillSource::Description);
        assert_eq!(required.skills, vec!["Docker", "Terraform", "Linux"]);
    }

    #[test]
    fn test_description_without_skills_falls_back_to_role() {
        let req = request(BACKEND_RESUME, "DevOps Engineer", Some("Friendly people wanted"));
        let required = select_required_skills(&catalog(), &req, MatchMode::Substring);
        assert_eq!(required.source, SkillSource::RoleFallback);
        assert_eq!(required.skills[0], "Docker");
        assert_eq!(required.skills.len(), 10);
    }

    #[test]
    fn test_unknown_role_uses_frontend_criteria() {
        let req = request(BACKEND_RESUME, "Astronaut", None);
        let catalog = catalog();
        let required = select_required_skills(&catalog, &req, MatchMode::Substring);
        assert_eq!(required.source, SkillSource::Role);
        assert_eq!(
            required.skills,
            catalog.criteria_for("Frontend Developer").required_skills
        );
    }

    #[tokio::test]
    async fn test_short_resume_is_insufficient_text() {
        let resume = "x".repeat(40);
        let req = request(&resume, "", Some("We need strong React and Node.js skills"));
        let err = analyzer().analyze(&req).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientText {
                length: 40,
                minimum: 50
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_role_and_description_is_missing_input() {
        let req = request(BACKEND_RESUME, "  ", Some(""));
        let err = analyzer().analyze(&req).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput));
    }

    #[tokio::test]
    async fn test_empty_resume_is_missing_input() {
        let req = request("", "Backend Developer", None);
        let err = analyzer().analyze(&req).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput));
    }

    #[tokio::test]
    async fn test_whitespace_resume_is_validated_by_length() {
        let short = request(&" ".repeat(10), "Backend Developer", None);
        let err = analyzer().analyze(&short).await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientText { length: 10, .. }));

        let long = request(&" ".repeat(60), "Backend Developer", None);
        let result = analyzer().analyze(&long).await.unwrap();
        assert!(result.found_skills.is_empty());
    }

    #[tokio::test]
    async fn test_backend_resume_end_to_end() {
        let req = request(BACKEND_RESUME, "Backend Developer", None);
        let result = analyzer().analyze(&req).await.unwrap();

        assert_eq!(
            result.found_skills,
            vec!["Node.js", "Python", "SQL", "API", "Database", "PostgreSQL", "Docker", "AWS"]
        );
        assert_eq!(result.missing_keywords, vec!["Java", "MongoDB"]);
        assert!(result.job_fit.starts_with("Excellent fit for Backend Developer!"));
        assert!(result.score <= 100);
        assert!(result.suggestions.ends_with(
            "• Tailor your resume more specifically to Backend Developer by emphasizing relevant experience"
        ));
    }

    #[tokio::test]
    async fn test_inference_failure_is_absorbed() {
        let insight = Arc::new(CountingInsight {
            calls: AtomicUsize::new(0),
            reply: None,
        });
        let analyzer = ResumeAnalyzer::new(catalog(), insight.clone(), MatchMode::Substring);
        let req = request(BACKEND_RESUME, "Backend Developer", None);

        let result = analyzer.analyze(&req).await.unwrap();
        let baseline = analyzer_result_without_inference(&req).await;
        assert_eq!(result, baseline);
        assert_eq!(insight.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_inference_reply_is_not_incorporated() {
        let insight = Arc::new(CountingInsight {
            calls: AtomicUsize::new(0),
            reply: Some("Score: 99/100. Perfect candidate."),
        });
        let analyzer = ResumeAnalyzer::new(catalog(), insight.clone(), MatchMode::Substring);
        let req = request(BACKEND_RESUME, "Backend Developer", None);

        let result = analyzer.analyze(&req).await.unwrap();
        assert_eq!(result, analyzer_result_without_inference(&req).await);
        assert_eq!(insight.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_inference_call_when_validation_fails() {
        let insight = Arc::new(CountingInsight {
            calls: AtomicUsize::new(0),
            reply: Some("ignored"),
        });
        let analyzer = ResumeAnalyzer::new(catalog(), insight.clone(), MatchMode::Substring);
        let req = request("too short", "Backend Developer", None);

        assert!(analyzer.analyze(&req).await.is_err());
        assert_eq!(insight.calls.load(Ordering::SeqCst), 0);
    }

    async fn analyzer_result_without_inference(req: &AnalysisRequest) -> AnalysisResult {
        analyzer().analyze(req).await.unwrap()
    }
}

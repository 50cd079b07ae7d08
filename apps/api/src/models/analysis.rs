use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One analysis request. A non-blank `job_description` drives required-skill
/// selection; otherwise `job_role`'s criteria are used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default, alias = "resume_text")]
    pub resume_text: String,
    #[serde(default, alias = "job_role")]
    pub job_role: String,
    #[serde(default, alias = "job_description")]
    pub job_description: Option<String>,
}

impl AnalysisRequest {
    /// The description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// Outcome of one analysis. `found_skills` and the uncapped missing list
/// partition the required-skill set; `missing_keywords` holds at most seven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub job_fit: String,
    pub missing_keywords: Vec<String>,
    pub grammar_issues: String,
    pub suggestions: String,
    pub score: u32,
    pub found_skills: Vec<String>,
}

/// HTTP envelope around an `AnalysisResult`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub score_label: &'static str,
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_and_snake_case() {
        let camel: AnalysisRequest = serde_json::from_str(
            r#"{"resumeText": "text", "jobRole": "Data Analyst", "jobDescription": "SQL"}"#,
        )
        .unwrap();
        let snake: AnalysisRequest = serde_json::from_str(
            r#"{"resume_text": "text", "job_role": "Data Analyst", "job_description": "SQL"}"#,
        )
        .unwrap();
        assert_eq!(camel.job_role, snake.job_role);
        assert_eq!(camel.description(), Some("SQL"));
        assert_eq!(snake.description(), Some("SQL"));
    }

    #[test]
    fn test_request_role_and_description_default() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"resumeText": "text"}"#).unwrap();
        assert_eq!(req.job_role, "");
        assert!(req.job_description.is_none());
    }

    #[test]
    fn test_request_without_resume_defaults_to_empty() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"jobRole": "Backend Developer"}"#).unwrap();
        assert_eq!(req.resume_text, "");
        assert_eq!(req.job_role, "Backend Developer");
    }

    #[test]
    fn test_blank_description_is_ignored() {
        let req = AnalysisRequest {
            resume_text: "text".to_string(),
            job_role: "Data Analyst".to_string(),
            job_description: Some("   \n".to_string()),
        };
        assert_eq!(req.description(), None);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = AnalysisResult {
            job_fit: "fit".to_string(),
            missing_keywords: vec!["Git".to_string()],
            grammar_issues: "ok".to_string(),
            suggestions: "• tailor".to_string(),
            score: 42,
            found_skills: vec!["React".to_string()],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["jobFit"], "fit");
        assert_eq!(value["missingKeywords"][0], "Git");
        assert_eq!(value["grammarIssues"], "ok");
        assert_eq!(value["foundSkills"][0], "React");
        assert_eq!(value["score"], 42);
    }
}

//! Plain-text export of an analysis, offered as a download.

use crate::models::analysis::AnalysisResult;

pub const REPORT_FILENAME: &str = "resume-analysis-report.txt";

/// Renders the downloadable report. Free text; not meant to be parsed back.
pub fn render_report(result: &AnalysisResult) -> String {
    format!(
        "Resume Analysis Report

Job Fit: {}

Missing Keywords: {}

Grammar/Spelling Issues: {}

Suggestions to Improve:
{}

Final Resume Score: {}/100",
        result.job_fit,
        result.missing_keywords.join(", "),
        result.grammar_issues,
        result.suggestions,
        result.score
    )
}

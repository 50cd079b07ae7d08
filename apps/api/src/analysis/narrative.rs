//! Narrative feedback: grammar notes, job-fit prose, and improvement bullets.

use std::sync::LazyLock;

use regex::Regex;

pub const GRAMMAR_OK: &str = "Good grammar and formatting overall";

const MIN_GRAMMAR_LENGTH: usize = 100;
const MIN_SENTENCES: usize = 3;
const EXPAND_BELOW_LENGTH: usize = 500;

static QUANTIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+%|[0-9]+x|increased|decreased|improved")
        .expect("quantified-achievement pattern is valid")
});

/// Surface checks on the raw resume text, reported in a fixed order and
/// joined with "; ". Returns `GRAMMAR_OK` when no check fires.
pub fn analyze_grammar(text: &str) -> String {
    let mut issues = Vec::new();

    if text.chars().count() < MIN_GRAMMAR_LENGTH {
        issues.push("Resume appears too short");
    }
    if !text.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push("Missing proper capitalization");
    }
    if text.matches('.').count() < MIN_SENTENCES {
        issues.push("Needs more complete sentences");
    }
    if text.contains("  ") {
        issues.push("Multiple spaces detected");
    }

    if issues.is_empty() {
        GRAMMAR_OK.to_string()
    } else {
        issues.join("; ")
    }
}

/// Job-fit prose in three tiers: ≥70% strong, ≥40% partial, otherwise limited.
pub fn job_fit_narrative(skill_match_pct: f64, job_role: &str, found_skills: &[String]) -> String {
    if skill_match_pct >= 70.0 {
        let highlights: Vec<&str> = found_skills.iter().take(3).map(String::as_str).collect();
        format!(
            "Excellent fit for {job_role}! Your resume demonstrates strong alignment with {} key skills including {}. You show relevant experience and technical competencies.",
            found_skills.len(),
            highlights.join(", ")
        )
    } else if skill_match_pct >= 40.0 {
        format!(
            "Good potential for {job_role}. Your resume shows some relevant skills ({}), but could benefit from highlighting more {job_role}-specific experience and technologies.",
            found_skills.join(", ")
        )
    } else {
        format!(
            "Limited alignment with {job_role} requirements. Your resume would benefit from adding more relevant skills and experience specific to {job_role} positions."
        )
    }
}

/// Improvement bullets, each prefixed "• ", joined with newlines.
/// The final role-tailoring bullet is always present.
pub fn generate_suggestions(job_role: &str, missing_keywords: &[String], text: &str) -> String {
    let mut suggestions = Vec::new();

    if !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords.iter().take(3).map(String::as_str).collect();
        suggestions.push(format!(
            "• Add experience with key {job_role} technologies: {}",
            top.join(", ")
        ));
    }

    if text.chars().count() < EXPAND_BELOW_LENGTH {
        suggestions.push(
            "• Expand your resume with more detailed project descriptions and achievements"
                .to_string(),
        );
    }

    if !text.to_lowercase().contains("project") {
        suggestions
            .push("• Include relevant projects that demonstrate your technical skills".to_string());
    }

    if !QUANTIFIED.is_match(text) {
        suggestions.push(
            "• Add quantifiable achievements (e.g., \"Improved performance by 40%\")".to_string(),
        );
    }

    suggestions.push(format!(
        "• Tailor your resume more specifically to {job_role} by emphasizing relevant experience"
    ));

    suggestions.join("\n")
}

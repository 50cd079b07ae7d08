/// Resume characters included in the prompt.
const RESUME_EXCERPT_CHARS: usize = 2000;

/// Builds the analysis prompt sent to the external text-generation endpoint.
pub fn build_analysis_prompt(resume_text: &str, job_role: &str) -> String {
    let excerpt: String = resume_text.chars().take(RESUME_EXCERPT_CHARS).collect();
    format!(
        "Analyze this resume for a {job_role} position and provide structured feedback:

Resume Content:
{excerpt}...

Please analyze and provide:
1. Job fit assessment
2. Missing skills for {job_role}
3. Grammar/formatting issues
4. Improvement suggestions
5. Score out of 100"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_role_and_includes_resume() {
        let prompt = build_analysis_prompt("Jane Doe, Rust engineer", "Backend Developer");
        assert!(prompt.starts_with("Analyze this resume for a Backend Developer position"));
        assert!(prompt.contains("Resume Content:\nJane Doe, Rust engineer..."));
        assert!(prompt.contains("2. Missing skills for Backend Developer"));
        assert!(prompt.ends_with("5. Score out of 100"));
    }

    #[test]
    fn test_prompt_truncates_resume_to_excerpt() {
        let resume = format!("{}{}", "a".repeat(2000), "b".repeat(500));
        let prompt = build_analysis_prompt(&resume, "Data Analyst");
        assert!(prompt.contains(&format!("{}...", "a".repeat(2000))));
        assert!(!prompt.contains("bb"));
    }
}

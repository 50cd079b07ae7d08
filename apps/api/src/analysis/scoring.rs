//! Resume scorer — blends skill coverage, length, structure, and vocabulary
//! into a single 0–100 score.
//!
//! score = 0.60 × skill_match_pct
//!       + 0.10 × min(100, 100 × chars / 1000)
//!       + (15 if a section heading word is present, else 5)
//!       + 15 × (professional verbs found / 6)
//!
//! capped at 100 and rounded half-up.

const SKILL_WEIGHT: f64 = 0.6;
const LENGTH_WEIGHT: f64 = 0.1;
const LENGTH_TARGET_CHARS: f64 = 1000.0;
const STRUCTURE_PRESENT: f64 = 15.0;
const STRUCTURE_ABSENT: f64 = 5.0;
const VOCABULARY_WEIGHT: f64 = 15.0;

/// Section words checked case-insensitively anywhere in the raw text.
pub const STRUCTURE_WORDS: &[&str] = &["experience", "education", "skills", "projects"];

/// Action verbs checked case-insensitively anywhere in the raw text, each counted once.
pub const PROFESSIONAL_WORDS: &[&str] = &[
    "managed",
    "developed",
    "implemented",
    "designed",
    "created",
    "improved",
];

/// Percentage of required skills found. Zero when nothing is required.
pub fn skill_match_pct(found: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    100.0 * found as f64 / required as f64
}

pub fn has_structure_section(raw_text: &str) -> bool {
    let lower = raw_text.to_lowercase();
    STRUCTURE_WORDS.iter().any(|w| lower.contains(w))
}

pub fn count_professional_words(raw_text: &str) -> usize {
    let lower = raw_text.to_lowercase();
    PROFESSIONAL_WORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count()
}

/// Unrounded score, already capped at 100.
pub fn raw_score(found: usize, required: usize, raw_text: &str) -> f64 {
    let length = raw_text.chars().count() as f64;
    let length_score = (100.0 * length / LENGTH_TARGET_CHARS).min(100.0);
    let structure = if has_structure_section(raw_text) {
        STRUCTURE_PRESENT
    } else {
        STRUCTURE_ABSENT
    };
    let vocabulary =
        VOCABULARY_WEIGHT * count_professional_words(raw_text) as f64 / PROFESSIONAL_WORDS.len() as f64;

    let score = SKILL_WEIGHT * skill_match_pct(found, required)
        + LENGTH_WEIGHT * length_score
        + structure
        + vocabulary;

    score.min(100.0)
}

/// Final integer score in `[0, 100]`.
pub fn compute_score(found: usize, required: usize, raw_text: &str) -> u32 {
    raw_score(found, required, raw_text).round().clamp(0.0, 100.0) as u32
}

/// Human-readable band for a final score.
pub fn score_label(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent"
    } else if score >= 60 {
        "Good"
    } else {
        "Needs Improvement"
    }
}

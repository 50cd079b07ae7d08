//! Skill matcher — decides which canonical skills a piece of text mentions.
//!
//! Every comparison runs on normalized text against normalized variants, so
//! matching ignores case, punctuation, and spacing. Two policies exist:
//! plain substring containment (the default) and whole-word matching.
//! They disagree on short tokens: under `Substring`, "R" is found inside "react".

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::normalize::normalize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Substring,
    WordBoundary,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" | "word-boundary" | "word" => Ok(MatchMode::WordBoundary),
            other => Err(format!(
                "unknown match mode '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

/// Required skills split by presence, both in required-skill order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillPartition {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Tests one variant against already-normalized text.
fn variant_present(normalized_text: &str, variant: &str, mode: MatchMode) -> bool {
    let needle = normalize(variant);
    match mode {
        MatchMode::Substring => normalized_text.contains(needle.as_str()),
        MatchMode::WordBoundary => contains_whole_words(normalized_text, &needle),
    }
}

/// Normalized text separates words with single spaces, so a whole-word hit
/// is an occurrence bounded by a space or an end of the text on both sides.
fn contains_whole_words(normalized_text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let bytes = normalized_text.as_bytes();
    let mut start = 0;
    while let Some(offset) = normalized_text[start..].find(needle) {
        let at = start + offset;
        let end = at + needle.len();
        let open = at == 0 || bytes[at - 1] == b' ';
        let close = end == bytes.len() || bytes[end] == b' ';
        if open && close {
            return true;
        }
        // step one char so overlapping occurrences are still tried
        start = at + normalized_text[at..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// True when any variant of `skill` occurs in `normalized_text`.
pub fn skill_present(
    catalog: &SkillCatalog,
    normalized_text: &str,
    skill: &str,
    mode: MatchMode,
) -> bool {
    catalog
        .variants_for(skill)
        .into_iter()
        .any(|variant| variant_present(normalized_text, variant, mode))
}

/// Canonical skills mentioned in a free-text job description, in catalog order.
/// Returns an empty list when nothing matches; the caller decides the fallback.
pub fn extract_skills_from_description(
    catalog: &SkillCatalog,
    description: &str,
    mode: MatchMode,
) -> Vec<String> {
    let normalized = normalize(description);
    catalog
        .skills()
        .iter()
        .filter(|entry| {
            entry
                .variants
                .iter()
                .any(|variant| variant_present(&normalized, variant, mode))
        })
        .map(|entry| entry.name.clone())
        .collect()
}

/// Splits `required` into skills present in and absent from the resume.
/// `normalized_resume` must already be the output of `normalize`.
pub fn partition_skills(
    catalog: &SkillCatalog,
    normalized_resume: &str,
    required: &[String],
    mode: MatchMode,
) -> SkillPartition {
    let (found, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| skill_present(catalog, normalized_resume, skill, mode));
    SkillPartition { found, missing }
}

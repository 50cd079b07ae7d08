//! Text normalization shared by resume text, job descriptions, and skill variants.

/// Lowercases, replaces anything outside `[a-z0-9\s]` with a space, collapses
/// whitespace runs to a single space, and trims.
///
/// Total and pure. Applying it twice yields the same string as applying it once.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit();
        if keep {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            // punctuation and whitespace both collapse into one separator
            pending_space = true;
        }
    }

    out
}

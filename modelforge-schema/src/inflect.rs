//! Heuristic English inflection.
//!
//! Pure, stateless suffix rules with no dictionary. Irregular nouns
//! (`Person` -> `People`) are a known, accepted limitation of the heuristic.

/// Convert a plural English noun to its singular form.
///
/// `ies` becomes `y`, a trailing `s` (but not `ss`) is dropped, anything else is
/// returned unchanged.
pub fn to_singular(word: &str) -> String {
    if word.ends_with("ies") {
        let mut out = word[..word.len() - 3].to_string();
        out.push('y');
        return out;
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Convert a singular English noun to its plural form.
///
/// A `y` after a non-vowel becomes `ies`; words ending in `s`, `x`, `z`, `ch`,
/// or `sh` get `es`; everything else gets `s`.
pub fn to_plural(word: &str) -> String {
    if word.ends_with('y') {
        let before = word.chars().rev().nth(1);
        let is_vowel = before.is_some_and(|c| "aeiou".contains(c.to_ascii_lowercase()));
        if before.is_some() && !is_vowel {
            let mut out = word[..word.len() - 1].to_string();
            out.push_str("ies");
            return out;
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{}es", word);
    }
    format!("{}s", word)
}

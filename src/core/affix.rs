use crate::core::casing::capitalize;
use crate::domain::model::WordSet;

pub const SUFFIXES: &[&str] = &[
    "1", "123", "!", "@", "#", "$", "!!", "?", "0", "01", "21", "23", "99",
];

pub const PREFIXES: &[&str] = &["!", "@", "#", "$", "pass", "admin", "user", "login"];

/// Upper bound on the size of [`apply_affixes`] output.
pub const fn max_affix_variants() -> usize {
    1 + 3 * SUFFIXES.len() + 3 * PREFIXES.len()
}

/// The word plus each suffix appended and each prefix prepended, in the
/// word's original, capitalized and uppercase form. A prefix and a suffix
/// never appear together.
pub fn apply_affixes(word: &str) -> WordSet {
    let mut variants = WordSet::new();
    variants.insert(word);

    let capitalized = capitalize(word);
    let upper = word.to_uppercase();
    let forms = [word, capitalized.as_str(), upper.as_str()];

    for suffix in SUFFIXES {
        for form in forms {
            variants.insert(format!("{}{}", form, suffix));
        }
    }
    for prefix in PREFIXES {
        for form in forms {
            variants.insert(format!("{}{}", prefix, form));
        }
    }

    variants
}

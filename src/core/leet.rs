use crate::core::casing::capitalize;
use crate::domain::model::WordSet;

/// Letter -> visually similar substitutes.
pub const LEET_MAP: &[(char, &[&str])] = &[
    ('a', &["4", "@"]),
    ('e', &["3"]),
    ('i', &["1", "!"]),
    ('o', &["0"]),
    ('s', &["5", "$"]),
    ('t', &["7", "+"]),
    ('l', &["1", "|"]),
    ('g', &["9"]),
    ('z', &["2"]),
    ('b', &["8"]),
    ('v', &["\\/"]),
];

/// The word itself plus, for each mapped letter it contains, every substitute
/// applied to all occurrences of that letter in the lowercased word, in
/// lowercase, capitalized and uppercase form. Substitutions for different
/// letters are never stacked.
pub fn apply_leetspeak(word: &str) -> WordSet {
    let mut variants = WordSet::new();
    variants.insert(word);

    let lower = word.to_lowercase();
    for (letter, substitutes) in LEET_MAP {
        if !lower.contains(*letter) {
            continue;
        }
        for substitute in substitutes.iter() {
            let replaced = lower.replace(*letter, substitute);
            variants.insert(capitalize(&replaced));
            variants.insert(replaced.to_uppercase());
            variants.insert(replaced);
        }
    }

    variants
}

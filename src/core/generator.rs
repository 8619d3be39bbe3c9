use crate::core::affix::apply_affixes;
use crate::core::casing::casings;
use crate::core::dob::expand_dob;
use crate::core::leet::apply_leetspeak;
use crate::core::{GenerationSummary, Result, SeedInputs, WordSet, WordlistSink};
use chrono::Datelike;
use std::ops::RangeInclusive;

pub const WEAK_WORDS: [&str; 10] = [
    "password", "admin", "qwerty", "welcome", "test", "root", "secret", "user", "secure", "123456",
];

/// How many years before the reference year are appended.
pub const YEAR_SPAN: i32 = 20;

#[derive(Debug, Clone, Default)]
pub struct WordlistBuild {
    pub words: WordSet,
    pub warnings: Vec<String>,
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn year_range(reference_year: i32) -> RangeInclusive<i32> {
    reference_year.saturating_sub(YEAR_SPAN)..=reference_year
}

/// Seeds in four casings, the weak-word list and any date-of-birth tokens.
pub fn base_words(seeds: &SeedInputs) -> WordlistBuild {
    let mut build = WordlistBuild::default();

    for (_, value) in seeds.fields() {
        if !value.is_empty() {
            build.words.extend(casings(value));
        }
    }

    let dob = expand_dob(&seeds.dob);
    build.words.extend(dob.tokens);
    build.warnings.extend(dob.warning);

    build.words.extend(WEAK_WORDS.iter().map(|w| w.to_string()));
    build
}

/// One generation of leetspeak and affix mutation over the current members.
/// Words added here are not mutated again.
pub fn mutate(words: &mut WordSet) {
    for word in words.snapshot() {
        words.extend(apply_leetspeak(&word));
        words.extend(apply_affixes(&word));
    }
}

/// `word+year`, `year+word` and, for four-digit years, `word+yy` for every
/// current member and every year in [`year_range`].
pub fn append_years(words: &mut WordSet, reference_year: i32) {
    let years: Vec<String> = year_range(reference_year).map(|y| y.to_string()).collect();

    for word in words.snapshot() {
        for year in &years {
            words.insert(format!("{}{}", word, year));
            words.insert(format!("{}{}", year, word));
            if year.len() == 4 {
                words.insert(format!("{}{}", word, &year[2..]));
            }
        }
    }
}

/// The whole in-memory pipeline: base words, mutation, then optional years.
pub fn build_wordlist(seeds: &SeedInputs, reference_year: i32) -> WordlistBuild {
    let mut build = base_words(seeds);
    tracing::debug!("Base words: {}", build.words.len());

    mutate(&mut build.words);
    tracing::debug!("After leetspeak/affix mutation: {}", build.words.len());

    if seeds.append_years {
        append_years(&mut build.words, reference_year);
        tracing::debug!(
            "After year expansion ({}-{}): {}",
            year_range(reference_year).start(),
            reference_year,
            build.words.len()
        );
    }

    build
}

pub struct WordlistGenerator<S: WordlistSink> {
    sink: S,
}

impl<S: WordlistSink> WordlistGenerator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn generate(&self, seeds: &SeedInputs) -> Result<GenerationSummary> {
        let reference_year = match seeds.reference_year {
            Some(year) => year,
            None => {
                let year = current_year();
                tracing::info!(
                    "No reference year given, using {} from the system clock; output will change across calendar years",
                    year
                );
                year
            }
        };

        tracing::info!("Generating wordlist");
        let build = build_wordlist(seeds, reference_year);

        let output_path = self.sink.write_words(&build.words)?;
        tracing::info!("Wrote {} words to {}", build.words.len(), output_path);

        Ok(GenerationSummary {
            word_count: build.words.len(),
            output_path,
            warnings: build.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProbeError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemorySink {
        written: RefCell<Option<Vec<String>>>,
    }

    impl WordlistSink for MemorySink {
        fn write_words(&self, words: &WordSet) -> Result<String> {
            *self.written.borrow_mut() = Some(words.iter().cloned().collect());
            Ok("memory://wordlist".to_string())
        }
    }

    struct FailingSink;

    impl WordlistSink for FailingSink {
        fn write_words(&self, _words: &WordSet) -> Result<String> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn seeds(name: &str, dob: &str, pet: &str, color: &str) -> SeedInputs {
        SeedInputs {
            name: name.to_string(),
            dob: dob.to_string(),
            pet_name: pet.to_string(),
            favorite_color: color.to_string(),
            reference_year: Some(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_words_casings_and_weak_words() {
        let build = base_words(&seeds("aLiCe", "", "", ""));

        for word in ["aLiCe", "alice", "Alice", "ALICE"] {
            assert!(build.words.contains(word), "missing {}", word);
        }
        for weak in WEAK_WORDS {
            assert!(build.words.contains(weak));
        }
        assert_eq!(build.words.len(), 4 + WEAK_WORDS.len());
        assert!(build.warnings.is_empty());
    }

    #[test]
    fn test_base_words_include_dob_tokens() {
        let build = base_words(&seeds("", "1990-05-15", "", ""));

        assert!(build.words.contains("1990-05-15"));
        for token in ["1990", "90", "05", "15", "0515", "1505", "19900515", "05151990", "15051990"] {
            assert!(build.words.contains(token), "missing {}", token);
        }
    }

    #[test]
    fn test_invalid_dob_adds_raw_only() {
        let build = base_words(&seeds("", "not-a-date", "", ""));

        assert!(build.words.contains("not-a-date"));
        assert!(build.words.contains("NOT-A-DATE"));
        assert_eq!(build.warnings.len(), 1);
        assert!(!build.words.iter().any(|w| w.chars().all(|c| c.is_ascii_digit()) && w != "123456"));
    }

    #[test]
    fn test_mutation_is_single_generation() {
        let mut words: WordSet = ["rex".to_string()].into_iter().collect();
        mutate(&mut words);

        assert!(words.contains("r3x"));
        assert!(words.contains("rex123"));
        // 變異結果不會再被變異
        assert!(!words.contains("r3x123"));
        assert!(!words.contains("passr3x"));
    }

    #[test]
    fn test_year_expansion() {
        let mut words: WordSet = ["Rex".to_string()].into_iter().collect();
        append_years(&mut words, 2024);

        assert!(words.contains("Rex2024"));
        assert!(words.contains("2024Rex"));
        assert!(words.contains("Rex24"));
        assert!(words.contains("Rex2004"));
        assert!(words.contains("Rex04"));
        assert!(!words.contains("Rex2003"));
        assert!(!words.contains("Rex2025"));
        assert_eq!(words.len(), 1 + 21 * 3);
    }

    #[test]
    fn test_two_digit_suffix_only_for_four_digit_years() {
        let mut words: WordSet = ["Rex".to_string()].into_iter().collect();
        append_years(&mut words, 1005);

        assert!(words.contains("Rex999"));
        assert!(words.contains("999Rex"));
        assert!(!words.contains("Rex9"));
        assert!(words.contains("Rex05"));
    }

    #[test]
    fn test_year_range_saturates_at_i32_min() {
        let range = year_range(i32::MIN + 5);
        assert_eq!(*range.start(), i32::MIN);
        assert_eq!(range.count(), 6);

        let mut words: WordSet = ["Rex".to_string()].into_iter().collect();
        append_years(&mut words, i32::MIN + 5);
        assert_eq!(words.len(), 1 + 6 * 2);
    }

    #[test]
    fn test_generate_with_extreme_reference_year() {
        let mut input = seeds("Rex", "", "", "");
        input.reference_year = Some(i32::MIN + 5);
        let sink = MemorySink::default();

        let summary = WordlistGenerator::new(&sink).generate(&input).unwrap();
        assert!(summary.word_count > 0);
    }

    #[test]
    fn test_years_skipped_when_disabled() {
        let mut input = seeds("Rex", "", "", "");
        input.append_years = false;
        let build = build_wordlist(&input, 2024);

        assert!(!build.words.iter().any(|w| w.contains("2024")));
    }

    #[test]
    fn test_generated_set_contains_raw_seeds() {
        let input = seeds("Alice", "1990-05-15", "Rex", "blue");
        let build = build_wordlist(&input, 2024);

        for raw in ["Alice", "1990-05-15", "Rex", "blue"] {
            assert!(build.words.contains(raw));
        }
        assert!(build.words.contains("Rex2024"));
        assert!(build.words.contains("@lice"));
        assert!(build.words.contains("BLUE99"));
    }

    #[test]
    fn test_generate_writes_sorted_words_to_sink() {
        let sink = MemorySink::default();
        let generator = WordlistGenerator::new(&sink);

        let summary = generator.generate(&seeds("", "bad-date", "Rex", "")).unwrap();

        let written = sink.written.borrow().clone().unwrap();
        assert_eq!(summary.word_count, written.len());
        assert_eq!(summary.output_path, "memory://wordlist");
        assert_eq!(summary.warnings.len(), 1);

        let mut sorted = written.clone();
        sorted.sort();
        assert_eq!(written, sorted);
    }

    #[test]
    fn test_generate_propagates_sink_failure() {
        let generator = WordlistGenerator::new(FailingSink);
        let err = generator.generate(&seeds("Rex", "", "", "")).unwrap_err();

        assert!(matches!(err, ProbeError::IoError(_)));
    }
}

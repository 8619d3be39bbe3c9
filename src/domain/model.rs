use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const DEFAULT_OUTPUT_FILE: &str = "custom_wordlist.txt";

/// Personal facts about the target plus generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInputs {
    pub name: String,
    pub dob: String,
    pub pet_name: String,
    pub favorite_color: String,
    pub append_years: bool,
    pub output_path: String,
    /// Last year of the appended year range. `None` means the current calendar year.
    pub reference_year: Option<i32>,
}

impl SeedInputs {
    /// Seed fields in input order, labelled for validation messages.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("dob", self.dob.as_str()),
            ("pet_name", self.pet_name.as_str()),
            ("favorite_color", self.favorite_color.as_str()),
        ]
    }
}

impl Default for SeedInputs {
    fn default() -> Self {
        Self {
            name: String::new(),
            dob: String::new(),
            pet_name: String::new(),
            favorite_color: String::new(),
            append_years: true,
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
            reference_year: None,
        }
    }
}

/// Case-sensitive, ordered set of candidate words.
///
/// Backed by a `BTreeSet`, so iteration is always ascending byte-wise order
/// and the final sort comes for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Copy of the current members, so a stage can grow the set while walking it.
    pub fn snapshot(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }
}

impl Extend<String> for WordSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for WordSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub word_count: usize,
    pub output_path: String,
    pub warnings: Vec<String>,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ Generated {} words.", self.word_count)?;
        write!(f, "\n📁 Saved to: {}", self.output_path)?;
        for warning in &self.warnings {
            write!(f, "\n{}", warning)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrackTimes {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

/// What an estimator reports for a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthEstimate {
    /// 0 (weakest) to 4 (strongest).
    pub score: u8,
    pub guesses: u64,
    pub crack_times: CrackTimes,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub password: String,
    #[serde(flatten)]
    pub estimate: StrengthEstimate,
}

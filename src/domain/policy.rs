//! Password policy - the fixed rule set a candidate password must satisfy.
//!
//! Every rule is a pure predicate over the candidate string. A candidate is
//! accepted only when all rules hold, so evaluation order never changes the
//! verdict.

use std::collections::HashSet;
use std::fmt;

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::config::{MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};

/// One independent check of the password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// At least `MIN_PASSWORD_LENGTH` characters
    MinimumLength,
    /// At least one decimal digit
    Digit,
    /// At least one lowercase letter
    Lowercase,
    /// At least one uppercase letter
    Uppercase,
    /// At least one character from `SPECIAL_CHARACTERS`
    SpecialCharacter,
    /// Every character appears at most once
    NoRepeatedCharacters,
    /// No space character
    NoWhitespace,
}

impl Rule {
    /// All rules, in declaration order.
    pub const ALL: [Rule; 7] = [
        Rule::MinimumLength,
        Rule::Digit,
        Rule::Lowercase,
        Rule::Uppercase,
        Rule::SpecialCharacter,
        Rule::NoRepeatedCharacters,
        Rule::NoWhitespace,
    ];

    /// Check this rule against a candidate.
    pub fn is_satisfied_by(self, candidate: &str) -> bool {
        match self {
            Rule::MinimumLength => candidate.chars().count() >= MIN_PASSWORD_LENGTH,
            Rule::Digit => has_category(candidate, GeneralCategory::DecimalNumber),
            Rule::Lowercase => has_category(candidate, GeneralCategory::LowercaseLetter),
            Rule::Uppercase => has_category(candidate, GeneralCategory::UppercaseLetter),
            Rule::SpecialCharacter => candidate.chars().any(is_special_character),
            Rule::NoRepeatedCharacters => has_distinct_characters(candidate),
            Rule::NoWhitespace => !candidate.contains(' '),
        }
    }

    /// Stable identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::MinimumLength => "minimum_length",
            Rule::Digit => "digit",
            Rule::Lowercase => "lowercase",
            Rule::Uppercase => "uppercase",
            Rule::SpecialCharacter => "special_character",
            Rule::NoRepeatedCharacters => "no_repeated_characters",
            Rule::NoWhitespace => "no_whitespace",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` iff the candidate satisfies every rule.
pub fn validate(candidate: &str) -> bool {
    Rule::ALL.iter().all(|rule| rule.is_satisfied_by(candidate))
}

/// Rules the candidate breaks, in declaration order.
pub fn violations(candidate: &str) -> Vec<Rule> {
    Rule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(candidate))
        .collect()
}

/// Whether `c` belongs to the special-character set.
pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

// Nd / Ll / Lu only, not the broader derived Numeric/Lowercase/Uppercase
fn has_category(candidate: &str, category: GeneralCategory) -> bool {
    candidate.chars().any(|c| c.general_category() == category)
}

fn has_distinct_characters(candidate: &str) -> bool {
    let mut seen = HashSet::with_capacity(candidate.len());
    candidate.chars().all(|c| seen.insert(c))
}

use super::diagnostics::{Diagnostic, TokenIssue};
use super::lines::RawLine;
use tracing::{debug, warn};

/// Literal joiners that mark a row naming two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    And,
    Ampersand,
}

impl Separator {
    /// Detection order: `" and "` wins over `" & "`.
    pub const ALL: [Separator; 2] = [Separator::And, Separator::Ampersand];

    pub fn pattern(self) -> &'static str {
        match self {
            Separator::And => " and ",
            Separator::Ampersand => " & ",
        }
    }

    /// The separator must not open the row.
    pub fn matches(self, line: &str) -> bool {
        line.find(self.pattern()).is_some_and(|offset| offset > 0)
    }

    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|separator| separator.matches(line))
    }
}

/// A single-person name string ready for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameToken {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Expansion {
    pub tokens: Vec<NameToken>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn expand_lines(lines: &[RawLine<'_>]) -> Expansion {
    let mut expansion = Expansion::default();

    for line in lines {
        match Separator::detect(line.text) {
            Some(separator) => expand_line(line, separator, &mut expansion),
            None => expansion.tokens.push(NameToken {
                line: line.number,
                text: line.text.to_string(),
            }),
        }
    }

    expansion
}

fn expand_line(line: &RawLine<'_>, separator: Separator, expansion: &mut Expansion) {
    let segments: Vec<&str> = line.text.split(separator.pattern()).collect();
    if segments.len() > 2 {
        warn!(
            line = line.number,
            people = segments.len(),
            "merged row names more than two people, keeping the first two"
        );
        expansion.diagnostics.push(Diagnostic {
            line: line.number,
            token: line.text.to_string(),
            issue: TokenIssue::ExtraMergedPeople {
                count: segments.len(),
            },
        });
    }

    let (first, second) = expand_merged(segments[0], segments[1]);
    for text in [first, second] {
        if text.is_empty() {
            debug!(line = line.number, "skipping empty segment of merged row");
            continue;
        }
        expansion.tokens.push(NameToken {
            line: line.number,
            text,
        });
    }
}

/// Splits a two-person row into independent names.
///
/// A bare title on the left borrows the surname of the right-hand person, and
/// the right-hand person's first name is dropped so only `<Title> <Last>`
/// remains. A left side that already carries its own name leaves both halves
/// untouched.
pub fn expand_merged(first: &str, second: &str) -> (String, String) {
    let first = first.trim();
    let second = second.trim();

    if first.contains(char::is_whitespace) {
        return (first.to_string(), second.to_string());
    }

    let words: Vec<&str> = second.split_whitespace().collect();
    let first = match words.last() {
        Some(surname) => format!("{first} {surname}"),
        None => first.to_string(),
    };

    let second = if words.len() > 2 {
        words
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != 1)
            .map(|(_, word)| *word)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        second.to_string()
    };

    (first, second)
}

use serde::Serialize;
use std::fmt;

/// A non-fatal problem found while normalizing one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub token: String,
    pub issue: TokenIssue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenIssue {
    /// The token had a title but nothing that could serve as a surname.
    MissingSurname,
    /// The token split into more than three parts.
    ExtraParts { count: usize },
    /// A merged row named more than two people; only the first two were kept.
    ExtraMergedPeople { count: usize },
}

impl fmt::Display for TokenIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenIssue::MissingSurname => write!(f, "no surname found"),
            TokenIssue::ExtraParts { count } => {
                write!(f, "expected at most 3 name parts, found {count}")
            }
            TokenIssue::ExtraMergedPeople { count } => {
                write!(f, "expected at most 2 merged people, found {count}")
            }
        }
    }
}

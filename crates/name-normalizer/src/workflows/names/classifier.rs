use super::diagnostics::TokenIssue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized output for one person.
///
/// `first_name` and `initial` are never both set. `last_name` is only `None`
/// for one-word tokens, which are reported as [`TokenIssue::MissingSurname`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRecord {
    pub title: String,
    pub first_name: Option<String>,
    pub initial: Option<String>,
    pub last_name: Option<String>,
}

/// How tokens with more than three parts are folded into a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Everything after the first name becomes the surname.
    #[default]
    JoinSurname,
    /// Parts after the third are discarded.
    Truncate,
}

impl OverflowPolicy {
    pub fn label(self) -> &'static str {
        match self {
            OverflowPolicy::JoinSurname => "join-surname",
            OverflowPolicy::Truncate => "truncate",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overflow policy '{0}', expected 'join-surname' or 'truncate'")]
pub struct OverflowPolicyParseError(pub String);

impl FromStr for OverflowPolicy {
    type Err = OverflowPolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "join-surname" | "join_surname" | "join" => Ok(Self::JoinSurname),
            "truncate" => Ok(Self::Truncate),
            _ => Err(OverflowPolicyParseError(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub record: PersonRecord,
    pub issue: Option<TokenIssue>,
}

pub fn classify(token: &str, overflow: OverflowPolicy) -> Classification {
    let parts: Vec<&str> = token.split_whitespace().collect();
    let title = canonical_title(parts.first().copied().unwrap_or_default());

    let mut record = PersonRecord {
        title,
        first_name: None,
        initial: None,
        last_name: None,
    };

    let issue = match parts.as_slice() {
        [] | [_] => Some(TokenIssue::MissingSurname),
        [_, surname] => {
            record.last_name = Some((*surname).to_string());
            None
        }
        [_, given, rest @ ..] => {
            let surname = match overflow {
                OverflowPolicy::JoinSurname => rest.join(" "),
                OverflowPolicy::Truncate => rest[0].to_string(),
            };
            match initial_of(given) {
                Some(initial) => record.initial = Some(initial.to_string()),
                None => record.first_name = Some((*given).to_string()),
            }
            record.last_name = Some(surname);

            (parts.len() > 3).then_some(TokenIssue::ExtraParts { count: parts.len() })
        }
    };

    Classification { record, issue }
}

fn canonical_title(title: &str) -> String {
    match title {
        "Mister" => "Mr".to_string(),
        other => other.to_string(),
    }
}

fn initial_of(given: &str) -> Option<&str> {
    let stripped = given.strip_suffix('.').unwrap_or(given);
    (stripped.chars().count() == 1).then_some(stripped)
}

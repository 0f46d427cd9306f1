use std::fmt;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;

/// Pattern value the model uses when the address was found verbatim.
pub const DIRECT_MATCH_PATTERN: &str = "N/A";

/// Confidence label from the model. Labels outside High/Medium/Low are
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Other(String),
}

impl Confidence {
    pub fn as_str(&self) -> &str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
            Confidence::Other(label) => label,
        }
    }
}

impl From<String> for Confidence {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            "low" => Confidence::Low,
            _ => {
                log::warn!("Model returned an unrecognised confidence level: {}", value);
                Confidence::Other(value.trim().to_string())
            }
        }
    }
}

impl From<Confidence> for String {
    fn from(value: Confidence) -> Self {
        match value {
            Confidence::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainResult {
    pub domain: String,
    pub confidence: Confidence,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub reasoning: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub alternatives: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailResult {
    pub email: String,
    pub confidence: Confidence,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub reasoning: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub sources: Vec<Source>,
}

impl EmailResult {
    /// The deduced address pattern, hidden when the address was a direct find.
    pub fn deduced_pattern(&self) -> Option<&str> {
        self.pattern
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty() && *p != DIRECT_MATCH_PATTERN)
    }
}

/// Outcome of one search. Serialized with a `type` discriminant so exactly
/// one field set is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Domain(DomainResult),
    Email(EmailResult),
}

impl SearchResult {
    pub fn confidence(&self) -> &Confidence {
        match self {
            SearchResult::Domain(d) => &d.confidence,
            SearchResult::Email(e) => &e.confidence,
        }
    }

    pub fn sources(&self) -> &[Source] {
        match self {
            SearchResult::Domain(d) => &d.sources,
            SearchResult::Email(e) => &e.sources,
        }
    }
}

impl From<DomainResult> for SearchResult {
    fn from(value: DomainResult) -> Self {
        SearchResult::Domain(value)
    }
}

impl From<EmailResult> for SearchResult {
    fn from(value: EmailResult) -> Self {
        SearchResult::Email(value)
    }
}

//! Search request and response models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result languages supported by the TuningSearch API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
    Ja,
    Ko,
    Fr,
    De,
    Es,
    Ru,
    Pt,
}

impl Language {
    /// All supported language tags, in the order the API documents them.
    pub const ALL: [Language; 9] = [
        Language::En,
        Language::Zh,
        Language::Ja,
        Language::Ko,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::Ru,
        Language::Pt,
    ];

    /// The wire value sent in the `language` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::Ru => "ru",
            Language::Pt => "pt",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedLanguage(s.to_string()))
    }
}

/// Time window filter for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// The wire value sent in the `time_range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            other => Err(ValidationError::InvalidTimeRange(other.to_string())),
        }
    }
}

/// Safe-search level accepted on the tool surface (0, 1 or 2).
///
/// The API itself only accepts a boolean-like `safe` flag: level 0 is sent as
/// `0`, levels 1 and 2 are both sent as `1`. The narrowing happens in
/// [`SafeSearch::wire_flag`], nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeSearch {
    Off,
    Moderate,
    Strict,
}

impl SafeSearch {
    /// Map the tool-level 0|1|2 integer onto a level.
    pub fn from_level(level: u8) -> Result<Self, ValidationError> {
        match level {
            0 => Ok(SafeSearch::Off),
            1 => Ok(SafeSearch::Moderate),
            2 => Ok(SafeSearch::Strict),
            other => Err(ValidationError::InvalidSafeLevel(other)),
        }
    }

    /// The numeric level as exposed on the tool schema.
    pub fn level(&self) -> u8 {
        match self {
            SafeSearch::Off => 0,
            SafeSearch::Moderate => 1,
            SafeSearch::Strict => 2,
        }
    }

    /// The flag actually sent in the `safe` query parameter.
    pub fn wire_flag(&self) -> &'static str {
        match self {
            SafeSearch::Off => "0",
            SafeSearch::Moderate | SafeSearch::Strict => "1",
        }
    }
}

/// Errors produced when validating tool parameters, before any HTTP work.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("query must be a non-empty string")]
    EmptyQuery,

    #[error("page must be a positive integer")]
    InvalidPage,

    #[error("safe must be 0, 1 or 2 (got {0})")]
    InvalidSafeLevel(u8),

    #[error("unsupported language tag: {0}")]
    UnsupportedLanguage(String),

    #[error("time_range must be one of day, week, month, year (got {0})")]
    InvalidTimeRange(String),
}

/// Search request parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Main search query string
    pub query: String,

    /// Result language filter
    pub language: Option<Language>,

    /// Result page, starting at 1
    pub page: Option<u32>,

    /// Safe-search level
    pub safe: Option<SafeSearch>,

    /// Time window filter
    pub time_range: Option<TimeRange>,
}

impl SearchRequest {
    /// Create a new search request
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: None,
            safe: None,
            time_range: None,
        }
    }

    /// Set the language filter
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the result page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the safe-search level
    pub fn safe(mut self, safe: SafeSearch) -> Self {
        self.safe = Some(safe);
        self
    }

    /// Set the time window filter
    pub fn time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }

    /// Check the request against the API's parameter constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        if self.page == Some(0) {
            return Err(ValidationError::InvalidPage);
        }
        Ok(())
    }

    /// Build the outbound query pairs. Absent optionals never appear.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.query.clone())];

        if let Some(language) = self.language {
            pairs.push(("language", language.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(safe) = self.safe {
            pairs.push(("safe", safe.wire_flag().to_string()));
        }
        if let Some(time_range) = self.time_range {
            pairs.push(("time_range", time_range.as_str().to_string()));
        }

        pairs
    }
}

/// A single search hit as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    /// Page title
    pub title: String,

    /// Page URL
    pub url: String,

    /// Body snippet
    pub content: String,
}

/// The `data` member of a `/search` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchData {
    /// Query echoed back by the API
    pub query: String,

    /// Ordered result items
    #[serde(default)]
    pub results: Vec<SearchItem>,

    /// Suggested follow-up queries, when the API offers any
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

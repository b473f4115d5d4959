use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One filter criterion as received from the query layer: a dotted field
/// path, a comparison, the raw value strings, and an optional case mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterDescriptor {
    pub path: String,
    pub comparison: ComparisonOp,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub case_mode: Option<CaseMode>,
}

impl FilterDescriptor {
    pub fn new(path: &str, comparison: ComparisonOp, values: Vec<String>) -> Self {
        FilterDescriptor {
            path: path.to_string(),
            comparison,
            values,
            case_mode: None,
        }
    }

    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = Some(case_mode);
        self
    }
}

/// Closed set of filter comparisons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    StartsWith,
    EndsWith,
    Contains,
    In,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl ComparisonOp {
    /// `In` compares against a value set; every other comparison takes
    /// exactly one value.
    pub fn takes_value_set(&self) -> bool {
        matches!(self, ComparisonOp::In)
    }

    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            ComparisonOp::GreaterThan
                | ComparisonOp::GreaterThanOrEqual
                | ComparisonOp::LessThan
                | ComparisonOp::LessThanOrEqual
        )
    }

    pub fn is_substring(&self) -> bool {
        matches!(
            self,
            ComparisonOp::StartsWith | ComparisonOp::EndsWith | ComparisonOp::Contains
        )
    }
}

/// Case sensitivity of textual comparisons. Ordinal modes compare bytes
/// (ASCII-insensitively for the IgnoreCase variant); Invariant modes use
/// Unicode case folding.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    Ordinal,
    #[default]
    OrdinalIgnoreCase,
    Invariant,
    InvariantIgnoreCase,
}

impl CaseMode {
    fn fold<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self {
            CaseMode::Ordinal | CaseMode::Invariant => Cow::Borrowed(s),
            CaseMode::OrdinalIgnoreCase => Cow::Owned(s.to_ascii_lowercase()),
            CaseMode::InvariantIgnoreCase => Cow::Owned(s.to_lowercase()),
        }
    }

    pub fn eq(&self, left: &str, right: &str) -> bool {
        match self {
            CaseMode::Ordinal | CaseMode::Invariant => left == right,
            CaseMode::OrdinalIgnoreCase => left.eq_ignore_ascii_case(right),
            CaseMode::InvariantIgnoreCase => left.to_lowercase() == right.to_lowercase(),
        }
    }

    pub fn starts_with(&self, s: &str, prefix: &str) -> bool {
        self.fold(s).starts_with(self.fold(prefix).as_ref())
    }

    pub fn ends_with(&self, s: &str, suffix: &str) -> bool {
        self.fold(s).ends_with(self.fold(suffix).as_ref())
    }

    /// Substring test ("index of needle is not -1").
    pub fn contains(&self, s: &str, needle: &str) -> bool {
        self.fold(s).contains(self.fold(needle).as_ref())
    }
}

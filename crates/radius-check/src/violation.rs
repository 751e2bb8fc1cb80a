//! Violation records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The rule that produced a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// CSS `border-radius` declaration with a non-zero value
    CssBorderRadius,
    /// Inline `borderRadius` style property with a non-zero value
    InlineBorderRadius,
    /// `rounded` utility class other than `rounded-none`
    RoundedUtility,
}

impl Rule {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CssBorderRadius => "css-border-radius",
            Self::InlineBorderRadius => "inline-border-radius",
            Self::RoundedUtility => "rounded-utility",
        }
    }

    /// Human-readable message attached to every violation of this rule
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::CssBorderRadius => "Disallowed CSS border-radius value (must be 0).",
            Self::InlineBorderRadius => "Disallowed JS borderRadius value (must be 0).",
            Self::RoundedUtility => {
                "Disallowed Tailwind rounded utility (only rounded-none is allowed)."
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected instance of disallowed rounding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// File the violation was found in
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// Offending text, e.g. `border-radius: 4px`
    pub token: String,
    /// Human-readable message
    pub message: String,
    /// Rule that fired
    pub rule: Rule,
}

impl Violation {
    /// Create a violation with the rule's standard message
    pub fn new(rule: Rule, file: impl Into<PathBuf>, line: usize, token: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            token: token.into(),
            message: rule.message().to_string(),
            rule,
        }
    }
}

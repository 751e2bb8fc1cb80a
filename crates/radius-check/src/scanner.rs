//! Pattern scanner
//!
//! ## Rules
//!
//! | Rule | Matches | Allowed |
//! |------|---------|---------|
//! | `css-border-radius` | `border-radius: <value>;` (any case) | `0`, `0px`, `0rem`, `0%`, optionally `!important` |
//! | `inline-border-radius` | `borderRadius: <expr>` | `0`, `"0"`, `'0'`, `"0px"`, `'0px'` |
//! | `rounded-utility` | `[variant:]*rounded[-suffix]` | final segment `rounded-none` |
//!
//! Matching is regex-based over raw text. Nothing is parsed, so tokens inside
//! comments or unrelated identifiers containing `rounded` are reported too.

use crate::config::{RuleToggles, ScanConfig};
use crate::error::{CheckError, CheckResult};
use crate::violation::{Rule, Violation};
use regex::Regex;
use std::path::Path;

// Word boundaries and case folding are ASCII-only: `éborder-radius` still
// matches, `border-radiuſ` does not.
const CSS_DECLARATION: &str = r"(?-u:\b)(?i-u:border-radius)\s*:\s*([^;]+);";
const CSS_ZERO: &str = r"^0(?i-u:px|rem|%)?(?:\s*(?i-u:!important))?$";
const INLINE_PROPERTY: &str = r"(?-u:\b)borderRadius\s*:\s*([^,\n}]+)";
const INLINE_ZERO: &str = r#"^(?:0|"0"|'0'|"0px"|'0px')$"#;
const ROUNDED_TOKEN: &str = r#"([A-Za-z0-9_\-\[\]/]+:)*rounded(?:-\[[^\]]+\]|-[^\s"'`<>]+)?"#;

/// The only permitted rounded utility
const ROUNDED_NONE: &str = "rounded-none";

/// Compiled rule set
#[derive(Debug, Clone)]
pub struct Scanner {
    css_declaration: Regex,
    css_zero: Regex,
    inline_property: Regex,
    inline_zero: Regex,
    rounded_token: Regex,
    rules: RuleToggles,
}

impl Scanner {
    /// Compile the rule patterns for a configuration
    pub fn new(config: &ScanConfig) -> CheckResult<Self> {
        Ok(Self {
            css_declaration: Regex::new(CSS_DECLARATION)?,
            css_zero: Regex::new(CSS_ZERO)?,
            inline_property: Regex::new(INLINE_PROPERTY)?,
            inline_zero: Regex::new(INLINE_ZERO)?,
            rounded_token: Regex::new(ROUNDED_TOKEN)?,
            rules: config.rules,
        })
    }

    /// Read and scan a single file.
    ///
    /// Contents are decoded lossily so stray non-UTF-8 bytes never abort a scan.
    pub fn scan_file(&self, path: &Path) -> CheckResult<Vec<Violation>> {
        let bytes = std::fs::read(path).map_err(|e| CheckError::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let violations = self.scan_text(path, &text);
        tracing::debug!(
            file = %path.display(),
            violations = violations.len(),
            "scanned file"
        );
        Ok(violations)
    }

    /// Scan text attributed to `file`, in rule order then match order
    pub fn scan_text(&self, file: &Path, text: &str) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.rules.css_border_radius {
            self.check_css(file, text, &mut violations);
        }
        if self.rules.inline_border_radius {
            self.check_inline(file, text, &mut violations);
        }
        if self.rules.rounded_utility {
            self.check_utilities(file, text, &mut violations);
        }
        violations
    }

    fn check_css(&self, file: &Path, text: &str, out: &mut Vec<Violation>) {
        for caps in self.css_declaration.captures_iter(text) {
            let value = caps.get(1).map_or("", |m| m.as_str()).trim();
            if self.css_zero.is_match(value) {
                continue;
            }
            let offset = caps.get(0).map_or(0, |m| m.start());
            out.push(Violation::new(
                Rule::CssBorderRadius,
                file,
                line_number(text, offset),
                format!("border-radius: {value}"),
            ));
        }
    }

    fn check_inline(&self, file: &Path, text: &str, out: &mut Vec<Violation>) {
        for caps in self.inline_property.captures_iter(text) {
            let value = caps.get(1).map_or("", |m| m.as_str()).trim();
            if self.inline_zero.is_match(value) {
                continue;
            }
            let offset = caps.get(0).map_or(0, |m| m.start());
            out.push(Violation::new(
                Rule::InlineBorderRadius,
                file,
                line_number(text, offset),
                format!("borderRadius: {value}"),
            ));
        }
    }

    fn check_utilities(&self, file: &Path, text: &str, out: &mut Vec<Violation>) {
        for m in self.rounded_token.find_iter(text) {
            let token = m.as_str();
            let last = token.rsplit(':').next().unwrap_or(token);
            if last == ROUNDED_NONE {
                continue;
            }
            out.push(Violation::new(
                Rule::RoundedUtility,
                file,
                line_number(text, m.start()),
                token,
            ));
        }
    }
}

/// 1-based line number of a byte offset: one plus the newlines before it.
pub fn line_number(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

//! npm-style semver ranges evaluated with the `semver` crate
//!
//! npm and Cargo share comparator semantics (caret, tilde, prerelease
//! opt-in per `major.minor.patch`) but differ in syntax. Ranges are
//! rewritten into Cargo requirements before parsing:
//!
//! ```text
//! npm                      Cargo requirement(s)
//! ---------------------    --------------------
//! 1.2.3                    =1.2.3
//! >=1.2.0 <2.0.0           >=1.2.0, <2.0.0
//! >= 1.2.0                 >=1.2.0
//! 1.2.3 - 2.3.4            >=1.2.3, <=2.3.4
//! 1.x / 1.2.*              1.* / 1.2.*
//! ^1.x                     ^1
//! 1.x || ^2.1.0            [1.*] or [^2.1.0]
//! v1.2.3 / "" / x          =1.2.3 / * / *
//! ```

use semver::{Version, VersionReq};

const OPERATORS: [&str; 8] = ["~>", ">=", "<=", ">", "<", "=", "^", "~"];

/// A parsed npm range: satisfied when any alternative matches
#[derive(Debug, Clone)]
pub struct NpmRange {
    raw: String,
    alternatives: Vec<VersionReq>,
}

impl NpmRange {
    /// Parse an npm range expression
    ///
    /// # Errors
    ///
    /// Returns a description of the first comparator that cannot be parsed.
    pub fn parse(raw: &str) -> std::result::Result<Self, String> {
        let alternatives = raw
            .split("||")
            .map(translate_alternative)
            .map(|req| VersionReq::parse(&req).map_err(|e| format!("{e} (in `{req}`)")))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            alternatives,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    /// Whether a version string satisfies the range
    ///
    /// Strings that are not valid semver never satisfy a range.
    pub fn satisfied_by(&self, version: &str) -> bool {
        parse_version(version).is_some_and(|v| self.matches(&v))
    }
}

/// Parse a concrete version leniently (leading `v` / `=` and spaces allowed)
pub fn parse_version(version: &str) -> Option<Version> {
    let trimmed = version.trim().trim_start_matches(&['v', '='][..]).trim();
    Version::parse(trimmed).ok()
}

fn translate_alternative(alternative: &str) -> String {
    let alternative = alternative.trim();

    if let Some((low, high)) = alternative.split_once(" - ") {
        return format!(
            ">={}, <={}",
            strip_v(low.trim()),
            strip_v(high.trim())
        );
    }

    let comparators: Vec<String> = join_detached_operators(alternative)
        .iter()
        .map(|token| translate_comparator(token))
        .filter(|comparator| comparator != "*")
        .collect();

    if comparators.is_empty() {
        "*".to_string()
    } else {
        comparators.join(", ")
    }
}

/// Glue `>=` `1.2.0` back into `>=1.2.0`
fn join_detached_operators(alternative: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending: Option<&str> = None;

    for token in alternative.split_whitespace() {
        if OPERATORS.contains(&token) {
            pending = Some(token);
            continue;
        }
        match pending.take() {
            Some(op) => tokens.push(format!("{op}{token}")),
            None => tokens.push(token.to_string()),
        }
    }
    if let Some(op) = pending {
        tokens.push(op.to_string());
    }
    tokens
}

fn translate_comparator(token: &str) -> String {
    let (op, version) = split_operator(token);
    let op = if op == "~>" { "~" } else { op };
    let version = strip_v(version);

    let parts: Vec<&str> = version.split('.').collect();
    let wildcard_at = parts.iter().position(|p| is_wildcard(p));

    match wildcard_at {
        Some(0) => "*".to_string(),
        Some(index) => {
            let exact = parts[..index].join(".");
            match op {
                "" | "=" => format!("{exact}.*"),
                _ => format!("{op}{exact}"),
            }
        }
        None if op.is_empty() => format!("={version}"),
        None => format!("{op}{version}"),
    }
}

fn split_operator(token: &str) -> (&str, &str) {
    for op in OPERATORS {
        if let Some(rest) = token.strip_prefix(op) {
            return (op, rest.trim());
        }
    }
    ("", token)
}

fn strip_v(version: &str) -> &str {
    version.strip_prefix(&['v', 'V'][..]).unwrap_or(version)
}

fn is_wildcard(part: &str) -> bool {
    matches!(part, "*" | "x" | "X")
}

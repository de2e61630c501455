use crate::errors::DomainError;
use fancy_regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?!-)[A-Z0-9-]{1,63}(?<!-)$").expect("label pattern is a valid regex")
});

static NUMERIC_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric pattern is a valid regex"));

/// A candidate zone name that passed syntactic validation.
///
/// The text is kept exactly as it was read (after trimming), so that reports
/// show the name the user wrote, trailing dot included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    name: Arc<str>,
}

impl DomainName {
    pub const MAX_LENGTH: usize = 253;

    /// Returns whether `raw` is a syntactically plausible domain name.
    ///
    /// One trailing dot (the root) is tolerated. Labels are 1 to 63
    /// characters of `[A-Za-z0-9-]` without a leading or trailing hyphen,
    /// and the last label must not be purely numeric.
    pub fn validate(raw: &str) -> bool {
        Self::check(raw).is_ok()
    }

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::check(raw)?;
        Ok(Self { name: raw.into() })
    }

    fn check(raw: &str) -> Result<(), DomainError> {
        let length = raw.chars().count();
        if length == 0 || length > Self::MAX_LENGTH {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' must be between 1 and {} characters",
                raw,
                Self::MAX_LENGTH
            )));
        }

        let host = raw.strip_suffix('.').unwrap_or(raw);
        let labels: Vec<&str> = host.split('.').collect();

        match labels.last() {
            Some(tld) if !matches_pattern(&NUMERIC_LABEL, tld) => {}
            _ => {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' has a numeric or missing top-level label",
                    raw
                )))
            }
        }

        if let Some(label) = labels
            .iter()
            .find(|label| !matches_pattern(&LABEL_PATTERN, label))
        {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' has an invalid label '{}'",
                raw, label
            )));
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Absolute form with exactly one trailing dot.
    pub fn to_fqdn(&self) -> String {
        format!("{}.", self.without_root())
    }

    fn without_root(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }
}

fn matches_pattern(pattern: &Regex, text: &str) -> bool {
    pattern.is_match(text).unwrap_or(false)
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

//! Domain name value type.
//!
//! A [`Domain`] stores its name reversed character by character with a
//! trailing separator, so `"mail.ru"` is held as `"ur.liam."`. Under this
//! encoding a domain is equal to or a subdomain of another exactly when its
//! encoded form starts with the other's encoded form.
//!
//! ```
//! use domain_checker::Domain;
//!
//! let parent: Domain = "gdz.com".parse().unwrap();
//! let child: Domain = "new.gdz.com".parse().unwrap();
//!
//! assert_eq!(child.encoded(), "moc.zdg.wen.");
//! assert!(child.is_subdomain_of(&parent));
//! assert!(!parent.is_subdomain_of(&child));
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CheckerError, Result};

/// Separator between labels, also appended to the encoded form
const LABEL_SEPARATOR: char = '.';

/// One or more non-empty labels separated by single dots
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^.\s]+(?:\.[^.\s]+)*$").expect("DOMAIN_PATTERN: hardcoded regex is invalid")
});

/// How raw domain text is checked before encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Reject empty names, empty labels and whitespace
    #[default]
    Strict,
    /// Encode the text without checks. Line readers still trim surrounding
    /// whitespace before parsing.
    Lenient,
}

/// A domain name in reversed-prefix encoding.
///
/// Equality and ordering compare the encoded form. Ordering carries no
/// meaning beyond enabling binary search over sorted domains.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain {
    encoded: String,
}

impl Domain {
    /// Create a domain from raw text with strict validation
    pub fn new(raw: &str) -> Result<Self> {
        Self::parse_with(raw, Validation::Strict)
    }

    /// Create a domain from raw text under the given validation policy.
    ///
    /// Lenient parsing never fails. An empty name then encodes to an empty
    /// string, which no domain is considered a subdomain of.
    pub fn parse_with(raw: &str, validation: Validation) -> Result<Self> {
        if validation == Validation::Strict {
            validate(raw)?;
        }
        Ok(Self::encode(raw))
    }

    fn encode(raw: &str) -> Self {
        if raw.is_empty() {
            return Self {
                encoded: String::new(),
            };
        }

        let mut encoded = String::with_capacity(raw.len() + 1);
        encoded.extend(raw.chars().rev());
        encoded.push(LABEL_SEPARATOR);
        Self { encoded }
    }

    /// The domain name in its usual order, e.g. `"mail.ru"`
    pub fn name(&self) -> String {
        let body = self
            .encoded
            .strip_suffix(LABEL_SEPARATOR)
            .unwrap_or(self.encoded.as_str());
        body.chars().rev().collect()
    }

    /// The reversed encoded form, e.g. `"ur.liam."`
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Check if this domain equals `other` or lies anywhere below it.
    ///
    /// Always false when `other` has an empty encoded form.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        !other.encoded.is_empty() && self.encoded.starts_with(&other.encoded)
    }
}

fn validate(raw: &str) -> Result<()> {
    let reason = if raw.is_empty() {
        "empty name"
    } else if raw.chars().any(char::is_whitespace) {
        "contains whitespace"
    } else if !DOMAIN_PATTERN.is_match(raw) {
        "empty label (leading, trailing or repeated dot)"
    } else {
        return Ok(());
    };

    Err(CheckerError::InvalidDomain {
        domain: raw.to_string(),
        reason: reason.to_string(),
    })
}

impl FromStr for Domain {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

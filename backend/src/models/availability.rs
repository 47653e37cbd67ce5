//! Availability wrapper for values that the published data may not carry.
//!
//! Performance tables routinely omit figures: small cohorts are suppressed,
//! some measures do not apply to a school, others were never published.
//! Instead of nullable fields paired with a free-text reason, every such
//! value is an [`Availability`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a value is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// Suppressed to protect individual pupils (`SUPP`).
    Suppressed,
    /// The measure does not apply to this school (`NA`).
    NotApplicable,
    /// Not published for this school or year (`NP`).
    NotPublished,
    /// Coverage too low to report (`LOWCOV`).
    LowCoverage,
    /// No pupils were entered (`NE`).
    NotEntered,
    /// Absent, blank or unrecognised in the source.
    Missing,
}

impl UnavailableReason {
    /// Map a source data code to a reason. Unknown codes are `Missing`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SUPP" => Self::Suppressed,
            "NA" => Self::NotApplicable,
            "NP" => Self::NotPublished,
            "LOWCOV" => Self::LowCoverage,
            "NE" => Self::NotEntered,
            _ => Self::Missing,
        }
    }

    /// The source data code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Suppressed => "SUPP",
            Self::NotApplicable => "NA",
            Self::NotPublished => "NP",
            Self::LowCoverage => "LOWCOV",
            Self::NotEntered => "NE",
            Self::Missing => "",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Suppressed => "suppressed",
            Self::NotApplicable => "not applicable",
            Self::NotPublished => "not published",
            Self::LowCoverage => "low coverage",
            Self::NotEntered => "no pupils entered",
            Self::Missing => "no data",
        };
        f.write_str(text)
    }
}

/// A value that is either present or absent with a reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    Unavailable(UnavailableReason),
}

impl<T> Availability<T> {
    /// Shorthand for `Unavailable(Missing)`.
    pub fn missing() -> Self {
        Self::Unavailable(UnavailableReason::Missing)
    }

    /// Wrap an optional value; `None` becomes `Unavailable(Missing)`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Available(v),
            None => Self::missing(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable(_) => None,
        }
    }

    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable(reason) => Some(*reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Availability<U> {
        match self {
            Self::Available(v) => Availability::Available(f(v)),
            Self::Unavailable(reason) => Availability::Unavailable(reason),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable(_) => None,
        }
    }
}

impl<T: Copy> Availability<T> {
    pub fn copied_value(&self) -> Option<T> {
        self.value().copied()
    }
}

impl Availability<String> {
    /// Wrap a text attribute; blank text is `Unavailable(Missing)`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::missing()
        } else {
            Self::Available(text)
        }
    }
}

impl Availability<f64> {
    /// Parse a raw numeric cell: a number, or a source code such as `SUPP`.
    ///
    /// Never fails; anything that is neither a finite number nor a known
    /// code is `Unavailable(Missing)`.
    pub fn from_code(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('%');
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Available(v),
            _ => Self::Unavailable(UnavailableReason::from_code(raw)),
        }
    }
}

impl<T> Default for Availability<T> {
    fn default() -> Self {
        Self::missing()
    }
}

impl<T> From<Option<T>> for Availability<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

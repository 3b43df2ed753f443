//! Values read from upstream reaction data that may have been substituted by a default.
//!
//! Malformed energies, coverages or a degenerate sticking normalisation never abort the file
//! generation. Instead the value is replaced by a documented default and the reason travels
//! with it, so a caller can tell a real `1.0` from a defaulted one.
use thiserror::Error;

/// why a default was used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fallback {
    #[error("value is missing")]
    Missing,
    #[error("cannot parse '{0}'")]
    Unparsable(String),
    #[error("coverage of zero")]
    ZeroCoverage,
    #[error("sticking factors of the adsorption group do not normalize (sum is zero or not finite)")]
    DegenerateStickingSum,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    Parsed(T),
    Defaulted(T, Fallback),
}

impl<T: Copy> Resolved<T> {
    pub fn value(&self) -> T {
        match self {
            Resolved::Parsed(v) => *v,
            Resolved::Defaulted(v, _) => *v,
        }
    }
}

impl<T> Resolved<T> {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Resolved::Defaulted(..))
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        match self {
            Resolved::Parsed(_) => None,
            Resolved::Defaulted(_, reason) => Some(reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resolved<U> {
        match self {
            Resolved::Parsed(v) => Resolved::Parsed(f(v)),
            Resolved::Defaulted(v, reason) => Resolved::Defaulted(f(v), reason),
        }
    }
}

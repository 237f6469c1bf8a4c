//! Binder configuration.

use serde::{Deserialize, Serialize};

use crate::BindError;

/// How the argument count is checked against the slot count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArityPolicy {
    /// At least as many arguments as slots; extra arguments are ignored.
    #[default]
    Prefix,
    /// Exactly as many arguments as slots.
    Exact,
}

impl ArityPolicy {
    /// Check `got` arguments against `expected` slots.
    pub fn check(self, expected: usize, got: usize) -> Result<(), BindError> {
        let ok = match self {
            ArityPolicy::Prefix => got >= expected,
            ArityPolicy::Exact => got == expected,
        };
        if ok {
            Ok(())
        } else {
            Err(BindError::Arity { expected, got })
        }
    }
}

/// When converted values are written to the caller's slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitPolicy {
    /// Write each slot as soon as its argument converts. A failure at
    /// position `k` leaves slots `0..k` written.
    #[default]
    Eager,
    /// Convert every argument first, write slots only if all succeed.
    Atomic,
}

/// Options for `bind_with` and `extract_with`.
///
/// The default (prefix arity, eager commit) is the behavior of `bind`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    pub arity: ArityPolicy,
    pub commit: CommitPolicy,
}

impl BindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact arity and atomic commit.
    pub fn strict() -> Self {
        Self {
            arity: ArityPolicy::Exact,
            commit: CommitPolicy::Atomic,
        }
    }

    pub fn with_arity(mut self, arity: ArityPolicy) -> Self {
        self.arity = arity;
        self
    }

    pub fn with_commit(mut self, commit: CommitPolicy) -> Self {
        self.commit = commit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_allows_extra_arguments() {
        assert!(ArityPolicy::Prefix.check(2, 2).is_ok());
        assert!(ArityPolicy::Prefix.check(2, 5).is_ok());
        assert_eq!(
            ArityPolicy::Prefix.check(2, 1),
            Err(BindError::Arity {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn exact_rejects_extra_arguments() {
        assert!(ArityPolicy::Exact.check(2, 2).is_ok());
        assert!(ArityPolicy::Exact.check(2, 3).is_err());
        assert!(ArityPolicy::Exact.check(2, 1).is_err());
    }

    #[test]
    fn builders() {
        let options = BindOptions::new().with_commit(CommitPolicy::Atomic);
        assert_eq!(options.arity, ArityPolicy::Prefix);
        assert_eq!(options.commit, CommitPolicy::Atomic);
        assert_eq!(
            BindOptions::strict(),
            BindOptions::new()
                .with_arity(ArityPolicy::Exact)
                .with_commit(CommitPolicy::Atomic)
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let options: BindOptions = serde_json::from_str(r#"{"arity": "exact"}"#).unwrap();
        assert_eq!(options.arity, ArityPolicy::Exact);
        assert_eq!(options.commit, CommitPolicy::Eager);

        let options: BindOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, BindOptions::default());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_value(BindOptions::strict()).unwrap();
        assert_eq!(json, serde_json::json!({"arity": "exact", "commit": "atomic"}));
    }
}

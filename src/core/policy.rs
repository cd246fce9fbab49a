//! Intake policy for negative and non-finite tolerances
//!
//! The calculator accepts any real input. This is the single place where the
//! collaborator decides what a negative tolerance means before handing entries
//! over.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::input::InputError;
use crate::entities::stackup::FeatureEntry;

/// What to do with a negative tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TolerancePolicy {
    /// Refuse the input and name the offending feature
    #[default]
    Reject,
    /// Use the magnitude of the tolerance
    Absolute,
    /// Pass the value through unchanged
    Accept,
}

impl std::fmt::Display for TolerancePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TolerancePolicy::Reject => write!(f, "reject"),
            TolerancePolicy::Absolute => write!(f, "absolute"),
            TolerancePolicy::Accept => write!(f, "accept"),
        }
    }
}

impl TolerancePolicy {
    /// Check every entry and apply the policy.
    ///
    /// Non-finite lengths or tolerances are rejected under every policy.
    pub fn apply(&self, entries: Vec<FeatureEntry>) -> Result<Vec<FeatureEntry>, InputError> {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| self.apply_one(i + 1, entry))
            .collect()
    }

    fn apply_one(&self, index: usize, entry: FeatureEntry) -> Result<FeatureEntry, InputError> {
        if !entry.length.is_finite() {
            return Err(InputError::NonFinite {
                index,
                field: "length",
                value: entry.length,
            });
        }
        if !entry.tolerance.is_finite() {
            return Err(InputError::NonFinite {
                index,
                field: "tolerance",
                value: entry.tolerance,
            });
        }

        if entry.tolerance >= 0.0 {
            return Ok(entry);
        }

        match self {
            TolerancePolicy::Reject => Err(InputError::NegativeTolerance {
                index,
                value: entry.tolerance,
            }),
            TolerancePolicy::Absolute => {
                tracing::info!(
                    feature = index,
                    tolerance = entry.tolerance,
                    "using magnitude of negative tolerance"
                );
                Ok(FeatureEntry::new(entry.length, entry.tolerance.abs()))
            }
            TolerancePolicy::Accept => {
                tracing::warn!(
                    feature = index,
                    tolerance = entry.tolerance,
                    "negative tolerance accepted unchanged"
                );
                Ok(entry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Vec<FeatureEntry> {
        vec![FeatureEntry::new(10.0, 0.1), FeatureEntry::new(5.0, -0.2)]
    }

    #[test]
    fn test_reject_names_feature() {
        let err = TolerancePolicy::Reject.apply(mixed()).unwrap_err();
        match err {
            InputError::NegativeTolerance { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, -0.2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_absolute_takes_magnitude() {
        let entries = TolerancePolicy::Absolute.apply(mixed()).unwrap();
        assert_eq!(entries[1], FeatureEntry::new(5.0, 0.2));
        assert_eq!(entries[0], FeatureEntry::new(10.0, 0.1));
    }

    #[test]
    fn test_accept_keeps_value() {
        let entries = TolerancePolicy::Accept.apply(mixed()).unwrap();
        assert_eq!(entries, mixed());
    }

    #[test]
    fn test_zero_tolerance_is_not_negative() {
        let entries = vec![FeatureEntry::new(5.0, 0.0), FeatureEntry::new(1.0, -0.0)];
        assert!(TolerancePolicy::Reject.apply(entries).is_ok());
    }

    #[test]
    fn test_non_finite_rejected_under_every_policy() {
        for policy in [
            TolerancePolicy::Reject,
            TolerancePolicy::Absolute,
            TolerancePolicy::Accept,
        ] {
            let err = policy
                .apply(vec![FeatureEntry::new(f64::NAN, 0.1)])
                .unwrap_err();
            assert!(matches!(
                err,
                InputError::NonFinite {
                    index: 1,
                    field: "length",
                    ..
                }
            ));

            let err = policy
                .apply(vec![
                    FeatureEntry::new(1.0, 0.1),
                    FeatureEntry::new(1.0, f64::INFINITY),
                ])
                .unwrap_err();
            assert!(matches!(
                err,
                InputError::NonFinite {
                    index: 2,
                    field: "tolerance",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert!(TolerancePolicy::Reject.apply(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_policy_display_matches_serde() {
        assert_eq!(TolerancePolicy::Absolute.to_string(), "absolute");
        let yaml = serde_yml::to_string(&TolerancePolicy::Accept).unwrap();
        assert_eq!(yaml.trim(), "accept");
    }
}

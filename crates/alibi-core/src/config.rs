//! Case configuration and tier presets.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::suspect::roster;

/// Number of built-in tier presets.
pub const LEVEL_COUNT: u8 = 8;

/// Bounds on how many suspects lie.
///
/// Truth bounds are the mirror image of liar bounds (`truths = N - liars`)
/// and both are applied when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiarConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_liars: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_liars: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_truths: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_truths: Option<usize>,
}

impl LiarConstraints {
    /// Unconstrained: any number of liars from 0 to N.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Liar count between `min` and `max`, inclusive.
    #[must_use]
    pub fn liars(min: usize, max: usize) -> Self {
        Self {
            min_liars: Some(min),
            max_liars: Some(max),
            ..Self::default()
        }
    }

    /// Effective inclusive liar-count range for `suspects` suspects.
    ///
    /// The range is empty when the bounds contradict each other.
    #[must_use]
    pub fn liar_range(&self, suspects: usize) -> RangeInclusive<usize> {
        let from_truths_min = suspects.saturating_sub(self.max_truths.unwrap_or(suspects));
        let from_truths_max = suspects.saturating_sub(self.min_truths.unwrap_or(0));

        let low = self.min_liars.unwrap_or(0).max(from_truths_min);
        let high = self
            .max_liars
            .unwrap_or(suspects)
            .min(from_truths_max)
            .min(suspects);
        low..=high
    }

    fn validate(&self, suspects: usize) -> Result<(), ConfigError> {
        let bounds = [
            ("minLiars", self.min_liars),
            ("maxLiars", self.max_liars),
            ("minTruths", self.min_truths),
            ("maxTruths", self.max_truths),
        ];
        for (name, value) in bounds {
            if let Some(value) = value {
                if value > suspects {
                    return Err(ConfigError::BoundOutOfRange {
                        name,
                        value,
                        suspects,
                    });
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_liars, self.max_liars) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    name: "liar",
                    min,
                    max,
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_truths, self.max_truths) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    name: "truth",
                    min,
                    max,
                });
            }
        }

        if self.liar_range(suspects).is_empty() {
            return Err(ConfigError::EmptyLiarRange { suspects });
        }
        Ok(())
    }
}

/// What kind of case to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseConfig {
    pub suspect_count: usize,
    pub culprit_count: usize,
    /// Templates up to `difficulty + 1` are eligible
    pub difficulty: u8,
    #[serde(default)]
    pub constraints: LiarConstraints,
}

impl CaseConfig {
    #[must_use]
    pub fn new(
        suspect_count: usize,
        culprit_count: usize,
        difficulty: u8,
        constraints: LiarConstraints,
    ) -> Self {
        Self {
            suspect_count,
            culprit_count,
            difficulty,
            constraints,
        }
    }

    /// Built-in tier preset, `1..=LEVEL_COUNT`.
    #[must_use]
    pub fn level(level: u8) -> Option<Self> {
        let (suspects, culprits, liars) = match level {
            1 => (3, 1, 1..=1),
            2 => (3, 1, 1..=2),
            3 => (5, 1, 2..=2),
            4 => (5, 1, 2..=3),
            5 => (7, 1, 2..=2),
            6 => (7, 1, 2..=4),
            7 => (7, 2, 3..=3),
            8 => (7, 2, 2..=4),
            _ => return None,
        };
        Some(Self::new(
            suspects,
            culprits,
            level,
            LiarConstraints::liars(*liars.start(), *liars.end()),
        ))
    }

    /// Effective liar-count range for this configuration.
    #[must_use]
    pub fn liar_range(&self) -> RangeInclusive<usize> {
        self.constraints.liar_range(self.suspect_count)
    }

    /// Reject configurations that can never yield a case.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let available = roster().len();
        if self.suspect_count == 0 {
            return Err(ConfigError::NoSuspects);
        }
        if self.suspect_count > available {
            return Err(ConfigError::TooManySuspects {
                requested: self.suspect_count,
                available,
            });
        }
        if self.culprit_count == 0 {
            return Err(ConfigError::NoCulprits);
        }
        if self.culprit_count > self.suspect_count {
            return Err(ConfigError::CulpritsExceedSuspects {
                culprits: self.culprit_count,
                suspects: self.suspect_count,
            });
        }
        self.constraints.validate(self.suspect_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liar_range_defaults() {
        assert_eq!(LiarConstraints::any().liar_range(5), 0..=5);
        assert_eq!(LiarConstraints::liars(1, 2).liar_range(5), 1..=2);
    }

    #[test]
    fn test_truth_bounds_mirror_liar_bounds() {
        let c = LiarConstraints {
            min_truths: Some(3),
            max_truths: Some(4),
            ..LiarConstraints::default()
        };
        // 5 suspects with 3..=4 truth-tellers means 1..=2 liars
        assert_eq!(c.liar_range(5), 1..=2);

        let both = LiarConstraints {
            min_liars: Some(2),
            min_truths: Some(4),
            ..LiarConstraints::default()
        };
        assert!(both.liar_range(5).is_empty());
    }

    #[test]
    fn test_levels() {
        for level in 1..=LEVEL_COUNT {
            let config = CaseConfig::level(level).unwrap();
            assert!(config.validate().is_ok(), "level {} invalid", level);
        }
        assert!(CaseConfig::level(0).is_none());
        assert!(CaseConfig::level(LEVEL_COUNT + 1).is_none());

        let eight = CaseConfig::level(8).unwrap();
        assert_eq!(eight.suspect_count, 7);
        assert_eq!(eight.culprit_count, 2);
        assert_eq!(eight.liar_range(), 2..=4);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let ok = LiarConstraints::liars(0, 1);

        assert_eq!(
            CaseConfig::new(0, 0, 1, ok).validate(),
            Err(ConfigError::NoSuspects)
        );
        assert!(matches!(
            CaseConfig::new(9, 1, 1, ok).validate(),
            Err(ConfigError::TooManySuspects { .. })
        ));
        assert_eq!(
            CaseConfig::new(3, 4, 1, ok).validate(),
            Err(ConfigError::CulpritsExceedSuspects {
                culprits: 4,
                suspects: 3
            })
        );
        assert!(matches!(
            CaseConfig::new(3, 1, 1, LiarConstraints::liars(2, 1)).validate(),
            Err(ConfigError::InvertedBounds { .. })
        ));
        assert!(matches!(
            CaseConfig::new(3, 1, 1, LiarConstraints::liars(0, 4)).validate(),
            Err(ConfigError::BoundOutOfRange { value: 4, .. })
        ));
    }

    #[test]
    fn test_config_json_shape() {
        let config = CaseConfig::level(1).unwrap();
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["suspectCount"], 3);
        assert_eq!(json["constraints"]["minLiars"], 1);
        assert!(json["constraints"].get("minTruths").is_none());

        let back: CaseConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}

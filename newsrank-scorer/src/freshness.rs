//! Exponential freshness decay.

use newsrank_core::{ConfigError, FreshnessConfig};

const SECONDS_PER_HOUR: f32 = 3_600.0;

/// Converts article age into a multiplier in `min_multiplier..=1.0`.
///
/// The multiplier halves every `half_life_hours` and drops straight to the
/// floor once an article is older than `max_age_hours`. Articles dated in the
/// future count as brand new.
///
/// # Examples
/// ```
/// use newsrank_core::{ConfigError, FreshnessConfig};
/// use newsrank_scorer::FreshnessDecay;
///
/// # fn main() -> Result<(), newsrank_core::ConfigError> {
/// let decay = FreshnessDecay::new(FreshnessConfig::default())?;
/// let now = 1_700_000_000;
/// assert_eq!(decay.multiplier(now, now), 1.0);
/// assert!((decay.multiplier(now - 24 * 3_600, now) - 0.5).abs() < 1e-6);
/// assert_eq!(decay.multiplier(now - 200 * 3_600, now), 0.1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshnessDecay {
    config: FreshnessConfig,
}

impl FreshnessDecay {
    /// Validate and wrap a decay configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidFreshness`] when `config` fails
    /// [`FreshnessConfig::validate`].
    pub fn new(config: FreshnessConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Age of an article in hours, never negative.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "ages are converted from whole seconds to fractional hours"
    )]
    pub fn age_hours(published: i64, now: i64) -> f32 {
        let seconds = now.saturating_sub(published).max(0);
        seconds as f32 / SECONDS_PER_HOUR
    }

    /// Multiplier for an article published at `published` and scored at `now`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "decay is an exponential of the age ratio"
    )]
    pub fn multiplier(&self, published: i64, now: i64) -> f32 {
        let age = Self::age_hours(published, now);
        if age > self.config.max_age_hours {
            return self.config.min_multiplier;
        }
        let decayed = 0.5_f32.powf(age / self.config.half_life_hours);
        decayed.max(self.config.min_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    const NOW: i64 = 1_700_000_000;

    #[rstest]
    #[case(0, 1.0)]
    #[case(48, 0.25)]
    #[case(168, 0.1)]
    #[case(169, 0.1)]
    #[case(-5, 1.0)]
    fn decays_with_age(#[case] hours: i64, #[case] expected: f32) {
        let decay = FreshnessDecay::new(FreshnessConfig::default()).expect("valid config");
        let value = decay.multiplier(NOW - hours * 3_600, NOW);
        assert!((value - expected).abs() < 1e-6, "got {value}");
    }

    #[rstest]
    fn floor_applies_before_max_age() {
        let decay = FreshnessDecay::new(FreshnessConfig {
            min_multiplier: 0.4,
            ..FreshnessConfig::default()
        })
        .expect("valid config");
        assert_eq!(decay.multiplier(NOW - 72 * 3_600, NOW), 0.4);
    }

    #[rstest]
    #[case::zero_half_life(168.0, 0.0, 0.1, "half_life_hours")]
    #[case::nan_max_age(f32::NAN, 24.0, 0.1, "max_age_hours")]
    #[case::floor_above_one(168.0, 24.0, 1.5, "min_multiplier")]
    fn rejects_invalid_config(
        #[case] max_age_hours: f32,
        #[case] half_life_hours: f32,
        #[case] min_multiplier: f32,
        #[case] expected: &str,
    ) {
        let config = FreshnessConfig {
            max_age_hours,
            half_life_hours,
            min_multiplier,
        };
        match FreshnessDecay::new(config) {
            Err(ConfigError::InvalidFreshness { field }) => assert_eq!(field, expected),
            other => panic!("expected InvalidFreshness, found {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn multiplier_is_bounded_and_non_increasing(
            younger in 0_i64..1_000_000,
            extra in 0_i64..1_000_000,
        ) {
            let decay = FreshnessDecay::new(FreshnessConfig::default()).expect("valid config");
            let fresh = decay.multiplier(NOW - younger, NOW);
            let stale = decay.multiplier(NOW - younger - extra, NOW);
            prop_assert!((0.1..=1.0).contains(&fresh));
            prop_assert!((0.1..=1.0).contains(&stale));
            prop_assert!(stale <= fresh);
        }
    }
}

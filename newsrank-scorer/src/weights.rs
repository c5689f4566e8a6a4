//! Contextual multipliers applied to a base relevance score.

use newsrank_core::{Region, RegionalWeights, SourceTier, SourceWeights, sanitise_score};

/// Applies freshness, source reliability, and regional multipliers.
///
/// Multipliers are combined in ascending order before a single multiplication
/// with the base score, so permuting them cannot change the result. Clamping
/// to `0..=100` happens once at the end.
///
/// # Examples
/// ```
/// use newsrank_core::{Region, SourceTier};
/// use newsrank_scorer::WeightApplier;
///
/// let applier = WeightApplier::default();
/// assert_eq!(applier.apply(40.0, 1.0, SourceTier::High, Region::Global), 60.0);
/// assert_eq!(applier.apply(80.0, 1.0, SourceTier::High, Region::Czech), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightApplier {
    sources: SourceWeights,
    regions: RegionalWeights,
}

impl WeightApplier {
    /// Build an applier from explicit multiplier tables.
    #[must_use]
    pub const fn new(sources: SourceWeights, regions: RegionalWeights) -> Self {
        Self { sources, regions }
    }

    /// Multiplier for a reliability tier.
    #[must_use]
    pub const fn source_weight(&self, tier: SourceTier) -> f32 {
        self.sources.weight(tier)
    }

    /// Multiplier for a region.
    #[must_use]
    pub const fn regional_weight(&self, region: Region) -> f32 {
        self.regions.weight(region)
    }

    /// Weight `base` by the tier and region multipliers and a freshness factor.
    #[must_use]
    pub fn apply(&self, base: f32, freshness: f32, tier: SourceTier, region: Region) -> f32 {
        combine(
            base,
            &[
                freshness,
                self.source_weight(tier),
                self.regional_weight(region),
            ],
        )
    }
}

/// Multiply `base` by every multiplier and clamp the product into `0..=100`.
///
/// # Examples
/// ```
/// use newsrank_scorer::combine;
///
/// assert_eq!(combine(50.0, &[0.5, 2.0, 1.5]), combine(50.0, &[1.5, 0.5, 2.0]));
/// assert_eq!(combine(90.0, &[2.0]), 100.0);
/// assert_eq!(combine(f32::NAN, &[1.0]), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the final score is the product of its multipliers"
)]
pub fn combine(base: f32, multipliers: &[f32]) -> f32 {
    let mut ordered = multipliers.to_vec();
    ordered.sort_by(f32::total_cmp);
    let factor: f32 = ordered.iter().product();
    sanitise_score(base * factor)
}

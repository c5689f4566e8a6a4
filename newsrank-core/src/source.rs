//! Publisher reliability tiers and regional relevance.
//!
//! Both enums round-trip through lowercase strings so they can appear in
//! configuration files.
//!
//! # Examples
//! ```
//! use newsrank_core::{Region, SourceTier};
//!
//! assert_eq!(SourceTier::High.as_str(), "high");
//! assert_eq!(Region::European.to_string(), "european");
//! ```

use std::collections::HashMap;

/// Trust tier assigned to a publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceTier {
    /// Primary research and wire services.
    High,
    /// Mainstream outlets.
    #[default]
    Medium,
    /// Questionable sources.
    Low,
}

impl SourceTier {
    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for SourceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("unknown source tier '{s}'")),
        }
    }
}

/// Geographic relevance of a publisher to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Region {
    /// Czech-language or Czech-focused outlets.
    Czech,
    /// European outlets.
    European,
    /// Everything else.
    #[default]
    Global,
}

impl Region {
    /// Return the region as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Czech => "czech",
            Self::European => "european",
            Self::Global => "global",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "czech" => Ok(Self::Czech),
            "european" => Ok(Self::European),
            "global" => Ok(Self::Global),
            _ => Err(format!("unknown region '{s}'")),
        }
    }
}

/// Tier and region recorded for one publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceProfile {
    /// Reliability tier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: SourceTier,
    /// Regional relevance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Region,
}

/// Lookup table from publisher name to [`SourceProfile`].
///
/// Names compare case-insensitively; unknown publishers are treated as
/// medium-reliability global outlets.
///
/// # Examples
/// ```
/// use newsrank_core::{Region, SourceCatalogue, SourceTier};
///
/// let catalogue = SourceCatalogue::new()
///     .with_source("Reuters", SourceTier::High, Region::Global)
///     .with_source("iROZHLAS", SourceTier::High, Region::Czech);
///
/// assert_eq!(catalogue.profile("reuters").tier, SourceTier::High);
/// assert_eq!(catalogue.profile("irozhlas").region, Region::Czech);
/// assert_eq!(catalogue.profile("Unknown blog").tier, SourceTier::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "HashMap<String, SourceProfile>",
        into = "HashMap<String, SourceProfile>"
    )
)]
pub struct SourceCatalogue {
    sources: HashMap<String, SourceProfile>,
}

impl From<HashMap<String, SourceProfile>> for SourceCatalogue {
    fn from(sources: HashMap<String, SourceProfile>) -> Self {
        let mut catalogue = Self::new();
        for (name, profile) in sources {
            catalogue.insert(&name, profile.tier, profile.region);
        }
        catalogue
    }
}

impl From<SourceCatalogue> for HashMap<String, SourceProfile> {
    fn from(catalogue: SourceCatalogue) -> Self {
        catalogue.sources
    }
}

impl SourceCatalogue {
    /// Construct an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace a publisher's profile.
    pub fn insert(&mut self, source: &str, tier: SourceTier, region: Region) {
        self.sources
            .insert(source.trim().to_lowercase(), SourceProfile { tier, region });
    }

    /// Record a publisher while returning `self` for chaining.
    #[must_use]
    pub fn with_source(mut self, source: &str, tier: SourceTier, region: Region) -> Self {
        self.insert(source, tier, region);
        self
    }

    /// Return the profile for `source`, falling back to the default profile.
    #[must_use]
    pub fn profile(&self, source: &str) -> SourceProfile {
        self.sources
            .get(&source.trim().to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Number of catalogued publishers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Report whether no publisher is catalogued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::pricing::{PricingError, Tier};

/// Optional build feature. Declaration order is the order the form lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Auth,
    Payments,
    Blog,
    Cms,
    Analytics,
    Ecommerce,
}

impl Feature {
    pub const fn all() -> [Self; 6] {
        [
            Self::Auth,
            Self::Payments,
            Self::Blog,
            Self::Cms,
            Self::Analytics,
            Self::Ecommerce,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Payments => "payments",
            Self::Blog => "blog",
            Self::Cms => "cms",
            Self::Analytics => "analytics",
            Self::Ecommerce => "ecommerce",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Feature {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|feature| feature.key() == normalized)
            .ok_or_else(|| PricingError::unknown("feature", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignLevel {
    Minimal,
    #[default]
    Standard,
    Polished,
}

impl DesignLevel {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Polished => "polished",
        }
    }
}

impl fmt::Display for DesignLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DesignLevel {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "polished" => Ok(Self::Polished),
            _ => Err(PricingError::unknown("design", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Flexible,
    #[default]
    Standard,
    Rush,
}

impl Speed {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Flexible => "flexible",
            Self::Standard => "standard",
            Self::Rush => "rush",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Speed {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flexible" => Ok(Self::Flexible),
            "standard" => Ok(Self::Standard),
            "rush" => Ok(Self::Rush),
            _ => Err(PricingError::unknown("speed", value)),
        }
    }
}

/// Snapshot of the estimator controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorInput {
    pub page_count: u32,
    pub tier: Tier,
    #[serde(default)]
    pub features: BTreeSet<Feature>,
    #[serde(default)]
    pub design: DesignLevel,
    #[serde(default)]
    pub speed: Speed,
    #[serde(default)]
    pub maintenance: bool,
}

impl Default for EstimatorInput {
    /// Form state after a reset.
    fn default() -> Self {
        Self {
            page_count: 3,
            tier: Tier::Basic,
            features: BTreeSet::new(),
            design: DesignLevel::Standard,
            speed: Speed::Standard,
            maintenance: false,
        }
    }
}

/// Single contribution to the pre-multiplier cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: u32,
}

/// Estimator result for one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorOutput {
    pub cost: u32,
    pub days: u32,
    pub recommended_plan: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_monthly: Option<u32>,
    pub line_items: Vec<LineItem>,
    pub breakdown: String,
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PricingError;

/// Service package offered on the hire page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Basic,
    Advanced,
    Pro,
}

impl Tier {
    /// Tiers in pricing-card order.
    pub const fn ordered() -> [Self; 3] {
        [Self::Basic, Self::Advanced, Self::Pro]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Pro => "Pro",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Pro => "pro",
        }
    }

    /// Position of the tier's pricing card.
    pub const fn card_index(self) -> usize {
        match self {
            Self::Basic => 0,
            Self::Advanced => 1,
            Self::Pro => 2,
        }
    }

    pub const fn pricing(self) -> TierPricing {
        match self {
            Self::Basic => TierPricing {
                base_price: 399,
                base_days: 6,
                included_pages: 3,
                extra_per_page: 60,
                maintenance_monthly: 25,
            },
            Self::Advanced => TierPricing {
                base_price: 599,
                base_days: 12,
                included_pages: 6,
                extra_per_page: 50,
                maintenance_monthly: 50,
            },
            Self::Pro => TierPricing {
                base_price: 1199,
                base_days: 18,
                included_pages: 10,
                extra_per_page: 40,
                maintenance_monthly: 75,
            },
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            "pro" => Ok(Self::Pro),
            _ => Err(PricingError::unknown("tier", value)),
        }
    }
}

/// Rate card entry for a single tier. Money values are whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPricing {
    pub base_price: u32,
    pub base_days: u32,
    pub included_pages: u32,
    pub extra_per_page: u32,
    pub maintenance_monthly: u32,
}

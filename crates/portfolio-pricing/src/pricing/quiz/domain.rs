use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::pricing::{PricingError, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PagesBucket {
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "4-6")]
    FourToSix,
    #[serde(rename = "7-10")]
    SevenToTen,
}

impl PagesBucket {
    pub const fn key(self) -> &'static str {
        match self {
            Self::OneToThree => "1-3",
            Self::FourToSix => "4-6",
            Self::SevenToTen => "7-10",
        }
    }
}

impl FromStr for PagesBucket {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1-3" => Ok(Self::OneToThree),
            "4-6" => Ok(Self::FourToSix),
            "7-10" => Ok(Self::SevenToTen),
            _ => Err(PricingError::unknown("pages", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Urgent,
    Standard,
    Extended,
}

impl Timeline {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

impl FromStr for Timeline {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "urgent" => Ok(Self::Urgent),
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            _ => Err(PricingError::unknown("timeline", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Low,
    Mid,
    High,
}

impl Budget {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl FromStr for Budget {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" => Ok(Self::High),
            _ => Err(PricingError::unknown("budget", value)),
        }
    }
}

/// Fully answered quiz. Features are free-form; only their count is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizInput {
    pub pages: PagesBucket,
    pub timeline: Timeline,
    #[serde(default)]
    pub features: BTreeSet<String>,
    pub budget: Budget,
}

/// Question a score component was awarded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Pages,
    Timeline,
    FeatureCount,
    Budget,
}

/// Points awarded to one tier by one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub tier: Tier,
    pub points: u32,
    pub notes: String,
}

/// Running totals per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub basic: u32,
    pub advanced: u32,
    pub pro: u32,
}

impl ScoreTable {
    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Basic => self.basic,
            Tier::Advanced => self.advanced,
            Tier::Pro => self.pro,
        }
    }

    pub(crate) fn add(&mut self, tier: Tier, points: u32) {
        let slot = match tier {
            Tier::Basic => &mut self.basic,
            Tier::Advanced => &mut self.advanced,
            Tier::Pro => &mut self.pro,
        };
        *slot += points;
    }

    /// Tiers by descending score; equal scores keep card order.
    pub fn ranked(&self) -> [(Tier, u32); 3] {
        let mut ranked = Tier::ordered().map(|tier| (tier, self.get(tier)));
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutput {
    pub recommendation: Tier,
    pub scores: ScoreTable,
    pub components: Vec<ScoreComponent>,
}

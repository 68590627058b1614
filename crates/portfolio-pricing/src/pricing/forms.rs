//! Raw form values as sampled from the page, and their conversion into engine
//! inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::estimator::{DesignLevel, EstimatorInput, Feature, Speed};
use super::quiz::{Budget, PagesBucket, QuizInput, Timeline};
use super::{PricingError, Tier};

/// Estimator controls before coercion. Unchecked radio groups arrive as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorForm {
    #[serde(default)]
    pub pages: Option<String>,
    pub complexity: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub design: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub maintenance: bool,
}

impl TryFrom<EstimatorForm> for EstimatorInput {
    type Error = PricingError;

    fn try_from(form: EstimatorForm) -> Result<Self, Self::Error> {
        let tier: Tier = form.complexity.parse()?;
        let features = form
            .features
            .iter()
            .map(|raw| raw.parse::<Feature>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        let design = selected(form.design.as_deref())
            .map(str::parse::<DesignLevel>)
            .transpose()?
            .unwrap_or_default();
        let speed = selected(form.speed.as_deref())
            .map(str::parse::<Speed>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            page_count: parse_page_count(form.pages.as_deref()),
            tier,
            features,
            design,
            speed,
            maintenance: form.maintenance,
        })
    }
}

/// Page slider value; anything unparseable or below one counts as one page.
pub fn parse_page_count(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|pages| *pages >= 1)
        .map(|pages| u32::try_from(pages).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

/// Quiz answers before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizForm {
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
}

impl TryFrom<QuizForm> for QuizInput {
    type Error = PricingError;

    fn try_from(form: QuizForm) -> Result<Self, Self::Error> {
        let pages: PagesBucket = required(form.pages.as_deref(), "pages")?.parse()?;
        let timeline: Timeline = required(form.timeline.as_deref(), "timeline")?.parse()?;
        let budget: Budget = required(form.budget.as_deref(), "budget")?.parse()?;
        let features = form
            .features
            .iter()
            .map(|feature| feature.trim())
            .filter(|feature| !feature.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            pages,
            timeline,
            features,
            budget,
        })
    }
}

fn selected(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn required<'a>(raw: Option<&'a str>, field: &'static str) -> Result<&'a str, PricingError> {
    selected(raw).ok_or(PricingError::MissingAnswer(field))
}

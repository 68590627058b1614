use std::collections::BTreeSet;

use crate::pricing::{
    Budget, DesignLevel, EstimatorInput, Feature, PagesBucket, QuizInput, Speed, Tier, Timeline,
};

pub(super) fn estimator_input(tier: Tier, page_count: u32, features: &[Feature]) -> EstimatorInput {
    EstimatorInput {
        page_count,
        tier,
        features: features.iter().copied().collect(),
        design: DesignLevel::Standard,
        speed: Speed::Standard,
        maintenance: false,
    }
}

/// Advanced tier, six pages, auth and blog at standard design and speed.
pub(super) fn advanced_scenario() -> EstimatorInput {
    estimator_input(Tier::Advanced, 6, &[Feature::Auth, Feature::Blog])
}

pub(super) fn quiz_input(
    pages: PagesBucket,
    timeline: Timeline,
    feature_count: usize,
    budget: Budget,
) -> QuizInput {
    QuizInput {
        pages,
        timeline,
        features: feature_names(feature_count),
        budget,
    }
}

pub(super) fn feature_names(count: usize) -> BTreeSet<String> {
    (0..count).map(|index| format!("feature-{index}")).collect()
}

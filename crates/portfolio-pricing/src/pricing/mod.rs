//! Pricing core for the hire page: the build-cost estimator and the plan
//! recommendation quiz, plus the adapters that feed them raw form values and
//! turn their outputs into presentation state.
//!
//! Both engines are pure and total over their input types. Anything outside
//! those domains is rejected by the form adapters before the engines run.

pub mod estimator;
pub mod forms;
pub mod presentation;
pub mod quiz;
mod tier;

#[cfg(test)]
mod tests;

pub use estimator::{
    estimate, plan_for_cost, DesignLevel, EstimatorInput, EstimatorOutput, Feature, LineItem, Speed,
};
pub use forms::{EstimatorForm, QuizForm};
pub use presentation::{
    format_cost, format_days, EstimatorSession, MessagePlaceholder, PricingCard, PricingCards,
    QuizSession,
};
pub use quiz::{
    recommend, Budget, PagesBucket, QuizInput, QuizOutput, ScoreComponent, ScoreFactor, ScoreTable,
    Timeline,
};
pub use tier::{Tier, TierPricing};

/// Errors raised while turning form values into engine inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid configuration: unknown {field} option '{value}'")]
    UnknownOption { field: &'static str, value: String },
    #[error("missing answer for '{0}'")]
    MissingAnswer(&'static str),
}

impl PricingError {
    pub(crate) fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownOption {
            field,
            value: value.to_string(),
        }
    }
}

//! Presentation state derived from engine outputs. Nothing here computes
//! prices; it only records what the page should show.

use serde::Serialize;

use super::estimator::{estimate, EstimatorInput, EstimatorOutput};
use super::quiz::{recommend, QuizInput, QuizOutput};
use super::Tier;

pub const RECOMMENDED_LABEL: &str = "Recommended";

/// `$1,234` style amount.
pub fn format_cost(cost: u32) -> String {
    let digits = cost.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_days(days: u32) -> String {
    format!("{days} days")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingCard {
    pub tier: Tier,
    pub recommended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

/// The three pricing cards. At most one carries the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingCards {
    cards: [PricingCard; 3],
}

impl Default for PricingCards {
    fn default() -> Self {
        Self {
            cards: Tier::ordered().map(|tier| PricingCard {
                tier,
                recommended: false,
                label: None,
            }),
        }
    }
}

impl PricingCards {
    pub fn highlight(&mut self, tier: Tier) {
        self.clear();
        let card = &mut self.cards[tier.card_index()];
        card.recommended = true;
        card.label = Some(RECOMMENDED_LABEL);
    }

    pub fn clear(&mut self) {
        for card in &mut self.cards {
            card.recommended = false;
            card.label = None;
        }
    }

    pub fn recommended(&self) -> Option<Tier> {
        self.cards
            .iter()
            .find(|card| card.recommended)
            .map(|card| card.tier)
    }

    pub fn cards(&self) -> &[PricingCard] {
        &self.cards
    }
}

/// Contact message placeholder. The original text is captured once and is
/// what `restore` always puts back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePlaceholder {
    original: String,
    current: String,
}

impl MessagePlaceholder {
    pub fn capture(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            current: original.clone(),
            original,
        }
    }

    pub fn suggest(&mut self, tier: Tier) {
        self.current = format!(
            "Hi! The quiz recommended the {} plan. Tell me a bit about your project...",
            tier.label()
        );
    }

    pub fn restore(&mut self) {
        self.current.clone_from(&self.original);
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn current(&self) -> &str {
        &self.current
    }
}

/// Live estimator panel: recomputed on every control change.
#[derive(Debug, Clone)]
pub struct EstimatorSession {
    input: EstimatorInput,
    output: EstimatorOutput,
    cards: PricingCards,
}

impl Default for EstimatorSession {
    fn default() -> Self {
        Self::new(EstimatorInput::default())
    }
}

impl EstimatorSession {
    pub fn new(input: EstimatorInput) -> Self {
        let output = estimate(&input);
        let mut cards = PricingCards::default();
        cards.highlight(output.recommended_plan);
        Self {
            input,
            output,
            cards,
        }
    }

    pub fn update(&mut self, input: EstimatorInput) -> &EstimatorOutput {
        *self = Self::new(input);
        &self.output
    }

    pub fn reset(&mut self) -> &EstimatorOutput {
        self.update(EstimatorInput::default())
    }

    pub fn input(&self) -> &EstimatorInput {
        &self.input
    }

    pub fn output(&self) -> &EstimatorOutput {
        &self.output
    }

    pub fn cards(&self) -> &PricingCards {
        &self.cards
    }
}

/// Quiz panel plus the contact placeholder it rewrites.
#[derive(Debug, Clone)]
pub struct QuizSession {
    cards: PricingCards,
    placeholder: MessagePlaceholder,
    last: Option<QuizOutput>,
}

impl QuizSession {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            cards: PricingCards::default(),
            placeholder: MessagePlaceholder::capture(placeholder),
            last: None,
        }
    }

    pub fn submit(&mut self, input: &QuizInput) -> &QuizOutput {
        let output = recommend(input);
        self.cards.highlight(output.recommendation);
        self.placeholder.suggest(output.recommendation);
        self.last.insert(output)
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.placeholder.restore();
        self.last = None;
    }

    pub fn last(&self) -> Option<&QuizOutput> {
        self.last.as_ref()
    }

    pub fn cards(&self) -> &PricingCards {
        &self.cards
    }

    pub fn placeholder(&self) -> &MessagePlaceholder {
        &self.placeholder
    }
}

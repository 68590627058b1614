use super::domain::{Budget, PagesBucket, QuizInput, ScoreComponent, ScoreFactor, Timeline};
use crate::pricing::Tier;

pub(crate) fn score_answers(input: &QuizInput) -> Vec<ScoreComponent> {
    let mut components = Vec::with_capacity(5);

    let pages_tier = match input.pages {
        PagesBucket::OneToThree => Tier::Basic,
        PagesBucket::FourToSix => Tier::Advanced,
        PagesBucket::SevenToTen => Tier::Pro,
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Pages,
        tier: pages_tier,
        points: 2,
        notes: format!("{} pages fits {}", input.pages.key(), pages_tier.label()),
    });

    match input.timeline {
        Timeline::Urgent => {
            for tier in [Tier::Basic, Tier::Advanced] {
                components.push(ScoreComponent {
                    factor: ScoreFactor::Timeline,
                    tier,
                    points: 1,
                    notes: "urgent timeline favours smaller builds".to_string(),
                });
            }
        }
        Timeline::Standard => components.push(ScoreComponent {
            factor: ScoreFactor::Timeline,
            tier: Tier::Advanced,
            points: 2,
            notes: "standard timeline".to_string(),
        }),
        Timeline::Extended => components.push(ScoreComponent {
            factor: ScoreFactor::Timeline,
            tier: Tier::Pro,
            points: 2,
            notes: "extended timeline leaves room for a larger build".to_string(),
        }),
    }

    let feature_count = input.features.len();
    let (feature_tier, feature_points) = match feature_count {
        0 | 1 => (Tier::Basic, 1),
        2 | 3 => (Tier::Advanced, 2),
        _ => (Tier::Pro, 2),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::FeatureCount,
        tier: feature_tier,
        points: feature_points,
        notes: format!("{feature_count} feature(s) requested"),
    });

    let budget_tier = match input.budget {
        Budget::Low => Tier::Basic,
        Budget::Mid => Tier::Advanced,
        Budget::High => Tier::Pro,
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Budget,
        tier: budget_tier,
        points: 3,
        notes: format!("{} budget", input.budget.key()),
    });

    components
}

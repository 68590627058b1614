mod domain;
mod policy;
mod rules;

pub use domain::{
    Budget, PagesBucket, QuizInput, QuizOutput, ScoreComponent, ScoreFactor, ScoreTable, Timeline,
};

/// Scores a submitted quiz and picks a plan.
pub fn recommend(input: &QuizInput) -> QuizOutput {
    let components = rules::score_answers(input);

    let mut scores = ScoreTable::default();
    for component in &components {
        scores.add(component.tier, component.points);
    }

    QuizOutput {
        recommendation: policy::resolve(&scores),
        scores,
        components,
    }
}

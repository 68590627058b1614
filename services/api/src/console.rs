use clap::Args;
use portfolio_pricing::error::AppError;
use portfolio_pricing::pricing::{
    estimate, format_cost, format_days, recommend, EstimatorForm, EstimatorInput, EstimatorOutput,
    QuizForm, QuizInput, QuizOutput, Tier,
};

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Service tier (basic, advanced, pro)
    #[arg(long)]
    pub(crate) tier: String,
    /// Number of pages
    #[arg(long)]
    pub(crate) pages: Option<String>,
    /// Feature to include; repeat for several (auth, payments, blog, cms, analytics, ecommerce)
    #[arg(long = "feature")]
    pub(crate) features: Vec<String>,
    /// Design level (minimal, standard, polished)
    #[arg(long)]
    pub(crate) design: Option<String>,
    /// Delivery speed (flexible, standard, rush)
    #[arg(long)]
    pub(crate) speed: Option<String>,
    /// Add monthly maintenance
    #[arg(long)]
    pub(crate) maintenance: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Page range (1-3, 4-6, 7-10)
    #[arg(long)]
    pub(crate) pages: String,
    /// Timeline (urgent, standard, extended)
    #[arg(long)]
    pub(crate) timeline: String,
    /// Requested feature; repeat for several
    #[arg(long = "feature")]
    pub(crate) features: Vec<String>,
    /// Budget (low, mid, high)
    #[arg(long)]
    pub(crate) budget: String,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let form = EstimatorForm {
        pages: args.pages,
        complexity: args.tier,
        features: args.features,
        design: args.design,
        speed: args.speed,
        maintenance: args.maintenance,
    };
    let input = EstimatorInput::try_from(form)?;
    let output = estimate(&input);
    render_estimate(&input, &output);
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let form = QuizForm {
        pages: Some(args.pages),
        timeline: Some(args.timeline),
        features: args.features,
        budget: Some(args.budget),
    };
    let input = QuizInput::try_from(form)?;
    let output = recommend(&input);
    render_quiz(&output);
    Ok(())
}

fn render_estimate(input: &EstimatorInput, output: &EstimatorOutput) {
    println!("Build estimate ({} tier)", input.tier);
    println!("Cost: {}", format_cost(output.cost));
    println!("Time: {}", format_days(output.days));
    println!("Suggested plan: {}", output.recommended_plan);
    if output.recommended_plan != input.tier {
        println!(
            "Note: the estimate falls in the {} price band",
            output.recommended_plan
        );
    }

    println!("\nLine items");
    for item in &output.line_items {
        println!("- {}: {}", item.label, format_cost(item.amount));
    }

    println!("\n{}", output.breakdown);
}

fn render_quiz(output: &QuizOutput) {
    println!("Recommended plan: {}", output.recommendation);

    println!("\nScores");
    for tier in Tier::ordered() {
        println!("- {}: {}", tier, output.scores.get(tier));
    }

    println!("\nWhy");
    for component in &output.components {
        println!(
            "- +{} {} ({})",
            component.points, component.tier, component.notes
        );
    }
}

use super::common::*;
use crate::pricing::{
    estimate, plan_for_cost, DesignLevel, EstimatorForm, EstimatorInput, Feature, LineItem,
    Speed, Tier,
};

#[test]
fn advanced_scenario_prices_to_923_over_14_days() {
    let output = estimate(&advanced_scenario());

    assert_eq!(output.cost, 923);
    assert_eq!(output.days, 14);
    assert_eq!(output.recommended_plan, Tier::Advanced);
    assert_eq!(output.maintenance_monthly, None);
    assert_eq!(
        output.line_items,
        vec![
            LineItem {
                label: "Advanced base".to_string(),
                amount: 599
            },
            LineItem {
                label: "auth".to_string(),
                amount: 120
            },
            LineItem {
                label: "blog".to_string(),
                amount: 120
            },
        ]
    );
    assert_eq!(
        output.breakdown,
        "Details: 6 pages (6 included, 0 extra), features: auth, blog, design: standard, speed: standard."
    );
}

#[test]
fn fewer_pages_than_included_earn_no_discount() {
    let two_pages = estimate(&estimator_input(Tier::Advanced, 2, &[]));
    let six_pages = estimate(&estimator_input(Tier::Advanced, 6, &[]));

    assert_eq!(two_pages.cost, six_pages.cost);
    assert_eq!(two_pages.days, six_pages.days);
    assert!(two_pages.breakdown.contains("(6 included, 0 extra)"));
}

#[test]
fn flexible_speed_discounts_and_pads_the_timeline() {
    let mut input = estimator_input(Tier::Basic, 2, &[]);
    input.design = DesignLevel::Minimal;
    input.speed = Speed::Flexible;

    let output = estimate(&input);

    assert_eq!(output.cost, 379);
    assert_eq!(output.days, 7);
    assert_eq!(output.recommended_plan, Tier::Basic);
    assert!(output.breakdown.contains("features: none"));
}

#[test]
fn rush_applies_multipliers_in_order_and_compresses_days() {
    let mut input = estimator_input(Tier::Pro, 12, &[Feature::Cms, Feature::Ecommerce]);
    input.design = DesignLevel::Polished;
    input.speed = Speed::Rush;
    input.maintenance = true;

    let output = estimate(&input);

    assert_eq!(output.cost, 2489);
    assert_eq!(output.days, 19);
    assert_eq!(output.recommended_plan, Tier::Pro);
    assert_eq!(output.maintenance_monthly, Some(75));
    assert!(output
        .line_items
        .iter()
        .any(|item| item.label == "2 extra page(s)" && item.amount == 80));
    assert!(output.breakdown.ends_with("maintenance: $75/mo."));
}

#[test]
fn rush_timeline_is_floored_at_five_days() {
    let mut input = estimator_input(Tier::Basic, 1, &[]);
    input.speed = Speed::Rush;

    let output = estimate(&input);

    assert_eq!(output.days, 5);
    assert_eq!(output.cost, 527);
}

#[test]
fn recommendation_can_disagree_with_selected_tier() {
    let upsell = estimate(&estimator_input(Tier::Basic, 3, &Feature::all()));
    assert_eq!(upsell.cost, 1385);
    assert_eq!(upsell.days, 11);
    assert_eq!(upsell.recommended_plan, Tier::Pro);

    let mut input = estimator_input(Tier::Advanced, 1, &[]);
    input.design = DesignLevel::Minimal;
    input.speed = Speed::Flexible;
    let output = estimate(&input);
    assert_eq!(output.cost, 569);
    assert_eq!(output.recommended_plan, Tier::Advanced);
}

#[test]
fn maintenance_fee_follows_selected_tier() {
    for (tier, monthly) in [(Tier::Basic, 25), (Tier::Advanced, 50), (Tier::Pro, 75)] {
        let mut input = estimator_input(tier, 1, &[]);
        input.maintenance = true;
        assert_eq!(estimate(&input).maintenance_monthly, Some(monthly));
    }
}

#[test]
fn plan_bands_use_fixed_thresholds() {
    assert_eq!(plan_for_cost(0), Tier::Basic);
    assert_eq!(plan_for_cost(499), Tier::Basic);
    assert_eq!(plan_for_cost(500), Tier::Advanced);
    assert_eq!(plan_for_cost(1000), Tier::Advanced);
    assert_eq!(plan_for_cost(1001), Tier::Pro);
}

#[test]
fn estimate_is_repeatable() {
    let input = advanced_scenario();
    assert_eq!(estimate(&input), estimate(&input));
}

#[test]
fn huge_page_counts_saturate_instead_of_wrapping() {
    let form = EstimatorForm {
        pages: Some("100000000".to_string()),
        complexity: "basic".to_string(),
        ..EstimatorForm::default()
    };
    let input = EstimatorInput::try_from(form).expect("valid form");

    let output = estimate(&input);

    assert_eq!(output.cost, u32::MAX);
    assert_eq!(output.days, 80_000_004);
    assert_eq!(output.recommended_plan, Tier::Pro);
    assert_eq!(output.line_items[1].amount, u32::MAX);
}

#[test]
fn page_counts_near_the_wrap_point_keep_rising() {
    let below = estimate(&estimator_input(Tier::Basic, 71_582_791, &[]));
    let above = estimate(&estimator_input(Tier::Basic, 71_582_792, &[]));
    let largest = estimate(&estimator_input(Tier::Basic, u32::MAX, &[Feature::Ecommerce]));

    assert!(below.cost > 1000);
    assert!(above.cost >= below.cost);
    assert!(above.days >= below.days);
    assert_eq!(largest.cost, u32::MAX);
    assert!(largest.days > above.days);
}

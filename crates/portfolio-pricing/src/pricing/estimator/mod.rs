mod breakdown;
mod domain;
mod rates;

pub use domain::{DesignLevel, EstimatorInput, EstimatorOutput, Feature, LineItem, Speed};

use crate::pricing::Tier;
use breakdown::Breakdown;
use rates::{
    adjust_days, design_multiplier, extra_page_days, feature_cost, feature_days, round_half_up,
    speed_multiplier, ADVANCED_CEILING, BASIC_CEILING,
};

/// Prices a build from the estimator controls.
///
/// The pre-multiplier sum is scaled by the design multiplier and then the speed
/// multiplier, and rounded once at the end. Days are rounded after each speed
/// adjustment. The recommended plan depends only on the final cost, so it may
/// differ from the tier that was selected.
///
/// Money and day totals saturate at `u32::MAX`, so any page count the forms
/// accept still prices monotonically.
pub fn estimate(input: &EstimatorInput) -> EstimatorOutput {
    let pricing = input.tier.pricing();
    let extra_pages = input.page_count.saturating_sub(pricing.included_pages);
    let features: Vec<_> = input.features.iter().copied().collect();

    let mut line_items = vec![LineItem {
        label: format!("{} base", input.tier.label()),
        amount: pricing.base_price,
    }];
    if extra_pages > 0 {
        line_items.push(LineItem {
            label: format!("{extra_pages} extra page(s)"),
            amount: extra_pages.saturating_mul(pricing.extra_per_page),
        });
    }
    line_items.extend(features.iter().map(|feature| LineItem {
        label: feature.key().to_string(),
        amount: feature_cost(*feature),
    }));

    let mut cost: f64 = line_items.iter().map(|item| f64::from(item.amount)).sum();
    cost *= design_multiplier(input.design);
    cost *= speed_multiplier(input.speed);
    let cost = round_half_up(cost);

    let days = pricing
        .base_days
        .saturating_add(extra_page_days(extra_pages))
        .saturating_add(feature_days(features.len()));
    let days = adjust_days(days, input.speed);

    let maintenance_monthly = input.maintenance.then_some(pricing.maintenance_monthly);
    let breakdown = Breakdown {
        pages: input.page_count,
        included_pages: pricing.included_pages,
        extra_pages,
        features: &features,
        design: input.design,
        speed: input.speed,
        maintenance_monthly,
    }
    .render();

    EstimatorOutput {
        cost,
        days,
        recommended_plan: plan_for_cost(cost),
        maintenance_monthly,
        line_items,
        breakdown,
    }
}

/// Fixed price bands: under 500 is Basic, up to 1000 inclusive is Advanced.
pub fn plan_for_cost(cost: u32) -> Tier {
    if cost < BASIC_CEILING {
        Tier::Basic
    } else if cost <= ADVANCED_CEILING {
        Tier::Advanced
    } else {
        Tier::Pro
    }
}

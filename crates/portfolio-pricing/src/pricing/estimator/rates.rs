use super::domain::{DesignLevel, Feature, Speed};

pub(crate) const BASIC_CEILING: u32 = 500;
pub(crate) const ADVANCED_CEILING: u32 = 1000;
pub(crate) const RUSH_MINIMUM_DAYS: u32 = 5;

const DAYS_PER_EXTRA_PAGE: f64 = 0.8;
const DAYS_PER_FEATURE: f64 = 0.7;
const RUSH_DAY_FACTOR: f64 = 0.85;
const FLEXIBLE_DAY_FACTOR: f64 = 1.1;

pub(crate) const fn feature_cost(feature: Feature) -> u32 {
    match feature {
        Feature::Auth => 120,
        Feature::Payments => 180,
        Feature::Blog => 120,
        Feature::Cms => 160,
        Feature::Analytics => 60,
        Feature::Ecommerce => 220,
    }
}

pub(crate) const fn design_multiplier(design: DesignLevel) -> f64 {
    match design {
        DesignLevel::Minimal => 1.0,
        DesignLevel::Standard => 1.1,
        DesignLevel::Polished => 1.25,
    }
}

pub(crate) const fn speed_multiplier(speed: Speed) -> f64 {
    match speed {
        Speed::Flexible => 0.95,
        Speed::Standard => 1.0,
        Speed::Rush => 1.2,
    }
}

/// Nearest integer, halves rounded up. Inputs are never negative; values past
/// `u32::MAX` clamp to it.
pub(crate) fn round_half_up(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

pub(crate) fn extra_page_days(extra_pages: u32) -> u32 {
    (f64::from(extra_pages) * DAYS_PER_EXTRA_PAGE).ceil() as u32
}

pub(crate) fn feature_days(feature_count: usize) -> u32 {
    (feature_count as f64 * DAYS_PER_FEATURE).ceil() as u32
}

/// Speed adjustment applied to the summed day count; each step rounds.
pub(crate) fn adjust_days(days: u32, speed: Speed) -> u32 {
    match speed {
        Speed::Rush => round_half_up(f64::from(days) * RUSH_DAY_FACTOR).max(RUSH_MINIMUM_DAYS),
        Speed::Flexible => round_half_up(f64::from(days) * FLEXIBLE_DAY_FACTOR),
        Speed::Standard => days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(8.5), 9);
        assert_eq!(round_half_up(922.9000000000001), 923);
        assert_eq!(round_half_up(379.04999), 379);
    }

    #[test]
    fn rounding_clamps_oversized_values() {
        assert_eq!(round_half_up(f64::from(u32::MAX) * 1.25), u32::MAX);
        assert_eq!(extra_page_days(u32::MAX), 3_435_973_836);
    }

    #[test]
    fn feature_days_ceil_fractional_counts() {
        assert_eq!(feature_days(0), 0);
        assert_eq!(feature_days(1), 1);
        assert_eq!(feature_days(2), 2);
        assert_eq!(feature_days(3), 3);
        assert_eq!(feature_days(6), 5);
    }

    #[test]
    fn rush_never_drops_below_floor() {
        assert_eq!(adjust_days(5, Speed::Rush), RUSH_MINIMUM_DAYS);
        assert_eq!(adjust_days(20, Speed::Rush), 17);
    }
}

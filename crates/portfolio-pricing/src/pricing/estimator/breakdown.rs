use std::fmt::Write as _;

use super::domain::{DesignLevel, Feature, Speed};

/// Inputs echoed back to the visitor under the estimate.
pub(crate) struct Breakdown<'a> {
    pub pages: u32,
    pub included_pages: u32,
    pub extra_pages: u32,
    pub features: &'a [Feature],
    pub design: DesignLevel,
    pub speed: Speed,
    pub maintenance_monthly: Option<u32>,
}

impl Breakdown<'_> {
    pub(crate) fn render(&self) -> String {
        let features = if self.features.is_empty() {
            "none".to_string()
        } else {
            self.features
                .iter()
                .map(|feature| feature.key())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut text = format!(
            "Details: {} pages ({} included, {} extra), features: {}, design: {}, speed: {}",
            self.pages, self.included_pages, self.extra_pages, features, self.design, self.speed
        );
        if let Some(monthly) = self.maintenance_monthly {
            let _ = write!(text, ", maintenance: ${monthly}/mo");
        }
        text.push('.');
        text
    }
}

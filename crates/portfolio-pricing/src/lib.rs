//! Decision logic behind the portfolio hire page: build-cost estimates, plan
//! recommendations, and contact form delivery.

pub mod config;
pub mod contact;
pub mod error;
pub mod pricing;
pub mod telemetry;

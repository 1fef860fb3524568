#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Onboarding and feedback popup for the LawVriksh landing page.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod popup;
pub mod tui;

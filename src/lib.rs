//! Narrative-driven fraud risk assessment for merchant onboarding.
//!
//! The [`workflows::onboarding`] module holds the rule engine; the remaining modules carry the
//! configuration, error and telemetry plumbing shared by the HTTP service and the CLI.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

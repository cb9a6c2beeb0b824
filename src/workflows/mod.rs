pub mod batch;
pub mod onboarding;

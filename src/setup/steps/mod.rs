//! Form wizard steps
//!
//! One step per form section: registration, breakout, pricing.

pub mod breakout;
pub mod pricing;
pub mod registration;

pub use breakout::BreakoutStep;
pub use pricing::PricingStep;
pub use registration::RegistrationStep;

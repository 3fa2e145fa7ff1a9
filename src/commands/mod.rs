// ABOUTME: Command module aggregator for the weblift CLI.
// ABOUTME: Re-exports check, plan, and deploy command handlers.

mod check;
mod deploy;
mod plan;

pub use check::check;
pub use deploy::deploy;
pub use plan::{PlanFormat, plan};

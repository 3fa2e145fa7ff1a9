// ABOUTME: Hosting-plan pricing tier identifiers.
// ABOUTME: Mirrors the platform's fixed tier catalog; defaults to S1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing tier of the hosting plan the app runs on.
///
/// The set is fixed by the platform: free/shared tiers, basic, standard, and
/// premium-v2. Serialized as the platform's short code (e.g. `P1v2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingTier {
    F1,
    D1,
    B1,
    B2,
    B3,
    S1,
    S2,
    S3,
    P1v2,
    P2v2,
    P3v2,
}

impl Default for PricingTier {
    fn default() -> Self {
        PricingTier::S1
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            PricingTier::F1 => "F1",
            PricingTier::D1 => "D1",
            PricingTier::B1 => "B1",
            PricingTier::B2 => "B2",
            PricingTier::B3 => "B3",
            PricingTier::S1 => "S1",
            PricingTier::S2 => "S2",
            PricingTier::S3 => "S3",
            PricingTier::P1v2 => "P1v2",
            PricingTier::P2v2 => "P2v2",
            PricingTier::P3v2 => "P3v2",
        };
        write!(f, "{}", code)
    }
}

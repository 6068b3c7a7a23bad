//! The standard Slipway catalog.
//!
//! Content for the shipped Free / Pro / Agency tiers. Stripe price
//! references are read from the environment at construction time
//! (`STRIPE_PRICE_PRO`, `STRIPE_PRICE_PRO_YEARLY`, `STRIPE_PRICE_AGENCY`,
//! `STRIPE_PRICE_AGENCY_YEARLY`, each with the `SLIPWAY_` prefix checked
//! first). An unset variable leaves the reference empty and the plan is
//! simply not reachable through price-ID lookup.

use crate::error::Result;
use crate::utils::get_env_with_prefix;

use super::catalog::{PricingCatalog, PricingConfig, PricingModel};
use super::plan::{Plan, QuotaKey, Quotas, UNLIMITED};

impl PricingCatalog {
    /// Build the standard Slipway catalog.
    ///
    /// # Errors
    ///
    /// The shipped definition is valid; construction can only fail when
    /// the environment supplies the same Stripe price ID for two
    /// different references.
    pub fn standard() -> Result<Self> {
        let config = PricingConfig {
            model: PricingModel::Freemium,
            trial_days: None,
            default_quotas: Quotas::new()
                .with(QuotaKey::Pages, 1)
                .with(QuotaKey::Signups, 200),
            plans: vec![free_plan(), pro_plan(), agency_plan()],
        };
        Self::from_config(config)
    }
}

fn free_plan() -> Plan {
    Plan {
        id: "free".to_string(),
        name: "Free".to_string(),
        description: "Perfect for testing your first idea".to_string(),
        monthly_price: 0,
        yearly_price: None,
        stripe_price_id: None,
        stripe_yearly_price_id: None,
        quotas: Quotas::new()
            .with(QuotaKey::Pages, 1)
            .with(QuotaKey::Signups, 200),
        features: features(&[
            "1 active waitlist page",
            "Up to 200 email signups",
            "Basic referral tracking",
            "Countdown timer",
            "3 starter templates",
            "Basic analytics (signups & trends)",
            "Slipway badge on page",
        ]),
        highlighted: false,
        cta: "Get Started Free".to_string(),
    }
}

fn pro_plan() -> Plan {
    Plan {
        id: "pro".to_string(),
        name: "Pro".to_string(),
        description: "Everything you need to launch like a pro".to_string(),
        monthly_price: 12,
        yearly_price: Some(96),
        stripe_price_id: get_env_with_prefix("STRIPE_PRICE_PRO"),
        stripe_yearly_price_id: get_env_with_prefix("STRIPE_PRICE_PRO_YEARLY"),
        quotas: Quotas::new()
            .with(QuotaKey::Pages, UNLIMITED)
            .with(QuotaKey::Signups, UNLIMITED),
        features: features(&[
            "Unlimited waitlist pages",
            "Unlimited email signups",
            "Advanced referral tracking & leaderboard",
            "Custom domain support",
            "Remove Slipway branding",
            "Full template library (15+ designs)",
            "Advanced analytics & viral coefficient",
            "Social proof widgets",
            "A/B testing for headlines & CTAs",
            "CSV export of subscribers",
            "Integrations (Zapier, webhooks, ConvertKit, Mailchimp)",
            "Launch day automation",
            "Priority email support",
        ]),
        highlighted: true,
        cta: "Start Pro at $12/mo".to_string(),
    }
}

fn agency_plan() -> Plan {
    Plan {
        id: "agency".to_string(),
        name: "Agency".to_string(),
        description: "For serial launchers and agencies".to_string(),
        monthly_price: 29,
        yearly_price: Some(290),
        stripe_price_id: get_env_with_prefix("STRIPE_PRICE_AGENCY"),
        stripe_yearly_price_id: get_env_with_prefix("STRIPE_PRICE_AGENCY_YEARLY"),
        quotas: Quotas::new()
            .with(QuotaKey::Pages, UNLIMITED)
            .with(QuotaKey::Signups, UNLIMITED),
        features: features(&[
            "Everything in Pro",
            "Team collaboration (3 seats)",
            "White-label pages",
            "API access & JavaScript SDK",
            "Custom CSS/JS injection",
            "Multiple custom domains per page",
            "Pre-order payments with Stripe",
            "Priority support with 24h response",
        ]),
        highlighted: false,
        cta: "Go Agency".to_string(),
    }
}

fn features(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

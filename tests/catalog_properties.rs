//! Property-based tests for catalog resolution and quota checks
//!
//! These verify the resolver's fallback and denial behavior over generated
//! inputs:
//! - Known tiers resolve to themselves; unknown tiers resolve to the first
//!   plan without ever being classified as paid
//! - Unlimited quotas admit every usage count
//! - Finite quotas are strict upper bounds
//! - Dimensions a plan does not define never grant access

use proptest::prelude::*;
use slipway_config::{PricingCatalog, QuotaKey, UNLIMITED};

// ============================================================================
// Fixture
// ============================================================================

/// A small two-tier catalog with fixed Stripe references and quotas.
fn fixture() -> PricingCatalog {
    PricingCatalog::builder()
        .default_quota(QuotaKey::Pages, 1)
        .default_quota(QuotaKey::Signups, 200)
        .plan("free")
        .name("Free")
        .description("Starter tier")
        .cta("Get started")
        .quota(QuotaKey::Pages, 1)
        .quota(QuotaKey::Signups, 200)
        .done()
        .plan("pro")
        .name("Pro")
        .description("Paid tier")
        .cta("Go pro")
        .monthly_price(12)
        .stripe_price("price_pro")
        .stripe_yearly_price("price_pro_yearly")
        .quota(QuotaKey::Pages, UNLIMITED)
        .quota(QuotaKey::Signups, UNLIMITED)
        .done()
        .build()
        .expect("fixture catalog is valid")
}

// ============================================================================
// Strategies
// ============================================================================

/// Tier IDs guaranteed not to exist in the fixture catalog.
fn arb_unknown_tier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,20}"
        .prop_filter("must not collide with catalog tiers", |s| {
            s != "free" && s != "pro"
        })
}

/// Price reference strings distinct from the fixture's references.
fn arb_unknown_price_id() -> impl Strategy<Value = String> {
    "price_[a-z0-9]{1,16}"
        .prop_filter("must not collide with catalog references", |s| {
            s != "price_pro" && s != "price_pro_yearly"
        })
}

// ============================================================================
// Tier Resolution Properties
// ============================================================================

proptest! {
    /// Resolving a known tier returns that exact plan.
    #[test]
    fn prop_known_tier_resolves_to_itself(tier in prop_oneof![Just("free"), Just("pro")]) {
        let catalog = fixture();
        prop_assert_eq!(catalog.plan_for_tier(tier).id.as_str(), tier);
    }

    /// Unknown tiers fall back to the first plan and are never paid.
    #[test]
    fn prop_unknown_tier_falls_back(tier in arb_unknown_tier()) {
        let catalog = fixture();

        prop_assert_eq!(catalog.plan_for_tier(&tier).id.as_str(), "free");
        prop_assert!(!catalog.is_paid_tier(Some(tier.as_str())));
        prop_assert_eq!(catalog.monthly_price_for(Some(tier.as_str())), 0);
        prop_assert_eq!(catalog.quotas_for(Some(tier.as_str())), catalog.default_quotas());
    }

    /// Unknown price references never map to a tier.
    #[test]
    fn prop_unknown_price_reference_not_found(price_id in arb_unknown_price_id()) {
        let catalog = fixture();
        prop_assert_eq!(catalog.tier_for_stripe_price(&price_id), None);
    }
}

// ============================================================================
// Quota Properties
// ============================================================================

proptest! {
    /// An unlimited quota admits every usage count.
    #[test]
    fn prop_unlimited_admits_any_usage(usage in any::<u64>()) {
        let catalog = fixture();
        prop_assert!(catalog.is_within_quota(Some("pro"), QuotaKey::Signups, usage));
        prop_assert!(catalog.is_within_quota(Some("pro"), QuotaKey::Pages, usage));
    }

    /// A finite quota is a strict upper bound: allowed iff usage < limit.
    #[test]
    fn prop_finite_quota_is_strict_bound(limit in 0i64..10_000, usage in 0u64..20_000) {
        let catalog = PricingCatalog::builder()
            .plan("solo")
            .name("Solo")
            .description("d")
            .cta("c")
            .quota(QuotaKey::Signups, limit)
            .done()
            .build()
            .expect("valid single-plan catalog");

        let allowed = catalog.is_within_quota(Some("solo"), QuotaKey::Signups, usage);
        prop_assert_eq!(allowed, usage < limit as u64);
    }

    /// A dimension the plan does not define is denied at any usage,
    /// even when every defined dimension is unlimited.
    #[test]
    fn prop_undefined_dimension_always_denied(usage in any::<u64>()) {
        let catalog = PricingCatalog::builder()
            .plan("solo")
            .name("Solo")
            .description("d")
            .cta("c")
            .quota(QuotaKey::Signups, UNLIMITED)
            .done()
            .build()
            .expect("valid single-plan catalog");

        prop_assert!(!catalog.is_within_quota(Some("solo"), QuotaKey::Pages, usage));
    }

    /// The boolean check agrees with the rich result everywhere.
    #[test]
    fn prop_boolean_check_matches_rich_result(usage in any::<u64>(), tier in prop_oneof![Just(Some("free")), Just(Some("pro")), Just(None)]) {
        let catalog = fixture();

        for key in QuotaKey::ALL {
            let rich = catalog.check_quota(tier, *key, usage);
            prop_assert_eq!(catalog.is_within_quota(tier, *key, usage), rich.is_allowed());
        }
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn free_tier_boundary_is_exact() {
    let catalog = fixture();

    assert!(catalog.is_within_quota(Some("free"), QuotaKey::Signups, 199));
    assert!(!catalog.is_within_quota(Some("free"), QuotaKey::Signups, 200));
    assert!(!catalog.is_within_quota(Some("free"), QuotaKey::Signups, 201));
}

#[test]
fn unlimited_holds_at_extreme_usage() {
    let catalog = fixture();

    assert!(catalog.is_within_quota(Some("pro"), QuotaKey::Signups, 0));
    assert!(catalog.is_within_quota(Some("pro"), QuotaKey::Signups, u64::MAX));
}

#[test]
fn zero_limit_denies_from_the_start() {
    let catalog = PricingCatalog::builder()
        .plan("locked")
        .name("Locked")
        .description("d")
        .cta("c")
        .quota(QuotaKey::Pages, 0)
        .done()
        .build()
        .expect("valid single-plan catalog");

    assert!(!catalog.is_within_quota(Some("locked"), QuotaKey::Pages, 0));
}

#[test]
fn yearly_reference_round_trips_to_owning_tier() {
    let catalog = fixture();

    assert_eq!(catalog.tier_for_stripe_price("price_pro"), Some("pro"));
    assert_eq!(catalog.tier_for_stripe_price("price_pro_yearly"), Some("pro"));
}

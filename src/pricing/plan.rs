//! Plan records and quota primitives.
//!
//! A [`Plan`] is one subscription tier: display copy, prices, Stripe price
//! references, and a [`Quotas`] map limiting what accounts on the tier can
//! do. Quota checks come back as a [`QuotaCheck`] so callers can distinguish
//! "unlimited" from "still under the ceiling" when they care, or collapse
//! everything to a boolean with [`QuotaCheck::is_allowed`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved quota value meaning "no ceiling on this dimension."
pub const UNLIMITED: i64 = -1;

/// A metered usage dimension.
///
/// The set of dimensions is closed: a typo'd quota key is a compile error,
/// not a silent denial. Adding a dimension means adding a variant here and
/// giving plans a value for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaKey {
    /// Live waitlist pages an account may have.
    Pages,
    /// Email signups an account may collect.
    Signups,
}

impl QuotaKey {
    /// Every quota dimension, in documentation order.
    pub const ALL: &'static [QuotaKey] = &[QuotaKey::Pages, QuotaKey::Signups];

    /// The wire name of this dimension, as used in serialized quota maps.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            QuotaKey::Pages => "pages",
            QuotaKey::Signups => "signups",
        }
    }
}

impl fmt::Display for QuotaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-plan (or default) quota limits.
///
/// A key may be absent; absence means the dimension is not granted at all
/// and checks against it are denied. The value [`UNLIMITED`] lifts the
/// ceiling entirely; any other value is a hard ceiling checked with a
/// strict `<` (usage strictly below the limit is allowed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quotas {
    limits: HashMap<QuotaKey, i64>,
}

impl Quotas {
    /// Create an empty quota set (every check is denied).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a limit, builder style.
    #[must_use]
    pub fn with(mut self, key: QuotaKey, limit: i64) -> Self {
        self.limits.insert(key, limit);
        self
    }

    /// Set a limit in place.
    pub fn set(&mut self, key: QuotaKey, limit: i64) {
        self.limits.insert(key, limit);
    }

    /// Get the raw limit for a dimension, if one is defined.
    #[must_use]
    pub fn get(&self, key: QuotaKey) -> Option<i64> {
        self.limits.get(&key).copied()
    }

    /// Check whether a dimension is defined on this quota set.
    #[must_use]
    pub fn contains(&self, key: QuotaKey) -> bool {
        self.limits.contains_key(&key)
    }

    /// Check whether a dimension is present and unlimited.
    #[must_use]
    pub fn is_unlimited(&self, key: QuotaKey) -> bool {
        self.get(key) == Some(UNLIMITED)
    }

    /// Number of defined dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Check if no dimensions are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Iterate over defined dimensions and their raw limits.
    pub fn iter(&self) -> impl Iterator<Item = (QuotaKey, i64)> + '_ {
        self.limits.iter().map(|(k, v)| (*k, *v))
    }

    /// Check a usage count against this quota set.
    ///
    /// An absent key denies; unknown dimensions never grant access.
    #[must_use]
    pub fn check(&self, key: QuotaKey, current: u64) -> QuotaCheck {
        match self.get(key) {
            None => QuotaCheck::Undefined,
            Some(UNLIMITED) => QuotaCheck::Unlimited,
            Some(limit) => {
                // Values below the sentinel never pass catalog validation;
                // a hand-built map carrying one behaves as a zero allowance.
                let limit = u64::try_from(limit).unwrap_or(0);
                if current < limit {
                    QuotaCheck::Within { current, limit }
                } else {
                    QuotaCheck::AtLimit { current, limit }
                }
            }
        }
    }
}

/// Result of checking a usage count against a quota.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotaCheck {
    /// The dimension is present with no ceiling.
    Unlimited,
    /// Usage is strictly below the ceiling.
    Within { current: u64, limit: u64 },
    /// Usage has reached or exceeded the ceiling.
    AtLimit { current: u64, limit: u64 },
    /// The quota set does not define this dimension. Denied.
    Undefined,
}

impl QuotaCheck {
    /// Check if usage is allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Unlimited | Self::Within { .. })
    }

    /// Check if a defined ceiling has been reached.
    ///
    /// `Undefined` is denied but not at a ceiling; use [`is_allowed`](Self::is_allowed)
    /// when only the yes/no answer matters.
    #[must_use]
    pub fn is_at_limit(&self) -> bool {
        matches!(self, Self::AtLimit { .. })
    }
}

/// One subscription tier.
///
/// `id` is the stable identifier stored on account records and is never
/// reused or renamed once published. `features` is display copy only; it
/// has no effect on entitlement checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable tier identifier (e.g., "free", "pro").
    pub id: String,
    /// Display name for the plan.
    pub name: String,
    /// Short description shown on the pricing page.
    pub description: String,
    /// Monthly price in whole currency units. Zero marks the free tier.
    pub monthly_price: u32,
    /// Yearly price in whole currency units, if the plan sells yearly.
    #[serde(default)]
    pub yearly_price: Option<u32>,
    /// Stripe price ID for the monthly subscription.
    #[serde(default)]
    pub stripe_price_id: Option<String>,
    /// Stripe price ID for the yearly subscription.
    #[serde(default)]
    pub stripe_yearly_price_id: Option<String>,
    /// Usage limits for accounts on this tier.
    #[serde(default)]
    pub quotas: Quotas,
    /// Marketing feature bullets, in display order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Whether this is the recommended tier on the pricing page.
    #[serde(default)]
    pub highlighted: bool,
    /// Call-to-action label for the plan's signup button.
    pub cta: String,
}

impl Plan {
    /// Check if this is the free tier.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.monthly_price == 0
    }

    /// Check if this is a paid tier.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.monthly_price > 0
    }

    /// Check a usage count against this plan's own quotas.
    #[must_use]
    pub fn check_quota(&self, key: QuotaKey, current: u64) -> QuotaCheck {
        self.quotas.check(key, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, monthly_price: u32) -> Plan {
        Plan {
            id: id.to_string(),
            name: id.to_string(),
            description: "a plan".to_string(),
            monthly_price,
            yearly_price: None,
            stripe_price_id: None,
            stripe_yearly_price_id: None,
            quotas: Quotas::new(),
            features: Vec::new(),
            highlighted: false,
            cta: "Sign up".to_string(),
        }
    }

    // ============ QuotaKey tests ============

    #[test]
    fn test_quota_key_names() {
        assert_eq!(QuotaKey::Pages.as_str(), "pages");
        assert_eq!(QuotaKey::Signups.as_str(), "signups");
        assert_eq!(QuotaKey::Signups.to_string(), "signups");
    }

    #[test]
    fn test_quota_key_serde_names_match_as_str() {
        for key in QuotaKey::ALL {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    // ============ Quotas tests ============

    #[test]
    fn test_quota_check_within_and_at_limit() {
        let quotas = Quotas::new().with(QuotaKey::Signups, 200);

        assert_eq!(
            quotas.check(QuotaKey::Signups, 199),
            QuotaCheck::Within {
                current: 199,
                limit: 200
            }
        );
        assert_eq!(
            quotas.check(QuotaKey::Signups, 200),
            QuotaCheck::AtLimit {
                current: 200,
                limit: 200
            }
        );
        assert!(quotas.check(QuotaKey::Signups, 0).is_allowed());
        assert!(!quotas.check(QuotaKey::Signups, 500).is_allowed());
    }

    #[test]
    fn test_quota_check_unlimited() {
        let quotas = Quotas::new().with(QuotaKey::Signups, UNLIMITED);

        assert_eq!(quotas.check(QuotaKey::Signups, 0), QuotaCheck::Unlimited);
        assert!(quotas.check(QuotaKey::Signups, u64::MAX).is_allowed());
        assert!(quotas.is_unlimited(QuotaKey::Signups));
        assert!(!quotas.is_unlimited(QuotaKey::Pages));
    }

    #[test]
    fn test_quota_check_undefined_key_denies() {
        let quotas = Quotas::new().with(QuotaKey::Signups, UNLIMITED);

        assert!(!quotas.contains(QuotaKey::Pages));
        let check = quotas.check(QuotaKey::Pages, 0);
        assert_eq!(check, QuotaCheck::Undefined);
        assert!(!check.is_allowed());
        assert!(!check.is_at_limit());
    }

    #[test]
    fn test_quota_check_zero_limit_denies_everything() {
        let quotas = Quotas::new().with(QuotaKey::Pages, 0);

        assert!(!quotas.check(QuotaKey::Pages, 0).is_allowed());
        assert!(quotas.check(QuotaKey::Pages, 0).is_at_limit());
    }

    #[test]
    fn test_quota_check_below_sentinel_denies() {
        // Catalog validation rejects these; raw maps still behave safely.
        let quotas = Quotas::new().with(QuotaKey::Pages, -5);

        assert!(!quotas.check(QuotaKey::Pages, 0).is_allowed());
    }

    #[test]
    fn test_quotas_serde_round_trip() {
        let quotas = Quotas::new()
            .with(QuotaKey::Pages, 1)
            .with(QuotaKey::Signups, UNLIMITED);

        let json = serde_json::to_value(&quotas).unwrap();
        assert_eq!(json["pages"], 1);
        assert_eq!(json["signups"], -1);

        let back: Quotas = serde_json::from_value(json).unwrap();
        assert_eq!(back, quotas);
        assert_eq!(back.len(), 2);
    }

    // ============ Plan tests ============

    #[test]
    fn test_free_and_paid_classification() {
        assert!(plan("free", 0).is_free());
        assert!(!plan("free", 0).is_paid());
        assert!(plan("pro", 12).is_paid());
        assert!(!plan("pro", 12).is_free());
    }

    #[test]
    fn test_plan_check_quota_delegates() {
        let mut p = plan("free", 0);
        p.quotas = Quotas::new().with(QuotaKey::Signups, 200);

        assert!(p.check_quota(QuotaKey::Signups, 150).is_allowed());
        assert_eq!(p.check_quota(QuotaKey::Pages, 0), QuotaCheck::Undefined);
    }

    #[test]
    fn test_plan_deserialize_with_defaults() {
        let p: Plan = serde_json::from_str(
            r#"{
                "id": "starter",
                "name": "Starter",
                "description": "For getting going",
                "monthly_price": 5,
                "cta": "Start now"
            }"#,
        )
        .unwrap();

        assert_eq!(p.id, "starter");
        assert_eq!(p.yearly_price, None);
        assert_eq!(p.stripe_price_id, None);
        assert!(p.quotas.is_empty());
        assert!(p.features.is_empty());
        assert!(!p.highlighted);
    }
}

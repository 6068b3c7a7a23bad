//! The pricing catalog and its resolver queries.
//!
//! A [`PricingCatalog`] is an immutable, ordered collection of [`Plan`]s
//! plus the default quotas applied when no tier is known. It is built once
//! at startup, validated up front, and then answers every entitlement
//! question without locks, I/O, or errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use slipway_config::pricing::{PricingCatalog, PricingModel, QuotaKey, UNLIMITED};
//!
//! let catalog = PricingCatalog::builder()
//!     .model(PricingModel::Freemium)
//!     .default_quota(QuotaKey::Pages, 1)
//!     .default_quota(QuotaKey::Signups, 200)
//!     .plan("free")
//!         .name("Free")
//!         .description("Test your first idea")
//!         .cta("Get Started Free")
//!         .quota(QuotaKey::Pages, 1)
//!         .quota(QuotaKey::Signups, 200)
//!         .done()
//!     .plan("pro")
//!         .name("Pro")
//!         .description("Launch like a pro")
//!         .cta("Go Pro")
//!         .monthly_price(12)
//!         .stripe_price("price_pro_monthly")
//!         .quota(QuotaKey::Pages, UNLIMITED)
//!         .quota(QuotaKey::Signups, UNLIMITED)
//!         .highlighted()
//!         .done()
//!     .build()?;
//!
//! assert!(catalog.is_within_quota(Some("free"), QuotaKey::Signups, 150));
//! assert_eq!(catalog.tier_for_stripe_price("price_pro_monthly"), Some("pro"));
//! ```
//!
//! Unknown tiers are not errors. `plan_for_tier` falls back to the first
//! plan in catalog order, while `quotas_for` falls back to the catalog's
//! `default_quotas`. The two fallbacks are separate on purpose and can
//! disagree when the first plan's own quotas differ from the defaults.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

use super::plan::{Plan, QuotaCheck, QuotaKey, Quotas, UNLIMITED};

/// Maximum length for plan IDs.
const MAX_PLAN_ID_LENGTH: usize = 64;

/// How the product charges.
///
/// Informational: the resolver does not enforce it. Presentation and
/// onboarding flows read it to decide what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    /// A usable free tier exists alongside paid tiers.
    Freemium,
    /// Paid tiers start with a time-boxed trial.
    FreeTrial,
    /// No free usage at all.
    PaidOnly,
}

impl PricingModel {
    /// The wire name of this model.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Freemium => "freemium",
            PricingModel::FreeTrial => "free-trial",
            PricingModel::PaidOnly => "paid-only",
        }
    }
}

impl Default for PricingModel {
    fn default() -> Self {
        Self::Freemium
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw catalog definition, as loaded from code or a config file.
///
/// This is the unvalidated shape; [`PricingCatalog::from_config`] turns it
/// into a catalog or rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    /// How the product charges.
    #[serde(default)]
    pub model: PricingModel,
    /// Trial length in days when the model is free-trial.
    #[serde(default)]
    pub trial_days: Option<u32>,
    /// Quotas applied when no tier is known.
    #[serde(default)]
    pub default_quotas: Quotas,
    /// Plan definitions in display order.
    pub plans: Vec<Plan>,
}

/// The validated plan catalog.
///
/// Read-only after construction and safe to share across threads without
/// synchronization. Construction is the only place errors can occur; every
/// query is total.
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    model: PricingModel,
    trial_days: Option<u32>,
    default_quotas: Quotas,
    plans: Vec<Plan>,
    by_id: HashMap<String, usize>,
    by_price_id: HashMap<String, usize>,
}

impl PricingCatalog {
    /// Create a builder for constructing a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Validate a raw definition and build the catalog with its indices.
    ///
    /// # Errors
    ///
    /// Rejects an empty plan list, malformed or duplicate plan IDs, empty
    /// display strings, more than one highlighted plan, quota values below
    /// [`UNLIMITED`], and Stripe price IDs shared between plans (monthly
    /// and yearly references count as one namespace).
    pub fn from_config(config: PricingConfig) -> Result<Self> {
        if config.plans.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        for (key, value) in config.default_quotas.iter() {
            if value < UNLIMITED {
                return Err(ConfigError::InvalidDefaultQuota {
                    key: key.as_str(),
                    value,
                });
            }
        }

        let mut by_id: HashMap<String, usize> = HashMap::new();
        let mut by_price_id: HashMap<String, usize> = HashMap::new();
        let mut highlighted: Option<&str> = None;

        for (idx, plan) in config.plans.iter().enumerate() {
            validate_plan_id(&plan.id)?;
            validate_display_fields(plan)?;

            for (key, value) in plan.quotas.iter() {
                if value < UNLIMITED {
                    return Err(ConfigError::InvalidQuota {
                        plan_id: plan.id.clone(),
                        key: key.as_str(),
                        value,
                    });
                }
            }

            if by_id.insert(plan.id.clone(), idx).is_some() {
                return Err(ConfigError::DuplicatePlanId {
                    id: plan.id.clone(),
                });
            }

            if plan.highlighted {
                if let Some(first) = highlighted {
                    return Err(ConfigError::MultipleHighlighted {
                        first: first.to_string(),
                        second: plan.id.clone(),
                    });
                }
                highlighted = Some(&plan.id);
            }

            // Monthly before yearly, in catalog order.
            let references = [&plan.stripe_price_id, &plan.stripe_yearly_price_id];
            for price_id in references.into_iter().flatten() {
                if let Some(&other) = by_price_id.get(price_id) {
                    return Err(ConfigError::DuplicatePriceId {
                        price_id: sanitize_for_error(price_id),
                        first: config.plans[other].id.clone(),
                        second: plan.id.clone(),
                    });
                }
                by_price_id.insert(price_id.clone(), idx);
            }
        }

        let catalog = Self {
            model: config.model,
            trial_days: config.trial_days,
            default_quotas: config.default_quotas,
            plans: config.plans,
            by_id,
            by_price_id,
        };

        tracing::debug!(
            target: "slipway_config::pricing",
            plans = catalog.plans.len(),
            model = %catalog.model,
            "pricing catalog constructed"
        );

        Ok(catalog)
    }

    // ---- Direct lookups ----

    /// Get a plan by exact tier ID.
    #[must_use]
    pub fn get(&self, tier: &str) -> Option<&Plan> {
        self.by_id.get(tier).map(|&idx| &self.plans[idx])
    }

    /// Resolve a tier ID to its plan, falling back to the first plan.
    ///
    /// Unknown tiers silently behave as the default (first) plan rather
    /// than denying service. Use [`get`](Self::get) when an unknown tier
    /// must stay visible.
    #[must_use]
    pub fn plan_for_tier(&self, tier: &str) -> &Plan {
        match self.get(tier) {
            Some(plan) => plan,
            None => {
                tracing::debug!(
                    target: "slipway_config::pricing",
                    tier,
                    "unknown tier, resolving to first plan"
                );
                // Construction rejects empty catalogs.
                &self.plans[0]
            }
        }
    }

    /// Map a Stripe price ID back to the owning tier.
    ///
    /// Exact string match against each plan's monthly then yearly
    /// reference. `None` means no plan owns the reference.
    #[must_use]
    pub fn tier_for_stripe_price(&self, price_id: &str) -> Option<&str> {
        self.by_price_id
            .get(price_id)
            .map(|&idx| self.plans[idx].id.as_str())
    }

    // ---- Quota resolution ----

    /// The quotas in force for a tier.
    ///
    /// `None` (no tier assigned yet) and unknown tier IDs both resolve to
    /// the catalog's default quotas. This deliberately differs from
    /// [`plan_for_tier`](Self::plan_for_tier), which falls back to the
    /// first plan; the two sources can disagree.
    #[must_use]
    pub fn quotas_for(&self, tier: Option<&str>) -> &Quotas {
        match tier.and_then(|t| self.get(t)) {
            Some(plan) => &plan.quotas,
            None => &self.default_quotas,
        }
    }

    /// Check a usage count against the quotas in force for a tier.
    #[must_use]
    pub fn check_quota(&self, tier: Option<&str>, key: QuotaKey, current: u64) -> QuotaCheck {
        self.quotas_for(tier).check(key, current)
    }

    /// Check whether one more unit of usage is allowed.
    ///
    /// `true` when the dimension is unlimited or `current` is strictly
    /// below the ceiling. A dimension the resolved quotas do not define is
    /// always denied.
    #[must_use]
    pub fn is_within_quota(&self, tier: Option<&str>, key: QuotaKey, current: u64) -> bool {
        self.check_quota(tier, key, current).is_allowed()
    }

    // ---- Classification ----

    /// Check whether a tier is paid.
    ///
    /// Looks the tier up directly: `None` and unknown IDs are `false`, not
    /// resolved through the first-plan fallback.
    #[must_use]
    pub fn is_paid_tier(&self, tier: Option<&str>) -> bool {
        tier.and_then(|t| self.get(t)).is_some_and(|p| p.is_paid())
    }

    /// The monthly price of a tier, `0` for `None` or unknown IDs.
    #[must_use]
    pub fn monthly_price_for(&self, tier: Option<&str>) -> u32 {
        tier.and_then(|t| self.get(t))
            .map_or(0, |p| p.monthly_price)
    }

    // ---- Derived views ----

    /// The first free plan, if the catalog has one.
    #[must_use]
    pub fn free_plan(&self) -> Option<&Plan> {
        self.plans.iter().find(|p| p.is_free())
    }

    /// All paid plans, preserving catalog order.
    #[must_use]
    pub fn paid_plans(&self) -> Vec<&Plan> {
        self.plans.iter().filter(|p| p.is_paid()).collect()
    }

    /// The highlighted plan, if one is flagged.
    #[must_use]
    pub fn highlighted_plan(&self) -> Option<&Plan> {
        self.plans.iter().find(|p| p.highlighted)
    }

    // ---- Collection access ----

    /// All plans in display order.
    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// The pricing model.
    #[must_use]
    pub fn model(&self) -> PricingModel {
        self.model
    }

    /// Trial length in days, when the model has one.
    #[must_use]
    pub fn trial_days(&self) -> Option<u32> {
        self.trial_days
    }

    /// The quotas applied when no tier is known.
    #[must_use]
    pub fn default_quotas(&self) -> &Quotas {
        &self.default_quotas
    }

    /// Check if a tier ID exists in the catalog.
    #[must_use]
    pub fn contains(&self, tier: &str) -> bool {
        self.by_id.contains_key(tier)
    }

    /// Number of plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Always `false`: construction rejects empty catalogs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Iterate over plans in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }

    /// All tier IDs in display order.
    #[must_use]
    pub fn plan_ids(&self) -> Vec<&str> {
        self.plans.iter().map(|p| p.id.as_str()).collect()
    }

    /// Every Stripe price ID in the catalog, monthly and yearly.
    ///
    /// Useful for hosts that allowlist incoming webhook price IDs.
    #[must_use]
    pub fn all_stripe_price_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for plan in &self.plans {
            if let Some(ref id) = plan.stripe_price_id {
                ids.push(id.as_str());
            }
            if let Some(ref id) = plan.stripe_yearly_price_id {
                ids.push(id.as_str());
            }
        }
        ids
    }
}

fn validate_plan_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ConfigError::InvalidPlanId {
            id: id.to_string(),
            reason: "plan ID cannot be empty".to_string(),
        });
    }

    if id.len() > MAX_PLAN_ID_LENGTH {
        return Err(ConfigError::InvalidPlanId {
            id: truncate_for_error(id),
            reason: format!("plan ID exceeds maximum length of {}", MAX_PLAN_ID_LENGTH),
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ConfigError::InvalidPlanId {
            id: sanitize_for_error(id),
            reason: "plan ID contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
                .to_string(),
        });
    }

    Ok(())
}

fn validate_display_fields(plan: &Plan) -> Result<()> {
    let fields = [
        ("name", &plan.name),
        ("description", &plan.description),
        ("cta", &plan.cta),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyPlanField {
                plan_id: plan.id.clone(),
                field,
            });
        }
    }
    Ok(())
}

// Both helpers count characters, not bytes: a fixed byte index could land
// inside a multi-byte character and panic mid-construction.
fn truncate_for_error(s: &str) -> String {
    if s.chars().count() <= 50 {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(47).collect::<String>())
    }
}

fn sanitize_for_error(s: &str) -> String {
    let sanitized: String = s
        .chars()
        .take(50)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '?'
            }
        })
        .collect();

    if s.chars().count() > 50 {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}

/// Builder for constructing a pricing catalog.
///
/// Plans keep the order they are defined in; that order is the display
/// order and decides the first-plan fallback.
#[derive(Debug, Default)]
#[must_use = "builder does nothing until you call build()"]
pub struct CatalogBuilder {
    model: PricingModel,
    trial_days: Option<u32>,
    default_quotas: Quotas,
    plans: Vec<Plan>,
}

impl CatalogBuilder {
    /// Create a new catalog builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pricing model.
    #[must_use]
    pub fn model(mut self, model: PricingModel) -> Self {
        self.model = model;
        self
    }

    /// Set the trial length in days.
    #[must_use]
    pub fn trial_days(mut self, days: u32) -> Self {
        self.trial_days = Some(days);
        self
    }

    /// Set one default quota.
    #[must_use]
    pub fn default_quota(mut self, key: QuotaKey, limit: i64) -> Self {
        self.default_quotas.set(key, limit);
        self
    }

    /// Replace the full default quota set.
    #[must_use]
    pub fn default_quotas(mut self, quotas: Quotas) -> Self {
        self.default_quotas = quotas;
        self
    }

    /// Start defining a new plan.
    #[must_use]
    pub fn plan(self, id: &str) -> PlanBuilder {
        PlanBuilder {
            parent: self,
            id: id.to_string(),
            name: String::new(),
            description: String::new(),
            monthly_price: 0,
            yearly_price: None,
            stripe_price_id: None,
            stripe_yearly_price_id: None,
            quotas: Quotas::new(),
            features: Vec::new(),
            highlighted: false,
            cta: String::new(),
        }
    }

    /// Validate everything and build the catalog.
    ///
    /// # Errors
    ///
    /// Same failures as [`PricingCatalog::from_config`].
    pub fn build(self) -> Result<PricingCatalog> {
        PricingCatalog::from_config(PricingConfig {
            model: self.model,
            trial_days: self.trial_days,
            default_quotas: self.default_quotas,
            plans: self.plans,
        })
    }

    fn add_plan(mut self, plan: Plan) -> Self {
        self.plans.push(plan);
        self
    }
}

/// Builder for a single plan within a catalog.
#[derive(Debug)]
#[must_use = "builder does nothing until you call done()"]
pub struct PlanBuilder {
    parent: CatalogBuilder,
    id: String,
    name: String,
    description: String,
    monthly_price: u32,
    yearly_price: Option<u32>,
    stripe_price_id: Option<String>,
    stripe_yearly_price_id: Option<String>,
    quotas: Quotas,
    features: Vec<String>,
    highlighted: bool,
    cta: String,
}

impl PlanBuilder {
    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the call-to-action label.
    #[must_use]
    pub fn cta(mut self, cta: &str) -> Self {
        self.cta = cta.to_string();
        self
    }

    /// Set the monthly price in whole currency units. Zero means free.
    #[must_use]
    pub fn monthly_price(mut self, price: u32) -> Self {
        self.monthly_price = price;
        self
    }

    /// Set the yearly price in whole currency units.
    #[must_use]
    pub fn yearly_price(mut self, price: u32) -> Self {
        self.yearly_price = Some(price);
        self
    }

    /// Set the Stripe price ID for the monthly subscription.
    #[must_use]
    pub fn stripe_price(mut self, price_id: &str) -> Self {
        self.stripe_price_id = Some(price_id.to_string());
        self
    }

    /// Set the Stripe price ID for the yearly subscription.
    #[must_use]
    pub fn stripe_yearly_price(mut self, price_id: &str) -> Self {
        self.stripe_yearly_price_id = Some(price_id.to_string());
        self
    }

    /// Set one quota limit.
    #[must_use]
    pub fn quota(mut self, key: QuotaKey, limit: i64) -> Self {
        self.quotas.set(key, limit);
        self
    }

    /// Replace the full quota set.
    #[must_use]
    pub fn quotas(mut self, quotas: Quotas) -> Self {
        self.quotas = quotas;
        self
    }

    /// Add a single feature bullet.
    #[must_use]
    pub fn feature(mut self, feature: &str) -> Self {
        self.features.push(feature.to_string());
        self
    }

    /// Add feature bullets in display order.
    #[must_use]
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Mark this plan as the recommended tier.
    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }

    /// Finish defining this plan and return to the catalog builder.
    ///
    /// Missing required fields surface as errors from
    /// [`CatalogBuilder::build`], not here.
    #[must_use]
    pub fn done(self) -> CatalogBuilder {
        let plan = Plan {
            id: self.id,
            name: self.name,
            description: self.description,
            monthly_price: self.monthly_price,
            yearly_price: self.yearly_price,
            stripe_price_id: self.stripe_price_id,
            stripe_yearly_price_id: self.stripe_yearly_price_id,
            quotas: self.quotas,
            features: self.features,
            highlighted: self.highlighted,
            cta: self.cta,
        };
        self.parent.add_plan(plan)
    }
}

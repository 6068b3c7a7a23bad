//! Plan catalog and entitlement resolution.
//!
//! The pricing side of Slipway's configuration: an ordered, validated
//! catalog of subscription plans and the queries other services run
//! against it ("which plan is this account on", "may it add another
//! signup", "which tier does this Stripe price belong to").
//!
//! # Example
//!
//! ```rust,ignore
//! use slipway_config::pricing::{PricingCatalog, QuotaKey};
//!
//! let catalog = PricingCatalog::standard()?;
//!
//! // Usage-limit middleware
//! if !catalog.is_within_quota(account.tier.as_deref(), QuotaKey::Signups, current) {
//!     return Err(limit_reached());
//! }
//!
//! // Billing webhook handler
//! if let Some(tier) = catalog.tier_for_stripe_price(&event.price_id) {
//!     accounts.set_tier(&account.id, tier).await?;
//! }
//! ```
//!
//! Build the catalog once at startup and share the handle; every query is
//! lock-free and total.

pub mod catalog;
mod defaults;
pub mod plan;

// Catalog exports
pub use catalog::{CatalogBuilder, PlanBuilder, PricingCatalog, PricingConfig, PricingModel};

// Plan and quota exports
pub use plan::{Plan, QuotaCheck, QuotaKey, Quotas, UNLIMITED};

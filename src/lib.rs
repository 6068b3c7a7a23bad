//! Slipway Config - site content and pricing configuration for Slipway
//!
//! This crate is the single source of truth for what Slipway sells and what
//! it says: the plan catalog with its quotas and Stripe references, the
//! entitlement queries other services run against it, and the typed site
//! content the frontend renders.
//!
//! # Features
//!
//! - **Pricing catalog**: ordered plans validated at construction, then
//!   immutable and lock-free to query
//! - **Entitlement resolution**: tier and price-ID lookups, quota checks
//!   with an unlimited sentinel, free/paid classification
//! - **Fail-safe fallbacks**: unknown tiers resolve to the default plan
//!   and default quotas; unknown quota dimensions are always denied
//! - **Site content**: navigation, hero copy, feature grid, and footer as
//!   plain serializable data
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slipway_config::{PricingCatalog, QuotaKey, SiteConfig};
//!
//! fn main() -> slipway_config::Result<()> {
//!     // Build once at startup, then share the handle.
//!     let catalog = PricingCatalog::standard()?;
//!     let site = SiteConfig::standard();
//!
//!     let tier = Some("free");
//!     if catalog.is_within_quota(tier, QuotaKey::Signups, 150) {
//!         // record the signup
//!     }
//!
//!     println!("{} runs at {}", site.name, site.base_url);
//!     Ok(())
//! }
//! ```
//!
//! Hosts that want one process-wide handle instead of threading it through
//! can park the catalog in a [`std::sync::OnceLock`]:
//!
//! ```rust,no_run
//! use std::sync::OnceLock;
//! use slipway_config::PricingCatalog;
//!
//! static CATALOG: OnceLock<PricingCatalog> = OnceLock::new();
//!
//! fn catalog() -> &'static PricingCatalog {
//!     CATALOG.get_or_init(|| PricingCatalog::standard().expect("shipped catalog is valid"))
//! }
//! ```
//!
//! The catalog raises errors only while being built. Every query is total:
//! misses come back as fallbacks, `Option`, or booleans, so callers cannot
//! forget to handle "not found".

mod error;
pub mod pricing;
pub mod site;
pub mod utils;

// Re-exports for public API
pub use error::{ConfigError, Result};
pub use pricing::{
    CatalogBuilder, Plan, PricingCatalog, PricingConfig, PricingModel, QuotaCheck, QuotaKey,
    Quotas, UNLIMITED,
};
pub use site::SiteConfig;

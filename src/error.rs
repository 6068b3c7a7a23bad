//! Error types for catalog and content construction.
//!
//! Errors exist only at construction time. Every query on a built
//! [`PricingCatalog`](crate::pricing::PricingCatalog) is total: lookup misses
//! come back as fallback values, `Option`, or booleans, never as errors.

/// The error type for configuration construction.
///
/// Any of these aborts catalog construction; there is no partial or
/// degraded catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The catalog was built with no plans. The first plan doubles as the
    /// fallback for unknown tiers, so an empty catalog cannot honor the
    /// resolver contract.
    #[error("pricing catalog must define at least one plan")]
    EmptyCatalog,

    /// A plan ID failed validation (empty, too long, or bad characters).
    #[error("invalid plan ID '{id}': {reason}")]
    InvalidPlanId { id: String, reason: String },

    /// Two plan definitions share the same ID.
    #[error("duplicate plan ID '{id}'")]
    DuplicatePlanId { id: String },

    /// A required display string on a plan is empty.
    #[error("plan '{plan_id}' has an empty {field}")]
    EmptyPlanField { plan_id: String, field: &'static str },

    /// More than one plan carries the highlighted flag.
    #[error("plans '{first}' and '{second}' are both highlighted; at most one plan may be")]
    MultipleHighlighted { first: String, second: String },

    /// A plan quota is below the unlimited sentinel.
    #[error("plan '{plan_id}' has invalid quota {key} = {value} (must be -1 or a non-negative count)")]
    InvalidQuota {
        plan_id: String,
        key: &'static str,
        value: i64,
    },

    /// A default quota is below the unlimited sentinel.
    #[error("default quotas have invalid value {key} = {value} (must be -1 or a non-negative count)")]
    InvalidDefaultQuota { key: &'static str, value: i64 },

    /// A Stripe price ID appears on more than one plan. Monthly and yearly
    /// references share one uniqueness domain.
    #[error("Stripe price ID '{price_id}' is used by both '{first}' and '{second}'")]
    DuplicatePriceId {
        price_id: String,
        first: String,
        second: String,
    },
}

/// A specialized Result type for configuration construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

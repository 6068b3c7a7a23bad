/// Get environment variable with SLIPWAY_ prefix, falling back to unprefixed version
///
/// Checks for `SLIPWAY_{key}` first, then falls back to `{key}` so that
/// hosting platforms which inject bare variable names keep working.
///
/// # Examples
///
/// ```rust
/// use slipway_config::utils::get_env_with_prefix;
///
/// // Checks SLIPWAY_STRIPE_PRICE_PRO first, then STRIPE_PRICE_PRO
/// let price_id = get_env_with_prefix("STRIPE_PRICE_PRO");
/// ```
pub fn get_env_with_prefix(key: &str) -> Option<String> {
    std::env::var(format!("SLIPWAY_{}", key))
        .or_else(|_| std::env::var(key))
        .ok()
}

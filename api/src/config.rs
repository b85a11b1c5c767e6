//! Build-time configuration.

/// The base URL of the storefront REST backend.
///
/// Overridable at build time with `STOREFRONT_API_URL`; runtime env vars do
/// not exist in the wasm target, so this is resolved when the client is
/// compiled.
pub fn api_base_url() -> &'static str {
    const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";
    option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_URL)
}

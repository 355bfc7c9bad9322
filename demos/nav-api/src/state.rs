/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async SDK instance. Owns the scheme directory cache, so every
    /// request after the first search is served from memory.
    pub sdk: mfnav_sdk::AsyncMfnavSdk,
}

//! Query modules for the SDK.
//!
//! Each module provides a query struct that borrows from the owning
//! [`MfnavSdk`](crate::MfnavSdk) (its provider and, for scheme lookups, the
//! [`SchemeDirectory`](crate::directory::SchemeDirectory)) and exposes
//! methods returning typed models.

pub mod nav;
pub mod schemes;

pub use nav::NavQuery;
pub use schemes::SchemeQuery;

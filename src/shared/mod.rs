//! Modules with generic logic used by several modules.
//!
//! - [`crypto`]: Encryption related logic.
pub mod crypto;

//! # Layer 1: Keys
//!
//! - `principal.rs`: `Principal` / `Seal` traits and `impl_principal!`.
//! - `passkey.rs`: the `Passkey<S>` capability token.

pub mod passkey;
pub mod principal;

pub use passkey::Passkey;
pub use principal::{Principal, Seal};

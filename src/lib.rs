#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - tracing: `#[guarded]` bodies emit a TRACE event on entry

//! # tola-passkey
//!
//! Passkey capability tokens: expose a privileged operation to an explicit,
//! closed set of caller types, checked entirely at compile time.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Nil / Cons allow-lists, Here / There index witnesses           |
//! |  - AllowList, Permits (sealed)                                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Keys                                                    |
//! |  - Principal / Seal: per-type identity proof, module-private      |
//! |  - Passkey<S>: zero-sized token, built only from a listed seal    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - #[derive(Principal)], impl_principal!                          |
//! |  - allow_list![..], passkey![..], #[guarded(..)]                  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### Why it holds
//!
//! 1. A seal's only field is private, so only the principal's module can
//!    build it (`passkey_seal()` and `passkey()` are private too).
//! 2. `Passkey::new` takes a seal and compiles only if the seal's principal
//!    is a member of the allow-list (`Permits`, sealed).
//! 3. `Passkey` has a private field and no `Default`/`Clone`/`Copy`.
//!
//! Nothing here runs: an unauthorized call site is a build error, never a
//! runtime failure. The guarantee is the module privacy of safe Rust; it does
//! not defend against `unsafe` code or against code placed inside a
//! principal's own module.
//!
//! ## Quick Start
//!
//! ```
//! use tola_passkey::prelude::*;
//!
//! #[derive(Principal)]
//! pub struct ClassA;
//!
//! #[derive(Principal)]
//! pub struct ClassB;
//!
//! pub struct Widget;
//!
//! impl Widget {
//!     pub fn secret(&self, _key: Passkey<allow_list![ClassA, ClassB]>) -> &'static str {
//!         "Secret accessed!"
//!     }
//! }
//!
//! impl ClassA {
//!     pub fn access(&self, w: &Widget) -> &'static str {
//!         w.secret(Self::passkey())
//!     }
//! }
//!
//! assert_eq!(ClassA.access(&Widget), "Secret accessed!");
//! ```
//!
//! A type that is not listed cannot get there:
//!
//! ```compile_fail
//! use tola_passkey::prelude::*;
//!
//! #[derive(Principal)] pub struct ClassA;
//! #[derive(Principal)] pub struct ClassB;
//! #[derive(Principal)] pub struct ClassD;
//!
//! pub struct Widget;
//! impl Widget {
//!     pub fn secret(&self, _key: Passkey<allow_list![ClassA, ClassB]>) {}
//! }
//!
//! impl ClassD {
//!     pub fn access(&self, w: &Widget) {
//!         w.secret(Self::passkey()); // ClassD is not in the list
//!     }
//! }
//! ```

// Allow `::tola_passkey` to work inside the crate itself
extern crate self as tola_passkey;

// Re-export paste for impl_principal!
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Keys
// =============================================================================
pub mod key;

// =============================================================================
// Layer 2: Guarded operations
// =============================================================================
pub mod guard;

#[cfg(doctest)]
pub mod compile_fail;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use key::{Passkey, Principal, Seal};
pub use primitives::list::{AllowList, Cons, Here, Nil, Permits, There};

// Re-export proc-macros
pub use macros::{Principal, allow_list, guarded, passkey};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}

/// Common items for passkey-gated APIs.
pub mod prelude {
    pub use crate::key::{Passkey, Principal};
    pub use macros::{Principal, allow_list, guarded, passkey};
    // Note: impl_principal! is #[macro_export] so it lives at the crate root
}

// Passkeys must stay free.
const _: () = {
    use core::mem;

    #[allow(dead_code)]
    struct Probe;
    crate::impl_principal!(Probe);

    assert!(mem::size_of::<Passkey<Cons<Probe, Nil>>>() == 0);
    assert!(mem::align_of::<Passkey<Cons<Probe, Nil>>>() == 1);
};

//! # Layer 2: Guarded operations
//!
//! A guarded operation is any function whose signature takes a
//! [`Passkey`](crate::Passkey). The signature *is* the access rule: there is
//! no table to consult and nothing to check at runtime, because reaching
//! the body already required a listed principal to build the key.
//!
//! ```text
//! ClassA::access ──passkey_seal()──> Passkey::<allow_list![ClassA, ClassB]>::new
//!                                        │  (compile-time: ClassA ∈ list)
//!                                        v
//!                             Widget::secret(&self, Passkey<..>)
//! ```
//!
//! Two ways to write one:
//!
//! ```
//! use tola_passkey::{Passkey, Principal, allow_list, guarded};
//!
//! #[derive(Principal)] pub struct ClassA;
//! #[derive(Principal)] pub struct ClassB;
//!
//! pub struct Widget;
//!
//! impl Widget {
//!     // By hand
//!     pub fn secret(&self, _key: Passkey<allow_list![ClassA, ClassB]>) -> u32 { 1 }
//!
//!     // Attribute: appends the same trailing parameter
//!     #[guarded(ClassA, ClassB)]
//!     pub fn other_secret(&self) -> u32 { 2 }
//! }
//!
//! impl ClassA {
//!     pub fn access(&self, w: &Widget) -> u32 {
//!         w.secret(Self::passkey()) + w.other_secret(Self::passkey())
//!     }
//! }
//!
//! assert_eq!(ClassA.access(&Widget), 3);
//! ```
//!
//! Operations that must share one token type name it once with
//! [`passkey!`](crate::passkey) and use `#[guarded(token = ..)]`.

/// Entry hook emitted by `#[guarded]` bodies.
///
/// With the `tracing` feature this records one `TRACE` event on target
/// `tola_passkey::guard`; otherwise it only touches the key. The key is
/// recorded by type name, so it needs no `Debug` impl.
#[cfg(feature = "tracing")]
#[macro_export]
#[doc(hidden)]
macro_rules! __trace_guarded {
    ($op:expr, $key:expr) => {
        $crate::__private::tracing::trace!(
            target: "tola_passkey::guard",
            operation = $op,
            passkey = ::core::any::type_name_of_val(&$key),
            "guarded operation entered"
        )
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __trace_guarded {
    ($op:expr, $key:expr) => {{
        let _ = &$key;
    }};
}

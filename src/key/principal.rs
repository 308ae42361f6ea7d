//! Principals and their seals.
//!
//! A principal is a type that may appear in an allow-list. Its identity is
//! proven by a *seal*: a value of a dedicated type whose only field is
//! private to the principal's own module. Whoever can produce the seal is,
//! for the purposes of this crate, code belonging to the principal.
//!
//! ```text
//! mod a {
//!     #[derive(Principal)]          pub struct ClassA;
//!                                    pub struct ClassAPasskeySeal { /* private */ }
//!                                    impl ClassA { fn passkey_seal() .. }   // private
//! }
//! ```

/// Identity proof minted by exactly one principal.
///
/// Implemented by the seal types generated by `#[derive(Principal)]` and
/// [`impl_principal!`](crate::impl_principal). A seal naming a principal
/// is only accepted if that principal names the seal back (see
/// [`Passkey::new`](crate::Passkey::new)), so implementing this trait by
/// hand for some other type grants nothing.
pub trait Seal: Sized {
    /// The principal this seal identifies.
    type Principal: ?Sized;
}

/// A type that can be named in an allow-list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be listed as an authorized caller",
    note = "add `#[derive(Principal)]` to `{Self}` or invoke `impl_principal!({Self})` in its module"
)]
pub trait Principal {
    /// The unique seal of this principal.
    type Seal: Seal<Principal = Self>;
}

/// Implement [`Principal`] for existing non-generic types.
///
/// Must be invoked in the module that defines the type: the generated seal
/// and the private `passkey_seal` / `passkey` functions belong to the
/// invoking module.
///
/// ```
/// use tola_passkey::{Passkey, allow_list, impl_principal};
///
/// pub struct Auditor;
/// impl_principal!(pub Auditor);
///
/// fn audit(_key: Passkey<allow_list![Auditor]>) {}
///
/// audit(Auditor::passkey());
/// ```
#[macro_export]
macro_rules! impl_principal {
    ($($vis:vis $name:ident),+ $(,)?) => {
        $(
            $crate::paste::paste! {
                #[doc(hidden)]
                #[allow(dead_code)]
                $vis struct [<$name PasskeySeal>] {
                    _private: (),
                }

                impl $crate::Seal for [<$name PasskeySeal>] {
                    type Principal = $name;
                }

                impl $crate::Principal for $name {
                    type Seal = [<$name PasskeySeal>];
                }

                #[allow(dead_code)]
                impl $name {
                    #[inline]
                    fn passkey_seal() -> [<$name PasskeySeal>] {
                        [<$name PasskeySeal>] { _private: () }
                    }

                    #[inline]
                    fn passkey<S, I>() -> $crate::Passkey<S>
                    where
                        S: $crate::AllowList + $crate::Permits<Self, I>,
                    {
                        $crate::Passkey::new(Self::passkey_seal())
                    }
                }
            }
        )+
    };
}

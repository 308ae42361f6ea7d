//! Procedural macros for tola-passkey capability tokens
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Principal)]` | struct/enum | Declare an authorized-caller type |
//! | `allow_list![]` | - | Build an allow-list type |
//! | `passkey![]` | - | Build a passkey type |
//! | `#[guarded]` | fn/method | Gate an operation behind a passkey |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Principal)]
//! pub struct ClassA;
//!
//! pub struct Widget;
//!
//! impl Widget {
//!     #[guarded(ClassA)]
//!     pub fn secret(&self) { ... }
//! }
//!
//! impl ClassA {
//!     pub fn access(&self, w: &Widget) {
//!         w.secret(Self::passkey());
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Create an allow-list type from a list of principals.
///
/// # Usage
/// ```ignore
/// type Staff = allow_list![ClassA, ClassB];
///
/// // Expands to
/// type Staff = Cons<ClassA, Cons<ClassB, Nil>>;
/// ```
///
/// Duplicates and empty lists are compile errors.
#[proc_macro]
pub fn allow_list(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::AllowInput);

    if let Err(err) = user::validate(&input.types, proc_macro2::Span::call_site()) {
        return err.to_compile_error().into();
    }

    user::build_allow_list(&input.types).into()
}

/// Create a passkey type from a list of principals.
///
/// # Usage
/// ```ignore
/// // Shared by several operations
/// pub type WidgetKey = passkey![ClassA, ClassB];
///
/// // Same as
/// pub type WidgetKey = Passkey<allow_list![ClassA, ClassB]>;
/// ```
#[proc_macro]
pub fn passkey(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::AllowInput);

    if let Err(err) = user::validate(&input.types, proc_macro2::Span::call_site()) {
        return err.to_compile_error().into();
    }

    user::build_passkey(&input.types).into()
}

/// Derive macro to make a type usable in allow-lists.
///
/// Generates, in the type's own module:
/// - `<Name>PasskeySeal`: the seal type, with a private field
/// - `impl Seal` / `impl Principal`
/// - private `Name::passkey_seal()` and `Name::passkey::<S, I>()`
///
/// # Usage
/// ```ignore
/// #[derive(Principal)]
/// pub struct ClassA;
///
/// impl ClassA {
///     fn access(&self, w: &Widget) {
///         w.secret(Self::passkey());
///     }
/// }
/// ```
#[proc_macro_derive(Principal)]
pub fn derive_principal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_principal(input).into()
}

/// Gate a function or method behind a passkey.
///
/// Appends a trailing parameter of the passkey type; the body is left
/// untouched apart from an entry hook that is a no-op unless the
/// `tracing` feature of `tola-passkey` is on.
///
/// # Usage
/// ```ignore
/// impl Widget {
///     #[guarded(ClassA, ClassB)]
///     pub fn secret(&self) { ... }
///     // => pub fn secret(&self, _passkey: Passkey<allow_list![ClassA, ClassB]>)
///
///     #[guarded(token = WidgetKey, key = proof)]
///     pub fn reset(&self) { ... }
///     // => pub fn reset(&self, proof: WidgetKey)
/// }
/// ```
#[proc_macro_attribute]
pub fn guarded(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::GuardedArgs);
    user::expand_guarded(args, item)
}

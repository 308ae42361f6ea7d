//! User-facing macro implementations
//!
//! # Macro Names
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Principal)]` | on struct/enum | Make a type listable, mint its seal |
//! | `allow_list!` | type macro | Build an allow-list |
//! | `passkey!` | type macro | Build a `Passkey<allow_list![..]>` type |
//! | `#[guarded]` | on fn / method | Append a passkey parameter |

pub mod allow_list;
mod guarded;
mod principal;

pub use allow_list::{build_allow_list, build_passkey, validate, AllowInput};
pub use guarded::{expand_guarded, GuardedArgs};
pub use principal::expand_derive_principal;

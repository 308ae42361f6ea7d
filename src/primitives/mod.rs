//! # Layer 0: Primitives
//!
//! Type-level building blocks for allow-lists:
//! - `list.rs`: `Nil` / `Cons` cells, `Here` / `There` index witnesses,
//!   the sealed `AllowList` and `Permits` traits.

pub mod list;

pub use list::{AllowList, Cons, Here, Nil, Permits, There};

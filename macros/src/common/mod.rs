// Common utilities shared between the user-facing macros
//
// This module contains:
// - parse_utils: Common parsing helpers

mod parse_utils;

pub use parse_utils::*;

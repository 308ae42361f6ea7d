//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Token, Type,
};

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

/// Parse comma-separated types (e.g., in `allow_list![A, B, C]`)
pub fn parse_type_list(input: ParseStream) -> syn::Result<Vec<Type>> {
    parse_comma_separated(input)
}

// =============================================================================
// Key/Value Options
// =============================================================================

/// Check if next tokens look like `key = ...`
pub fn peek_option(input: ParseStream) -> bool {
    input.peek(Ident) && input.peek2(Token![=]) && !input.peek2(Token![==])
}

// =============================================================================
// Type Identity
// =============================================================================

/// Whitespace-free spelling of a type, used to spot duplicates.
///
/// Two spellings of the same type (`a::X` vs `X`) are not unified here;
/// those still fail later as an ambiguous allow-list index.
pub fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

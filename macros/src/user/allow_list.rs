//! Allow-list construction macros
//!
//! - `allow_list!` - build the type-level list of principals
//! - `passkey!` - build the matching `Passkey<..>` type

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Type,
};

use crate::common::{parse_type_list, type_key};

// =============================================================================
// allow_list! / passkey! Input Parser
// =============================================================================

pub struct AllowInput {
    pub types: Vec<Type>,
}

impl Parse for AllowInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = parse_type_list(input)?;
        Ok(AllowInput { types })
    }
}

/// Check for duplicate principals in the list
pub fn check_duplicates(types: &[Type]) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for ty in types {
        let key = type_key(ty);
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate principal `{}`\n\
                     \n\
                     Each principal may appear only once in an allow-list.\n\
                     A repeated entry makes membership ambiguous.",
                    key
                ),
            ));
        }
    }
    Ok(())
}

/// Reject an allow-list nobody could ever satisfy
pub fn check_not_empty(types: &[Type], span: Span) -> syn::Result<()> {
    if types.is_empty() {
        return Err(syn::Error::new(
            span,
            "empty allow-list\n\
             \n\
             A passkey with no principals can never be constructed.\n\
             Name at least one authorized caller.",
        ));
    }
    Ok(())
}

/// Validate a principal list as written at a definition site
pub fn validate(types: &[Type], span: Span) -> syn::Result<()> {
    check_not_empty(types, span)?;
    check_duplicates(types)
}

/// Build list type: Cons<A, Cons<B, Cons<C, Nil>>>
pub fn build_allow_list(types: &[Type]) -> TokenStream2 {
    let mut result = quote! { ::tola_passkey::Nil };
    for ty in types.iter().rev() {
        result = quote! { ::tola_passkey::Cons<#ty, #result> };
    }
    result
}

/// Build passkey type: Passkey<Cons<..>>
pub fn build_passkey(types: &[Type]) -> TokenStream2 {
    let list = build_allow_list(types);
    quote! { ::tola_passkey::Passkey<#list> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(src: &str) -> Vec<Type> {
        syn::parse_str::<AllowInput>(src).unwrap().types
    }

    #[test]
    fn test_build_allow_list_order() {
        let out = build_allow_list(&types("ClassA, ClassB")).to_string();
        let a = out.find("ClassA").unwrap();
        let b = out.find("ClassB").unwrap();
        assert!(a < b);
        assert!(out.ends_with(":: tola_passkey :: Nil > >"));
    }

    #[test]
    fn test_build_passkey_wraps_list() {
        let out = build_passkey(&types("ClassA")).to_string();
        assert!(out.starts_with(":: tola_passkey :: Passkey <"));
        assert!(out.contains(":: tola_passkey :: Cons < ClassA"));
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = check_duplicates(&types("ClassA, ClassB, ClassA")).unwrap_err();
        assert!(err.to_string().contains("duplicate principal `ClassA`"));
        assert!(check_duplicates(&types("ClassA, a::ClassA")).is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        let err = validate(&types(""), Span::call_site()).unwrap_err();
        assert!(err.to_string().contains("empty allow-list"));
        assert!(validate(&types("ClassA"), Span::call_site()).is_ok());
    }
}

//! Guarded operation macro: #[guarded]
//!
//! Appends a trailing passkey parameter to a function or method.
//!
//! # Syntax
//!
//! ```ignore
//! // List the principals inline
//! #[guarded(ClassA, ClassB)]
//! fn secret(&self) { ... }
//!
//! // Name the parameter (default `_passkey`)
//! #[guarded(ClassA, key = proof)]
//! fn forward(&self) { inner(proof) }
//!
//! // Reuse a passkey type shared by several operations
//! #[guarded(token = WidgetKey)]
//! fn reset(&self) { ... }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    parse_quote, FnArg, Ident, ItemFn, Signature, Token, TraitItemFn, Type,
};

use crate::common::peek_option;
use crate::user::allow_list::{build_passkey, check_duplicates};

const DEFAULT_KEY: &str = "_passkey";

// =============================================================================
// GuardedArgs - Attribute Arguments Parser
// =============================================================================

pub struct GuardedArgs {
    pub principals: Vec<Type>,
    pub token: Option<Type>,
    pub key: Option<Ident>,
}

impl Parse for GuardedArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut principals = Vec::new();
        let mut token = None;
        let mut key = None;

        while !input.is_empty() {
            // 1. key = value options
            if peek_option(input) {
                let name: Ident = input.parse()?;
                input.parse::<Token![=]>()?;

                if name == "token" {
                    if token.is_some() {
                        return Err(syn::Error::new_spanned(name, "`token` given twice"));
                    }
                    token = Some(input.parse()?);
                } else if name == "key" {
                    if key.is_some() {
                        return Err(syn::Error::new_spanned(name, "`key` given twice"));
                    }
                    key = Some(input.parse()?);
                } else {
                    return Err(syn::Error::new_spanned(
                        &name,
                        format!("unknown option `{}`; expected `token` or `key`", name),
                    ));
                }
            }
            // 2. Positional principal
            else {
                principals.push(input.parse()?);
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(GuardedArgs {
            principals,
            token,
            key,
        })
    }
}

impl GuardedArgs {
    /// The passkey type the operation demands
    pub fn passkey_type(&self) -> syn::Result<TokenStream2> {
        match (&self.token, self.principals.is_empty()) {
            (Some(token), true) => Ok(token.to_token_stream()),
            (Some(token), false) => Err(syn::Error::new_spanned(
                token,
                "`#[guarded]` takes either a list of principals or `token = ..`, not both",
            )),
            (None, false) => {
                check_duplicates(&self.principals)?;
                Ok(build_passkey(&self.principals))
            }
            (None, true) => Err(syn::Error::new(
                Span::call_site(),
                "`#[guarded]` needs at least one principal, e.g. `#[guarded(ClassA)]`, \
                 or a shared passkey type via `#[guarded(token = MyKey)]`",
            )),
        }
    }

    pub fn key_ident(&self) -> Ident {
        self.key
            .clone()
            .unwrap_or_else(|| Ident::new(DEFAULT_KEY, Span::call_site()))
    }
}

// =============================================================================
// Expansion
// =============================================================================

fn push_key(sig: &mut Signature, key: &Ident, passkey: &TokenStream2) {
    let arg: FnArg = parse_quote!(#key: #passkey);
    sig.inputs.push(arg);
}

fn wrap_body(block: &syn::Block, op: &str, key: &Ident) -> syn::Block {
    parse_quote!({
        ::tola_passkey::__trace_guarded!(#op, #key);
        #block
    })
}

pub fn expand_guarded_fn(args: &GuardedArgs, mut func: ItemFn) -> syn::Result<TokenStream2> {
    let passkey = args.passkey_type()?;
    let key = args.key_ident();
    let op = func.sig.ident.to_string();

    push_key(&mut func.sig, &key, &passkey);
    *func.block = wrap_body(&func.block, &op, &key);

    Ok(func.into_token_stream())
}

pub fn expand_guarded_trait_fn(args: &GuardedArgs, mut func: TraitItemFn) -> syn::Result<TokenStream2> {
    let passkey = args.passkey_type()?;
    let key = args.key_ident();
    let op = func.sig.ident.to_string();

    push_key(&mut func.sig, &key, &passkey);
    if let Some(block) = func.default.take() {
        func.default = Some(wrap_body(&block, &op, &key));
    }

    Ok(func.into_token_stream())
}

pub fn expand_guarded(args: GuardedArgs, item: TokenStream) -> TokenStream {
    let result = if let Ok(func) = syn::parse::<ItemFn>(item.clone()) {
        expand_guarded_fn(&args, func)
    } else if let Ok(func) = syn::parse::<TraitItemFn>(item) {
        expand_guarded_trait_fn(&args, func)
    } else {
        Err(syn::Error::new(
            Span::call_site(),
            "`#[guarded]` supports free functions, methods, and trait method declarations",
        ))
    };

    result.unwrap_or_else(syn::Error::into_compile_error).into()
}

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::DeriveInput;

/// #[derive(Principal)] emits everything next to the type it annotates.
///
/// Placement is the whole point: the seal's field and the two mint
/// functions are private, so they are reachable only from the module the
/// derive expands in.
///
/// ```text
/// #vis struct <Name>PasskeySeal<..> { _private: PhantomData<fn() -> Name<..>> }
/// impl Seal for <Name>PasskeySeal<..>      { type Principal = Name<..>; }
/// impl Principal for Name<..>              { type Seal = <Name>PasskeySeal<..>; }
/// impl Name<..> { fn passkey_seal() .. ; fn passkey<S, I>() .. }
/// ```
pub fn expand_derive_principal(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let vis = &input.vis;
    let seal = format_ident!("{}PasskeySeal", ident);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let seal_doc = format!("Identity seal of [`{}`]; constructible only in its module.", ident);

    quote! {
        #[doc = #seal_doc]
        #[doc(hidden)]
        #vis struct #seal #impl_generics #where_clause {
            _private: ::core::marker::PhantomData<fn() -> #ident #ty_generics>,
        }

        impl #impl_generics ::tola_passkey::Seal for #seal #ty_generics #where_clause {
            type Principal = #ident #ty_generics;
        }

        impl #impl_generics ::tola_passkey::Principal for #ident #ty_generics #where_clause {
            type Seal = #seal #ty_generics;
        }

        #[allow(dead_code)]
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Mint this principal's seal.
            #[inline]
            fn passkey_seal() -> #seal #ty_generics {
                #seal {
                    _private: ::core::marker::PhantomData,
                }
            }

            /// Build any passkey whose allow-list names this principal.
            #[inline]
            fn passkey<__S, __I>() -> ::tola_passkey::Passkey<__S>
            where
                __S: ::tola_passkey::AllowList + ::tola_passkey::Permits<Self, __I>,
            {
                ::tola_passkey::Passkey::new(Self::passkey_seal())
            }
        }
    }
}

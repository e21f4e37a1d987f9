//! Host-related macros.
//!
//! This module contains:
//! - `#[derive(Hollerback)]` - Implements `Hollerback` and adds the type-level
//!   `hollerback_for` / `hollerback_with` associated functions

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Path, parse_macro_input, parse_quote};

/// Arguments from `#[hollerback(...)]` attributes.
pub(crate) struct HostArgs {
    /// Path the generated code uses to reach the `hollerback` crate.
    pub krate: Path,
}

impl HostArgs {
    fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut krate: Path = parse_quote!(::hollerback);

        for attr in &input.attrs {
            if !attr.path().is_ident("hollerback") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let lit: LitStr = meta.value()?.parse()?;
                    krate = lit.parse()?;
                    Ok(())
                } else {
                    Err(meta.error("unknown attribute, expected `crate`"))
                }
            })?;
        }

        Ok(HostArgs { krate })
    }
}

/// Implementation of `#[derive(Hollerback)]`.
pub fn derive_hollerback_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let args = match HostArgs::from_input(&input) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let vis = &input.vis;
    let krate = &args.krate;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #krate::Hollerback for #name #ty_generics #where_clause {}

        impl #impl_generics #name #ty_generics #where_clause {
            #[doc = concat!("Type-level `hollerback_for` for `", stringify!(#name), "`.")]
            #[allow(dead_code)]
            #vis fn hollerback_for<
                'hollerback,
                HollerbackArgs,
                HollerbackOutput,
                HollerbackSetup,
                HollerbackBody,
                HollerbackReturn,
            >(
                setup: HollerbackSetup,
                body: HollerbackBody,
            ) -> HollerbackReturn
            where
                HollerbackSetup: ::core::ops::FnOnce(
                    &mut #krate::CallbackRegistry<'hollerback, HollerbackArgs, HollerbackOutput>,
                ),
                HollerbackBody: ::core::ops::FnOnce(
                    &mut #krate::CallbackRegistry<'hollerback, HollerbackArgs, HollerbackOutput>,
                ) -> HollerbackReturn,
            {
                #krate::hollerback_for(setup, body)
            }

            #[doc = concat!("Type-level `hollerback_with` for `", stringify!(#name), "`.")]
            #[allow(dead_code)]
            #vis fn hollerback_with<
                HollerbackRegistry,
                HollerbackFactory,
                HollerbackSetup,
                HollerbackBody,
                HollerbackReturn,
            >(
                factory: HollerbackFactory,
                setup: HollerbackSetup,
                body: HollerbackBody,
            ) -> HollerbackReturn
            where
                HollerbackFactory: ::core::ops::FnOnce(HollerbackSetup) -> HollerbackRegistry,
                HollerbackBody: ::core::ops::FnOnce(&mut HollerbackRegistry) -> HollerbackReturn,
            {
                #krate::hollerback_with(factory, setup, body)
            }
        }
    };

    TokenStream::from(expanded)
}

//! Derive macro implementation used by `dimq-core`.
//!
//! `dimq-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `crate::Dimension`, so it is intended to be used by `dimq-core` (or by crates that expose an identical
//! crate-root API). Downstream crates implement `Dimension` by hand; it is two constants.
//!
//! # Generated impls
//!
//! For a dimension marker type `MyDim`, the derive implements `crate::Dimension for MyDim`.
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `symbol = 'L'`: one-character dimension symbol
//! - `name = "length"`: human-readable name (defaults to the lowercased type name)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitChar, LitStr, Token,
};

/// Derive `crate::Dimension` for a marker type.
///
/// The derive must be paired with a `#[dimension(...)]` attribute providing at least `symbol`.
///
/// This macro is intended for use by `dimq-core`.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = parse_dimension_attribute(&input.attrs)?;

    let symbol = &attr.symbol;
    let long_name = match &attr.name {
        Some(lit) => lit.value(),
        None => name.to_string().to_lowercase(),
    };

    Ok(quote! {
        impl crate::Dimension for #name {
            const SYMBOL: char = #symbol;
            const NAME: &'static str = #long_name;
        }
    })
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    symbol: LitChar,
    name: Option<LitStr>,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitChar> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "name" => {
                    name = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(DimensionAttribute { symbol, name })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}

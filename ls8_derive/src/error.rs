//! Derive macro for error types.
//!
//! Generates `std::fmt::Display` and `std::error::Error` implementations.
//! Replacement for the `thiserror` crate.
//!
//! # Usage
//!
//! ```ignore
//! use ls8_derive::Error;
//!
//! #[derive(Debug, Error)]
//! pub enum MyError {
//!     #[error("not found: {0}")]
//!     NotFound(String),
//!
//!     #[error("invalid value: expected {expected}, got {actual}")]
//!     InvalidValue { expected: u32, actual: u32 },
//!
//!     #[error("unknown error")]
//!     Unknown,
//! }
//! ```
//!
//! Supports unit variants, tuple variants with positional args (`{0}`, `{1}`),
//! and struct variants with named args (`{field_name}`), including standard
//! format specs such as `{opcode:#04x}`.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derives `Display` and `Error` for an enum.
///
/// Each variant must carry an `#[error("...")]` attribute giving its display
/// message.
pub fn derive_error(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_error_derive(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_error_derive(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Error derive supports enums only",
        ));
    };

    let display_arms = data_enum
        .variants
        .iter()
        .map(|variant| {
            let variant_name = &variant.ident;
            let error_msg = extract_error_message(variant)?;

            let arm = match &variant.fields {
                Fields::Unit => {
                    quote! {
                        Self::#variant_name => write!(f, #error_msg),
                    }
                }
                Fields::Unnamed(fields) => {
                    let bindings: Vec<_> = (0..fields.unnamed.len())
                        .map(|i| format_ident!("f{}", i))
                        .collect();
                    let format_str = convert_positional_to_named(&error_msg, fields.unnamed.len());
                    quote! {
                        Self::#variant_name(#(#bindings),*) => write!(f, #format_str, #(#bindings = #bindings),*),
                    }
                }
                Fields::Named(fields) => {
                    let bindings: Vec<_> = fields.named.iter().map(|f| &f.ident).collect();
                    quote! {
                        Self::#variant_name { #(#bindings),* } => write!(f, #error_msg, #(#bindings = #bindings),*),
                    }
                }
            };

            Ok(arm)
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#display_arms)*
                }
            }
        }

        impl ::std::error::Error for #name {}
    })
}

/// Extracts the message from a variant's `#[error("...")]` attribute.
fn extract_error_message(variant: &syn::Variant) -> syn::Result<String> {
    for attr in &variant.attrs {
        if !attr.path().is_ident("error") {
            continue;
        }

        if let Meta::List(meta_list) = &attr.meta {
            if let Ok(Lit::Str(lit_str)) = syn::parse2::<Lit>(meta_list.tokens.clone()) {
                return Ok(lit_str.value());
            }
        }

        return Err(syn::Error::new_spanned(
            &attr.meta,
            "invalid #[error] attribute: message must be a string literal, e.g. #[error(\"invalid opcode: {0}\")]",
        ));
    }

    Err(syn::Error::new_spanned(
        variant,
        format!(
            "missing #[error(\"...\")] attribute on variant `{}`; every error variant must declare a display message",
            variant.ident
        ),
    ))
}

/// Converts positional format args `{0}`, `{1}` to named args `{f0}`, `{f1}`.
fn convert_positional_to_named(format_str: &str, field_count: usize) -> String {
    let mut result = format_str.to_string();
    for i in (0..field_count).rev() {
        let positional = format!("{{{}}}", i);
        let named = format!("{{f{}}}", i);
        result = result.replace(&positional, &named);
    }
    result
}

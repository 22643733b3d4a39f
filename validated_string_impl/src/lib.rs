//! You probably want the [`validated_string`] crate, which
//! has the documentation this crate lacks.
//!
//!   [`validated_string`]: https://docs.rs/validated_string/*/validated_string/

#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_must_use
)]
#![forbid(unsafe_code)]

extern crate proc_macro;

mod codegen;
mod normalizer_mode;
mod params;
mod symbol;

use symbol::*;

use proc_macro::TokenStream;

/// Implements `Policy` for a marker type
///
/// The marker type must be a unit struct or an enum without variants.
///
/// Available options:
/// * `name = "Name"`
///   * Sets `Policy::NAME`, used in diagnostics. Defaults to the name of the type.
/// * `normalizer [ = "Type" ]`
///   * Indicates the policy normalizes its values before comparing them. If no type is
///     specified, it is assumed that the marker type implements `Normalizer` itself.
///     When omitted, values compare by their raw form.
/// * `validator = "Type"`
///   * Implements `Validator` for the marker type by delegating to another validator.
/// * `comparator = "Type"`
///   * Implements `Comparator` for the marker type by delegating to another comparator.
/// * `alias = "Name"`
///   * Declares a type alias for `ValidatedString` governed by this policy, with the
///     same visibility as the marker type.
#[proc_macro_attribute]
pub fn policy(args: TokenStream, input: TokenStream) -> TokenStream {
    expand(args.into(), input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(
    args: proc_macro2::TokenStream,
    input: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream, syn::Error> {
    let mut params = params::Params::default();
    let parser = syn::meta::parser(|meta| params.parse_meta(meta));
    syn::parse::Parser::parse2(parser, args)?;

    let body: syn::DeriveInput = syn::parse2(input)?;
    let code_gen = params.build(&body)?;
    Ok(code_gen.generate())
}

fn as_validator(validator: &syn::Type) -> proc_macro2::TokenStream {
    quote::quote! { <#validator as ::validated_string::Validator> }
}

fn as_comparator(comparator: &syn::Type) -> proc_macro2::TokenStream {
    quote::quote! { <#comparator as ::validated_string::Comparator> }
}

fn parse_value_lit_str(
    attr_name: Symbol,
    meta: &syn::meta::ParseNestedMeta,
) -> Result<syn::LitStr, syn::Error> {
    let expr: syn::Expr = meta.value()?.parse()?;
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) => Ok(lit),
        other => Err(syn::Error::new_spanned(
            other,
            format!(
                "expected attribute `{}` to have a string value (`{} = \"value\"`)",
                attr_name, attr_name
            ),
        )),
    }
}

fn parse_lit_into_type(lit: &syn::LitStr) -> Result<syn::Type, syn::Error> {
    lit.parse().map_err(|_| {
        syn::Error::new_spanned(lit, format!("failed to parse type: {:?}", lit.value()))
    })
}

fn parse_lit_into_ident(lit: &syn::LitStr) -> Result<syn::Ident, syn::Error> {
    lit.parse().map_err(|_| {
        syn::Error::new_spanned(
            lit,
            format!("failed to parse identifier: {:?}", lit.value()),
        )
    })
}

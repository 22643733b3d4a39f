use crate::codegen::CodeGen;
use crate::normalizer_mode::NormalizerMode;
use crate::symbol::*;
use crate::{parse_lit_into_ident, parse_lit_into_type, parse_value_lit_str};
use quote::ToTokens;

#[derive(Default)]
pub struct Params {
    name: Option<String>,
    alias: Option<syn::Ident>,
    validator: Option<syn::Type>,
    comparator: Option<syn::Type>,
    normalizer: NormalizerMode,
}

impl Params {
    pub fn parse_meta(&mut self, meta: syn::meta::ParseNestedMeta) -> Result<(), syn::Error> {
        if meta.path == NAME {
            let lit = parse_value_lit_str(NAME, &meta)?;
            set_once(&mut self.name, lit.value(), NAME, &meta)
        } else if meta.path == ALIAS {
            let lit = parse_value_lit_str(ALIAS, &meta)?;
            let alias = parse_lit_into_ident(&lit)?;
            set_once(&mut self.alias, alias, ALIAS, &meta)
        } else if meta.path == VALIDATOR {
            let lit = parse_value_lit_str(VALIDATOR, &meta)?;
            let validator = parse_lit_into_type(&lit)?;
            set_once(&mut self.validator, validator, VALIDATOR, &meta)
        } else if meta.path == COMPARATOR {
            let lit = parse_value_lit_str(COMPARATOR, &meta)?;
            let comparator = parse_lit_into_type(&lit)?;
            set_once(&mut self.comparator, comparator, COMPARATOR, &meta)
        } else if meta.path == NORMALIZER {
            if meta.input.peek(syn::Token![=]) {
                let lit = parse_value_lit_str(NORMALIZER, &meta)?;
                let normalizer = parse_lit_into_type(&lit)?;
                self.normalizer
                    .try_set_foreign(normalizer)
                    .map_err(|s| meta.error(s))
            } else {
                self.normalizer.try_set_self().map_err(|s| meta.error(s))
            }
        } else {
            Err(meta.error(format!(
                "unsupported argument `{}`",
                meta.path.to_token_stream()
            )))
        }
    }

    pub fn build(self, body: &syn::DeriveInput) -> Result<CodeGen<'_>, syn::Error> {
        let Params {
            name,
            alias,
            validator,
            comparator,
            normalizer,
        } = self;

        if !body.generics.params.is_empty() || body.generics.where_clause.is_some() {
            return Err(syn::Error::new_spanned(
                &body.generics,
                "policy types cannot be generic",
            ));
        }

        match &body.data {
            syn::Data::Struct(data) if !data.fields.is_empty() => {
                return Err(syn::Error::new_spanned(
                    &data.fields,
                    "policy types cannot have fields",
                ));
            }
            syn::Data::Enum(data) if !data.variants.is_empty() => {
                return Err(syn::Error::new_spanned(
                    &data.variants,
                    "policy enums cannot have variants",
                ));
            }
            syn::Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "policy types must be a struct or an enum",
                ));
            }
            _ => {}
        }

        Ok(CodeGen {
            name: name.unwrap_or_else(|| body.ident.to_string()),
            body,
            alias,
            validator,
            comparator,
            normalizer,
        })
    }
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    attr_name: Symbol,
    meta: &syn::meta::ParseNestedMeta,
) -> Result<(), syn::Error> {
    if slot.is_some() {
        return Err(meta.error(format!("{} can only be specified once", attr_name)));
    }

    *slot = Some(value);
    Ok(())
}

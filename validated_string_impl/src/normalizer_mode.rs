use crate::symbol::*;
use quote::{quote, ToTokens};

pub enum NormalizerMode {
    Identity,
    SelfImpl,
    Foreign(syn::Type),
}

impl Default for NormalizerMode {
    fn default() -> Self {
        Self::Identity
    }
}

impl NormalizerMode {
    pub fn try_set_self(&mut self) -> Result<(), String> {
        self.try_set(Self::SelfImpl)
    }

    pub fn try_set_foreign(&mut self, normalizer: syn::Type) -> Result<(), String> {
        self.try_set(Self::Foreign(normalizer))
    }

    fn try_set(&mut self, mode: Self) -> Result<(), String> {
        if matches!(self, Self::Identity) {
            *self = mode;
            Ok(())
        } else {
            Err(format!("{} can only be specified once", NORMALIZER))
        }
    }

    /// The type to use as `Policy::Normalizer` for the policy `ty`
    pub fn normalizer_type(&self, ty: &syn::Ident) -> proc_macro2::TokenStream {
        match self {
            Self::Identity => quote! { ::validated_string::Identity },
            Self::SelfImpl => ty.to_token_stream(),
            Self::Foreign(normalizer) => normalizer.to_token_stream(),
        }
    }
}

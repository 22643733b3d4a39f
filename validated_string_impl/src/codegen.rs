use crate::normalizer_mode::NormalizerMode;
use quote::quote;

pub struct CodeGen<'a> {
    pub body: &'a syn::DeriveInput,
    pub name: String,
    pub alias: Option<syn::Ident>,
    pub validator: Option<syn::Type>,
    pub comparator: Option<syn::Type>,
    pub normalizer: NormalizerMode,
}

impl<'a> CodeGen<'a> {
    fn policy_impl(&self) -> proc_macro2::TokenStream {
        let ty = &self.body.ident;
        let name = &self.name;
        let normalizer = self.normalizer.normalizer_type(ty);

        quote! {
            #[automatically_derived]
            impl ::validated_string::Policy for #ty {
                const NAME: &'static str = #name;
                type Normalizer = #normalizer;
            }
        }
    }

    fn validator_impl(&self) -> Option<proc_macro2::TokenStream> {
        let ty = &self.body.ident;

        self.validator.as_ref().map(|validator| {
            let validator = crate::as_validator(validator);
            quote! {
                #[automatically_derived]
                impl ::validated_string::Validator for #ty {
                    #[inline]
                    fn validate(raw: &str) -> ::core::option::Option<::validated_string::__private::Cow<'_, str>> {
                        #validator::validate(raw)
                    }
                }
            }
        })
    }

    fn comparator_impl(&self) -> Option<proc_macro2::TokenStream> {
        let ty = &self.body.ident;

        self.comparator.as_ref().map(|comparator| {
            let comparator = crate::as_comparator(comparator);
            quote! {
                #[automatically_derived]
                impl ::validated_string::Comparator for #ty {
                    #[inline]
                    fn are_in_increasing_order(lhs: &str, rhs: &str) -> bool {
                        #comparator::are_in_increasing_order(lhs, rhs)
                    }
                }
            }
        })
    }

    fn alias(&self) -> Option<proc_macro2::TokenStream> {
        let ty = &self.body.ident;
        let vis = &self.body.vis;

        self.alias.as_ref().map(|alias| {
            let doc = format!("A validated string governed by [`{}`]", ty);
            quote! {
                #[doc = #doc]
                #vis type #alias = ::validated_string::ValidatedString<#ty>;
            }
        })
    }

    pub fn generate(&self) -> proc_macro2::TokenStream {
        let body = self.body;
        let policy = self.policy_impl();
        let validator = self.validator_impl();
        let comparator = self.comparator_impl();
        let alias = self.alias();

        quote! {
            #body
            #policy
            #validator
            #comparator
            #alias
        }
    }
}

//! Implementation of the `#[derive(EPrisms)]` macro.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, parse_macro_input};

use crate::variant::{VariantShape, to_snake_case, variant_name_arms};

/// Main implementation of the `EPrisms` derive macro.
pub fn derive_eprisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            let name_arms = variant_name_arms(data_enum.variants.iter());

            let eprism_methods = data_enum.variants.iter().map(|variant| {
                let variant_name = &variant.ident;
                let expected = variant_name.to_string();
                let method_name =
                    format_ident!("{}_eprism", to_snake_case(&variant_name.to_string()));
                let VariantShape {
                    payload_type,
                    pattern,
                    payload,
                    construct,
                } = VariantShape::of(variant);

                quote! {
                    /// Returns an error-reporting prism focusing on the
                    /// `#variant_name` variant.
                    #[inline]
                    #[must_use]
                    pub fn #method_name(
                    ) -> impl ::scopic::optics::EPrism<::std::string::String, Self, #payload_type> + Clone
                    {
                        ::scopic::optics::FunctionEPrism::new(
                            |source: Self| match source {
                                #pattern => ::scopic::control::Either::Right(#payload),
                                #[allow(unreachable_patterns)]
                                other => {
                                    let found = match &other {
                                        #(#name_arms,)*
                                    };
                                    ::scopic::control::Either::Left((
                                        ::std::format!("Expected {}, found {}", #expected, found),
                                        other,
                                    ))
                                }
                            },
                            |payload: #payload_type| {
                                #construct
                            },
                        )
                    }
                }
            });

            let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#eprism_methods)*
                }
            }
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "EPrisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "EPrisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

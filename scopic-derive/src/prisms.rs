//! Implementation of the `#[derive(Prisms)]` macro.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, parse_macro_input};

use crate::variant::{VariantShape, to_snake_case};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            let prism_methods = data_enum.variants.iter().map(|variant| {
                let variant_name = &variant.ident;
                let method_name =
                    format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
                let VariantShape {
                    payload_type,
                    pattern,
                    payload,
                    construct,
                } = VariantShape::of(variant);

                quote! {
                    /// Returns a prism focusing on the `#variant_name` variant.
                    #[inline]
                    #[must_use]
                    pub fn #method_name() -> impl ::scopic::optics::Prism<Self, #payload_type> + Clone {
                        ::scopic::optics::FunctionPrism::new(
                            |source: Self| match source {
                                #pattern => ::scopic::control::Either::Right(#payload),
                                #[allow(unreachable_patterns)]
                                other => ::scopic::control::Either::Left(other),
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
                    #(#prism_methods)*
                }
            }
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

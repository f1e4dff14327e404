//! Shared handling of enum variants for the prism derives.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Fields, Ident, Variant};

/// The pieces needed to match a variant and rebuild it from its payload.
pub struct VariantShape {
    /// The focused payload type.
    pub payload_type: TokenStream2,
    /// A pattern matching the variant and binding its fields.
    pub pattern: TokenStream2,
    /// An expression building the payload from the pattern's bindings.
    pub payload: TokenStream2,
    /// Statements rebuilding the variant from a binding named `payload`.
    pub construct: TokenStream2,
}

impl VariantShape {
    /// Describes a variant.
    pub fn of(variant: &Variant) -> Self {
        let variant_name = &variant.ident;

        match &variant.fields {
            // Unit variant: e.g., `None`
            Fields::Unit => Self {
                payload_type: quote! { () },
                pattern: quote! { Self::#variant_name },
                payload: quote! { () },
                construct: quote! {
                    let () = payload;
                    Self::#variant_name
                },
            },

            // Tuple variant with one field: e.g., `Some(T)`
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let field_type = &fields.unnamed[0].ty;
                Self {
                    payload_type: quote! { #field_type },
                    pattern: quote! { Self::#variant_name(value) },
                    payload: quote! { value },
                    construct: quote! { Self::#variant_name(payload) },
                }
            }

            // Tuple variant with several fields: e.g., `Rectangle(f64, f64)`
            Fields::Unnamed(fields) => {
                let field_types: Vec<_> = fields.unnamed.iter().map(|field| &field.ty).collect();
                let bindings: Vec<Ident> = (0..field_types.len())
                    .map(|index| format_ident!("v{}", index))
                    .collect();
                Self {
                    payload_type: quote! { (#(#field_types),*) },
                    pattern: quote! { Self::#variant_name(#(#bindings),*) },
                    payload: quote! { (#(#bindings),*) },
                    construct: quote! {
                        let (#(#bindings),*) = payload;
                        Self::#variant_name(#(#bindings),*)
                    },
                }
            }

            // Struct variant with one field: e.g., `Moved { distance: f64 }`
            Fields::Named(fields) if fields.named.len() == 1 => {
                let field = &fields.named[0];
                let field_name = &field.ident;
                let field_type = &field.ty;
                Self {
                    payload_type: quote! { #field_type },
                    pattern: quote! { Self::#variant_name { #field_name } },
                    payload: quote! { #field_name },
                    construct: quote! { Self::#variant_name { #field_name: payload } },
                }
            }

            // Struct variant: e.g., `Click { x: i32, y: i32 }`
            Fields::Named(fields) => {
                let field_names: Vec<_> = fields
                    .named
                    .iter()
                    .filter_map(|field| field.ident.as_ref())
                    .collect();
                let field_types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();
                Self {
                    payload_type: quote! { (#(#field_types),*) },
                    pattern: quote! { Self::#variant_name { #(#field_names),* } },
                    payload: quote! { (#(#field_names),*) },
                    construct: quote! {
                        let (#(#field_names),*) = payload;
                        Self::#variant_name { #(#field_names),* }
                    },
                }
            }
        }
    }
}

/// Builds `match` arms mapping each variant of `Self` to its name.
pub fn variant_name_arms<'a>(variants: impl Iterator<Item = &'a Variant>) -> Vec<TokenStream2> {
    variants
        .map(|variant| {
            let variant_name = &variant.ident;
            let text = variant_name.to_string();
            quote! { Self::#variant_name { .. } => #text }
        })
        .collect()
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
pub fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("none", "none")]
    #[case("A", "a")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[rstest]
    fn test_variant_shape_of_struct_variant_uses_field_tuple() {
        let variant: Variant = syn::parse_quote! { Click { x: i32, y: i32 } };
        let shape = VariantShape::of(&variant);
        assert_eq!(shape.payload_type.to_string(), quote! { (i32, i32) }.to_string());
        assert_eq!(shape.payload.to_string(), quote! { (x, y) }.to_string());
    }

    #[rstest]
    fn test_variant_shape_of_single_field_struct_variant_focuses_field() {
        let variant: Variant = syn::parse_quote! { Moved { distance: f64 } };
        let shape = VariantShape::of(&variant);
        assert_eq!(shape.payload_type.to_string(), quote! { f64 }.to_string());
        assert_eq!(shape.payload.to_string(), quote! { distance }.to_string());
        assert_eq!(
            shape.construct.to_string(),
            quote! { Self::Moved { distance: payload } }.to_string()
        );
    }

    #[rstest]
    fn test_variant_shape_of_unit_variant_focuses_unit() {
        let variant: Variant = syn::parse_quote! { Empty };
        let shape = VariantShape::of(&variant);
        assert_eq!(shape.payload_type.to_string(), quote! { () }.to_string());
    }
}

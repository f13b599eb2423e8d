//! Implementation of the `#[derive(Traversals)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Traversals derive macro.
pub fn derive_traversals_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_field_traversals(name, generics, &data_struct.fields),
        Data::Enum(data_enum) => generate_variant_traversals(
            name,
            generics,
            &data_enum.variants.iter().collect::<Vec<_>>(),
        ),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Traversals cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates one focusing traversal per named field.
fn generate_field_traversals(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)))
                .map(|(field_name, field_type)| {
                    let method_name = format_ident!("{}_traversal", field_name);
                    let doc = format!("Returns a traversal visiting the `{field_name}` field in place.");

                    quote! {
                        #[doc = #doc]
                        #[must_use]
                        pub fn #method_name() -> ::traverso::optics::Traversal<Self, #field_type>
                        where
                            Self: 'static,
                            #field_type: 'static,
                        {
                            ::traverso::optics::Traversal::<Self, Self>::identity()
                                .focus(|source| &mut source.#field_name)
                        }
                    }
                })
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Traversals can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Traversals cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

/// Generates one matching traversal per single-field tuple variant.
fn generate_variant_traversals(
    name: &Ident,
    generics: &Generics,
    variants: &[&Variant],
) -> TokenStream2 {
    let methods: Vec<TokenStream2> = variants
        .iter()
        .filter_map(|variant| generate_variant_traversal(variant))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}

fn generate_variant_traversal(variant: &Variant) -> Option<TokenStream2> {
    let Fields::Unnamed(fields) = &variant.fields else {
        return None;
    };
    if fields.unnamed.len() != 1 {
        return None;
    }

    let variant_name = &variant.ident;
    let payload_type = &fields.unnamed[0].ty;
    let method_name = format_ident!("{}_traversal", to_snake_case(&variant_name.to_string()));
    let doc = format!(
        "Returns a traversal visiting the payload of the `{variant_name}` variant.\n\n\
         Roots holding any other variant yield no parts."
    );

    Some(quote! {
        #[doc = #doc]
        #[must_use]
        pub fn #method_name() -> ::traverso::optics::Traversal<Self, #payload_type>
        where
            Self: 'static,
            #payload_type: 'static,
        {
            ::traverso::optics::Traversal::<Self, #payload_type>::new(|source, consumer| {
                if let Self::#variant_name(payload) = source {
                    consumer(payload);
                }
            })
        }
    })
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
///
/// A word starts at an uppercase letter that follows a lowercase letter or a
/// digit, or at the last capital of an acronym followed by lowercase letters.
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let starts_word = |position: usize| {
        let Some(previous) = position.checked_sub(1).and_then(|before| chars.get(before)) else {
            return false;
        };
        let ends_acronym = || chars.get(position + 1).is_some_and(|next| next.is_lowercase());
        chars[position].is_uppercase()
            && (previous.is_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_uppercase() && ends_acronym()))
    };

    chars
        .iter()
        .enumerate()
        .fold(String::with_capacity(name.len() + 4), |mut snake, (position, character)| {
            if starts_word(position) {
                snake.push('_');
            }
            snake.extend(character.to_lowercase());
            snake
        })
}

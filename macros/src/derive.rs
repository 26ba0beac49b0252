// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expansion of `#[derive(Validity)]`.
//!
//! The derived `validate` walks the type's shape:
//!
//! | Shape                     | Result                                                   |
//! |---------------------------|----------------------------------------------------------|
//! | unit struct, no fields    | `Validation::empty()`                                    |
//! | struct / variant (fields) | every field annotated with its label, concatenated in declaration order, the whole decorated with the constructor label |
//! | enum                      | the active variant's result only                         |
//! | empty enum                | unreachable (`match *self {}`)                           |
//! | `check = "path"`          | the above, then `path(self)` decorated with the struct label or the enum name |
//!
//! Field labels are the field name (raw identifiers unprefixed) or the positional
//! index. Constructor labels are the struct or variant name.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DataEnum, DeriveInput, Error, Fields, Ident, Index, LitStr};

use crate::attrs::{ContainerAttrs, FieldAttrs, VariantAttrs};

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::from_attrs(&input.attrs)?;
    let name = &input.ident;

    let label = container
        .rename
        .as_ref()
        .map(LitStr::value)
        .unwrap_or_else(|| name.unraw().to_string());

    let structural = match &input.data {
        Data::Struct(data) => struct_body(&label, &data.fields)?,
        Data::Enum(data) => {
            if let Some(rename) = &container.rename {
                return Err(Error::new_spanned(
                    rename,
                    "an enum has no constructor label of its own; rename its variants instead",
                ));
            }
            enum_body(data)?
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                name,
                "Validity cannot be derived for unions",
            ));
        }
    };

    // The cross-field check sits under the type's label, like a hand-written
    // `decorate(label, ...)` would.
    let body = match &container.check {
        Some(check) => quote! {
            ::validity::Validation::concat(
                #structural,
                ::validity::decorate(#label, #check(self)),
            )
        },
        None => structural,
    };

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::validity::Validity));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::validity::Validity for #name #ty_generics #where_clause {
            fn validate(&self) -> ::validity::Validation {
                #body
            }
        }
    })
}

/// One field to check: its label, how to reach it, and how to check it.
struct Checked {
    label: String,
    access: TokenStream,
    attrs: FieldAttrs,
}

impl Checked {
    fn expand(&self) -> TokenStream {
        let label = &self.label;
        let access = &self.access;
        match &self.attrs.with {
            Some(with) => quote! {
                ::validity::decorate(#label, #with(#access))
            },
            None => quote! {
                ::validity::annotate(#access, #label)
            },
        }
    }
}

fn field_label(ident: Option<&Ident>, index: usize, attrs: &FieldAttrs) -> String {
    match (&attrs.rename, ident) {
        (Some(rename), _) => rename.value(),
        (None, Some(ident)) => ident.unraw().to_string(),
        (None, None) => index.to_string(),
    }
}

/// Product of the checked fields under one constructor label.
fn product(constructor: &str, checked: &[Checked]) -> TokenStream {
    if checked.is_empty() {
        return quote! { ::validity::Validation::empty() };
    }
    let parts = checked.iter().map(Checked::expand);
    quote! {
        ::validity::decorate(
            #constructor,
            ::validity::Validation::concat_all([#(#parts),*]),
        )
    }
}

fn struct_body(constructor: &str, fields: &Fields) -> syn::Result<TokenStream> {
    let mut checked = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::from_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let access = match &field.ident {
            Some(ident) => quote! { &self.#ident },
            None => {
                let index = Index::from(index);
                quote! { &self.#index }
            }
        };
        checked.push(Checked {
            label: field_label(field.ident.as_ref(), index, &attrs),
            access,
            attrs,
        });
    }
    Ok(product(constructor, &checked))
}

fn enum_body(data: &DataEnum) -> syn::Result<TokenStream> {
    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let mut arms = Vec::new();
    for variant in &data.variants {
        let attrs = VariantAttrs::from_attrs(&variant.attrs)?;
        let ident = &variant.ident;
        let constructor = attrs
            .rename
            .as_ref()
            .map(LitStr::value)
            .unwrap_or_else(|| ident.unraw().to_string());

        let mut checked = Vec::new();
        let mut bindings = Vec::new();
        for (index, field) in variant.fields.iter().enumerate() {
            let attrs = FieldAttrs::from_attrs(&field.attrs)?;
            let binding = format_ident!("__field{}", index);
            let member = match &field.ident {
                Some(ident) => quote! { #ident },
                None => {
                    let index = Index::from(index);
                    quote! { #index }
                }
            };
            if attrs.skip {
                bindings.push(quote! { #member: _ });
                continue;
            }
            bindings.push(quote! { #member: #binding });
            checked.push(Checked {
                label: field_label(field.ident.as_ref(), index, &attrs),
                access: quote! { #binding },
                attrs,
            });
        }

        let body = product(&constructor, &checked);
        arms.push(quote! {
            Self::#ident { #(#bindings,)* } => #body,
        });
    }

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `#[validity(...)]` attribute parsing.
//!
//! | Position  | Accepted                                  |
//! |-----------|-------------------------------------------|
//! | container | `rename = "Label"`, `check = "path"`      |
//! | variant   | `rename = "Label"`                        |
//! | field     | `rename = "label"`, `skip`, `with = "path"` |
//!
//! Unknown keys are errors rather than silently ignored: a misspelled `skip` would
//! otherwise keep validating the field.

use syn::punctuated::Punctuated;
use syn::{Attribute, Error, Expr, ExprLit, Lit, LitStr, Meta, MetaNameValue, Path, Token};

/// Attributes on the struct or enum itself.
#[derive(Default)]
pub struct ContainerAttrs {
    /// Constructor label in place of the struct name.
    pub rename: Option<LitStr>,
    /// Cross-field check appended after the structural result.
    pub check: Option<Path>,
}

/// Attributes on an enum variant.
#[derive(Default)]
pub struct VariantAttrs {
    pub rename: Option<LitStr>,
}

/// Attributes on a struct or variant field.
#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<LitStr>,
    pub skip: bool,
    /// `fn(&Field) -> Validation` used in place of the field's own `Validity`.
    pub with: Option<Path>,
}

impl ContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = ContainerAttrs::default();
        for meta in validity_metas(attrs)? {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    result.rename = Some(string_value(nv)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("check") => {
                    result.check = Some(string_value(nv)?.parse()?);
                }
                _ => return Err(unknown(&meta, "`rename = \"...\"` or `check = \"path\"`")),
            }
        }
        Ok(result)
    }
}

impl VariantAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = VariantAttrs::default();
        for meta in validity_metas(attrs)? {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    result.rename = Some(string_value(nv)?);
                }
                _ => return Err(unknown(&meta, "`rename = \"...\"`")),
            }
        }
        Ok(result)
    }
}

impl FieldAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = FieldAttrs::default();
        let mut skip = None;
        for meta in validity_metas(attrs)? {
            match &meta {
                Meta::Path(path) if path.is_ident("skip") => skip = Some(path.clone()),
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    result.rename = Some(string_value(nv)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("with") => {
                    result.with = Some(string_value(nv)?.parse()?);
                }
                _ => {
                    return Err(unknown(
                        &meta,
                        "`skip`, `rename = \"...\"` or `with = \"path\"`",
                    ))
                }
            }
        }
        if let Some(skip) = skip {
            if result.rename.is_some() || result.with.is_some() {
                return Err(Error::new_spanned(
                    skip,
                    "a skipped field cannot also be renamed or checked `with` a function",
                ));
            }
            result.skip = true;
        }
        Ok(result)
    }
}

fn validity_metas(attrs: &[Attribute]) -> syn::Result<Vec<Meta>> {
    let mut metas = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("validity") {
            let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            metas.extend(nested);
        }
    }
    Ok(metas)
}

fn string_value(nv: &MetaNameValue) -> syn::Result<LitStr> {
    match &nv.value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit_str),
            ..
        }) => Ok(lit_str.clone()),
        other => Err(Error::new_spanned(other, "expected a string literal")),
    }
}

fn unknown(meta: &Meta, expected: &str) -> Error {
    Error::new_spanned(
        meta,
        format!("unknown validity attribute, expected {}", expected),
    )
}
